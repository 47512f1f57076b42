mod editor;
mod graph;
mod room;

pub use editor::Editor;
pub use graph::{Connection, RoomGraph};
pub use room::{Room, RoomDraft, RoomType};
