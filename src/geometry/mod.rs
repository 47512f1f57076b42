pub mod rect;

pub use rect::{Edge, Rect};
