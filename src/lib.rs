pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{FloorplanError, Result};
