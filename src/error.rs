use thiserror::Error;

/// Top-level error type for the floorplan crate.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by validating geometry constructors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{dimension} = {value} must be non-negative")]
    InvalidExtent { dimension: &'static str, value: f64 },

    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
}

/// Errors related to the room graph.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("room is missing its {0}")]
    IncompleteRoom(&'static str),

    #[error("unknown room type: {0}")]
    UnknownRoomType(String),

    #[error("room {0} not found")]
    RoomNotFound(usize),

    #[error("room {0} cannot connect to itself")]
    SelfConnection(usize),

    #[error("no connection from room {from} to room {to}")]
    ConnectionNotFound { from: usize, to: usize },
}

/// Errors related to loading editor configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation failed:\n{}", .0.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Convenience type alias for results using [`FloorplanError`].
pub type Result<T> = std::result::Result<T, FloorplanError>;
