use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::math::TOLERANCE;

/// Name of the configuration file looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "floorplan.toml";

/// Top-level editor configuration, read from `floorplan.toml`.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas: CanvasConfig,
    pub boundary: BoundaryConfig,
    pub graph: GraphConfig,
}

/// Extent of the boundary drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    /// Clamp pointer positions into the canvas before committing a rectangle.
    pub clamp_to_canvas: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            clamp_to_canvas: false,
        }
    }
}

/// Boundary extraction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Merge distance for near-duplicate vertices, per axis.
    pub tolerance: f64,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

/// Parameters handed to the external force-layout collaborator.
///
/// They are carried and validated here, never simulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub link_distance: f64,
    pub charge_strength: f64,
    pub node_radius: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            link_distance: 150.0,
            charge_strength: -40.0,
            node_radius: 40.0,
        }
    }
}

impl EditorConfig {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
    /// for malformed TOML, or `ConfigError::Validation` for out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML, or
    /// `ConfigError::Validation` for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field, reporting all problems at once.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` listing each invalid field.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if !(self.canvas.width.is_finite() && self.canvas.width > 0.0) {
            errors.push(format!("canvas.width must be positive, got {}", self.canvas.width));
        }
        if !(self.canvas.height.is_finite() && self.canvas.height > 0.0) {
            errors.push(format!("canvas.height must be positive, got {}", self.canvas.height));
        }
        if !(self.boundary.tolerance.is_finite() && self.boundary.tolerance > 0.0) {
            errors.push(format!(
                "boundary.tolerance must be positive, got {}",
                self.boundary.tolerance
            ));
        }
        if !self.graph.link_distance.is_finite() || self.graph.link_distance < 0.0 {
            errors.push(format!(
                "graph.link_distance must be non-negative, got {}",
                self.graph.link_distance
            ));
        }
        if !self.graph.charge_strength.is_finite() {
            errors.push("graph.charge_strength must be finite".to_owned());
        }
        if !(self.graph.node_radius.is_finite() && self.graph.node_radius > 0.0) {
            errors.push(format!(
                "graph.node_radius must be positive, got {}",
                self.graph.node_radius
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors).into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FloorplanError;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = EditorConfig::from_toml_str("").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert!((config.boundary.tolerance - 1e-10).abs() < f64::EPSILON);
        assert!((config.canvas.width - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = EditorConfig::from_toml_str(
            r"
            [canvas]
            width = 800.0
            clamp_to_canvas = true

            [graph]
            charge_strength = -300.0
            ",
        )
        .unwrap();
        assert!((config.canvas.width - 800.0).abs() < f64::EPSILON);
        assert!((config.canvas.height - 500.0).abs() < f64::EPSILON);
        assert!(config.canvas.clamp_to_canvas);
        assert!((config.graph.charge_strength + 300.0).abs() < f64::EPSILON);
        assert!((config.graph.link_distance - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validation_collects_every_problem() {
        let err = EditorConfig::from_toml_str(
            r"
            [canvas]
            width = 0.0
            [boundary]
            tolerance = -1.0
            ",
        )
        .unwrap_err();
        match err {
            FloorplanError::Config(ConfigError::Validation(msgs)) => {
                assert_eq!(msgs.len(), 2, "{msgs:?}");
                assert!(msgs[0].contains("canvas.width"));
                assert!(msgs[1].contains("boundary.tolerance"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EditorConfig::from_toml_str("[canvas\nwidth = ").unwrap_err();
        assert!(matches!(err, FloorplanError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[boundary]\ntolerance = 1e-6").unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        assert!((config.boundary.tolerance - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EditorConfig::load(Path::new("/nonexistent/floorplan.toml")).unwrap_err();
        assert!(matches!(err, FloorplanError::Config(ConfigError::Io(_))));
    }
}
