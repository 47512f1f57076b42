use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::geometry::Rect;
use crate::math::Point2;
use crate::model::{Connection, Editor, Room};

/// A boundary vertex as written to JSON: `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub x: f64,
    pub y: f64,
}

impl From<Point2> for VertexRecord {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<VertexRecord> for Point2 {
    fn from(v: VertexRecord) -> Self {
        Point2::new(v.x, v.y)
    }
}

/// Rooms, their connectivity and the boundary vertex set, as handed to the
/// generation backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutDescription {
    pub rooms: Vec<Room>,
    pub connectivity: Vec<Connection>,
    pub boundary: Vec<VertexRecord>,
}

impl LayoutDescription {
    /// Snapshots an editor, recomputing the boundary from its rectangles.
    #[must_use]
    pub fn from_editor(editor: &Editor) -> Self {
        Self {
            rooms: editor.graph().rooms().to_vec(),
            connectivity: editor.graph().connectivity().to_vec(),
            boundary: editor
                .canvas()
                .boundary_vertices()
                .into_iter()
                .map(VertexRecord::from)
                .collect(),
        }
    }

    /// Serializes with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns `FloorplanError::Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a layout description from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `FloorplanError::Serialization` for malformed JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Reads a rectangle list out of an arbitrary JSON value.
///
/// Anything other than an array is treated as an empty list. Array entries
/// that are not rectangle records are skipped with a warning. Records with a
/// negative width or height are flipped to cover the same area.
#[must_use]
pub fn rectangles_from_value(value: &Value) -> Vec<Rect> {
    let Value::Array(items) = value else {
        if !value.is_null() {
            warn!("boundary input is not an array, treating as empty");
        }
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match rect_from_record(item) {
            Ok(rect) => Some(rect),
            Err(err) => {
                warn!(index, %err, "skipping malformed boundary rectangle");
                None
            }
        })
        .collect()
}

fn rect_from_record(item: &Value) -> Result<Rect> {
    let raw = Rect::deserialize(item)?.normalized();
    Rect::try_new(raw.x, raw.y, raw.width, raw.height)
}

/// Parses JSON text and extracts a rectangle list from it.
///
/// # Errors
///
/// Returns `FloorplanError::Serialization` if the text is not valid JSON.
/// Valid JSON of the wrong shape yields an empty list instead.
pub fn rectangles_from_json(text: &str) -> Result<Vec<Rect>> {
    let value: Value = serde_json::from_str(text)?;
    Ok(rectangles_from_value(&value))
}

/// Converts a vertex set into its JSON records.
#[must_use]
pub fn vertex_records(points: &[Point2]) -> Vec<VertexRecord> {
    points.iter().copied().map(VertexRecord::from).collect()
}
