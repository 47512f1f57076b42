mod corners;
mod crossings;
mod dedup;
mod interior;

use tracing::{debug, warn};

use crate::geometry::Rect;
use crate::math::{Point2, TOLERANCE};

pub use corners::enumerate_corners;
pub use crossings::pairwise_crossings;
pub use dedup::dedup_within;
pub use interior::remove_interior;

/// Extracts the vertices on the boundary of a union of rectangles.
///
/// The result is a vertex set, not a polygon: it holds every rectangle corner
/// and every edge crossing that is not strictly inside some rectangle, with
/// near-duplicates merged. Points come back in first-occurrence order
/// (corners before crossings) but carry no winding or connectivity.
#[derive(Debug, Clone)]
pub struct BoundaryVertices<'a> {
    rects: &'a [Rect],
    tolerance: f64,
}

impl<'a> BoundaryVertices<'a> {
    /// Creates a new extraction over `rects` using [`TOLERANCE`] for merging.
    #[must_use]
    pub fn new(rects: &'a [Rect]) -> Self {
        Self {
            rects,
            tolerance: TOLERANCE,
        }
    }

    /// Overrides the merge tolerance.
    ///
    /// Non-finite or non-positive values are ignored in favour of [`TOLERANCE`].
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        if tolerance.is_finite() && tolerance > 0.0 {
            self.tolerance = tolerance;
        } else {
            warn!(tolerance, "ignoring invalid merge tolerance, using default");
            self.tolerance = TOLERANCE;
        }
        self
    }

    /// Returns the merge tolerance in effect.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Executes the extraction.
    ///
    /// Never fails; an empty rectangle list yields an empty vertex set.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        if self.rects.is_empty() {
            return Vec::new();
        }

        // Step 1: Corners, exact duplicates removed.
        let mut points = enumerate_corners(self.rects);
        let corner_count = points.len();

        // Step 2: Edge crossings between every rectangle pair.
        let crossings = pairwise_crossings(self.rects);
        let crossing_count = crossings.len();
        points.extend(crossings);

        // Step 3: Merge near-duplicates.
        let points = dedup_within(points, self.tolerance);
        let unique_count = points.len();

        // Step 4: Drop anything swallowed by a rectangle.
        let points = remove_interior(points, self.rects);

        debug!(
            rects = self.rects.len(),
            corners = corner_count,
            crossings = crossing_count,
            unique = unique_count,
            boundary = points.len(),
            "extracted boundary vertices"
        );
        points
    }
}

/// Extracts the boundary vertex set of `rects` with the default tolerance.
#[must_use]
pub fn extract_boundary_vertices(rects: &[Rect]) -> Vec<Point2> {
    BoundaryVertices::new(rects).execute()
}

/// Like [`extract_boundary_vertices`], treating absent input as empty.
#[must_use]
pub fn extract_boundary_vertices_opt(rects: Option<&[Rect]>) -> Vec<Point2> {
    rects.map(extract_boundary_vertices).unwrap_or_default()
}
