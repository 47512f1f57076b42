use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// One side of a rectangle, traversed from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
}

impl Edge {
    /// Creates an edge between two points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

/// An axis-aligned rectangle drawn on the boundary canvas.
///
/// `(x, y)` is the top-left corner with y growing downward. Width and height
/// are expected to be non-negative; zero-area rectangles are valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle without validating its extent.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle, rejecting non-finite values and negative extents.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if any field is NaN or infinite, or
    /// `GeometryError::InvalidExtent` if width or height is negative.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        for (name, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite(name).into());
            }
        }
        if width < 0.0 {
            return Err(GeometryError::InvalidExtent {
                dimension: "width",
                value: width,
            }
            .into());
        }
        if height < 0.0 {
            return Err(GeometryError::InvalidExtent {
                dimension: "height",
                value: height,
            }
            .into());
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Builds the normalized rectangle spanned by two opposite drag points.
    #[must_use]
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), (b.x - a.x).abs(), (b.y - a.y).abs())
    }

    /// Returns the same area with a non-negative width and height.
    ///
    /// A negative extent spans from `(x, y)` back toward the origin; the
    /// origin moves to the top-left of that span. Non-negative extents are
    /// returned untouched.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }

    /// Returns the x coordinate of the right side.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the y coordinate of the bottom side.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns `true` if the rectangle encloses no area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns the corners as top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.right(), self.y),
            Point2::new(self.x, self.bottom()),
            Point2::new(self.right(), self.bottom()),
        ]
    }

    /// Returns the sides in the order top, right, bottom, left, walking
    /// clockwise in screen space.
    #[must_use]
    pub fn edges(&self) -> [Edge; 4] {
        let [top_left, top_right, bottom_left, bottom_right] = self.corners();
        [
            Edge::new(top_left, top_right),
            Edge::new(top_right, bottom_right),
            Edge::new(bottom_right, bottom_left),
            Edge::new(bottom_left, top_left),
        ]
    }

    /// Returns `true` if `p` lies strictly inside the rectangle.
    ///
    /// Points on a side or corner are not strictly interior.
    #[must_use]
    pub fn contains_strict(&self, p: &Point2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FloorplanError;

    #[test]
    fn corners_order() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let c = r.corners();
        assert_eq!(c[0], Point2::new(1.0, 2.0));
        assert_eq!(c[1], Point2::new(4.0, 2.0));
        assert_eq!(c[2], Point2::new(1.0, 6.0));
        assert_eq!(c[3], Point2::new(4.0, 6.0));
    }

    #[test]
    fn edges_walk_top_right_bottom_left() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        let e = r.edges();
        assert_eq!(e[0], Edge::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)));
        assert_eq!(e[1], Edge::new(Point2::new(10.0, 0.0), Point2::new(10.0, 5.0)));
        assert_eq!(e[2], Edge::new(Point2::new(10.0, 5.0), Point2::new(0.0, 5.0)));
        assert_eq!(e[3], Edge::new(Point2::new(0.0, 5.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn strict_containment_excludes_boundary() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_strict(&Point2::new(5.0, 5.0)));
        assert!(!r.contains_strict(&Point2::new(0.0, 5.0)));
        assert!(!r.contains_strict(&Point2::new(10.0, 10.0)));
        assert!(!r.contains_strict(&Point2::new(5.0, 10.0)));
        assert!(!r.contains_strict(&Point2::new(11.0, 5.0)));
    }

    #[test]
    fn degenerate_contains_nothing() {
        let r = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(r.is_degenerate());
        assert!(!r.contains_strict(&Point2::new(5.0, 5.0)));
    }

    #[test]
    fn from_corners_normalizes_drag_direction() {
        let r = Rect::from_corners(Point2::new(30.0, 40.0), Point2::new(10.0, 15.0));
        assert_eq!(r, Rect::new(10.0, 15.0, 20.0, 25.0));
        assert!((r.area() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn normalized_flips_negative_extents() {
        let r = Rect::new(10.0, 10.0, -10.0, -4.0).normalized();
        assert_eq!(r, Rect::new(0.0, 6.0, 10.0, 4.0));
        let already = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(already.normalized(), already);
    }

    #[test]
    fn try_new_rejects_negative_extent() {
        let err = Rect::try_new(0.0, 0.0, -1.0, 2.0).unwrap_err();
        assert!(matches!(
            err,
            FloorplanError::Geometry(GeometryError::InvalidExtent {
                dimension: "width",
                ..
            })
        ));
    }

    #[test]
    fn try_new_rejects_nan() {
        let err = Rect::try_new(f64::NAN, 0.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            FloorplanError::Geometry(GeometryError::NonFinite("x"))
        ));
    }

    #[test]
    fn deserializes_canvas_record() {
        let r: Rect = serde_json::from_str(r#"{"x":1,"y":2,"width":3.5,"height":0}"#).unwrap();
        assert_eq!(r, Rect::new(1.0, 2.0, 3.5, 0.0));
    }
}
