use crate::geometry::Rect;
use crate::math::Point2;

/// Drops every point that is strictly interior to any rectangle.
///
/// A point is tested against all rectangles, not only the ones it came from.
/// Points on a side or corner are kept.
#[must_use]
pub fn remove_interior(points: Vec<Point2>, rects: &[Rect]) -> Vec<Point2> {
    points
        .into_iter()
        .filter(|p| !rects.iter().any(|r| r.contains_strict(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_point_removed() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        let out = remove_interior(vec![Point2::new(5.0, 5.0), Point2::new(20.0, 5.0)], &rects);
        assert_eq!(out, vec![Point2::new(20.0, 5.0)]);
    }

    #[test]
    fn boundary_points_preserved() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 10.0),
        ];
        assert_eq!(remove_interior(pts.clone(), &rects), pts);
    }

    #[test]
    fn swallowed_by_third_rect() {
        // The point is not related to the first rectangle but lies inside the second.
        let rects = [Rect::new(100.0, 100.0, 1.0, 1.0), Rect::new(0.0, 0.0, 10.0, 10.0)];
        assert!(remove_interior(vec![Point2::new(3.0, 7.0)], &rects).is_empty());
    }
}
