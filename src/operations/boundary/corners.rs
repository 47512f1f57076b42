use crate::geometry::Rect;
use crate::math::Point2;

/// Collects every rectangle corner, dropping exact duplicates.
///
/// Corners are emitted per rectangle as top-left, top-right, bottom-left,
/// bottom-right. Two corners merge only when both coordinates compare equal
/// with `==`; near-duplicates are left for the tolerance pass.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn enumerate_corners(rects: &[Rect]) -> Vec<Point2> {
    let mut corners: Vec<Point2> = Vec::with_capacity(rects.len() * 4);
    for rect in rects {
        for corner in rect.corners() {
            if !corners.iter().any(|c| c.x == corner.x && c.y == corner.y) {
                corners.push(corner);
            }
        }
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(enumerate_corners(&[]).is_empty());
    }

    #[test]
    fn single_rect_four_corners() {
        let corners = enumerate_corners(&[Rect::new(0.0, 0.0, 10.0, 10.0)]);
        assert_eq!(
            corners,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(0.0, 10.0),
                Point2::new(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn shared_corner_kept_once() {
        let corners = enumerate_corners(&[
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(10.0, 10.0, 5.0, 5.0),
        ]);
        assert_eq!(corners.len(), 7);
        assert_eq!(corners.iter().filter(|c| **c == Point2::new(10.0, 10.0)).count(), 1);
    }

    #[test]
    fn degenerate_rect_collapses_to_one_corner() {
        let corners = enumerate_corners(&[Rect::new(5.0, 5.0, 0.0, 0.0)]);
        assert_eq!(corners, vec![Point2::new(5.0, 5.0)]);
    }

    #[test]
    fn near_duplicates_are_not_merged() {
        let corners = enumerate_corners(&[
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(1e-12, 0.0, 1.0, 1.0),
        ]);
        assert_eq!(corners.len(), 8);
    }
}
