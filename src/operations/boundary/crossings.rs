use crate::geometry::Rect;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;

/// Finds edge crossings between every pair of distinct rectangles.
///
/// Each pair `(i, j)` with `i < j` tests all 16 edge combinations. Duplicate
/// hits are kept; collinear edges never produce a crossing.
#[must_use]
pub fn pairwise_crossings(rects: &[Rect]) -> Vec<Point2> {
    let mut hits = Vec::new();
    for (i, first) in rects.iter().enumerate() {
        let first_edges = first.edges();
        for second in &rects[i + 1..] {
            let second_edges = second.edges();
            for a in &first_edges {
                for b in &second_edges {
                    if let Some(pt) = segment_segment_intersect_2d(&a.start, &a.end, &b.start, &b.end) {
                        hits.push(pt);
                    }
                }
            }
        }
    }
    hits
}
