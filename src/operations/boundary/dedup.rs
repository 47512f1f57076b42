use crate::math::{points_coincide, Point2};

/// Collapses points that coincide within `eps` on both axes.
///
/// Scans in input order and keeps the first point of each cluster, so the
/// survivor of a near-duplicate group depends on the input order.
#[must_use]
pub fn dedup_within(points: Vec<Point2>, eps: f64) -> Vec<Point2> {
    let mut kept: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !kept.iter().any(|k| points_coincide(k, &p, eps)) {
            kept.push(p);
        }
    }
    kept
}
