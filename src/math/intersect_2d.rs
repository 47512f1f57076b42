use super::{Point2, Vector2};

/// Parametric intersection of the lines through `p1 → p2` and `p3 → p4`.
///
/// Returns `(t, u)` such that the crossing lies at `p1 + t * (p2 - p1)` and
/// `p3 + u * (p4 - p3)`. Only an exactly zero denominator is treated as
/// parallel; nearly parallel lines still produce (large) parameters.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_line_params_2d(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<(f64, f64)> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom == 0.0 {
        return None;
    }
    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / denom;
    let u = ((p1.x - p3.x) * (p1.y - p2.y) - (p1.y - p3.y) * (p1.x - p2.x)) / denom;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Both parameters must lie in the closed interval `[0, 1]`, so segments that
/// merely touch at an endpoint intersect. Parallel and collinear segments,
/// including overlapping ones, never intersect.
#[must_use]
pub fn segment_segment_intersect_2d(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Option<Point2> {
    let (t, u) = line_line_params_2d(p1, p2, p3, p4)?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        let d: Vector2 = p2 - p1;
        Some(Point2::new(p1.x + t * d.x, p1.y + t * d.y))
    } else {
        None
    }
}
