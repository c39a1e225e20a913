//! Douglas-Peucker polyline simplification.

use glam::Vec2;

/// Distance from `point` to the infinite line through `a` and `b`.
///
/// Degenerates to the distance to `a` when the line has no length.
pub fn perpendicular_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let line = b - a;
    let length = line.length();
    if length == 0.0 {
        return point.distance(a);
    }
    line.perp_dot(point - a).abs() / length
}

/// Simplifies a polyline, dropping points that lie within `epsilon` of the
/// simplified shape.
///
/// The result is an ordered subsequence of `points` that always keeps both
/// endpoints. Polylines with fewer than three points are returned as-is.
pub fn simplify(points: &[Vec2], epsilon: f32) -> Vec<Vec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    // Explicit stack of (first, last) spans still to be examined.
    let mut spans = vec![(0, last)];
    while let Some((first, last)) = spans.pop() {
        if last <= first + 1 {
            continue;
        }

        let (index, distance) = (first + 1..last)
            .map(|i| (i, perpendicular_distance(points[i], points[first], points[last])))
            .fold((first, -1.0f32), |best, candidate| if candidate.1 > best.1 { candidate } else { best });

        if distance > epsilon {
            keep[index] = true;
            spans.push((first, index));
            spans.push((index, last));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect()
}
