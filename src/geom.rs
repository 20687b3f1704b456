//! Shared geometry utilities.

use kurbo::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Absolute angle of the vector `(dx, dy)` in degrees, normalized to `[0, 360)`.
#[inline]
pub fn angle(dy: f64, dx: f64) -> f64 {
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

/// Signed angle of the vector `(dx, dy)` in degrees, in `(-180, 180]`.
///
/// Used when averaging tangents: a rightward stroke jitters around 0
/// instead of wrapping between 0 and 360.
#[inline]
pub fn signed_angle(dy: f64, dx: f64) -> f64 {
    let a = angle(dy, dx);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// True when `angle` lies within `tolerance` of 0 or of ±180 degrees.
///
/// Callers subtract the target orientation first, so this accepts a line
/// drawn in either direction.
#[inline]
pub fn within_line_angle(angle: f64, tolerance: f64) -> bool {
    angle.abs() < tolerance || (180.0 - angle.abs()).abs() < tolerance
}

/// Three-point discrete curvature (Marji 2003).
///
/// Fits a parabola through three consecutive samples and returns the
/// curvature at the middle one. Sign follows the turn direction in screen
/// coordinates. Coincident samples give a non-finite value; callers decide
/// how to treat it.
pub fn curvature(p0: Point, p1: Point, p2: Point) -> f64 {
    let a1 = (p2.x - p0.x) / 2.0;
    let a2 = (p2.x + p0.x) / 2.0 - p1.x;
    let b1 = (p2.y - p0.y) / 2.0;
    let b2 = (p2.y + p0.y) / 2.0 - p1.y;
    2.0 * (a1 * b2 - a2 * b1) / (a1 * a1 + b1 * b1).powf(1.5)
}

/// Number of buckets used by [`histogram`].
pub const HISTOGRAM_BUCKETS: usize = 5;

/// Linear histogram of `|v|` over five equal buckets between the observed
/// minimum and maximum magnitude.
///
/// Values beyond the fourth bucket's upper edge land in the last bucket.
/// Non-finite values are skipped.
pub fn histogram(values: &[f64]) -> [usize; HISTOGRAM_BUCKETS] {
    let mut buckets = [0usize; HISTOGRAM_BUCKETS];
    let magnitudes: Vec<f64> = values
        .iter()
        .filter(|v| v.is_finite())
        .map(|v| v.abs())
        .collect();
    if magnitudes.is_empty() {
        return buckets;
    }

    let min = magnitudes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = magnitudes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / HISTOGRAM_BUCKETS as f64;

    for v in magnitudes {
        let slot = (0..HISTOGRAM_BUCKETS - 1)
            .find(|&i| v <= min + (i + 1) as f64 * width)
            .unwrap_or(HISTOGRAM_BUCKETS - 1);
        buckets[slot] += 1;
    }
    buckets
}

/// Midpoint of two points.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// True when `v` lies strictly inside `(lo, hi)`.
#[inline]
pub fn between(v: f64, lo: f64, hi: f64) -> bool {
    lo < v && v < hi
}
