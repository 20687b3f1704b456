//! Primitive shape classification of a single segment.

use crate::config::RecognitionConfig;
use crate::geom::{self, within_line_angle};
use crate::segment::{Primitive, Segment};

const HLINE_ANGLE: f64 = 0.0;
const BSLASH_ANGLE: f64 = 45.0;
const VLINE_ANGLE: f64 = 90.0;
const FSLASH_ANGLE: f64 = 135.0;

/// Classify one segment.
///
/// Tests run in a fixed priority order and the first match wins: the dot
/// test must come before any angle or curvature math, and straight lines
/// must be ruled out before curve tests so shallow lines are not read as
/// curves.
pub fn classify(segment: &Segment, config: &RecognitionConfig) -> Primitive {
    if is_dot(segment, config) {
        return Primitive::Dot;
    }

    let straight = segment.avg_curvature().abs() < config.straight_curvature;
    let angle = segment.avg_angle();
    if straight {
        if within_line_angle(angle - HLINE_ANGLE, config.axis_angle_tolerance) {
            return Primitive::HLine;
        }
        if within_line_angle(angle - BSLASH_ANGLE, config.slash_angle_tolerance) {
            return Primitive::BSlash;
        }
        if within_line_angle(angle - VLINE_ANGLE, config.axis_angle_tolerance) {
            return Primitive::VLine;
        }
        if within_line_angle(angle - FSLASH_ANGLE, config.slash_angle_tolerance) {
            return Primitive::FSlash;
        }
        return Primitive::Unknown;
    }

    let chord_mid = geom::midpoint(segment.start, segment.end);
    let centroid = segment.centroid();
    let gap_x = (chord_mid.x - centroid.x).abs();
    let gap_y = (chord_mid.y - centroid.y).abs();

    // Centroid right of the chord: opens to the left.
    if chord_mid.x < centroid.x && gap_y < config.backward_curve_band * gap_x {
        return Primitive::BackwardCurve;
    }
    if centroid.x < chord_mid.x && gap_y < config.forward_curve_band * gap_x {
        return Primitive::ForwardCurve;
    }
    if geom::distance(segment.start, segment.end) < config.closed_gap_fraction * segment.length {
        return Primitive::Circle;
    }
    // Screen y grows downwards, so "below" is the larger y.
    if centroid.y > chord_mid.y && gap_x < config.u_band * gap_y {
        return Primitive::UShape;
    }
    Primitive::Unknown
}

/// Sub-unit strokes in both axes. Curvature is undefined at that scale.
pub(crate) fn is_dot(segment: &Segment, config: &RecognitionConfig) -> bool {
    segment.bounds.width() < config.dot_size && segment.bounds.height() < config.dot_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::CurvatureStats;
    use kurbo::{Point, Rect};

    fn segment(start: Point, end: Point, centroid: Point, angle: f64, kappa: f64) -> Segment {
        let bounds = Rect::from_points(start, end).union_pt(centroid);
        let length = start.distance(end).max(1.0) * if kappa == 0.0 { 1.0 } else { 1.6 };
        Segment::new(
            Primitive::Unknown,
            start,
            end,
            bounds,
            length,
            CurvatureStats {
                centroid,
                avg_angle: angle,
                avg_curvature: kappa,
                ..CurvatureStats::default()
            },
        )
    }

    fn line(start: Point, end: Point) -> Segment {
        let angle = geom::signed_angle(end.y - start.y, end.x - start.x);
        segment(start, end, geom::midpoint(start, end), angle, 0.0)
    }

    #[test]
    fn lines_in_both_directions() {
        let cfg = RecognitionConfig::default();
        let a = Point::new(0.0, 0.0);
        let right = Point::new(100.0, 0.0);
        let down = Point::new(0.0, 100.0);
        let down_right = Point::new(100.0, 100.0);
        let down_left = Point::new(-100.0, 100.0);

        assert_eq!(classify(&line(a, right), &cfg), Primitive::HLine);
        assert_eq!(classify(&line(right, a), &cfg), Primitive::HLine);
        assert_eq!(classify(&line(a, down), &cfg), Primitive::VLine);
        assert_eq!(classify(&line(down, a), &cfg), Primitive::VLine);
        assert_eq!(classify(&line(a, down_right), &cfg), Primitive::BSlash);
        assert_eq!(classify(&line(down_right, a), &cfg), Primitive::BSlash);
        assert_eq!(classify(&line(a, down_left), &cfg), Primitive::FSlash);
        assert_eq!(classify(&line(down_left, a), &cfg), Primitive::FSlash);
    }

    #[test]
    fn curves_by_centroid_side() {
        let cfg = RecognitionConfig::default();
        let top = Point::new(0.0, 0.0);
        let bottom = Point::new(0.0, 100.0);

        let bc = segment(top, bottom, Point::new(30.0, 50.0), 90.0, 0.02);
        assert_eq!(classify(&bc, &cfg), Primitive::BackwardCurve);

        let fc = segment(top, bottom, Point::new(-30.0, 50.0), 90.0, -0.02);
        assert_eq!(classify(&fc, &cfg), Primitive::ForwardCurve);

        let u = segment(Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(50.0, 40.0), 0.0, 0.02);
        assert_eq!(classify(&u, &cfg), Primitive::UShape);
    }

    #[test]
    fn closed_curve_is_circle() {
        let cfg = RecognitionConfig::default();
        let start = Point::new(50.0, 0.0);
        let end = Point::new(52.0, 1.0);
        let mut s = segment(start, end, Point::new(50.0, 50.0), 10.0, 0.03);
        s.length = 300.0;
        assert_eq!(classify(&s, &cfg), Primitive::Circle);
    }

    #[test]
    fn tiny_segment_is_dot_regardless_of_curvature() {
        let cfg = RecognitionConfig::default();
        let s = segment(Point::new(5.0, 5.0), Point::new(5.0, 6.0), Point::new(5.0, 5.5), 90.0, 42.0);
        assert_eq!(classify(&s, &cfg), Primitive::Dot);
    }

    #[test]
    fn classification_is_deterministic() {
        let cfg = RecognitionConfig::default();
        let s = line(Point::new(3.0, 7.0), Point::new(90.0, 12.0));
        assert_eq!(classify(&s, &cfg), classify(&s.clone(), &cfg));
    }
}
