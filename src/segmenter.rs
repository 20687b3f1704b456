//! Curvature-driven segmentation of one stroke into primitive segments.
//!
//! The stroke is sampled at equal arc-length steps and the discrete
//! curvature is estimated at each interior sample. A sharp jump in
//! curvature between neighbouring samples marks the join between two
//! primitives (the corner of an `L`, the point of a `V`); the stroke is cut
//! there and both halves are examined again, left first.

use kurbo::{Point, Vec2};
use log::{debug, trace};

use crate::classify::classify;
use crate::config::RecognitionConfig;
use crate::geom;
use crate::segment::{CurvatureStats, Primitive, Segment};
use crate::stroke::Stroke;

/// Smallest sample count that leaves at least one curvature difference.
const MIN_SAMPLES: usize = 4;

/// Split a stroke into classified segments, in drawing order.
pub fn segment(stroke: &Stroke, config: &RecognitionConfig) -> Vec<Segment> {
    let mut segments = Vec::new();
    split(stroke, config, 0, &mut segments);
    segments
}

fn split(stroke: &Stroke, config: &RecognitionConfig, depth: usize, out: &mut Vec<Segment>) {
    let bounds = stroke.bounds();
    if bounds.width() < config.dot_size && bounds.height() < config.dot_size {
        let stats = CurvatureStats {
            centroid: bounds.center(),
            ..CurvatureStats::default()
        };
        out.push(finish(stroke, stats, config));
        return;
    }

    let stats = measure(stroke, config.sample_count);
    if depth < config.max_split_depth && has_join(&stats, config) {
        if let Some(cut) = find_cut(stroke, &stats, config) {
            debug!(
                "split at {:.1} of {:.1} (depth {}, max dk {:.4}, avg k {:.4})",
                cut,
                stroke.length(),
                depth,
                stats.max_abs_curvature_diff,
                stats.avg_curvature
            );
            split(&stroke.sub_stroke(0.0, cut), config, depth + 1, out);
            split(&stroke.sub_stroke(cut, stroke.length()), config, depth + 1, out);
            return;
        }
    }
    out.push(finish(stroke, stats, config));
}

fn finish(stroke: &Stroke, stats: CurvatureStats, config: &RecognitionConfig) -> Segment {
    let mut segment = Segment::new(
        Primitive::Unknown,
        stroke.start(),
        stroke.end(),
        stroke.bounds(),
        stroke.length(),
        stats,
    );
    segment.primitive = classify(&segment, config);
    debug!("segment {}", segment);
    segment
}

/// A join is a curvature jump that is both large in absolute terms and
/// large relative to the stroke's overall bend.
fn has_join(stats: &CurvatureStats, config: &RecognitionConfig) -> bool {
    stats.max_abs_curvature_diff > config.split_min_curvature_diff
        && stats.max_abs_curvature_diff > config.split_curvature_ratio * stats.avg_curvature.abs()
}

/// Arc length at which to cut, or `None` when either side would be too short.
fn find_cut(stroke: &Stroke, stats: &CurvatureStats, config: &RecognitionConfig) -> Option<f64> {
    let n = config.sample_count.max(MIN_SAMPLES);
    let length = stroke.length();
    let step = length / n as f64;
    let index = stats.max_abs_curvature_diff_index;

    // Refine on a window around the jump, sampled at a finer step.
    let head = (index + 1).saturating_sub(config.split_window) as f64 * step;
    let tail = (((index + 1 + config.split_window).min(n)) as f64 * step).min(length);
    let window = stroke.sub_stroke(head, tail);
    let refined = measure(&window, n);

    let cut = if refined.max_abs_curvature_diff > stats.max_abs_curvature_diff {
        let window_step = window.length() / n as f64;
        head + cut_sample(&refined) as f64 * window_step
    } else {
        cut_sample(stats) as f64 * step
    };
    trace!(
        "cut candidate {:.1} (window {:.1}..{:.1}, refined dk {:.4})",
        cut,
        head,
        tail,
        refined.max_abs_curvature_diff
    );

    let min_piece = config.min_split_fraction * length;
    (cut.min(length - cut) > min_piece).then_some(cut)
}

/// Of the two samples bracketing the largest curvature jump, the one with
/// the larger |κ| is the join.
fn cut_sample(stats: &CurvatureStats) -> usize {
    let i = stats.max_abs_curvature_diff_index;
    let here = stats.curvatures.get(i).copied().unwrap_or(0.0).abs();
    let next = stats.curvatures.get(i + 1).copied().unwrap_or(0.0).abs();
    if next >= here {
        i + 1
    } else {
        i
    }
}

/// Sample a stroke and compute its curvature statistics.
///
/// Samples sit at `i * L / n` for `i` in `0..n`; the end point itself is
/// not sampled. Curvature is estimated at samples `1..=n-3` from each
/// window of three consecutive samples, and sample 0 counts as zero
/// curvature when differences are taken.
pub(crate) fn measure(stroke: &Stroke, sample_count: usize) -> CurvatureStats {
    let n = sample_count.max(MIN_SAMPLES);
    let step = stroke.length() / n as f64;
    let samples: Vec<(Point, Vec2)> = (0..n).map(|i| stroke.pos_tan(i as f64 * step)).collect();

    let sum = samples
        .iter()
        .fold(Vec2::ZERO, |acc, (p, _)| acc + p.to_vec2());
    let centroid = (sum / n as f64).to_point();

    let avg_angle = samples[1..]
        .iter()
        .map(|(_, t)| geom::signed_angle(t.y, t.x))
        .sum::<f64>()
        / (n - 1) as f64;

    let mut curvatures = vec![0.0; n - 1];
    let mut curvature_diffs = vec![0.0; n - 3];
    for i in 2..n - 1 {
        let k = geom::curvature(samples[i - 2].0, samples[i - 1].0, samples[i].0);
        curvatures[i - 1] = if k.is_finite() { k } else { 0.0 };
        curvature_diffs[i - 2] = curvatures[i - 1] - curvatures[i - 2];
    }

    let avg_curvature = curvatures.iter().sum::<f64>() / (n - 2) as f64;
    let (max_abs_curvature_index, max_abs_curvature) = first_max_abs(&curvatures);
    let (max_abs_curvature_diff_index, max_abs_curvature_diff) = first_max_abs(&curvature_diffs);

    CurvatureStats {
        centroid,
        avg_angle,
        avg_curvature,
        max_abs_curvature,
        max_abs_curvature_index,
        max_abs_curvature_diff,
        max_abs_curvature_diff_index,
        curvatures,
        curvature_diffs,
    }
}

/// Index and magnitude of the first largest |v|.
fn first_max_abs(values: &[f64]) -> (usize, f64) {
    let mut best = (0, 0.0);
    for (i, v) in values.iter().enumerate() {
        if v.abs() > best.1 {
            best = (i, v.abs());
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline(corners: &[(f64, f64)], spacing: f64) -> Stroke {
        let mut points = vec![Point::new(corners[0].0, corners[0].1)];
        for pair in corners.windows(2) {
            let a = Point::new(pair[0].0, pair[0].1);
            let b = Point::new(pair[1].0, pair[1].1);
            let steps = (a.distance(b) / spacing).ceil().max(1.0) as usize;
            for s in 1..=steps {
                points.push(a.lerp(b, s as f64 / steps as f64));
            }
        }
        Stroke::from_points(&points).unwrap()
    }

    #[test]
    fn straight_stroke_is_one_segment() {
        let cfg = RecognitionConfig::default();
        let segments = segment(&polyline(&[(50.0, 10.0), (50.0, 210.0)], 5.0), &cfg);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].primitive, Primitive::VLine);
        assert!(segments[0].stats.max_abs_curvature_diff < cfg.split_min_curvature_diff);
    }

    #[test]
    fn corner_splits_stroke() {
        let cfg = RecognitionConfig::default();
        let stroke = polyline(&[(20.0, 20.0), (20.0, 220.0), (220.0, 220.0)], 5.0);
        let segments = segment(&stroke, &cfg);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].primitive, Primitive::VLine);
        assert!(segments[1].start.y > 200.0);
    }

    #[test]
    fn circle_is_not_split() {
        let cfg = RecognitionConfig::default();
        let points: Vec<Point> = (0..=72)
            .map(|i| {
                let a = -std::f64::consts::FRAC_PI_2 - i as f64 * 5f64.to_radians();
                Point::new(100.0 + 60.0 * a.cos(), 100.0 + 60.0 * a.sin())
            })
            .collect();
        let segments = segment(&Stroke::from_points(&points).unwrap(), &cfg);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].primitive, Primitive::Circle);
    }

    #[test]
    fn tap_is_a_dot() {
        let cfg = RecognitionConfig::default();
        let segments = segment(&Stroke::from_points(&[Point::new(4.0, 4.0)]).unwrap(), &cfg);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].primitive, Primitive::Dot);
    }

    #[test]
    fn measure_skips_the_end_point() {
        let stroke = polyline(&[(0.0, 0.0), (100.0, 0.0)], 5.0);
        let stats = measure(&stroke, 20);
        // Mean of 0, 5, ..., 95.
        assert!((stats.centroid.x - 47.5).abs() < 1e-3);
        assert_eq!(stats.curvatures.len(), 19);
        assert_eq!(stats.curvature_diffs.len(), 17);
        assert!(stats.avg_angle.abs() < 1e-6);
    }
}
