//! Synthetic ink for integration tests.
#![allow(dead_code)]

use inkglyph::kurbo::Point;
use inkglyph::Stroke;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Straight stroke sampled every couple of units, like a finger drag.
pub fn line(from: (f64, f64), to: (f64, f64)) -> Stroke {
    Stroke::from_points(&line_points(from, to)).expect("line has points")
}

pub fn line_points(from: (f64, f64), to: (f64, f64)) -> Vec<Point> {
    let a = Point::new(from.0, from.1);
    let b = Point::new(to.0, to.1);
    let steps = (a.distance(b) / 2.0).ceil().max(1.0) as usize;
    (0..=steps).map(|i| a.lerp(b, i as f64 / steps as f64)).collect()
}

/// Circular arc in screen coordinates (y down), from `start_deg` to
/// `end_deg` in steps of about three degrees.
pub fn arc(center: (f64, f64), radius: f64, start_deg: f64, end_deg: f64) -> Stroke {
    Stroke::from_points(&arc_points(center, radius, start_deg, end_deg)).expect("arc has points")
}

pub fn arc_points(center: (f64, f64), radius: f64, start_deg: f64, end_deg: f64) -> Vec<Point> {
    let steps = ((end_deg - start_deg).abs() / 3.0).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let a = (start_deg + (end_deg - start_deg) * i as f64 / steps as f64).to_radians();
            Point::new(center.0 + radius * a.cos(), center.1 + radius * a.sin())
        })
        .collect()
}

/// A single tap.
pub fn tap(at: (f64, f64)) -> Stroke {
    Stroke::from_points(&[Point::new(at.0, at.1)]).expect("tap has a point")
}

/// Scale raw points about the origin and rebuild the stroke.
pub fn scaled(points: &[Point], factor: f64) -> Stroke {
    let points: Vec<Point> = points
        .iter()
        .map(|p| Point::new(p.x * factor, p.y * factor))
        .collect();
    Stroke::from_points(&points).expect("scaled stroke has points")
}
