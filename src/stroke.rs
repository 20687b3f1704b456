//! Pen strokes as arc-length parameterized paths.
//!
//! A stroke is stored the way the capture surface draws it: quadratic
//! segments through each raw point to the midpoint of the next pair, which
//! smooths sampling jitter before curvature is estimated.

use kurbo::{
    BezPath, ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathSeg, Point, Rect, Shape, Vec2,
};

use crate::error::RecognizeError;

/// Accuracy passed to kurbo's arc-length routines.
const ARCLEN_ACCURACY: f64 = 1e-4;

/// The path traced between one pen-down and the following pen-up.
#[derive(Debug, Clone)]
pub struct Stroke {
    path: BezPath,
    segments: Vec<(PathSeg, f64)>,
    length: f64,
    bounds: Rect,
}

impl Stroke {
    /// Build a stroke from raw captured points.
    ///
    /// A stroke without extent (a tap) becomes a one-unit vertical line
    /// centred on the tap, so downstream code always sees a real path.
    pub fn from_points(points: &[Point]) -> Result<Self, RecognizeError> {
        let (&first, rest) = points.split_first().ok_or(RecognizeError::EmptyStroke)?;
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(RecognizeError::InvalidInput(
                "stroke contains a non-finite coordinate".into(),
            ));
        }

        let mut path = BezPath::new();
        path.move_to(first);
        let mut prev = first;
        for &p in rest {
            path.quad_to(prev, prev.midpoint(p));
            prev = p;
        }
        path.line_to(prev);

        let stroke = Self::from_path(path);
        if stroke.length > f64::EPSILON {
            return Ok(stroke);
        }

        let centre = stroke.bounds.center();
        let mut tap = BezPath::new();
        tap.move_to(centre);
        tap.line_to(centre + Vec2::new(0.0, 1.0));
        Ok(Self::from_path(tap))
    }

    /// Wrap a path drawn elsewhere, such as one replayed from a recording.
    ///
    /// Unlike [`Stroke::from_points`] no tap normalization happens, so a
    /// path without length is rejected.
    pub fn try_from_path(path: BezPath) -> Result<Self, RecognizeError> {
        if path.elements().is_empty() {
            return Err(RecognizeError::EmptyStroke);
        }
        let stroke = Self::from_path(path);
        if stroke.length.is_finite() && stroke.length > f64::EPSILON {
            Ok(stroke)
        } else {
            Err(RecognizeError::DegenerateStroke)
        }
    }

    pub(crate) fn from_path(path: BezPath) -> Self {
        let segments: Vec<(PathSeg, f64)> = path
            .segments()
            .map(|seg| (seg, seg.arclen(ARCLEN_ACCURACY)))
            .collect();
        let length = segments.iter().map(|(_, len)| len).sum();
        let bounds = if segments.is_empty() {
            Rect::ZERO
        } else {
            path.bounding_box()
        };
        Self {
            path,
            segments,
            length,
            bounds,
        }
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn start(&self) -> Point {
        self.pos_tan(0.0).0
    }

    pub fn end(&self) -> Point {
        self.pos_tan(self.length).0
    }

    /// Position and unit tangent at arc length `distance`.
    ///
    /// `distance` is clamped to `[0, length]`. The tangent is zero only for
    /// a path with no extent at all.
    pub fn pos_tan(&self, distance: f64) -> (Point, Vec2) {
        let target = distance.clamp(0.0, self.length);
        let mut travelled = 0.0;
        let mut fallback = None;
        for (seg, len) in &self.segments {
            if *len <= f64::EPSILON {
                fallback.get_or_insert(*seg);
                continue;
            }
            if target <= travelled + len {
                let t = seg.inv_arclen(target - travelled, ARCLEN_ACCURACY);
                return (seg.eval(t), tangent(seg, t));
            }
            travelled += len;
            fallback = Some(*seg);
        }
        match fallback {
            Some(seg) => (seg.end(), tangent(&seg, 1.0)),
            None => (Point::ZERO, Vec2::ZERO),
        }
    }

    /// The part of this stroke between two arc lengths.
    pub fn sub_stroke(&self, start: f64, end: f64) -> Stroke {
        let start = start.clamp(0.0, self.length);
        let end = end.clamp(start, self.length);

        let mut path = BezPath::new();
        let mut travelled = 0.0;
        for (seg, len) in &self.segments {
            let seg_start = travelled;
            travelled += len;
            if *len <= f64::EPSILON || travelled <= start || seg_start >= end {
                continue;
            }
            let t0 = if start > seg_start {
                seg.inv_arclen(start - seg_start, ARCLEN_ACCURACY)
            } else {
                0.0
            };
            let t1 = if end < travelled {
                seg.inv_arclen(end - seg_start, ARCLEN_ACCURACY)
            } else {
                1.0
            };
            let piece = seg.subsegment(t0..t1);
            if path.elements().is_empty() {
                path.move_to(piece.start());
            }
            match piece {
                PathSeg::Line(l) => path.line_to(l.p1),
                PathSeg::Quad(q) => path.quad_to(q.p1, q.p2),
                PathSeg::Cubic(c) => path.curve_to(c.p1, c.p2, c.p3),
            }
        }

        if path.elements().is_empty() {
            let p = self.pos_tan(start).0;
            path.move_to(p);
            path.line_to(p);
        }
        Stroke::from_path(path)
    }

    /// True when the stroke zig-zags far more than its extent allows, the
    /// gesture used to wipe the current character.
    pub fn is_scribble(&self, ratio: f64) -> bool {
        let extent = self.bounds.width() + self.bounds.height();
        extent > 0.0 && self.length > ratio * extent
    }
}

/// Unit tangent of a path segment at `t`, falling back to the chord when
/// the derivative vanishes (a quad whose control point sits on an end).
fn tangent(seg: &PathSeg, t: f64) -> Vec2 {
    let d = match seg {
        PathSeg::Line(l) => l.deriv().eval(t).to_vec2(),
        PathSeg::Quad(q) => q.deriv().eval(t).to_vec2(),
        PathSeg::Cubic(c) => c.deriv().eval(t).to_vec2(),
    };
    let d = if d.hypot() > 1e-9 {
        d
    } else {
        seg.end() - seg.start()
    };
    let len = d.hypot();
    if len > 1e-12 {
        d / len
    } else {
        Vec2::ZERO
    }
}

/// Incremental stroke capture with touch-tolerance filtering.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    points: Vec<Point>,
    tolerance: f64,
}

impl StrokeBuilder {
    pub fn new(tolerance: f64) -> Self {
        Self {
            points: Vec::new(),
            tolerance,
        }
    }

    /// Start a new stroke, discarding anything pending.
    pub fn pen_down(&mut self, p: Point) {
        self.points.clear();
        self.points.push(p);
    }

    /// Record a move; returns false when it was within the touch tolerance
    /// of the last accepted point (or no stroke is in progress).
    pub fn pen_move(&mut self, p: Point) -> bool {
        let Some(last) = self.points.last() else {
            return false;
        };
        let dx = (p.x - last.x).abs();
        let dy = (p.y - last.y).abs();
        if dx >= self.tolerance || dy >= self.tolerance {
            self.points.push(p);
            true
        } else {
            false
        }
    }

    /// Finish the stroke in progress.
    pub fn pen_up(&mut self) -> Result<Stroke, RecognizeError> {
        let points = std::mem::take(&mut self.points);
        Stroke::from_points(&points)
    }
}
