//! Classified sub-paths of a stroke.

use std::fmt;

use kurbo::{Point, Rect};

use crate::geom::{self, HISTOGRAM_BUCKETS};

/// Elementary stroke shapes a segment can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive {
    HLine,
    VLine,
    /// Line from top-right to bottom-left, `/`.
    FSlash,
    /// Line from top-left to bottom-right, `\`.
    BSlash,
    /// Curve opening to the left, like `)`.
    BackwardCurve,
    /// Curve opening to the right, like `(`.
    ForwardCurve,
    Circle,
    Dot,
    /// Curve opening upwards.
    UShape,
    Unknown,
}

impl Primitive {
    /// The nine classifiable shapes, excluding [`Primitive::Unknown`].
    pub const ALL: [Primitive; 9] = [
        Primitive::HLine,
        Primitive::VLine,
        Primitive::FSlash,
        Primitive::BSlash,
        Primitive::BackwardCurve,
        Primitive::ForwardCurve,
        Primitive::Circle,
        Primitive::Dot,
        Primitive::UShape,
    ];

    /// Single-character tag used in candidate and diagnostic output.
    pub fn tag(self) -> char {
        match self {
            Primitive::HLine => '-',
            Primitive::VLine => '|',
            Primitive::FSlash => '/',
            Primitive::BSlash => '\\',
            Primitive::BackwardCurve => ')',
            Primitive::ForwardCurve => '(',
            Primitive::Circle => 'O',
            Primitive::Dot => '.',
            Primitive::UShape => 'U',
            Primitive::Unknown => '?',
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Curvature statistics of one sampled (sub-)stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvatureStats {
    /// Mean of the sampled points.
    pub centroid: Point,
    /// Mean signed tangent angle, degrees.
    pub avg_angle: f64,
    /// Mean curvature over the interior samples.
    pub avg_curvature: f64,
    pub max_abs_curvature: f64,
    pub max_abs_curvature_index: usize,
    /// Largest |κ| change between neighbouring samples.
    pub max_abs_curvature_diff: f64,
    /// Index `i` of the largest change, between samples `i` and `i + 1`.
    pub max_abs_curvature_diff_index: usize,
    /// Per-sample curvature; index 0 and the last slot are always 0.
    pub curvatures: Vec<f64>,
    /// Neighbouring curvature differences.
    pub curvature_diffs: Vec<f64>,
}

/// A maximal sub-path of one stroke classified as a single primitive.
///
/// Endpoint roles (top, bottom, left, right, mid) are fixed at construction
/// so verifiers never recompute them.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub primitive: Primitive,
    pub start: Point,
    pub end: Point,
    pub bounds: Rect,
    pub length: f64,
    pub stats: CurvatureStats,
    top: Point,
    bottom: Point,
    left: Point,
    right: Point,
    mid: Point,
}

impl Segment {
    pub fn new(
        primitive: Primitive,
        start: Point,
        end: Point,
        bounds: Rect,
        length: f64,
        stats: CurvatureStats,
    ) -> Self {
        let (top, bottom) = if end.y < start.y {
            (end, start)
        } else {
            (start, end)
        };
        let (left, right) = if end.x < start.x {
            (end, start)
        } else {
            (start, end)
        };
        Self {
            primitive,
            start,
            end,
            bounds,
            length,
            stats,
            top,
            bottom,
            left,
            right,
            mid: geom::midpoint(start, end),
        }
    }

    /// Endpoint with the smaller y (screen coordinates grow downwards).
    pub fn top(&self) -> Point {
        self.top
    }

    pub fn bottom(&self) -> Point {
        self.bottom
    }

    pub fn left(&self) -> Point {
        self.left
    }

    pub fn right(&self) -> Point {
        self.right
    }

    /// Midpoint of the chord joining the endpoints.
    pub fn mid(&self) -> Point {
        self.mid
    }

    pub fn centroid(&self) -> Point {
        self.stats.centroid
    }

    /// Vertical span of the endpoints.
    pub fn height(&self) -> f64 {
        self.bottom.y - self.top.y
    }

    /// Horizontal span of the endpoints.
    pub fn width(&self) -> f64 {
        self.right.x - self.left.x
    }

    pub fn avg_curvature(&self) -> f64 {
        self.stats.avg_curvature
    }

    pub fn avg_angle(&self) -> f64 {
        self.stats.avg_angle
    }

    /// Five-bucket histogram of |Δκ| for diagnostic display.
    pub fn curvature_histogram(&self) -> [usize; HISTOGRAM_BUCKETS] {
        geom::histogram(&self.stats.curvature_diffs)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1},{:.1})->({:.1},{:.1}) len {:.1} angle {:.1} k {:.4} max dk {:.4}",
            self.primitive,
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            self.length,
            self.stats.avg_angle,
            self.stats.avg_curvature,
            self.stats.max_abs_curvature_diff,
        )
    }
}
