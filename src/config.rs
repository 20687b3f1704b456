use serde::{Deserialize, Serialize};

/// All recognition thresholds in one struct.
///
/// Every value is empirically tuned against the curvature estimator in
/// [`crate::geom::curvature`]; the defaults reproduce the reference
/// behaviour. Serializable so presets can be loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    // -- Sampling --
    /// Equally arc-length-spaced samples taken per (sub-)stroke.
    pub sample_count: usize,

    // -- Segmentation --
    /// Minimum max |Δκ| that can indicate a join between two primitives.
    pub split_min_curvature_diff: f64,
    /// Max |Δκ| must also exceed this multiple of the average |κ|.
    pub split_curvature_ratio: f64,
    /// Half-width, in samples, of the trial window around a candidate cut.
    pub split_window: usize,
    /// Each side of a cut must keep more than this fraction of the path.
    pub min_split_fraction: f64,
    /// Maximum recursion depth when splitting one stroke.
    pub max_split_depth: usize,

    // -- Primitive classification --
    /// Strokes whose bounds are smaller than this in both axes are dots.
    pub dot_size: f64,
    /// Average |κ| below this is a straight line.
    pub straight_curvature: f64,
    /// Angle spread accepted for horizontal and vertical lines (degrees).
    pub axis_angle_tolerance: f64,
    /// Angle spread accepted for slashes (degrees).
    pub slash_angle_tolerance: f64,
    /// Endpoint gap below this fraction of the length closes a loop.
    pub closed_gap_fraction: f64,
    /// Vertical centroid offset allowed for a backward curve, relative to
    /// its horizontal offset from the chord.
    pub backward_curve_band: f64,
    /// Same band for forward curves.
    pub forward_curve_band: f64,
    /// Horizontal centroid offset allowed for a U, relative to its
    /// vertical offset from the chord.
    pub u_band: f64,

    // -- Verification --
    /// A character is uppercase when its height exceeds this fraction of
    /// the surface height.
    pub small_letter_fraction: f64,
    /// 'P' versus 'p' uses this fraction of the surface height instead.
    pub capital_p_fraction: f64,
    /// Below this fraction of the surface height, ')' becomes ',' and
    /// '-' becomes '_'.
    pub low_position_fraction: f64,
    /// Horizontal alignment of dots in ':' '=' and ';', as a fraction of
    /// the surface width.
    pub alignment_fraction: f64,

    // -- Capture --
    /// Pen moves closer than this to the previous point are ignored.
    pub touch_tolerance: f64,
    /// A stroke longer than this multiple of its bounds' width plus height
    /// is a scribble that clears the character.
    pub scribble_ratio: f64,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            sample_count: 20,
            split_min_curvature_diff: 0.025,
            split_curvature_ratio: 5.0,
            split_window: 5,
            min_split_fraction: 0.1,
            max_split_depth: 4,
            dot_size: 2.0,
            straight_curvature: 0.005,
            axis_angle_tolerance: 15.0,
            slash_angle_tolerance: 30.0,
            closed_gap_fraction: 0.1,
            backward_curve_band: 0.5,
            forward_curve_band: 0.25,
            u_band: 0.25,
            small_letter_fraction: 0.4,
            capital_p_fraction: 0.6,
            low_position_fraction: 2.0 / 3.0,
            alignment_fraction: 20.0 / 320.0,
            touch_tolerance: 4.0,
            scribble_ratio: 2.0,
        }
    }
}

/// Dimensions of the writing surface the strokes were captured on.
///
/// Verifiers express position and size tests as fractions of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecognitionContext {
    pub surface_width: f64,
    pub surface_height: f64,
}

impl RecognitionContext {
    pub fn new(surface_width: f64, surface_height: f64) -> Self {
        Self {
            surface_width,
            surface_height,
        }
    }
}

impl Default for RecognitionContext {
    fn default() -> Self {
        Self::new(320.0, 480.0)
    }
}
