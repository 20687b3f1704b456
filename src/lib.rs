//! inkglyph: pen strokes → one recognized character.
//!
//! Geometric handwriting recognition for a single-character input pad.
//! Each stroke is cut at sharp curvature changes into segments, each
//! segment is classified as one of nine primitive shapes, the primitive
//! multiset prunes the alphabet to a few candidates, and per-symbol
//! geometric rules pick the first candidate the drawing proves.
//!
//! # Example
//!
//! ```
//! use inkglyph::{Recognizer, Stroke};
//! use inkglyph::kurbo::Point;
//!
//! let bar = Stroke::from_points(&[Point::new(100.0, 50.0), Point::new(200.0, 50.0)])?;
//! let stem = Stroke::from_points(&[Point::new(150.0, 52.0), Point::new(150.0, 250.0)])?;
//!
//! let recognizer = Recognizer::default();
//! let result = recognizer.recognize_strokes(&[bar, stem]);
//! assert_eq!(result.symbol(), Some('T'));
//! # Ok::<(), inkglyph::RecognizeError>(())
//! ```

#![forbid(unsafe_code)]

mod alphabet;
mod character;
mod classify;
mod config;
mod geom;
mod recognizer;
mod segment;
mod segmenter;
mod stroke;

pub mod error;
pub mod input;
pub mod verify;

// Re-export kurbo so callers build points with the same version.
pub use kurbo;

pub use alphabet::{resolve, CandidateSet, Candidates, ALPHABET, UNRESOLVED};
pub use character::CharacterBuffer;
pub use classify::classify;
pub use config::{RecognitionConfig, RecognitionContext};
pub use error::RecognizeError;
pub use geom::{angle, curvature, distance, histogram};
pub use recognizer::{recognize, Recognition, Recognizer, StrokeOutcome, UnknownReason};
pub use segment::{CurvatureStats, Primitive, Segment};
pub use segmenter::segment;
pub use stroke::{Stroke, StrokeBuilder};
pub use verify::verify;
