//! The strokes and segments of the character being written.

use kurbo::Rect;

use crate::alphabet::{self, Candidates};
use crate::config::{RecognitionConfig, RecognitionContext};
use crate::recognizer::{self, Recognition};
use crate::segment::{Primitive, Segment};
use crate::segmenter;
use crate::stroke::Stroke;
use crate::verify::Glyph;

/// Accumulates strokes until the writer finishes a character.
///
/// Segments are produced once per stroke as it is added. The candidate
/// string and result are kept until [`CharacterBuffer::reset`]; a later
/// [`CharacterBuffer::recognize`] replaces them with results for the
/// strokes present at that point.
#[derive(Debug, Clone, Default)]
pub struct CharacterBuffer {
    strokes: Vec<Stroke>,
    segments: Vec<Segment>,
    bounds: Option<Rect>,
    candidates: Option<Candidates>,
    resolved: Option<Recognition>,
}

impl CharacterBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment a stroke and append it.
    pub fn add_stroke(&mut self, stroke: Stroke, config: &RecognitionConfig) {
        let segments = segmenter::segment(&stroke, config);
        self.segments.extend(segments);
        let bounds = stroke.bounds();
        self.bounds = Some(match self.bounds {
            Some(b) => b.union(bounds),
            None => bounds,
        });
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        self.segments.iter().map(|s| s.primitive).collect()
    }

    /// Bounds of every stroke added so far.
    pub fn bounds(&self) -> Rect {
        self.bounds.unwrap_or(Rect::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Candidates computed by the last [`CharacterBuffer::recognize`].
    pub fn candidates(&self) -> Option<Candidates> {
        self.candidates
    }

    /// Result of the last [`CharacterBuffer::recognize`].
    pub fn resolved(&self) -> Option<&Recognition> {
        self.resolved.as_ref()
    }

    /// Resolve and verify the buffered segments against the bounds of all
    /// strokes, keeping the result.
    pub fn recognize(
        &mut self,
        context: &RecognitionContext,
        config: &RecognitionConfig,
    ) -> Recognition {
        let candidates = alphabet::resolve(&self.primitives());
        let glyph = Glyph::new(&self.segments, self.bounds(), context, config);
        let result = recognizer::recognize_candidates(&glyph, candidates);
        self.candidates = Some(candidates);
        self.resolved = Some(result.clone());
        result
    }

    /// Forget everything, ready for the next character.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
