//! Recognition: candidate resolution followed by ordered verification.

use std::fmt;

use log::{debug, info};

use crate::alphabet::{self, CandidateSet, Candidates};
use crate::character::CharacterBuffer;
use crate::classify;
use crate::config::{RecognitionConfig, RecognitionContext};
use crate::error::RecognizeError;
use crate::segment::{Primitive, Segment};
use crate::segmenter;
use crate::stroke::Stroke;
use crate::verify::{self, Glyph};

/// Why a drawing was not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownReason {
    /// The drawing did not have 1 to 4 segments.
    UnresolvedSegmentCount(usize),
    /// Every candidate failed verification.
    NoVerifierMatched { candidates: CandidateSet },
}

/// Outcome of recognizing one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    Symbol(char),
    Unknown(UnknownReason),
}

impl Recognition {
    pub fn symbol(&self) -> Option<char> {
        match self {
            Recognition::Symbol(c) => Some(*c),
            Recognition::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Recognition::Unknown(_))
    }

    /// Convert to a `Result` for callers that propagate with `?`.
    pub fn into_result(self) -> Result<char, RecognizeError> {
        match self {
            Recognition::Symbol(c) => Ok(c),
            Recognition::Unknown(UnknownReason::UnresolvedSegmentCount(n)) => {
                Err(RecognizeError::UnresolvedSegmentCount(n))
            }
            Recognition::Unknown(UnknownReason::NoVerifierMatched { candidates }) => {
                Err(RecognizeError::NoVerifierMatched {
                    candidates: candidates.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for Recognition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recognition::Symbol(c) => write!(f, "{c}"),
            Recognition::Unknown(_) => f.write_str("unknown"),
        }
    }
}

/// Recognize a complete list of segments.
///
/// A pure function of its inputs: failures come back as
/// [`Recognition::Unknown`] and nothing is retried.
pub fn recognize(
    segments: &[Segment],
    context: &RecognitionContext,
    config: &RecognitionConfig,
) -> Recognition {
    let primitives: Vec<Primitive> = segments.iter().map(|s| s.primitive).collect();
    let glyph = Glyph::new(segments, verify::segment_bounds(segments), context, config);
    recognize_candidates(&glyph, alphabet::resolve(&primitives))
}

/// Verify already-resolved candidates in alphabet order; the first success
/// wins.
pub(crate) fn recognize_candidates(glyph: &Glyph<'_>, candidates: Candidates) -> Recognition {
    let result = match candidates {
        Candidates::Unresolved(n) => {
            Recognition::Unknown(UnknownReason::UnresolvedSegmentCount(n))
        }
        Candidates::Resolved(set) => set
            .symbols()
            .find_map(|symbol| verify::verify_glyph(symbol, glyph))
            .map(Recognition::Symbol)
            .unwrap_or(Recognition::Unknown(UnknownReason::NoVerifierMatched {
                candidates: set,
            })),
    };
    info!("candidates \"{}\" -> {}", candidates, result);
    result
}

/// What happened to a stroke handed to [`Recognizer::push_stroke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// Segmented and appended to the current character.
    Added { segments: usize },
    /// A scribble: the current character was wiped.
    Cleared,
}

/// Drives recognition for one writing surface.
///
/// Owns the thresholds, the surface dimensions and the character being
/// written. One recognizer serves one writer; run several for parallel
/// input.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    config: RecognitionConfig,
    context: RecognitionContext,
    buffer: CharacterBuffer,
}

impl Recognizer {
    pub fn new(config: RecognitionConfig, context: RecognitionContext) -> Self {
        Self {
            config,
            context,
            buffer: CharacterBuffer::new(),
        }
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    pub fn context(&self) -> &RecognitionContext {
        &self.context
    }

    pub fn buffer(&self) -> &CharacterBuffer {
        &self.buffer
    }

    pub fn segment(&self, stroke: &Stroke) -> Vec<Segment> {
        segmenter::segment(stroke, &self.config)
    }

    pub fn classify(&self, segment: &Segment) -> Primitive {
        classify::classify(segment, &self.config)
    }

    pub fn resolve(&self, primitives: &[Primitive]) -> Candidates {
        alphabet::resolve(primitives)
    }

    pub fn verify(&self, symbol: char, segments: &[Segment]) -> Option<char> {
        verify::verify(symbol, segments, &self.context, &self.config)
    }

    pub fn recognize(&self, segments: &[Segment]) -> Recognition {
        recognize(segments, &self.context, &self.config)
    }

    /// Segment and recognize a whole character at once, without touching
    /// the buffered one.
    pub fn recognize_strokes(&self, strokes: &[Stroke]) -> Recognition {
        let mut buffer = CharacterBuffer::new();
        for stroke in strokes {
            buffer.add_stroke(stroke.clone(), &self.config);
        }
        buffer.recognize(&self.context, &self.config)
    }

    /// Pen-up: add a finished stroke to the current character.
    pub fn push_stroke(&mut self, stroke: Stroke) -> StrokeOutcome {
        if stroke.is_scribble(self.config.scribble_ratio) {
            debug!("scribble of length {:.1} clears the character", stroke.length());
            self.buffer.reset();
            return StrokeOutcome::Cleared;
        }
        let before = self.buffer.segments().len();
        self.buffer.add_stroke(stroke, &self.config);
        StrokeOutcome::Added {
            segments: self.buffer.segments().len() - before,
        }
    }

    /// The writer is done with this character: recognize it and start a
    /// new one.
    pub fn finish_character(&mut self) -> Recognition {
        let result = self.buffer.recognize(&self.context, &self.config);
        self.buffer.reset();
        result
    }

    /// Discard the current character.
    pub fn clear(&mut self) {
        self.buffer.reset();
    }
}
