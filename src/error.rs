use thiserror::Error;

/// Errors that can occur while building strokes or recognizing characters.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RecognizeError {
    #[error("segment count {0} is outside 1..=4")]
    UnresolvedSegmentCount(usize),

    #[error("no verifier accepted any of the candidates \"{candidates}\"")]
    NoVerifierMatched { candidates: String },

    #[error("stroke has no measurable length")]
    DegenerateStroke,

    #[error("stroke has no points")]
    EmptyStroke,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
