use thiserror::Error;

/// Engine error taxonomy.
///
/// `Config` is fatal at engine construction. The scorer variants are
/// per-item (or per-chunk) and recoverable by the caller — retry, skip,
/// or mark as indeterminate. They are never folded into `accept=false`:
/// "confidently rejected" and "could not be evaluated" must stay
/// distinguishable. Malformed or empty input text is not an error at
/// all; it simply fails the lexical prefilter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriageError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("scorer unavailable: {0}")]
    ScorerUnavailable(String),

    #[error("scorer returned {got} score maps for {expected} texts")]
    ScoreCountMismatch { expected: usize, got: usize },

    #[error("score map has {got} entries, expected {expected}")]
    LabelCountMismatch { expected: usize, got: usize },

    #[error("score {value} for label {label:?} outside [0, 1]")]
    ScoreOutOfRange { label: String, value: f32 },
}
