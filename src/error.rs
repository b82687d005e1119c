use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    /// Minimum and maximum of an empty collection are undefined.
    #[error("invalid input: cannot take extremes of an empty collection")]
    InvalidInput,

    #[error("input is empty, expected the number of scores first")]
    MissingCount,

    #[error("bad score count '{0}', expected a non-negative integer")]
    BadCount(String),

    #[error("score #{position} is not an integer: '{token}'")]
    BadScore { position: usize, token: String },

    #[error("score #{position} does not fit in a 64-bit integer: '{token}'")]
    ScoreOutOfRange { position: usize, token: String },

    #[error("expected {expected} scores, found {found}")]
    MissingScores { expected: usize, found: usize },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
