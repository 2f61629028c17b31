use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid RON question bank: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("invalid JSON question bank: {0}")]
    Json(#[from] serde_json::Error),

    #[error("question bank has no questions")]
    Empty,

    #[error("question {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("answer to question {index} has level {level}, expected 0..=4")]
    LevelOutOfRange { index: usize, level: u8 },
}
