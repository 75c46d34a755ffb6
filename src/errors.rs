//! Error types for grid generation.
//!
//! Only problems with the request itself surface as errors. An illegal placement is
//! skipped by the search, and a search that cannot place every word yields an empty
//! [`Solution`](crate::crossword::generator::Solution) rather than an error.
//!
//! # Error Codes
//!
//! - E001: `EmptyWordList`
//! - E002: `EmptyWord`
//! - E003: `InvalidDimensions`
//! - E004: `WordTooLong`
//! - E005: `InvalidConfig`
//! - E006: `Io`
//! - E007: `Serialization`
//! - E008: `Json`
//! - E009: `Vocabulary`

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("No words were given to place")]
    EmptyWordList,

    #[error("Word #{index} is empty")]
    EmptyWord { index: usize },

    #[error("Grid dimensions {height}x{width} are invalid; both must be at least 1")]
    InvalidDimensions { height: usize, width: usize },

    #[error("Word \"{word}\" does not fit a {height}x{width} grid in either direction")]
    WordTooLong {
        word: String,
        height: usize,
        width: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not build vocabulary: {0}")]
    Vocabulary(#[from] fst::Error),
}

impl GenerateError {
    /// Short code for documentation lookup
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyWordList => "E001",
            Self::EmptyWord { .. } => "E002",
            Self::InvalidDimensions { .. } => "E003",
            Self::WordTooLong { .. } => "E004",
            Self::InvalidConfig(_) => "E005",
            Self::Io(_) => "E006",
            Self::Serialization(_) => "E007",
            Self::Json(_) => "E008",
            Self::Vocabulary(_) => "E009",
        }
    }

    /// Whether the error comes from the request itself rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyWordList
                | Self::EmptyWord { .. }
                | Self::InvalidDimensions { .. }
                | Self::WordTooLong { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
