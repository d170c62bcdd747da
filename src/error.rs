//! Error types for the chomp crate

use thiserror::Error;

/// Main error type for the chomp crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board must have at least one column")]
    EmptyBoard,

    #[error("invalid height '{token}' in '{input}': heights must be non-negative integers")]
    InvalidHeight { token: String, input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
