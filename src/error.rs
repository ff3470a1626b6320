//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("coordinates ({row}, {col}) are out of range (rows and columns run 0-2)")]
    OutOfRange { row: usize, col: usize },

    #[error("malformed board: {x_count} X marks and {o_count} O marks cannot arise from legal play")]
    MalformedBoard { x_count: usize, o_count: usize },

    #[error("game already over")]
    GameOver,

    #[error("no legal actions available")]
    NoActions,

    #[error("board string must contain exactly 9 cells, got {got}")]
    BoardLength { got: usize },

    #[error("invalid character '{character}' at cell {position} of board string")]
    BoardCharacter { character: char, position: usize },

    #[error("progress bar template error: {message}")]
    ProgressTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
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
