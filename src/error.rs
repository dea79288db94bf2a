use thiserror::Error;

/// Main error type for the matcher
///
/// Matching itself never fails; errors only come from the edges
/// (catalog ingestion, file loading, configuration).
#[derive(Error, Debug)]
pub enum MatcherError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Song rejected at catalog ingestion
    #[error("Invalid song '{id}': {reason}")]
    InvalidSong { id: String, reason: String },

    /// Two catalog entries share the same id
    #[error("Duplicate song id: {0}")]
    DuplicateId(String),

    /// Configuration value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for MatcherError {
    fn from(s: String) -> Self {
        MatcherError::Other(s)
    }
}

impl From<&str> for MatcherError {
    fn from(s: &str) -> Self {
        MatcherError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatcherError>;
