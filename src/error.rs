//! claude-cache error types

/// claude-cache error types
///
/// The annotation pipeline itself never fails; these cover the edges where
/// bodies are decoded from JSON or settings are read from disk.
#[derive(Debug, thiserror::Error)]
pub enum ClaudeCacheError {
    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for claude-cache operations
pub type Result<T> = std::result::Result<T, ClaudeCacheError>;
