//! Boundary error types.
//!
//! The derivation pipeline itself is total: malformed fields normalize to
//! defaults instead of failing. Errors only arise where raw input enters the
//! crate (reading files, parsing JSON or TOML) or where a caller asks for a
//! pass/fail verdict.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload text is not valid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Payload is JSON but has the wrong fundamental shape
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Configuration file or value errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Quality score below the requested threshold
    #[error("Quality gate failed: score {score} is below the minimum of {minimum}")]
    QualityGate { score: u8, minimum: u8 },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }

    /// Whether the user can fix this by changing their input or config.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
