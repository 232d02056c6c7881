//! Error types for calzik.

use thiserror::Error;

/// Errors that can occur in calzik operations.
#[derive(Error, Debug)]
pub enum CalzikError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid time slot '{0}'. Expected HH:MM-HH:MM")]
    InvalidSlot(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage quota exceeded ({used} + {requested} bytes > {quota} bytes)")]
    QuotaExceeded { used: u64, requested: u64, quota: u64 },
}

impl CalzikError {
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        CalzikError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<serde_json::Error> for CalzikError {
    fn from(e: serde_json::Error) -> Self {
        CalzikError::Serialization(e.to_string())
    }
}

/// Result type alias for calzik operations.
pub type CalzikResult<T> = Result<T, CalzikError>;
