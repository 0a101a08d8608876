//! Error types for soundstage.

use thiserror::Error;

/// Primary error type for all soundstage operations.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Precondition(String),
}

/// Coarse classification used by callers that only care which side failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The backend rejected the request with a structured error.
    Api,
    /// The request never completed (transport-level failure).
    Network,
    /// A client-side check blocked the operation before any request.
    Precondition,
    /// Local configuration, filesystem, or serialization problem.
    Local,
}

impl StudioError {
    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a precondition failure (blocked before any request was issued).
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { .. } => ErrorCategory::Api,
            Self::Network(_) => ErrorCategory::Network,
            Self::Precondition(_) => ErrorCategory::Precondition,
            Self::Configuration(_) | Self::Io(_) | Self::Serialization(_) => ErrorCategory::Local,
        }
    }

    /// HTTP status carried by an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, StudioError>;
