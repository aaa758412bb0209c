//! Error types for the FeedbackOS core

use thiserror::Error;

/// Result type alias for feedback operations
pub type Result<T> = std::result::Result<T, FeedbackError>;

/// Main error type for the feedback API surface
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// A submission failed validation before any network or store interaction.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The session credential was rejected or has expired. The credential has
    /// already been invalidated; the caller should route to sign-in.
    #[error("Session credential rejected or expired")]
    Unauthorized,

    /// A non-success transport response, carrying the HTTP status.
    #[error("Transport error: status {status}: {message}")]
    Transport { status: u16, message: String },

    /// The request could not be dispatched or its response could not be read.
    #[error("Request error: {0}")]
    Request(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FeedbackError {
    /// HTTP status carried by a transport failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FeedbackError::Transport { status, .. } => Some(*status),
            FeedbackError::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Whether this error should route the caller to sign-in.
    pub fn is_sign_out(&self) -> bool {
        matches!(self, FeedbackError::Unauthorized)
    }
}
