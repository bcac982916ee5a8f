//! Error types for the build service

use thiserror::Error;
use workflow_compiler::ValidationError;

/// Result type alias using ServiceError
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur while preparing or submitting a build
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The workflow failed submission checks; nothing was sent
    #[error("Workflow is not ready for submission: {0}")]
    Validation(#[from] ValidationError),

    /// The request never got a response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Build backend rejected the workflow ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl ServiceError {
    /// Create a rejection error
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}
