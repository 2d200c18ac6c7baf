//! Co-pilot error types.

use greenfield_core::Error as CoreError;
use thiserror::Error;

/// Co-pilot errors.
#[derive(Debug, Error)]
pub enum CopilotError {
    /// Invalid input or configuration.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for the completion endpoint.
    #[error("Missing API key for {0}")]
    MissingApiKey(String),

    /// Provider error (bad status or unusable completion).
    #[error("Provider error: {0}")]
    Provider(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Core error from greenfield-core.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl CopilotError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}

/// Error code for programmatic handling in the UI layer.
impl CopilotError {
    pub fn code(&self) -> &'static str {
        match self {
            CopilotError::InvalidInput(_) => "INVALID_INPUT",
            CopilotError::MissingApiKey(_) => "MISSING_API_KEY",
            CopilotError::Provider(_) => "PROVIDER_ERROR",
            CopilotError::Http(_) => "HTTP_ERROR",
            CopilotError::Core(_) => "CORE_ERROR",
        }
    }
}
