// src/error.rs
// Standardized error types for the superhero generator

use thiserror::Error;

/// Main error type for the womancart library
#[derive(Error, Debug)]
pub enum HeroError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid photo: {0}")]
    InvalidPhoto(String),

    #[error("{provider} API key not configured ({env_var})")]
    MissingApiKey {
        provider: String,
        env_var: &'static str,
    },

    #[error("{provider} API error {status}: {message}")]
    Upstream {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("{provider} job {job_id} failed: {reason}")]
    JobFailed {
        provider: String,
        job_id: String,
        reason: String,
    },

    #[error("{provider} job {job_id} still pending after {attempts} status checks")]
    PollTimeout {
        provider: String,
        job_id: String,
        attempts: u32,
    },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("generation cancelled")]
    Cancelled,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result using HeroError
pub type Result<T> = std::result::Result<T, HeroError>;

impl HeroError {
    /// True for failures caused by the caller's input rather than a provider
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidPhoto(_))
    }

    /// True for failures that came back from (or while waiting on) a provider
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. }
                | Self::JobFailed { .. }
                | Self::PollTimeout { .. }
                | Self::MalformedResponse(_)
                | Self::Http(_)
        )
    }
}
