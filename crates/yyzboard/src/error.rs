//! Error types for yyzboard.
//!
//! This module defines all error types used throughout the yyzboard crate.
//! The fetch client recovers most of them locally by substituting sample
//! data; only cancellation and configuration loading reach the caller.

use thiserror::Error;

/// The main error type for yyzboard operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Upstream Errors ===
    /// The API base URL or key is blank, so no live call is attempted.
    #[error("flight API configuration is missing (base URL and key are required)")]
    ConfigurationMissing,

    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status code.
    #[error("upstream responded with status {status}")]
    UpstreamStatus {
        /// The status code that was returned.
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The caller abandoned the operation.
    #[error("operation cancelled")]
    Cancelled,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for yyzboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the caller cancelled the operation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error is recovered by showing sample data instead of
    /// being returned to the caller.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing
                | Self::Transport(_)
                | Self::UpstreamStatus { .. }
                | Self::MalformedResponse(_)
        )
    }
}
