//! Error types for the voice client.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion};

use std::time::Duration;

use thiserror::Error;

/// Primary error type for all voice client operations.
#[derive(Error, Debug)]
pub enum VoiceError {
    /// Connection failure, deadline expiry, or a non-2xx status other than 401.
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
        timeout: bool,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The service rejected the bearer token or client credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Recognition returned no candidate texts.
    #[error("Fail_speech_voice")]
    EmptyResult,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<reqwest::Error> for VoiceError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: error.to_string(),
            status: error.status().map(|s| s.as_u16()),
            timeout: error.is_timeout(),
            source: Some(error),
        }
    }
}

impl VoiceError {
    /// Create a transport error for an unexpected HTTP status.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            status: Some(status),
            timeout: false,
            source: None,
        }
    }

    /// Create a transport error for an expired per-call deadline.
    pub fn timeout(deadline: Duration) -> Self {
        Self::Transport {
            message: format!("request timed out after {}ms", deadline.as_millis()),
            status: None,
            timeout: true,
            source: None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timeout: true, .. })
    }

    /// Whether the caller should obtain a fresh access token and try again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unauthorized(_) => ErrorCategory::Authentication,
            Self::Transport { timeout: true, .. } => ErrorCategory::Timeout,
            Self::Transport {
                status: Some(status),
                ..
            } => match status {
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::Transport { .. } => ErrorCategory::Network,
            Self::MalformedResponse(_) => ErrorCategory::Serialization,
            Self::EmptyResult => ErrorCategory::Recognition,
            Self::Io(_) => ErrorCategory::Io,
            Self::Configuration(_) | Self::InvalidArgument(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether this error is potentially retryable by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
        )
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::Reauthenticate,
            ErrorCategory::RateLimit | ErrorCategory::Network | ErrorCategory::Server => {
                RecoverySuggestion::RetryLater
            }
            ErrorCategory::Timeout => RecoverySuggestion::IncreaseTimeout,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::Recognition => RecoverySuggestion::CheckAudio,
            _ => RecoverySuggestion::ContactSupport,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VoiceError>;
