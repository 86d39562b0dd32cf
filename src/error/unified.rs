//! Error classification and recovery hints.

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Server,
    Api,
    Serialization,
    Recognition,
    Io,
    Configuration,
}

/// Suggested recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverySuggestion {
    /// Call `authenticate()` and repeat the request.
    Reauthenticate,
    RetryLater,
    IncreaseTimeout,
    CheckConfiguration,
    /// The audio produced no recognizable speech.
    CheckAudio,
    ContactSupport,
}
