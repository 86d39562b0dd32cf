//! Convenience re-exports for common usage.

pub use crate::audio::{
    AudioProvider, RecognitionResult, RecognizedText, SpeechProvider, SynthesisOptions,
};
pub use crate::auth::{Credentials, TokenManager, TokenResponse, TokenScope};
pub use crate::client::VoiceTextClient;
pub use crate::config::{Endpoints, VoiceTextConfig};
pub use crate::error::{Result, VoiceError};
