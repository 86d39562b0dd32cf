//! Audio transcription trait.

use async_trait::async_trait;

use crate::error::VoiceError;

/// Trait for speech recognition providers.
#[async_trait]
pub trait AudioProvider: Send + Sync {
    /// Transcribe encoded audio.
    async fn transcribe(&self, audio: &[u8]) -> Result<String, VoiceError>;
}
