//! Text-to-speech trait.

use async_trait::async_trait;

use crate::error::VoiceError;

/// Trait for text-to-speech providers.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Generate encoded speech audio from text.
    async fn generate_speech(&self, text: &str) -> Result<Vec<u8>, VoiceError>;
}
