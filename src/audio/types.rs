//! Audio request options and recognition results.

use serde::Deserialize;

use crate::error::{Result, VoiceError};
use crate::util::de::null_as_default;

/// Synthesis voice parameters sent as query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOptions {
    pub model_name: String,
    pub encoder: String,
    pub tempo: f64,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            model_name: "maria".to_string(),
            encoder: "opus".to_string(),
            tempo: 0.9,
        }
    }
}

impl SynthesisOptions {
    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_encoder(mut self, encoder: impl Into<String>) -> Self {
        self.encoder = encoder.into();
        self
    }

    pub fn with_tempo(mut self, tempo: f64) -> Self {
        self.tempo = tempo;
        self
    }
}

/// One recognition hypothesis.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecognizedText {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// 0.0 to 1.0.
    #[serde(deserialize_with = "null_as_default")]
    pub confidence: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub punctuated_text: String,
}

/// Parsed recognition response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionResult {
    pub query_id: String,
    pub phrase_id: String,
    /// Hypotheses in service order; only the first one is used for the transcript.
    pub texts: Vec<RecognizedText>,
}

impl RecognitionResult {
    /// Punctuated text of the first hypothesis.
    ///
    /// No hypotheses is [`VoiceError::EmptyResult`]. A first hypothesis with
    /// empty punctuated text yields an empty transcript, not an error, and the
    /// plain `text` is not used as a fallback.
    pub fn transcript(&self) -> Result<String> {
        let first = self.texts.first().ok_or(VoiceError::EmptyResult)?;
        if first.punctuated_text.is_empty() {
            tracing::warn!(
                query_id = %self.query_id,
                plain_len = first.text.len(),
                "first hypothesis has no punctuated text"
            );
        }
        Ok(first.punctuated_text.clone())
    }
}
