//! Speech-to-text requests and response interpretation.

use serde::Deserialize;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use super::client::SpeechClient;
use super::types::{RecognitionResult, RecognizedText};
use crate::auth::Credentials;
use crate::error::Result;
use crate::http::{bearer_headers, ensure_success};
use crate::util::de::null_as_default;
use crate::util::timeout::with_timeout;

/// Default recognition endpoint.
pub const DEFAULT_ASR_URL: &str = "https://voice.mcs.mail.ru/asr";

impl SpeechClient {
    /// Read all of `audio` and return the transcript.
    pub async fn recognize<R>(&self, credentials: &Credentials, audio: R) -> Result<String>
    where
        R: AsyncRead + Unpin + Send,
    {
        self.recognize_detailed(credentials, audio)
            .await?
            .transcript()
    }

    /// Read all of `audio` and return every hypothesis.
    pub async fn recognize_detailed<R>(
        &self,
        credentials: &Credentials,
        mut audio: R,
    ) -> Result<RecognitionResult>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut body = Vec::new();
        audio.read_to_end(&mut body).await?;
        self.recognize_bytes(credentials, body).await
    }

    /// Send encoded audio already held in memory.
    pub async fn recognize_bytes(
        &self,
        credentials: &Credentials,
        audio: Vec<u8>,
    ) -> Result<RecognitionResult> {
        let headers = bearer_headers(credentials.access_token())?;
        debug!(bytes = audio.len(), "requesting speech recognition");

        with_timeout(self.timeout, async {
            let response = self
                .client
                .post(&self.asr_url)
                .headers(headers)
                .body(audio)
                .send()
                .await?;
            let response = ensure_success(response).await?;
            let raw = response.bytes().await?;
            parse_recognition(&raw)
        })
        .await
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecognitionEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    qid: String,
    #[serde(deserialize_with = "null_as_default")]
    result: RecognitionPayload,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecognitionPayload {
    #[serde(deserialize_with = "null_as_default")]
    texts: Vec<RecognizedText>,
    #[serde(deserialize_with = "null_as_default")]
    phrase_id: String,
}

/// Decode a recognition response body.
pub fn parse_recognition(raw: &[u8]) -> Result<RecognitionResult> {
    let envelope: RecognitionEnvelope = serde_json::from_slice(raw)?;
    Ok(RecognitionResult {
        query_id: envelope.qid,
        phrase_id: envelope.result.phrase_id,
        texts: envelope.result.texts,
    })
}

/// Decode a recognition response body straight to its transcript.
pub fn interpret(raw: &[u8]) -> Result<String> {
    parse_recognition(raw)?.transcript()
}
