//! Text-to-speech requests.

use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::client::SpeechClient;
use super::types::SynthesisOptions;
use crate::auth::Credentials;
use crate::error::Result;
use crate::http::{bearer_headers, ensure_success};
use crate::util::timeout::with_timeout;

/// Default synthesis endpoint.
pub const DEFAULT_TTS_URL: &str = "https://voice.mcs.mail.ru/tts";

impl SpeechClient {
    /// Synthesize `text` and stream the audio into `sink`.
    ///
    /// The sink is owned for the duration of the call: it is shut down after
    /// the last byte on success and dropped on every error path, including
    /// deadline expiry. Returns the number of bytes written.
    pub async fn synthesize<W>(
        &self,
        credentials: &Credentials,
        text: &str,
        options: &SynthesisOptions,
        sink: W,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + Send,
    {
        with_timeout(self.timeout, async move {
            let response = self.send_synthesis(credentials, text, options).await?;
            write_body(response, sink).await
        })
        .await
    }

    /// Synthesize `text` into memory.
    pub async fn synthesize_bytes(
        &self,
        credentials: &Credentials,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<Vec<u8>> {
        with_timeout(self.timeout, async {
            let response = self.send_synthesis(credentials, text, options).await?;
            Ok(response.bytes().await?.to_vec())
        })
        .await
    }

    async fn send_synthesis(
        &self,
        credentials: &Credentials,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<reqwest::Response> {
        let headers = bearer_headers(credentials.access_token())?;
        let tempo = options.tempo.to_string();
        debug!(
            model = %options.model_name,
            encoder = %options.encoder,
            chars = text.chars().count(),
            "requesting speech synthesis"
        );

        let response = self
            .client
            .get(&self.tts_url)
            .headers(headers)
            .query(&[
                ("text", text),
                ("model_name", options.model_name.as_str()),
                ("encoder", options.encoder.as_str()),
                ("tempo", tempo.as_str()),
            ])
            .send()
            .await?;

        debug!(
            status = response.status().as_u16(),
            content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default(),
            content_length = ?response.content_length(),
            "synthesis response received"
        );

        ensure_success(response).await
    }
}

async fn write_body<W>(response: reqwest::Response, mut sink: W) -> Result<u64>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut stream = response.bytes_stream();
    let mut written = 0_u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        sink.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    sink.flush().await?;
    sink.shutdown().await?;
    Ok(written)
}
