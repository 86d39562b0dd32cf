//! High-level client owning credential state.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, warn};

use crate::audio::storage::{create_voice_file, open_audio};
use crate::audio::{
    AudioProvider, RecognitionResult, SpeechClient, SpeechProvider, SynthesisOptions,
};
use crate::auth::{Credentials, TokenManager};
use crate::config::VoiceTextConfig;
use crate::error::Result;
use crate::http::build_client;

/// One credential set bound to a token manager and a speech client.
///
/// Calls are sequential: `authenticate` takes `&mut self`, the speech calls
/// read the access token it stored. A
/// [`VoiceError::Unauthorized`](crate::error::VoiceError::Unauthorized) from a
/// speech call means the token expired; call [`authenticate`](Self::authenticate)
/// and repeat the call.
///
/// # Example
/// ```no_run
/// use voicetext::VoiceTextClient;
///
/// # async fn example() -> voicetext::error::Result<()> {
/// let mut client = VoiceTextClient::new("client-id", "client-secret")?;
/// client.authenticate().await?;
/// let path = client.synthesize_to_file("Привет!", "greeting").await?;
/// let transcript = client.recognize_file(&path).await?;
/// println!("{transcript}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct VoiceTextClient {
    credentials: Credentials,
    tokens: TokenManager,
    speech: SpeechClient,
    synthesis: SynthesisOptions,
    output_dir: PathBuf,
}

impl VoiceTextClient {
    /// Client for the production endpoints with default settings.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::from_config(VoiceTextConfig::new(client_id, client_secret))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(VoiceTextConfig::from_env()?)
    }

    pub fn from_config(config: VoiceTextConfig) -> Result<Self> {
        let http = build_client(config.timeout)?;
        Ok(Self {
            credentials: Credentials::new(config.client_id, config.client_secret),
            tokens: TokenManager::new(http.clone(), config.endpoints.token_url.clone())
                .with_timeout(config.timeout),
            speech: SpeechClient::new(http, &config.endpoints).with_timeout(config.timeout),
            synthesis: config.synthesis,
            output_dir: config.output_dir,
        })
    }

    /// Replace the credential state, e.g. to resume with a saved refresh token.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    pub fn speech_client(&self) -> &SpeechClient {
        &self.speech
    }

    pub fn synthesis_options(&self) -> &SynthesisOptions {
        &self.synthesis
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run the grant exchange and store the new tokens.
    pub async fn authenticate(&mut self) -> Result<String> {
        self.tokens.authenticate(&mut self.credentials).await
    }

    /// Authenticate only if no access token is held yet.
    pub async fn ensure_authenticated(&mut self) -> Result<String> {
        if self.credentials.is_authenticated() {
            return Ok(self.credentials.access_token().to_string());
        }
        self.authenticate().await
    }

    /// Synthesize with the configured voice options, streaming into `sink`.
    pub async fn synthesize<W>(&self, text: &str, sink: W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + Send,
    {
        self.synthesize_with(text, &self.synthesis, sink).await
    }

    pub async fn synthesize_with<W>(
        &self,
        text: &str,
        options: &SynthesisOptions,
        sink: W,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + Send,
    {
        self.speech
            .synthesize(&self.credentials, text, options, sink)
            .await
    }

    /// Synthesize into `<output_dir>/<file_id>.oga` and return its path.
    ///
    /// The file is created before the request is sent and removed again if
    /// the call fails.
    pub async fn synthesize_to_file(&self, text: &str, file_id: &str) -> Result<PathBuf> {
        let (path, file) = create_voice_file(&self.output_dir, file_id).await?;
        match self.synthesize(text, file).await {
            Ok(written) => {
                debug!(path = %path.display(), bytes = written, "voice file written");
                Ok(path)
            }
            Err(err) => {
                if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                    warn!(
                        path = %path.display(),
                        error = %cleanup,
                        "failed to remove partial voice file"
                    );
                }
                Err(err)
            }
        }
    }

    pub async fn recognize<R>(&self, audio: R) -> Result<String>
    where
        R: AsyncRead + Unpin + Send,
    {
        self.speech.recognize(&self.credentials, audio).await
    }

    pub async fn recognize_detailed<R>(&self, audio: R) -> Result<RecognitionResult>
    where
        R: AsyncRead + Unpin + Send,
    {
        self.speech.recognize_detailed(&self.credentials, audio).await
    }

    /// Transcribe an Ogg/Opus file.
    pub async fn recognize_file(&self, path: &Path) -> Result<String> {
        let file = open_audio(path).await?;
        self.recognize(file).await
    }
}

#[async_trait]
impl SpeechProvider for VoiceTextClient {
    async fn generate_speech(&self, text: &str) -> Result<Vec<u8>> {
        self.speech
            .synthesize_bytes(&self.credentials, text, &self.synthesis)
            .await
    }
}

#[async_trait]
impl AudioProvider for VoiceTextClient {
    async fn transcribe(&self, audio: &[u8]) -> Result<String> {
        self.speech
            .recognize_bytes(&self.credentials, audio.to_vec())
            .await?
            .transcript()
    }
}
