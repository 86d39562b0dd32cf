//! Configuration (layered: code > env > defaults).

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::audio::recognition::DEFAULT_ASR_URL;
use crate::audio::synthesis::DEFAULT_TTS_URL;
use crate::audio::types::SynthesisOptions;
use crate::auth::credentials::redact;
use crate::auth::manager::DEFAULT_TOKEN_URL;
use crate::error::{Result, VoiceError};

/// Deadline applied to every network call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Directory synthesized files land in, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "voice";

/// URLs of the three service endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub tts_url: String,
    pub asr_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            tts_url: DEFAULT_TTS_URL.to_string(),
            asr_url: DEFAULT_ASR_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Route all three endpoints to one host, keeping the service's paths.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            token_url: format!("{base}/auth/oauth/v1/token"),
            tts_url: format!("{base}/tts"),
            asr_url: format!("{base}/asr"),
        }
    }
}

/// Everything needed to build a [`VoiceTextClient`](crate::client::VoiceTextClient).
#[derive(Clone)]
pub struct VoiceTextConfig {
    pub client_id: String,
    pub client_secret: String,
    pub endpoints: Endpoints,
    pub timeout: Duration,
    pub synthesis: SynthesisOptions,
    pub output_dir: PathBuf,
}

impl fmt::Debug for VoiceTextConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceTextConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout)
            .field("synthesis", &self.synthesis)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl VoiceTextConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
            synthesis: SynthesisOptions::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_synthesis(mut self, synthesis: SynthesisOptions) -> Self {
        self.synthesis = synthesis;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Load from `VOICETEXT_*` environment variables (and `.env` if present).
    ///
    /// `VOICETEXT_CLIENT_ID` and `VOICETEXT_CLIENT_SECRET` must be set; every
    /// other variable falls back to its default.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| VoiceError::Configuration(format!("{key} is not set")))
        };

        let mut config = Self::new(
            required("VOICETEXT_CLIENT_ID")?,
            required("VOICETEXT_CLIENT_SECRET")?,
        );

        if let Some(url) = lookup("VOICETEXT_TOKEN_URL") {
            config.endpoints.token_url = url;
        }
        if let Some(url) = lookup("VOICETEXT_TTS_URL") {
            config.endpoints.tts_url = url;
        }
        if let Some(url) = lookup("VOICETEXT_ASR_URL") {
            config.endpoints.asr_url = url;
        }
        if let Some(raw) = lookup("VOICETEXT_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                VoiceError::Configuration(format!("VOICETEXT_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            if secs == 0 {
                return Err(VoiceError::Configuration(
                    "VOICETEXT_TIMEOUT_SECS must be positive".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(model) = lookup("VOICETEXT_MODEL") {
            config.synthesis.model_name = model;
        }
        if let Some(encoder) = lookup("VOICETEXT_ENCODER") {
            config.synthesis.encoder = encoder;
        }
        if let Some(raw) = lookup("VOICETEXT_TEMPO") {
            config.synthesis.tempo = raw.trim().parse().map_err(|_| {
                VoiceError::Configuration(format!("VOICETEXT_TEMPO is not a number: {raw}"))
            })?;
        }
        if let Some(dir) = lookup("VOICETEXT_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
