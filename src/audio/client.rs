//! HTTP client for the synthesis and recognition endpoints.

use std::time::Duration;

use crate::config::{Endpoints, DEFAULT_TIMEOUT};

/// Builds and sends bearer-authenticated voice requests.
///
/// Synthesis lives in [`synthesis`](super::synthesis), recognition in
/// [`recognition`](super::recognition). Neither mutates credentials; a
/// [`VoiceError::Unauthorized`](crate::error::VoiceError::Unauthorized) is the
/// caller's cue to re-authenticate.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    pub(super) client: reqwest::Client,
    pub(super) tts_url: String,
    pub(super) asr_url: String,
    pub(super) timeout: Duration,
}

impl SpeechClient {
    pub fn new(client: reqwest::Client, endpoints: &Endpoints) -> Self {
        Self {
            client,
            tts_url: endpoints.tts_url.clone(),
            asr_url: endpoints.asr_url.clone(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
