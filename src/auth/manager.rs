use std::time::Duration;

use tracing::{debug, info, warn};

use super::credentials::Credentials;
use super::grant::GrantRequest;
use super::token::TokenResponse;
use crate::config::DEFAULT_TIMEOUT;
use crate::error::{Result, VoiceError};
use crate::util::timeout::with_timeout;

/// Default OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://mcs.mail.ru/auth/oauth/v1/token";

/// Runs the grant exchange against the token endpoint.
///
/// Holds no credential state of its own; callers pass the [`Credentials`] to
/// update, so several clients can share one manager.
#[derive(Debug, Clone)]
pub struct TokenManager {
    client: reqwest::Client,
    token_url: String,
    timeout: Duration,
}

impl TokenManager {
    pub fn new(client: reqwest::Client, token_url: impl Into<String>) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Obtain a new access token and store it in `credentials`.
    ///
    /// Uses the refresh grant when a refresh token is held, the client
    /// credentials grant otherwise. On success both tokens are overwritten with
    /// the response values, even when empty. On any error `credentials` is
    /// left untouched.
    pub async fn authenticate(&self, credentials: &mut Credentials) -> Result<String> {
        let grant = GrantRequest::for_credentials(credentials);
        if grant.is_refresh() {
            debug!(client_id = credentials.client_id(), "exchanging refresh token");
        } else {
            debug!(
                client_id = credentials.client_id(),
                "refresh token is not set, requesting a new token"
            );
        }

        let response = self.request_token(&grant).await?;
        info!(
            tts = response.scope.tts,
            asr_short = response.scope.asr_short,
            asr_stream = response.scope.asr_stream,
            expires_in = %response.expires_in,
            "access token received"
        );

        let access_token = response.access_token.clone();
        credentials.store_tokens(response.refresh_token, response.access_token);
        Ok(access_token)
    }

    /// Send one grant and parse the reply, without touching any credentials.
    pub async fn request_token(&self, grant: &GrantRequest) -> Result<TokenResponse> {
        with_timeout(self.timeout, async {
            let response = self
                .client
                .post(&self.token_url)
                .json(grant)
                .send()
                .await?;

            let status = response.status().as_u16();
            let body = response.bytes().await?;
            if !(200..300).contains(&status) {
                warn!(status, "token endpoint rejected the grant");
                return Err(token_status_error(status, &body));
            }
            parse_token_response(&body)
        })
        .await
    }
}

/// Decode a token endpoint body.
pub fn parse_token_response(body: &[u8]) -> Result<TokenResponse> {
    Ok(serde_json::from_slice(body)?)
}

fn token_status_error(status: u16, body: &[u8]) -> VoiceError {
    let body = String::from_utf8_lossy(body);
    match status {
        401 | 403 => VoiceError::Unauthorized(body.into_owned()),
        _ => VoiceError::status(status, format!("token request failed with status {status}: {body}")),
    }
}
