//! Shared HTTP client construction, bearer headers and status classification.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{Result, VoiceError};

/// Content type the voice endpoints expect on both synthesis and recognition.
pub const OPUS_CONTENT_TYPE: &str = "audio/ogg; codecs=opus";

/// Build the reqwest client used for all calls of one voice client.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| VoiceError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// Headers for an authenticated voice request.
pub fn bearer_headers(access_token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(OPUS_CONTENT_TYPE));
    let value = HeaderValue::from_str(&format!("Bearer {access_token}")).map_err(|_| {
        VoiceError::InvalidArgument("Access token contains invalid header characters".to_string())
    })?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Map a non-2xx HTTP status to an error.
pub fn status_to_error(status: u16, content_type: &str, body: &str) -> VoiceError {
    match status {
        401 => VoiceError::Unauthorized(body.to_string()),
        _ => VoiceError::status(
            status,
            format!("unexpected status {status} (content-type '{content_type}'): {body}"),
        ),
    }
}

/// Pass 2xx responses through; turn anything else into a classified error.
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(
        status = status.as_u16(),
        content_type = %content_type,
        "voice endpoint returned an error status"
    );
    Err(status_to_error(status.as_u16(), &content_type, &body))
}
