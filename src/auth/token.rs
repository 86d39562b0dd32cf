use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::util::de::null_as_default;

/// Successful token endpoint payload.
///
/// `access_token` is required: a 200 response without it, or with it set to
/// `null`, fails to parse. The other fields default to empty when absent or
/// `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawTokenResponse")]
pub struct TokenResponse {
    pub refresh_token: String,
    pub access_token: String,
    /// Lifetime as sent by the service; not interpreted. Taken from
    /// `expires_in`, or from the older `expired_in` key when that is empty.
    pub expires_in: String,
    pub scope: TokenScope,
}

#[derive(Deserialize)]
struct RawTokenResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    refresh_token: String,
    access_token: String,
    #[serde(default, deserialize_with = "string_or_number")]
    expires_in: String,
    #[serde(default, deserialize_with = "string_or_number")]
    expired_in: String,
    #[serde(default, deserialize_with = "null_as_default")]
    scope: TokenScope,
}

impl From<RawTokenResponse> for TokenResponse {
    fn from(raw: RawTokenResponse) -> Self {
        let expires_in = if raw.expires_in.is_empty() {
            raw.expired_in
        } else {
            raw.expires_in
        };
        Self {
            refresh_token: raw.refresh_token,
            access_token: raw.access_token,
            expires_in,
            scope: raw.scope,
        }
    }
}

/// Capabilities granted to the token, as counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenScope {
    #[serde(deserialize_with = "null_as_default")]
    pub tts: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub asr_short: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub asr_stream: i32,
}

impl TokenScope {
    pub fn has_tts(&self) -> bool {
        self.tts > 0
    }

    pub fn has_asr_short(&self) -> bool {
        self.asr_short > 0
    }

    pub fn has_asr_stream(&self) -> bool {
        self.asr_stream > 0
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number for expires_in, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_payload_parses() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{
                "refresh_token": "r",
                "access_token": "a",
                "expires_in": "3600",
                "scope": {"tts": 1, "asr_short": 1, "asr_stream": 0}
            }"#,
        )
        .unwrap();

        assert_eq!(
            parsed,
            TokenResponse {
                refresh_token: "r".to_string(),
                access_token: "a".to_string(),
                expires_in: "3600".to_string(),
                scope: TokenScope {
                    tts: 1,
                    asr_short: 1,
                    asr_stream: 0,
                },
            }
        );
        assert!(parsed.scope.has_tts());
        assert!(!parsed.scope.has_asr_stream());
    }

    #[test]
    fn legacy_expired_in_key_and_numeric_value_are_accepted() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token": "a", "expired_in": 86400}"#).unwrap();
        assert_eq!(parsed.expires_in, "86400");
        assert_eq!(parsed.refresh_token, "");
        assert_eq!(parsed.scope, TokenScope::default());
    }

    #[test]
    fn both_lifetime_keys_prefer_expires_in() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{"access_token": "a", "expires_in": "3600", "expired_in": "60"}"#,
        )
        .unwrap();
        assert_eq!(parsed.expires_in, "3600");

        let fallback: TokenResponse = serde_json::from_str(
            r#"{"access_token": "a", "expires_in": null, "expired_in": "60"}"#,
        )
        .unwrap();
        assert_eq!(fallback.expires_in, "60");
    }

    #[test]
    fn null_optional_fields_read_as_empty() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{"access_token": "a", "refresh_token": null, "scope": null, "expires_in": null}"#,
        )
        .unwrap();
        assert_eq!(parsed.refresh_token, "");
        assert_eq!(parsed.expires_in, "");
        assert_eq!(parsed.scope, TokenScope::default());
    }

    #[test]
    fn null_scope_counts_read_as_zero() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{"access_token": "a", "scope": {"tts": 1, "asr_short": null}}"#,
        )
        .unwrap();
        assert!(parsed.scope.has_tts());
        assert_eq!(parsed.scope.asr_short, 0);
    }

    #[test]
    fn null_access_token_is_an_error() {
        let result = serde_json::from_str::<TokenResponse>(r#"{"access_token": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_access_token_is_an_error() {
        let result = serde_json::from_str::<TokenResponse>(r#"{"refresh_token": "r"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_access_token_is_kept_verbatim() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token": "", "refresh_token": ""}"#).unwrap();
        assert_eq!(parsed.access_token, "");
    }
}
