use std::fmt;

use serde::Serialize;

use super::credentials::{redact, Credentials};

/// `grant_type` sent by both grant shapes.
///
/// The refresh exchange also sends this literal rather than `refresh_token`;
/// change both only together with the service.
pub const GRANT_TYPE: &str = "client_credentials";

/// Body of a token endpoint request.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GrantRequest {
    /// First authentication: prove identity with the client secret.
    ClientCredentials {
        client_id: String,
        client_secret: String,
        grant_type: &'static str,
    },
    /// Exchange a held refresh token for a new access token.
    Refresh {
        client_id: String,
        refresh_token: String,
        grant_type: &'static str,
    },
}

impl GrantRequest {
    /// Pick the grant shape for the current credential state.
    pub fn for_credentials(credentials: &Credentials) -> Self {
        if credentials.has_refresh_token() {
            Self::Refresh {
                client_id: credentials.client_id().to_string(),
                refresh_token: credentials.refresh_token().to_string(),
                grant_type: GRANT_TYPE,
            }
        } else {
            Self::ClientCredentials {
                client_id: credentials.client_id().to_string(),
                client_secret: credentials.client_secret().to_string(),
                grant_type: GRANT_TYPE,
            }
        }
    }

    pub fn is_refresh(&self) -> bool {
        matches!(self, Self::Refresh { .. })
    }
}

impl fmt::Debug for GrantRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientCredentials {
                client_id,
                client_secret,
                grant_type,
            } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &redact(client_secret))
                .field("grant_type", grant_type)
                .finish(),
            Self::Refresh {
                client_id,
                refresh_token,
                grant_type,
            } => f
                .debug_struct("Refresh")
                .field("client_id", client_id)
                .field("refresh_token", &redact(refresh_token))
                .field("grant_type", grant_type)
                .finish(),
        }
    }
}
