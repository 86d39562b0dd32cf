use std::fmt;

/// Client identity plus the tokens obtained by the most recent successful grant.
///
/// Empty token strings mean "never authenticated". Tokens are only replaced by
/// [`TokenManager::authenticate`](super::TokenManager::authenticate); expiry is
/// not tracked locally, a 401 from the service is the expiry signal.
///
/// # Example
/// ```
/// use voicetext::auth::Credentials;
///
/// let credentials = Credentials::new("client-id", "client-secret");
/// assert!(!credentials.is_authenticated());
/// assert!(!credentials.has_refresh_token());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    access_token: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: String::new(),
            access_token: String::new(),
        }
    }

    /// Seed a refresh token saved from an earlier session.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = refresh_token.into();
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Overwrite both tokens, empty values included.
    pub(crate) fn store_tokens(&mut self, refresh_token: String, access_token: String) {
        self.refresh_token = refresh_token;
        self.access_token = access_token;
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("access_token", &redact(&self.access_token))
            .finish()
    }
}

pub(crate) fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}
