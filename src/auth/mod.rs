//! Credential state and the OAuth token lifecycle.

pub mod credentials;
pub mod grant;
pub mod manager;
pub mod token;

pub use credentials::Credentials;
pub use grant::{GrantRequest, GRANT_TYPE};
pub use manager::{parse_token_response, TokenManager, DEFAULT_TOKEN_URL};
pub use token::{TokenResponse, TokenScope};
