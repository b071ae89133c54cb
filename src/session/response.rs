use serde::{Deserialize, Serialize};

/// Body returned by the OAuth token endpoint
///
/// `access_token` is optional at the serde level so that its absence can
/// be reported as a distinct error instead of a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer access token, absent when the exchange was rejected
    pub access_token: Option<String>,
    /// Token type, usually "Bearer"
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds
    pub expires_in: Option<u64>,
}
