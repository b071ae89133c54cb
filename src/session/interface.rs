use crate::error::AppError;
use async_trait::async_trait;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// An authenticated Leverade session
///
/// A value of this type only exists after a completed handshake, so
/// holding a session is the proof of being authenticated; there is no
/// empty-token state to check at call sites.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct LeveradeSession {
    /// Opaque bearer access token for API requests
    pub access_token: String,
}

impl LeveradeSession {
    /// Creates a session from an access token
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }

    /// Returns the Authorization header value for this session
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Interface for obtaining an authenticated session
#[async_trait]
pub trait LeveradeAuthenticator: Send + Sync {
    /// Runs the full login, authorization and token exchange sequence
    ///
    /// # Returns
    /// * `Ok(LeveradeSession)` - Session carrying the bearer token
    /// * `Err(AppError)` - If any step of the handshake fails
    async fn authenticate(&self) -> Result<LeveradeSession, AppError>;
}
