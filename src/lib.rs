//! # Leverade Client
//!
//! Client for the Leverade federation management API. The platform only
//! issues OAuth tokens through its browser flow, so the authenticator
//! scripts that flow instead: it logs in through the HTML login form,
//! collects the authorization code from the Location header of a redirect
//! that is never followed, and exchanges it for a bearer token. The resulting
//! session drives a JSON:API request wrapper and, on top of it, a bulk
//! license-expiration update service.
//!
//! ## Usage
//!
//! ```ignore
//! use leverade_client::prelude::*;
//!
//! let config = Arc::new(Config::from_env()?);
//! let session = LeveradeAuth::new(&config).authenticate().await?;
//! let client = Arc::new(LeveradeHttpClientImpl::new(config, session));
//! let licenses = LicenseServiceImpl::new(client)
//!     .get_licenses(6717, LicenseType::Player)
//!     .await?;
//! ```

/// Service interfaces, implementations and API data models
pub mod application;
/// Configuration loaded from the environment
pub mod config;
/// Endpoint and protocol constants
pub mod constants;
/// Error types
pub mod error;
/// Commonly used types and traits
pub mod prelude;
/// Authentication handshake and session
pub mod session;
/// HTTP transport for the REST API
pub mod transport;
/// Environment, logging and extraction helpers
pub mod utils;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
