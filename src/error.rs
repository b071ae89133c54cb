//! Error types for the Leverade client
//!
//! Every fallible operation in the crate returns [`AppError`]. The scrape
//! and redirect variants mirror the distinct failure points of the OAuth
//! handshake; transport and JSON errors propagate from `reqwest` and
//! `serde_json` via `?`.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is absent
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// An expected hidden CSRF `_token` input was not found in a scraped page
    #[error("no CSRF token found in {0} page")]
    MissingToken(&'static str),

    /// A response expected to redirect carried no Location header
    #[error("no Location header in authorization response")]
    MissingRedirect,

    /// The redirect Location had no `code` query parameter
    #[error("no code parameter in redirect URL")]
    MissingCode,

    /// The token endpoint response carried no `access_token` field
    #[error("no access_token in token endpoint response")]
    MissingAccessToken,

    /// The redirect Location was not a parseable URL
    #[error("invalid redirect URL: {0}")]
    InvalidRedirectUrl(#[from] url::ParseError),

    /// A caller-supplied header name or value was not valid HTTP
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A date string could not be parsed as an ISO date
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// Transport-level failure from the HTTP client
    #[error("HTTP transport error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body could not be deserialized
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// API responded with an error status while the client runs in strict mode
    #[error("API request failed with status {status}: {body}")]
    Api {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Raw response body, usually a JSON:API errors document
        body: String,
    },
}

impl AppError {
    /// Whether this error means "no authorization code yet" during the
    /// already-authorized probe of the handshake
    ///
    /// Only the extraction kinds are recoverable there; everything else
    /// stays fatal.
    #[must_use]
    pub fn is_code_probe_miss(&self) -> bool {
        matches!(
            self,
            AppError::MissingRedirect | AppError::MissingCode | AppError::InvalidRedirectUrl(_)
        )
    }
}
