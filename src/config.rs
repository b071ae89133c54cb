use crate::constants::{
    DEFAULT_API_URL, DEFAULT_AUTHORIZATION_URL, DEFAULT_LOGIN_URL, DEFAULT_TOKEN_URL, REDIRECT_URI,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, require_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Leverade OAuth application and user
pub struct Credentials {
    /// OAuth client ID of the registered application
    pub client_id: String,
    /// OAuth client secret of the registered application
    pub client_secret: String,
    /// Numeric ID of the Leverade user to authorize as
    pub user_id: String,
    /// Email address used on the login form
    pub user_email: String,
    /// Password used on the login form
    pub user_password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Endpoints of the Leverade accounts service and REST API
pub struct RestApiConfig {
    /// Login page URL, both fetched for the CSRF token and posted to
    pub login_url: String,
    /// OAuth authorization URL
    pub authorization_url: String,
    /// OAuth token exchange URL
    pub token_url: String,
    /// Base URL for REST resource calls
    pub base_url: String,
    /// Redirect URI registered for the OAuth application
    pub redirect_uri: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Leverade API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API and accounts service endpoints
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Loads the configuration from the environment
    ///
    /// Reads `.env` first, then requires the five `LEVERADE_*` credential
    /// variables. The endpoint URLs default to the production Leverade
    /// hosts and are only read from the environment when overridden.
    ///
    /// # Returns
    /// * `Ok(Config)` - Complete configuration
    /// * `Err(AppError::MissingEnvVar)` - If any credential variable is absent
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            client_id: require_env("LEVERADE_CLIENT_ID")?,
            client_secret: require_env("LEVERADE_CLIENT_SECRET")?,
            user_id: require_env("LEVERADE_USER_ID")?,
            user_email: require_env("LEVERADE_USER_EMAIL")?,
            user_password: require_env("LEVERADE_USER_PASSWORD")?,
        };

        Ok(Config {
            credentials,
            rest_api: RestApiConfig::default(),
        })
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        RestApiConfig {
            login_url: get_env_or_default("LEVERADE_LOGIN_URL", String::from(DEFAULT_LOGIN_URL)),
            authorization_url: get_env_or_default(
                "LEVERADE_AUTHORIZATION_URL",
                String::from(DEFAULT_AUTHORIZATION_URL),
            ),
            token_url: get_env_or_default("LEVERADE_TOKEN_URL", String::from(DEFAULT_TOKEN_URL)),
            base_url: get_env_or_default("LEVERADE_API_URL", String::from(DEFAULT_API_URL)),
            redirect_uri: get_env_or_default("LEVERADE_REDIRECT_URI", String::from(REDIRECT_URI)),
        }
    }
}
