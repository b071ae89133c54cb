// Authentication handshake for the Leverade accounts service

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::interface::{LeveradeAuthenticator, LeveradeSession};
use crate::session::response::TokenResponse;
use crate::utils::scrape::{extract_code_from_location, extract_csrf_token};
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Response};
use tracing::{debug, info};

/// Authentication handler for the Leverade accounts service
///
/// Simulates the browser-based authorization-code grant: logs in through
/// the HTML login form, collects the authorization code from a redirect
/// that is inspected rather than followed, and exchanges it for a bearer
/// token. All requests share one cookie-store client with redirects
/// disabled; the server-set cookies are what tie the three phases
/// together.
pub struct LeveradeAuth<'a> {
    pub(crate) cfg: &'a Config,
    http: Client,
}

impl<'a> LeveradeAuth<'a> {
    /// Creates a new authentication handler
    ///
    /// # Arguments
    /// * `cfg` - Reference to the configuration
    pub fn new(cfg: &'a Config) -> Self {
        Self {
            cfg,
            http: Client::builder()
                .user_agent(USER_AGENT)
                .cookie_store(true)
                .redirect(Policy::none())
                .build()
                .expect("reqwest client"),
        }
    }

    /// Phase 1: obtains the login CSRF token and posts the credentials
    ///
    /// The login response is a redirect that is deliberately not followed;
    /// only the session cookies it sets matter for the next phase.
    async fn log_in(&self) -> Result<(), AppError> {
        info!("Retrieving login token");
        let login_page = self
            .http
            .get(&self.cfg.rest_api.login_url)
            .send()
            .await?
            .text()
            .await?;
        let login_token = extract_csrf_token(&login_page, "login")?;
        debug!("Login token of length {} extracted", login_token.len());

        info!("Logging in");
        self.http
            .post(&self.cfg.rest_api.login_url)
            .form(&[
                ("_token", login_token.as_str()),
                ("email", self.cfg.credentials.user_email.as_str()),
                ("password", self.cfg.credentials.user_password.as_str()),
            ])
            .send()
            .await?;
        info!("Successfully logged in");
        Ok(())
    }

    /// Phase 2: obtains an authorization code for the configured client
    ///
    /// A user that already authorized the application gets redirected with
    /// the code straight away; otherwise the consent form is submitted
    /// with its own CSRF token and the code is read from that redirect.
    async fn obtain_authorization_code(&self) -> Result<String, AppError> {
        info!("Retrieving authorization code");
        let authorize_response = self
            .http
            .get(&self.cfg.rest_api.authorization_url)
            .query(&[
                ("client_id", self.cfg.credentials.client_id.as_str()),
                ("redirect_uri", self.cfg.rest_api.redirect_uri.as_str()),
                ("response_type", "code"),
                ("user_id", self.cfg.credentials.user_id.as_str()),
            ])
            .send()
            .await?;

        // The redirect may already carry the code from a prior authorization.
        match Self::code_from_response(&authorize_response) {
            Ok(code) => {
                info!("Already authorized, skipping consent");
                return Ok(code);
            }
            Err(e) if e.is_code_probe_miss() => {
                debug!("No code in authorization response yet: {e}");
            }
            Err(e) => return Err(e),
        }

        let authorize_page = authorize_response.text().await?;
        let authorization_token = extract_csrf_token(&authorize_page, "authorization")?;
        debug!(
            "Authorization token of length {} extracted",
            authorization_token.len()
        );

        info!("Authorizing");
        let authorizing_response = self
            .http
            .post(&self.cfg.rest_api.authorization_url)
            .form(&[
                ("_token", authorization_token.as_str()),
                ("state", ""),
                ("client_id", self.cfg.credentials.client_id.as_str()),
            ])
            .send()
            .await?;

        let code = Self::code_from_response(&authorizing_response)?;
        info!("Authorization code retrieved");
        Ok(code)
    }

    /// Phase 3: exchanges the authorization code for an access token
    async fn exchange_code(&self, code: &str) -> Result<String, AppError> {
        info!("Retrieving access token");
        let token_response: TokenResponse = self
            .http
            .post(&self.cfg.rest_api.token_url)
            .form(&[
                ("client_id", self.cfg.credentials.client_id.as_str()),
                ("redirect_uri", self.cfg.rest_api.redirect_uri.as_str()),
                ("client_secret", self.cfg.credentials.client_secret.as_str()),
                ("grant_type", "authorization_code"),
                ("code", code),
            ])
            .send()
            .await?
            .json()
            .await?;

        let access_token = token_response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingAccessToken)?;
        info!("Access token retrieved");
        Ok(access_token)
    }

    /// Reads the authorization code out of a response's Location header
    fn code_from_response(response: &Response) -> Result<String, AppError> {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::MissingRedirect)?;
        debug!("Inspecting redirect location: {location}");
        extract_code_from_location(location)
    }
}

#[async_trait]
impl LeveradeAuthenticator for LeveradeAuth<'_> {
    async fn authenticate(&self) -> Result<LeveradeSession, AppError> {
        self.log_in().await?;
        let code = self.obtain_authorization_code().await?;
        let access_token = self.exchange_code(&code).await?;
        Ok(LeveradeSession::new(access_token))
    }
}
