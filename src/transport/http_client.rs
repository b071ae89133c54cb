use crate::application::models::envelope::ResourceEnvelope;
use crate::config::Config;
use crate::constants::{JSON_API_MEDIA_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::session::interface::LeveradeSession;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Policy applied to responses with an HTTP status of 400 or above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Log the raw body as a diagnostic and still return the parsed JSON,
    /// which may be a JSON:API errors document. Callers inspect the shape
    /// themselves. This matches the upstream behavior.
    #[default]
    Permissive,
    /// Turn any status of 400 or above into [`AppError::Api`]
    Strict,
}

/// Options for a single API request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method, GET when not set otherwise
    pub method: Method,
    /// Pre-serialized request body
    pub body: Option<String>,
    /// Extra headers, taking precedence over the defaults on collision
    pub headers: Vec<(String, String)>,
    /// Opaque filter expression forwarded verbatim as the `filter` query
    /// parameter (`field:value[,field:value...]`, interpreted server-side)
    pub filter: Option<String>,
    /// 1-based page number, forwarded as `page[number]` when present
    pub page_number: Option<u32>,
    /// Page size, forwarded as `page[size]` when present; the server
    /// applies its default when omitted
    pub page_size: Option<u32>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
            filter: None,
            page_number: None,
            page_size: None,
        }
    }
}

/// Interface for authenticated JSON:API requests
#[async_trait]
pub trait LeveradeHttpClient: Send + Sync {
    /// Sends a request to a relative endpoint and returns the parsed envelope
    ///
    /// # Arguments
    /// * `endpoint` - Relative resource path (e.g. `licenses`, `licenses/42`)
    /// * `options` - Method, body, headers and filter/pagination parameters
    async fn send_request<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ResourceEnvelope<T>, AppError>;
}

/// HTTP client implementation for the Leverade REST API
///
/// Owns the session produced by the handshake and stamps its bearer token
/// on every request. Each call is a single shot against the network; there
/// is no retry, rate limiting or timeout layer.
pub struct LeveradeHttpClientImpl {
    config: Arc<Config>,
    session: LeveradeSession,
    http_client: Client,
    response_mode: ResponseMode,
}

impl LeveradeHttpClientImpl {
    /// Creates a new client for an authenticated session
    ///
    /// # Arguments
    /// * `config` - Configuration with the API base URL
    /// * `session` - Session returned by the authenticator
    pub fn new(config: Arc<Config>, session: LeveradeSession) -> Self {
        Self {
            config,
            session,
            http_client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("reqwest client"),
            response_mode: ResponseMode::default(),
        }
    }

    /// Sets the policy for responses with status 400 or above
    #[must_use]
    pub fn with_response_mode(mut self, mode: ResponseMode) -> Self {
        self.response_mode = mode;
        self
    }

    /// Joins the API base URL with a relative endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Assembles the filter and pagination query parameters
    fn query_params(options: &RequestOptions) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(filter) = &options.filter {
            params.push(("filter", filter.clone()));
        }
        if let Some(page_number) = options.page_number {
            params.push(("page[number]", page_number.to_string()));
        }
        if let Some(page_size) = options.page_size {
            params.push(("page[size]", page_size.to_string()));
        }
        params
    }

    /// Builds the header map: defaults first, caller headers winning on collision
    fn request_headers(&self, options: &RequestOptions) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.session.bearer())
                .map_err(|e| AppError::InvalidHeader(e.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidHeader(e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::InvalidHeader(e.to_string()))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl LeveradeHttpClient for LeveradeHttpClientImpl {
    async fn send_request<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ResourceEnvelope<T>, AppError> {
        info!("Sending request to /{}", endpoint.trim_start_matches('/'));

        let url = self.api_url(endpoint);
        let headers = self.request_headers(&options)?;
        let params = Self::query_params(&options);

        debug!("{} {} params={:?}", options.method, url, params);

        let mut request = self
            .http_client
            .request(options.method.clone(), &url)
            .headers(headers)
            .query(&params);

        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;

        if status.as_u16() >= 400 {
            match self.response_mode {
                ResponseMode::Permissive => {
                    error!("API responded with status {}: {}", status, body);
                }
                ResponseMode::Strict => {
                    return Err(AppError::Api { status, body });
                }
            }
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_a_plain_get() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
        assert!(options.headers.is_empty());
        assert!(options.filter.is_none());
        assert!(options.page_number.is_none());
        assert!(options.page_size.is_none());
    }

    #[test]
    fn query_params_keep_filter_verbatim_and_order() {
        let options = RequestOptions {
            filter: Some("season.id:6717,type:player".to_string()),
            page_number: Some(1),
            page_size: Some(500),
            ..Default::default()
        };
        let params = LeveradeHttpClientImpl::query_params(&options);
        assert_eq!(
            params,
            vec![
                ("filter", "season.id:6717,type:player".to_string()),
                ("page[number]", "1".to_string()),
                ("page[size]", "500".to_string()),
            ]
        );
    }

    #[test]
    fn omitted_pagination_is_not_sent() {
        let options = RequestOptions {
            filter: Some("type:referee".to_string()),
            ..Default::default()
        };
        let params = LeveradeHttpClientImpl::query_params(&options);
        assert_eq!(params.len(), 1);
    }
}
