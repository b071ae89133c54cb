/// HTTP client trait and implementation for the REST API
pub mod http_client;
