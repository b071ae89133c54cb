/// Handshake implementation for the accounts service
pub mod auth;
/// Session value and authenticator trait
pub mod interface;
/// Response bodies of the OAuth endpoints
pub mod response;
