/// Login page used to obtain the CSRF token and post the credentials
pub const DEFAULT_LOGIN_URL: &str = "https://accounts.leverade.com/login";
/// OAuth authorization endpoint, queried and (when needed) posted to for the request code
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://accounts.leverade.com/oauth/authorize";
/// OAuth token endpoint where the authorization code is exchanged for an access token
pub const DEFAULT_TOKEN_URL: &str = "https://api.leverade.com/oauth/token";
/// Base URL for all REST API resource calls
pub const DEFAULT_API_URL: &str = "https://api.leverade.com";
/// Redirect URI registered for the OAuth application
///
/// The authorization server redirects here with the `code` query parameter;
/// the redirect is never followed, only its URL is inspected.
pub const REDIRECT_URI: &str = "https://tchoukball.ch";
/// JSON:API media type sent in the Accept header of every API request
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";
/// Name of the hidden CSRF input scraped from the login and authorization pages
pub const CSRF_INPUT_NAME: &str = "_token";
/// Page size used when fetching licenses for a bulk update
///
/// Large enough that a season's licenses of one type fit in a single page,
/// so the update routine does not paginate.
pub const LICENSES_PAGE_SIZE: u32 = 500;
/// User agent string used in HTTP requests to identify this client to Leverade
pub const USER_AGENT: &str = "Rust-Leverade-Client/0.1.0";
