//! Extraction helpers for the scripted OAuth handshake
//!
//! The handshake never renders a browser: the CSRF token is pulled out of
//! the server-rendered HTML and the authorization code out of a redirect
//! URL that is inspected instead of followed.

use crate::constants::CSRF_INPUT_NAME;
use crate::error::AppError;
use scraper::{Html, Selector};
use url::Url;

/// Extracts the value of the hidden CSRF `_token` input from a page
///
/// # Arguments
/// * `html` - Raw HTML of the login or authorization page
/// * `page` - Short page name used in the error ("login", "authorization")
///
/// # Returns
/// * `Ok(String)` - The input's `value` attribute, verbatim
/// * `Err(AppError::MissingToken)` - If the input or its value is absent
pub fn extract_csrf_token(html: &str, page: &'static str) -> Result<String, AppError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!("input[name=\"{CSRF_INPUT_NAME}\"]"))
        .expect("static CSRF selector");

    document
        .select(&selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .map(String::from)
        .ok_or(AppError::MissingToken(page))
}

/// Extracts the `code` query parameter from a redirect Location URL
///
/// # Arguments
/// * `location` - Value of a Location header, an absolute URL
///
/// # Returns
/// * `Ok(String)` - The authorization code
/// * `Err(AppError::MissingCode)` - If the URL has no `code` parameter
pub fn extract_code_from_location(location: &str) -> Result<String, AppError> {
    let url = Url::parse(location)?;
    url.query_pairs()
        .find(|(name, _)| name == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
        .ok_or(AppError::MissingCode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_PAGE: &str = r#"
        <html><body>
          <form method="POST" action="/login">
            <input type="hidden" name="_token" value="abc123csrf">
            <input type="email" name="email">
            <input type="password" name="password">
          </form>
        </body></html>"#;

    #[test]
    fn csrf_token_is_extracted_verbatim() {
        let token = extract_csrf_token(LOGIN_PAGE, "login").unwrap();
        assert_eq!(token, "abc123csrf");
    }

    #[test]
    fn missing_csrf_input_is_a_scrape_error() {
        let err = extract_csrf_token("<html><body>no form here</body></html>", "login")
            .unwrap_err();
        assert!(matches!(err, AppError::MissingToken("login")));
    }

    #[test]
    fn csrf_input_without_value_is_a_scrape_error() {
        let html = r#"<form><input type="hidden" name="_token"></form>"#;
        let err = extract_csrf_token(html, "authorization").unwrap_err();
        assert!(matches!(err, AppError::MissingToken("authorization")));
    }

    #[test]
    fn code_is_extracted_from_location_url() {
        let code = extract_code_from_location("https://tchoukball.ch/?code=XYZ").unwrap();
        assert_eq!(code, "XYZ");
    }

    #[test]
    fn location_without_code_is_a_missing_code_error() {
        let err = extract_code_from_location("https://tchoukball.ch/?state=").unwrap_err();
        assert!(matches!(err, AppError::MissingCode));
    }

    #[test]
    fn code_survives_other_query_parameters() {
        let code =
            extract_code_from_location("https://tchoukball.ch/?state=&code=def456&foo=bar")
                .unwrap();
        assert_eq!(code, "def456");
    }
}
