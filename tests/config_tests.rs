use leverade_client::constants::{DEFAULT_API_URL, DEFAULT_LOGIN_URL};
use leverade_client::prelude::*;
use std::env;

const CREDENTIAL_VARS: [&str; 5] = [
    "LEVERADE_CLIENT_ID",
    "LEVERADE_CLIENT_SECRET",
    "LEVERADE_USER_ID",
    "LEVERADE_USER_EMAIL",
    "LEVERADE_USER_PASSWORD",
];

// Environment mutation is process-global, so every from_env scenario runs
// inside this single test.
#[test]
fn from_env_requires_every_credential_variable() {
    unsafe {
        for var in CREDENTIAL_VARS {
            env::remove_var(var);
        }
    }
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, AppError::MissingEnvVar("LEVERADE_CLIENT_ID")));

    unsafe {
        env::set_var("LEVERADE_CLIENT_ID", "client-1");
        env::set_var("LEVERADE_CLIENT_SECRET", "secret-1");
        env::set_var("LEVERADE_USER_ID", "4242");
        env::set_var("LEVERADE_USER_EMAIL", "admin@example.org");
    }
    // Password still missing: the error names the first absent variable
    let err = Config::from_env().unwrap_err();
    assert!(matches!(
        err,
        AppError::MissingEnvVar("LEVERADE_USER_PASSWORD")
    ));

    unsafe {
        env::set_var("LEVERADE_USER_PASSWORD", "hunter2");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.credentials.client_id, "client-1");
    assert_eq!(config.credentials.user_email, "admin@example.org");
    // Endpoints fall back to the production hosts
    assert_eq!(config.rest_api.base_url, DEFAULT_API_URL);
    assert_eq!(config.rest_api.login_url, DEFAULT_LOGIN_URL);
    assert_eq!(config.rest_api.redirect_uri, "https://tchoukball.ch");

    // An empty value counts as missing
    unsafe {
        env::set_var("LEVERADE_CLIENT_SECRET", "");
    }
    let err = Config::from_env().unwrap_err();
    assert!(matches!(
        err,
        AppError::MissingEnvVar("LEVERADE_CLIENT_SECRET")
    ));

    unsafe {
        for var in CREDENTIAL_VARS {
            env::remove_var(var);
        }
    }
}

#[test]
fn credentials_roundtrip_through_serde() {
    let credentials = Credentials {
        client_id: String::from("client-1"),
        client_secret: String::from("secret-1"),
        user_id: String::from("4242"),
        user_email: String::from("admin@example.org"),
        user_password: String::from("hunter2"),
    };

    let json = serde_json::to_string(&credentials).unwrap();
    let deserialized: Credentials = serde_json::from_str(&json).unwrap();

    assert_eq!(credentials.client_id, deserialized.client_id);
    assert_eq!(credentials.user_email, deserialized.user_email);
}

#[test]
fn rest_api_config_clone() {
    let config = RestApiConfig {
        login_url: String::from("https://accounts.example.com/login"),
        authorization_url: String::from("https://accounts.example.com/oauth/authorize"),
        token_url: String::from("https://api.example.com/oauth/token"),
        base_url: String::from("https://api.example.com"),
        redirect_uri: String::from("https://example.org"),
    };

    let cloned = config.clone();
    assert_eq!(config.login_url, cloned.login_url);
    assert_eq!(config.base_url, cloned.base_url);
}
