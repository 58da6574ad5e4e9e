//! Tests for the auth module

use super::*;
use base64::Engine;

fn built_headers(auth: &Authenticator) -> reqwest::header::HeaderMap {
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.cybozu.com/k/v1/records.json"));
    req.build().unwrap().headers().clone()
}

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    assert!(auth.headers().is_empty());
    let headers = built_headers(&auth);
    assert!(headers.get(API_TOKEN_HEADER).is_none());
    assert!(headers.get(PASSWORD_HEADER).is_none());
}

#[test]
fn test_single_api_token() {
    let auth = Authenticator::new(AuthConfig::api_token("token-1"));
    let headers = built_headers(&auth);
    assert_eq!(headers.get(API_TOKEN_HEADER).unwrap(), "token-1");
}

#[test]
fn test_multiple_api_tokens_are_comma_joined() {
    let auth = Authenticator::new(AuthConfig::ApiToken {
        tokens: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    });
    let headers = built_headers(&auth);
    assert_eq!(headers.get(API_TOKEN_HEADER).unwrap(), "a,b,c");
}

#[test]
fn test_password_auth() {
    let auth = Authenticator::new(AuthConfig::password("user", "secret"));
    let headers = built_headers(&auth);

    let value = headers.get(PASSWORD_HEADER).unwrap().to_str().unwrap();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(value)
        .unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "user:secret");
}

#[test]
fn test_basic_auth() {
    let auth = Authenticator::new(AuthConfig::Basic {
        username: "proxy".to_string(),
        password: "pw".to_string(),
    });
    let headers = built_headers(&auth);

    let value = headers.get("Authorization").unwrap().to_str().unwrap();
    assert!(value.starts_with("Basic "));
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(value.trim_start_matches("Basic "))
        .unwrap();
    assert_eq!(decoded, b"proxy:pw");
}
