//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::{Error, ErrorKind};
use crate::types::Method;
use serde_json::json;
use bytes::Bytes;
use std::time::Duration;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_regex, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .auth(AuthConfig::api_token("test-token"))
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_empty());
    assert!(config.guest_space_id.is_none());
    assert!(config.user_agent.starts_with("kintone-rest/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://example.cybozu.com")
        .guest_space(12)
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .auth(AuthConfig::password("u", "p"))
        .build();

    assert_eq!(config.base_url, "https://example.cybozu.com");
    assert_eq!(config.guest_space_id, Some(12));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert!(config.auth.is_configured());
}

#[test]
fn test_http_client_requires_base_url() {
    let err = HttpClient::with_config(HttpClientConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { ref field } if field == "base_url"));

    let config = HttpClientConfig::builder().base_url("not a url").build();
    assert!(matches!(
        HttpClient::with_config(config).unwrap_err(),
        Error::InvalidUrl(_)
    ));
}

#[test]
fn test_build_url() {
    let config = HttpClientConfig::builder()
        .base_url("https://example.cybozu.com/")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    assert_eq!(
        client.build_url("records"),
        "https://example.cybozu.com/k/v1/records.json"
    );
    assert_eq!(client.api_path("records/cursor"), "/k/v1/records/cursor.json");
}

#[test]
fn test_build_url_guest_space() {
    let config = HttpClientConfig::builder()
        .base_url("https://example.cybozu.com")
        .guest_space(123)
        .build();
    let client = HttpClient::with_config(config).unwrap();
    assert_eq!(
        client.build_url("records"),
        "https://example.cybozu.com/k/guest/123/v1/records.json"
    );
}

#[test]
fn test_http_client_debug_hides_credentials() {
    let config = HttpClientConfig::builder()
        .base_url("https://example.cybozu.com")
        .auth(AuthConfig::api_token("secret-token"))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(!debug.contains("secret-token"));
}

#[tokio::test]
async fn test_get_with_body_and_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .and(header("X-Cybozu-API-Token", "test-token"))
        .and(body_json(json!({"app": "1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .send(Method::GET, "records", Some(json!({"app": "1"})))
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"records": []}));
}

#[tokio::test]
async fn test_delete_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/k/v1/records/cursor.json"))
        .and(body_json(json!({"id": "c-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .send(Method::DELETE, "records/cursor", Some(json!({"id": "c-1"})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/k/v1/app.json"))
        .and(header("X-Custom", "custom-value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Custom", "custom-value")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    client.send(Method::GET, "app", None).await.unwrap();
}

#[tokio::test]
async fn test_structured_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "CB_VA01",
            "id": "1505999166-897850006",
            "message": "入力内容が正しくありません。",
            "errors": {"app": {"messages": ["必須です。"]}}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .send(Method::GET, "records", Some(json!({})))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    let api = err.api_error().expect("structured error");
    assert_eq!(api.status, 400);
    assert_eq!(api.code, "CB_VA01");
    assert_eq!(api.id, "1505999166-897850006");
    assert!(api.errors.contains_key("app"));
}

#[tokio::test]
async fn test_unstructured_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.send(Method::GET, "records", None).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failure_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.send(Method::GET, "records", None).await.is_err());
}

#[tokio::test]
async fn test_timeout_maps_to_timeout_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client.send(Method::GET, "records", None).await.unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[test]
fn test_error_from_response_falls_back_on_empty_object() {
    let err = client::error_from_response(500, b"{}");
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_upload_sends_multipart_file_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/k/v1/file.json"))
        .and(header("X-Cybozu-API-Token", "test-token"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="file"; filename="report.txt""#))
        .and(body_string_contains("quarterly numbers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fileKey": "fk-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .upload("file", "report.txt", Bytes::from_static(b"quarterly numbers"))
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"fileKey": "fk-1"}));
}

#[tokio::test]
async fn test_download_uses_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/k/guest/5/v1/file.json"))
        .and(query_param("fileKey", "fk-1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"\x00\x01binary".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .guest_space(5)
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let body = client.download("file", &[("fileKey", "fk-1")]).await.unwrap();

    assert_eq!(&body[..], b"\x00\x01binary");
}

#[tokio::test]
async fn test_download_error_is_structured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/k/v1/file.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "GAIA_BL01",
            "id": "err-1",
            "message": "指定したファイルが見つかりません。"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.download("file", &[("fileKey", "missing")]).await.unwrap_err();

    assert_eq!(err.api_error().unwrap().code, "GAIA_BL01");
    assert!(err.is_not_found());
}
