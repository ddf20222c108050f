//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::AccessToken;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.base_url, "https://api.trackandtrace.tools");
    assert!(config.user_agent.starts_with("tracktrace/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.trackandtrace.tools")
        .timeout(Duration::from_secs(60))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://api.trackandtrace.tools");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("licenseNumber", "LIC-1")
        .query("page", "1")
        .query("page", "2")
        .json(serde_json::json!({"key": "value"}));

    assert_eq!(
        config.query,
        vec![
            ("licenseNumber".to_string(), "LIC-1".to_string()),
            ("page".to_string(), "2".to_string()),
        ]
    );
    assert!(config.body.is_some());
}

#[test]
fn test_request_config_queries() {
    let config = RequestConfig::new()
        .query("page", "1")
        .queries([("page", "2"), ("pageSize", "500")]);
    assert_eq!(
        config.query,
        vec![
            ("page".to_string(), "2".to_string()),
            ("pageSize".to_string(), "500".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_get_json_sends_bearer_and_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/licenses"))
        .and(header("Authorization", "Bearer tok-123"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"licenseNumber": "LIC-1"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).with_token(AccessToken::new("tok-123"));

    let data: serde_json::Value = client
        .get_json("/v2/licenses", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(data[0]["licenseNumber"], "LIC-1");
}

#[tokio::test]
async fn test_get_json_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/packages/active"))
        .and(query_param("licenseNumber", "LIC-1"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body: serde_json::Value = client
        .get_json(
            "/v2/packages/active",
            RequestConfig::new()
                .query("licenseNumber", "LIC-1")
                .query("page", "2"),
        )
        .await
        .unwrap();

    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_success_maps_to_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/licenses"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/v2/licenses", RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus {
            status,
            endpoint,
            body,
        } => {
            assert_eq!(status, 403);
            assert_eq!(endpoint, "/v2/licenses");
            assert_eq!(body, "Forbidden");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/licenses"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .get_json::<serde_json::Value>("/v2/licenses", RequestConfig::new())
        .await;

    assert!(matches!(
        result,
        Err(Error::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_get_bytes_returns_raw_body() {
    let mock_server = MockServer::start().await;
    let pdf = b"%PDF-1.4 fake".to_vec();

    Mock::given(method("GET"))
        .and(path("/v2/transfers/manifest"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf.clone()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client
        .get_bytes("/v2/transfers/manifest", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(bytes, pdf);
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/licenses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/v2/licenses", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/licenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let body: serde_json::Value = client
        .get_json("/v2/licenses", RequestConfig::new())
        .await
        .unwrap();
    assert!(body.is_array());
}

#[tokio::test]
async fn test_invalid_base_url() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client
        .get_bytes("/v2/licenses", RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_http_client_debug_hides_token() {
    let client = HttpClient::with_config(HttpClientConfig::default())
        .unwrap()
        .with_token(AccessToken::new("very-secret"));
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("has_token: true"));
    assert!(!debug_str.contains("very-secret"));
}
