//! Tests for the auth module

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::Credentials;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::with_config(HttpClientConfig::builder().base_url(server.uri()).build()).unwrap()
}

#[tokio::test]
async fn test_authenticate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/auth/credentials"))
        .and(body_json(serde_json::json!({
            "hostname": "ca.metrc.com",
            "username": "user",
            "password": "pass"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": "token-abc"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let creds = Credentials::new("ca.metrc.com", "user", "pass");
    let token = Authenticator::new(&client)
        .authenticate(&creds)
        .await
        .unwrap();

    assert_eq!(token.as_str(), "token-abc");
}

#[tokio::test]
async fn test_authenticate_sends_otp_when_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/auth/credentials"))
        .and(body_json(serde_json::json!({
            "hostname": "mi.metrc.com",
            "username": "user",
            "password": "pass",
            "otp": "654321"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": "otp-token"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let creds =
        Credentials::new("mi.metrc.com", "user", "pass").with_otp(Some("654321".to_string()));
    let token = Authenticator::new(&client)
        .authenticate(&creds)
        .await
        .unwrap();

    assert_eq!(token.as_str(), "otp-token");
}

#[tokio::test]
async fn test_authenticate_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/auth/credentials"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let creds = Credentials::new("ca.metrc.com", "user", "wrong");
    let err = Authenticator::new(&client)
        .authenticate(&creds)
        .await
        .unwrap_err();

    match err {
        Error::Auth { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Invalid credentials");
        }
        other => panic!("Expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_authenticate_missing_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/auth/credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": ""
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let creds = Credentials::new("ca.metrc.com", "user", "pass");
    let err = Authenticator::new(&client)
        .authenticate(&creds)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Auth { status: 200, .. }));
}
