//! Authenticator implementation
//!
//! Exchanges credentials for a bearer token with a single POST. The token
//! is never refreshed; it lives for the rest of the run.

use super::types::{LoginRequest, LoginResponse, CREDENTIALS_ENDPOINT};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{AccessToken, Credentials};
use reqwest::Method;
use tracing::{debug, info};

/// Authenticator performs the credentials login against the API
pub struct Authenticator<'a> {
    /// HTTP client used for the login request
    http_client: &'a HttpClient,
}

impl<'a> Authenticator<'a> {
    /// Create an authenticator that logs in through the given client
    pub fn new(http_client: &'a HttpClient) -> Self {
        Self { http_client }
    }

    /// Exchange credentials for an access token.
    ///
    /// Whether an OTP is needed is decided by the caller; it is sent only
    /// when present on `credentials`.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken> {
        debug!(
            hostname = %credentials.hostname,
            username = %credentials.username,
            with_otp = credentials.otp.is_some(),
            "Requesting access token"
        );

        let body = serde_json::to_value(LoginRequest::from(credentials))?;
        let response = self
            .http_client
            .send(Method::POST, CREDENTIALS_ENDPOINT, RequestConfig::new().json(body))
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(status, body));
        }

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let login: LoginResponse = serde_json::from_slice(&bytes)?;

        let token = login
            .access_token
            .filter(|t| !t.as_str().is_empty())
            .ok_or_else(|| Error::auth(status, "Response did not contain an accessToken"))?;

        info!(hostname = %credentials.hostname, "Authenticated");
        Ok(token)
    }
}
