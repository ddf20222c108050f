//! Login request and response shapes

use crate::types::{AccessToken, Credentials};
use serde::{Deserialize, Serialize};

/// Endpoint that exchanges credentials for a bearer token
pub const CREDENTIALS_ENDPOINT: &str = "/v2/auth/credentials";

/// Body of the credentials login. `otp` is omitted when not supplied.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub hostname: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<&'a str>,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(creds: &'a Credentials) -> Self {
        Self {
            hostname: &creds.hostname,
            username: &creds.username,
            password: &creds.password,
            otp: creds.otp.as_deref().filter(|otp| !otp.is_empty()),
        }
    }
}

/// Successful login response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: Option<AccessToken>,
}
