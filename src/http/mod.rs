//! HTTP client module
//!
//! Provides the bearer-authenticated HTTP client used by every workflow.
//!
//! # Features
//!
//! - **Base URL joining**: endpoints are given as paths like `/v2/licenses`
//! - **Bearer auth**: the access token is attached once login succeeds
//! - **Status mapping**: any non-2xx response becomes `Error::HttpStatus`

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
