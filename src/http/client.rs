//! HTTP client for the Track and Trace API
//!
//! A thin wrapper over reqwest that handles:
//! - Joining endpoint paths onto the configured base URL
//! - Attaching the bearer token to every request once authenticated
//! - Turning non-2xx responses into [`Error::HttpStatus`]
//!
//! Requests are sent one at a time and never retried.

use crate::config::DEFAULT_BASE_URL;
use crate::error::{Error, Result};
use crate::types::AccessToken;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("tracktrace/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, sent in insertion order
    pub query: Vec<(String, String)>,
    /// Request body (JSON)
    pub body: Option<Value>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter, replacing an earlier value for the same key
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.query.push((key, value)),
        }
        self
    }

    /// Add several query parameters
    #[must_use]
    pub fn queries<I, K, V>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        params
            .into_iter()
            .fold(self, |config, (k, v)| config.query(k, v))
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP client bound to one API base URL
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    token: Option<AccessToken>,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            token: None,
        })
    }

    /// Attach a bearer token to all subsequent requests
    #[must_use]
    pub fn with_token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Send a request without checking the response status.
    ///
    /// Callers that need their own error for non-2xx responses (login) use
    /// this; everything else goes through [`HttpClient::request`].
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let url = self.build_url(endpoint)?;

        let mut req = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token.as_str());
        }

        debug!(%method, endpoint, query = ?config.query, "Sending request");
        Ok(req.send().await?)
    }

    /// Send a request and fail on any non-2xx response
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let response = self.send(method, endpoint, config).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), endpoint, "Request failed");
            return Err(Error::http_status(status.as_u16(), endpoint, body));
        }

        Ok(response)
    }

    /// Make a GET request with config and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.request(Method::GET, endpoint, config).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Make a GET request and return the raw body (PDF downloads)
    pub async fn get_bytes(&self, endpoint: &str, config: RequestConfig) -> Result<Vec<u8>> {
        let response = self.request(Method::GET, endpoint, config).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Join an endpoint path onto the base URL
    fn build_url(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}
