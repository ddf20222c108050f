//! Run configuration
//!
//! Settings are resolved once at startup and passed explicitly to each
//! component. Layering, lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. Optional YAML file (`--config`)
//! 3. Environment variables and command-line flags (see [`Overrides`])

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.trackandtrace.tools";

/// Default number of records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL for all API requests
    pub base_url: String,

    /// Metrc hostname the credentials belong to (e.g. "ca.metrc.com")
    pub hostname: String,

    /// Metrc username
    pub username: String,

    /// Root directory for CSV and PDF output
    pub output_dir: PathBuf,

    /// Records per page for paginated endpoints
    pub page_size: u32,

    /// Hostnames that require a one-time password at login
    pub otp_hostnames: Vec<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            hostname: String::new(),
            username: String::new(),
            output_dir: PathBuf::from("output"),
            page_size: DEFAULT_PAGE_SIZE,
            otp_hostnames: vec!["mi.metrc.com".to_string()],
            timeout_secs: 30,
            user_agent: format!("tracktrace/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub hostname: Option<String>,
    pub username: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub page_size: Option<u32>,
}

impl Settings {
    /// Parse settings from a YAML string. Missing keys keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Resolve settings from an optional file plus overrides
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let settings = settings.apply(overrides);
        settings.validate()?;
        Ok(settings)
    }

    /// Apply overrides on top of these settings
    #[must_use]
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(hostname) = overrides.hostname {
            self.hostname = hostname;
        }
        if let Some(username) = overrides.username {
            self.username = username;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        self
    }

    /// Check that the settings are usable for a run
    pub fn validate(&self) -> Result<()> {
        if self.hostname.trim().is_empty() {
            return Err(Error::config(
                "hostname is not set (use --hostname or TRACKTRACE_HOSTNAME)",
            ));
        }
        if self.username.trim().is_empty() {
            return Err(Error::config(
                "username is not set (use --username or TRACKTRACE_USERNAME)",
            ));
        }
        if self.page_size == 0 {
            return Err(Error::config("page_size must be at least 1"));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("Invalid base_url '{}': {e}", self.base_url)))?;
        Ok(())
    }

    /// Whether the configured hostname requires a one-time password
    pub fn requires_otp(&self) -> bool {
        self.otp_hostnames
            .iter()
            .any(|h| h.eq_ignore_ascii_case(self.hostname.trim()))
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
