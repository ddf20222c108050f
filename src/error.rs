//! Error types for tracktrace
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every error is fatal to the current run; there is no retry and no
//! distinction between transient and permanent failures.

use thiserror::Error;

/// The main error type for tracktrace
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed with status {status}: {body}")]
    Auth { status: u16, body: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {endpoint}: {body}")]
    HttpStatus {
        status: u16,
        endpoint: String,
        body: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Input / Lookup Errors
    // ============================================================================
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an auth error from the status and body of the failed login
    pub fn auth(status: u16, body: impl Into<String>) -> Self {
        Self::Auth {
            status,
            body: body.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, endpoint: impl Into<String>, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            endpoint: endpoint.into(),
            body: body.into(),
        }
    }

    /// Create a validation error for bad user input
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Short label printed in front of the message at the top level
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config { .. } | Error::YamlParse(_) => "Configuration error",
            Error::Auth { .. } => "Authentication error",
            Error::Http(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_) => {
                "HTTP error occurred"
            }
            Error::JsonParse(_) => "Unexpected response",
            Error::Validation { .. } => "Invalid input",
            Error::NotFound { .. } => "Not found",
            Error::Csv(_) | Error::Io(_) => "Output error",
            Error::Other(_) => "An error occurred",
        }
    }
}

/// Result type alias for tracktrace
pub type Result<T> = std::result::Result<T, Error>;
