// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Track and Trace export
//!
//! Export licenses, packages, transfers, manifest PDFs and lab result
//! (COA) PDFs from the Track and Trace Tools API to local files.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tracktrace::api::TrackTraceApi;
//! use tracktrace::auth::Authenticator;
//! use tracktrace::http::{HttpClient, HttpClientConfig};
//! use tracktrace::output::{write_csv, OutputLayout};
//! use tracktrace::{Credentials, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://api.trackandtrace.tools")
//!         .build();
//!     let http = HttpClient::with_config(config)?;
//!     let creds = Credentials::new("ca.metrc.com", "jdoe", "secret");
//!     let token = Authenticator::new(&http).authenticate(&creds).await?;
//!
//!     let api = TrackTraceApi::new(http.with_token(token), 500);
//!     let licenses = api.licenses().await?;
//!     write_csv(&licenses, OutputLayout::new("output").licenses_csv("20240307"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Workflows                              │
//! │  licenses  packages  transfers  manifests  coas (resolve chain) │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   Auth   │   HTTP    │   Paginate    │    API    │   Output    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Password │ GET/POST  │ Page Number   │ Endpoints │ CSV         │
//! │ + OTP    │ Bearer    │ Stop on empty │ Filters   │ PDF bytes   │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and record views
pub mod types;

/// Settings loaded from YAML, environment and flags
pub mod config;

/// HTTP client
pub mod http;

/// Credential login
pub mod auth;

/// Page-number pagination
pub mod pagination;

/// Track and Trace endpoints
pub mod api;

/// Transfer to lab result document resolution
pub mod resolve;

/// CSV and binary file output
pub mod output;

/// Interactive prompts
pub mod prompt;

/// Export workflows
pub mod workflows;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
