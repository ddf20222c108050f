//! Track and Trace API
//!
//! One method per endpoint the export workflows use. Paginated endpoints
//! (active packages, outgoing transfers) go through
//! [`crate::pagination::fetch_all_pages`]; the rest are single GETs.

mod client;

pub use client::{endpoints, TrackTraceApi};
