//! Pagination module
//!
//! Page-number pagination that runs until an empty page is returned.
//!
//! # Overview
//!
//! [`PageNumberPaginator`] computes the query parameters for each page and
//! decides when to stop; [`fetch_all_pages`] drives it against an endpoint
//! and collects every record.

mod fetch;
mod paginator;
mod types;

pub use fetch::fetch_all_pages;
pub use paginator::PageNumberPaginator;
pub use types::{NextPage, PaginationState};
