//! Output module
//!
//! Handles writing fetched data to disk.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Writing JSON records as CSV with a header from the first record
//! - Writing downloaded PDFs
//! - Computing the date-stamped and license-scoped output paths

mod binary;
mod csv;
mod layout;

pub use self::csv::{write_csv, CsvOutcome};
pub use binary::write_binary;
pub use layout::{date_stamp, today_stamp, OutputLayout};
