//! CLI module
//!
//! Command-line interface for the export workflows.
//!
//! # Commands
//!
//! - `licenses` - Export all licenses to CSV
//! - `packages` - Export the active packages of a license to CSV
//! - `transfers` - Export the outgoing transfers of a license to CSV
//! - `manifests` - Download manifest PDFs for every license
//! - `coas` - Download the lab result PDFs of one transfer

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
