//! Deterministic output paths
//!
//! Layout under the output root:
//!
//! - `licenses_{YYYYMMDD}.csv`
//! - `packages_{YYYYMMDD}.csv`
//! - `transfers_{YYYYMMDD}.csv`
//! - `manifests/{licenseNumber}/{manifestNumber}.pdf`
//! - `coa_{documentId}.pdf`

use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Format a date as `YYYYMMDD`
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Today's date stamp in local time
pub fn today_stamp() -> String {
    date_stamp(Local::now().date_naive())
}

/// Keep a remote identifier from escaping its directory
fn sanitize_component(value: &str) -> String {
    let component = value.replace(['/', '\\'], "_");
    match component.as_str() {
        "" | "." | ".." => "_".repeat(component.len().max(1)),
        _ => component,
    }
}

/// Paths for every file a run can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn licenses_csv(&self, stamp: &str) -> PathBuf {
        self.root.join(format!("licenses_{stamp}.csv"))
    }

    pub fn packages_csv(&self, stamp: &str) -> PathBuf {
        self.root.join(format!("packages_{stamp}.csv"))
    }

    pub fn transfers_csv(&self, stamp: &str) -> PathBuf {
        self.root.join(format!("transfers_{stamp}.csv"))
    }

    pub fn manifest_pdf(&self, license_number: &str, manifest_number: &str) -> PathBuf {
        self.root
            .join("manifests")
            .join(sanitize_component(license_number))
            .join(format!("{}.pdf", sanitize_component(manifest_number)))
    }

    pub fn coa_pdf(&self, document_id: &str) -> PathBuf {
        self.root
            .join(format!("coa_{}.pdf", sanitize_component(document_id)))
    }
}
