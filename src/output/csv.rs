//! CSV writer for record lists
//!
//! Columns are taken from the first record, in that record's own field
//! order. Later records are written against the same header: a missing key
//! yields an empty cell and extra keys are dropped. In practice every record
//! from one endpoint has the same shape.

use crate::error::Result;
use crate::types::Record;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// What `write_csv` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvOutcome {
    /// The file was written with this many data rows
    Written { rows: usize },
    /// There were no records; nothing was written
    Skipped,
}

/// Convert a JSON value to its CSV cell text
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        // Nested values are kept as JSON text
        Some(other) => other.to_string(),
    }
}

/// Write records to `path` as CSV.
///
/// An empty slice writes nothing and touches no directories.
pub fn write_csv(records: &[Record], path: impl AsRef<Path>) -> Result<CsvOutcome> {
    let path = path.as_ref();
    let Some(first) = records.first() else {
        info!(path = %path.display(), "No records, skipping CSV");
        return Ok(CsvOutcome::Skipped);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&headers)?;

    for record in records {
        let row: Vec<String> = headers.iter().map(|h| cell(record.get(*h))).collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = records.len(), columns = headers.len(), "Wrote CSV");
    Ok(CsvOutcome::Written {
        rows: records.len(),
    })
}
