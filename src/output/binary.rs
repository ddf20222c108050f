//! Raw file writer for downloaded PDFs

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write `bytes` to `path`, creating parent directories.
///
/// An existing file at `path` is overwritten.
pub fn write_binary(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}
