//! File loading and saving.
//!
//! The engine only ever sees an in-memory [`Table`]; this module is the
//! boundary that turns files into tables and back. Saving is all-or-nothing:
//! the sanitized table is written to a temp file in the destination
//! directory and renamed into place only once the full write succeeded, so
//! an interrupted run never leaves a partially sanitized file behind.

pub mod formats;

pub use formats::Format;

use crate::models::Table;
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads a table from a delimited file, detecting the format from the
/// extension.
///
/// # Errors
///
/// Returns an error if the extension is unrecognized, the file cannot be
/// opened, or parsing fails.
pub fn load_table(path: &Path) -> Result<Table> {
    let format = Format::from_path(path)?;
    let file = File::open(path).map_err(|e| Error::OperationFailed {
        operation: format!("open '{}'", path.display()),
        cause: e.to_string(),
    })?;
    let table = formats::delimited::read_table(BufReader::new(file), format)?;
    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.headers().len(),
        "table loaded"
    );
    Ok(table)
}

/// Saves a table to a delimited file atomically.
///
/// Writes to a temp file next to the destination and renames it into place,
/// creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the extension is unrecognized or any write, flush,
/// or rename fails.
pub fn save_table(path: &Path, table: &Table) -> Result<()> {
    let format = Format::from_path(path)?;

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent {
        std::fs::create_dir_all(dir).map_err(|e| Error::OperationFailed {
            operation: format!("create directory '{}'", dir.display()),
            cause: e.to_string(),
        })?;
    }

    // Temp file must live in the destination directory so the final rename
    // stays on one filesystem.
    let temp = tempfile::NamedTempFile::new_in(parent.unwrap_or_else(|| Path::new(".")))
        .map_err(|e| Error::OperationFailed {
            operation: "create temp file".to_string(),
            cause: e.to_string(),
        })?;

    formats::delimited::write_table(&temp, format, table)?;

    temp.persist(path).map_err(|e| Error::OperationFailed {
        operation: format!("persist '{}'", path.display()),
        cause: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), rows = table.row_count(), "table saved");
    Ok(())
}
