//! Supported delimited formats.

pub mod delimited;

use crate::{Error, Result};
use std::path::Path;
use std::str::FromStr;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl Format {
    /// Returns the field delimiter byte for this format.
    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
        }
    }

    /// Detects format from file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("csv" | "txt") => Ok(Self::Csv),
            Some("tsv" | "tab") => Ok(Self::Tsv),
            Some(ext) => Err(Error::InvalidInput(format!(
                "unsupported file extension: .{ext} (expected .csv or .tsv)"
            ))),
            None => Err(Error::InvalidInput(
                "cannot determine format: file has no extension".to_string(),
            )),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            other => Err(Error::InvalidInput(format!(
                "unknown format '{other}' (expected csv or tsv)"
            ))),
        }
    }
}
