//! Column selection rules.

use crate::{Error, Result};
use serde::Deserialize;

/// Selects one column for sanitization and names its placeholder prefix.
///
/// Values in the selected column become `<prefix>_<NNN>` labels, e.g. a
/// rule `{ column: "Vendor Name", prefix: "Vendor" }` turns "Acme Corp"
/// into something like `Vendor_047`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnRule {
    /// Name of the table column to sanitize. Must match exactly.
    pub column: String,
    /// Label word prepended to the placeholder number.
    pub prefix: String,
}

impl ColumnRule {
    /// Creates a rule from a column name and prefix.
    #[must_use]
    pub fn new(column: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            prefix: prefix.into(),
        }
    }

    /// Parses a `NAME=PREFIX` argument as passed on the command line.
    ///
    /// The column name may contain `=` only if escaped by being on the
    /// prefix side; the split happens at the last `=` so column names with
    /// embedded equals signs still work.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the argument has no `=`, or
    /// either side is empty.
    pub fn parse(arg: &str) -> Result<Self> {
        let (column, prefix) = arg.rsplit_once('=').ok_or_else(|| {
            Error::InvalidInput(format!(
                "column rule '{arg}' must look like 'Column Name=Prefix'"
            ))
        })?;

        let column = column.trim();
        let prefix = prefix.trim();
        if column.is_empty() || prefix.is_empty() {
            return Err(Error::InvalidInput(format!(
                "column rule '{arg}' has an empty column name or prefix"
            )));
        }

        Ok(Self {
            column: column.to_string(),
            prefix: tidy_prefix(prefix),
        })
    }
}

/// Normalizes an operator-entered prefix word.
///
/// Spaces become underscores and each underscore-separated segment is
/// title-cased, so "sub contractor" becomes `Sub_Contractor`.
#[must_use]
pub fn tidy_prefix(raw: &str) -> String {
    raw.trim()
        .replace(' ', "_")
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join("_")
}
