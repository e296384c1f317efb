//! Inspect command handler.

use crate::config::PseudobankConfig;
use crate::engine::collect_distinct;
use crate::{Error, Result, io};
use serde::Serialize;
use std::path::Path;

/// Output format for the inspect command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectOutputFormat {
    /// Human-readable column listing.
    #[default]
    Table,
    /// JSON array of column descriptions.
    Json,
}

impl InspectOutputFormat {
    /// Parses a format string, defaulting to table.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Description of one column, as shown to the operator.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    /// 1-based column number, as used by the interactive walkthrough.
    pub number: usize,
    /// Column name.
    pub name: String,
    /// First non-empty value, if any.
    pub sample: Option<String>,
    /// How many distinct non-empty values the column holds.
    pub distinct_values: usize,
}

/// Executes the inspect command: list columns with sample values and
/// distinct-value counts so the operator can decide what to hide.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or JSON serialization
/// fails.
pub fn cmd_inspect(
    config: &PseudobankConfig,
    input: &Path,
    format: InspectOutputFormat,
) -> Result<()> {
    let path = config.resolve_input(input);
    let table = io::load_table(&path)?;
    let columns = describe_columns(&table);

    match format {
        InspectOutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&columns).map_err(|e| Error::OperationFailed {
                    operation: "serialize_columns".to_string(),
                    cause: e.to_string(),
                })?;
            println!("{json}");
        },
        InspectOutputFormat::Table => {
            println!("{} ({} rows)", path.display(), table.row_count());
            println!();
            for info in &columns {
                println!("  {}. {}", info.number, info.name);
                println!(
                    "      Example value: {}",
                    info.sample.as_deref().unwrap_or("(empty)")
                );
                println!("      Distinct values: {}", info.distinct_values);
            }
        },
    }
    Ok(())
}

/// Builds the per-column descriptions.
#[must_use]
pub fn describe_columns(table: &crate::models::Table) -> Vec<ColumnInfo> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(i, name)| ColumnInfo {
            number: i + 1,
            name: name.clone(),
            sample: table.sample_value(i).map(String::from),
            distinct_values: collect_distinct(table, i).len(),
        })
        .collect()
}
