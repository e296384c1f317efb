//! The pseudonymization engine.
//!
//! Two passes per selected column: the collector discovers the distinct
//! values needing replacement, the assigner gives each a collision-free
//! random placeholder and rewrites the column. The real-to-fake mapping is
//! a local inside [`assigner`] and is dropped when the call returns; only
//! counts come back out.

mod assigner;
mod collector;

pub use collector::collect_distinct;

use crate::models::{ColumnRule, Table};
use crate::{Error, Result};
use serde::Serialize;

/// Per-column outcome of a sanitization run.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// The sanitized column name.
    pub column: String,
    /// The placeholder prefix used.
    pub prefix: String,
    /// How many distinct values were replaced.
    pub distinct_values: usize,
    /// Whether the distinct count exceeded 999 and unpadded numbering
    /// kicked in.
    pub overflowed: bool,
}

/// Outcome of a full sanitization run.
///
/// This is everything the engine reports back; the value-to-label mapping
/// itself never leaves the engine.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizeSummary {
    /// Number of data rows processed.
    pub rows: usize,
    /// Per-column outcomes, in rule order.
    pub columns: Vec<ColumnSummary>,
}

/// Replaces the values of every selected column with placeholder labels.
///
/// All rules are validated against the table before anything is touched, so
/// a bad column name leaves the table unmodified. A zero-row table is a
/// successful no-op. Unselected columns, headers, row order, and row count
/// are untouched.
///
/// # Errors
///
/// Returns [`Error::ColumnNotFound`] if any rule names a column absent
/// from the table.
pub fn sanitize(table: &mut Table, rules: &[ColumnRule]) -> Result<SanitizeSummary> {
    // Resolve every column up front; a single miss aborts the whole run.
    let mut resolved = Vec::with_capacity(rules.len());
    for rule in rules {
        let index = table
            .column_index(&rule.column)
            .ok_or_else(|| Error::ColumnNotFound {
                column: rule.column.clone(),
            })?;
        resolved.push((rule, index));
    }

    if table.row_count() == 0 {
        tracing::info!("input table has no rows; nothing to sanitize");
        return Ok(SanitizeSummary {
            rows: 0,
            columns: rules
                .iter()
                .map(|rule| ColumnSummary {
                    column: rule.column.clone(),
                    prefix: rule.prefix.clone(),
                    distinct_values: 0,
                    overflowed: false,
                })
                .collect(),
        });
    }

    let mut columns = Vec::with_capacity(resolved.len());
    for (rule, index) in resolved {
        let outcome = assigner::pseudonymize_column(table, index, &rule.prefix);
        tracing::debug!(
            column = %rule.column,
            prefix = %rule.prefix,
            distinct = outcome.distinct_values,
            "column sanitized"
        );
        columns.push(ColumnSummary {
            column: rule.column.clone(),
            prefix: rule.prefix.clone(),
            distinct_values: outcome.distinct_values,
            overflowed: outcome.overflowed,
        });
    }

    Ok(SanitizeSummary {
        rows: table.row_count(),
        columns,
    })
}
