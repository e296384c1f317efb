//! Value Collector.
//!
//! Read-only pass over one column that yields the distinct values needing
//! replacement, in first-encounter order. First-encounter order matters:
//! the assigner draws pool numbers in this order, so it must be stable for
//! a given table.

use crate::models::Table;
use std::collections::HashSet;

/// Collects the distinct non-empty values of one column.
///
/// Empty cells mean "no value" and are skipped; an empty column (or a
/// zero-row table) yields an empty set.
#[must_use]
pub fn collect_distinct(table: &Table, column_index: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for cell in table.column(column_index) {
        if cell.is_empty() {
            continue;
        }
        if seen.insert(cell.to_string()) {
            distinct.push(cell.to_string());
        }
    }
    distinct
}
