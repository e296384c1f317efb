//! Placeholder Assigner.
//!
//! Draws placeholder numbers without replacement from a freshly shuffled
//! 001-999 pool, formats them as `<Prefix>_<NNN>` labels, and rewrites the
//! column. The shuffle uses the thread-local RNG; statistical uniformity is
//! all that is required here, the threat model is a human spotting
//! sequential patterns, not cryptanalysis.

use crate::engine::collector::collect_distinct;
use crate::models::Table;
use rand::seq::SliceRandom as _;
use std::collections::HashMap;

/// What the assigner reports back. The mapping itself stays inside
/// [`pseudonymize_column`].
pub(crate) struct ColumnOutcome {
    pub distinct_values: usize,
    pub overflowed: bool,
}

/// A pool of placeholder numbers drawn without replacement.
///
/// Numbers 1-999 come from a shuffled range; once those are exhausted the
/// pool hands out 1000, 1001, ... sequentially. Labels switch from
/// zero-padded to unpadded at that point, which is a known rough edge kept
/// for compatibility with existing consumers.
struct NumberPool {
    shuffled: Vec<u16>,
    next: usize,
    overflow_next: u32,
}

impl NumberPool {
    fn new() -> Self {
        let mut shuffled: Vec<u16> = (1..=999).collect();
        shuffled.shuffle(&mut rand::rng());
        Self {
            shuffled,
            next: 0,
            overflow_next: 1000,
        }
    }

    /// Formats the next drawn number as a label.
    fn next_label(&mut self, prefix: &str) -> String {
        if let Some(&number) = self.shuffled.get(self.next) {
            self.next += 1;
            format!("{prefix}_{number:03}")
        } else {
            let number = self.overflow_next;
            self.overflow_next += 1;
            format!("{prefix}_{number}")
        }
    }

    const fn overflowed(&self) -> bool {
        self.overflow_next > 1000
    }
}

/// Replaces every non-empty cell of one column with its placeholder.
///
/// Builds the value-to-label mapping as a local, applies it, and lets it
/// drop: nothing that could reverse the substitution escapes this function
/// or survives the run.
pub(crate) fn pseudonymize_column(
    table: &mut Table,
    index: usize,
    prefix: &str,
) -> ColumnOutcome {
    let distinct = collect_distinct(table, index);

    let mut pool = NumberPool::new();
    let mut mapping: HashMap<String, String> = HashMap::with_capacity(distinct.len());
    for value in distinct {
        let label = pool.next_label(prefix);
        mapping.insert(value, label);
    }

    if pool.overflowed() {
        tracing::info!(
            column_index = index,
            distinct = mapping.len(),
            "more than 999 distinct values; labels beyond 999 are unpadded"
        );
    }

    for row in table.rows_mut() {
        if let Some(cell) = row.get_mut(index) {
            if let Some(label) = mapping.get(cell.as_str()) {
                label.clone_into(cell);
            }
        }
    }

    ColumnOutcome {
        distinct_values: mapping.len(),
        overflowed: pool.overflowed(),
    }
}
