//! Data model types.
//!
//! The in-memory [`Table`] that the engine transforms, and the
//! [`ColumnRule`] configuration that selects columns for sanitization.

mod rules;
mod table;

pub use rules::{ColumnRule, tidy_prefix};
pub use table::Table;
