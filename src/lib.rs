//! # Pseudobank
//!
//! Pseudonymize sensitive columns in tabular reports.
//!
//! Pseudobank produces a sanitized copy of a delimited report by replacing
//! the values of operator-selected columns with random placeholder labels
//! (`Vendor_047`, `Program_012`), leaving every other column, the headers,
//! and the row order untouched. The sanitized file can then be shared with
//! external tools without exposing the real names.
//!
//! ## Guarantees
//!
//! - Placeholders within a column never collide
//! - Repeated occurrences of one value get the same placeholder within a run
//! - Placeholder numbers are drawn from a shuffled pool, not a counter
//! - The real-to-fake mapping lives only inside the transformation call and
//!   is never persisted or returned
//! - Every run starts from a fresh mapping, so labels differ between runs
//!
//! ## Example
//!
//! ```rust
//! use pseudobank::engine::sanitize;
//! use pseudobank::models::{ColumnRule, Table};
//!
//! let mut table = Table::new(
//!     vec!["Vendor Name".into(), "Amount".into()],
//!     vec![
//!         vec!["Acme Corp".into(), "1200".into()],
//!         vec!["Acme Corp".into(), "880".into()],
//!     ],
//! );
//! let rules = vec![ColumnRule::new("Vendor Name", "Vendor")];
//! let summary = sanitize(&mut table, &rules)?;
//! assert_eq!(summary.columns[0].distinct_values, 1);
//! # Ok::<(), pseudobank::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod commands;
pub mod config;
pub mod engine;
pub mod io;
pub mod models;
pub mod observability;

// Re-exports for convenience
pub use config::PseudobankConfig;
pub use engine::{ColumnSummary, SanitizeSummary, sanitize};
pub use models::{ColumnRule, Table};

/// Error type for pseudobank operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `ColumnNotFound` | A selected column name is absent from the table |
/// | `InvalidInput` | Malformed column rule, unsupported file extension, bad config |
/// | `OperationFailed` | File I/O errors, CSV parse/write failures |
///
/// A zero-row table is deliberately NOT an error: sanitizing it is a
/// successful no-op that writes a headers-only output.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A selected column does not exist in the table.
    ///
    /// Fatal to the run. The table is left unmodified and no output is
    /// produced.
    #[error("column '{column}' not found in the input table")]
    ColumnNotFound {
        /// The missing column name.
        column: String,
    },

    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A `--column` rule is not of the form `NAME=PREFIX`
    /// - A file extension is not a recognized delimited format
    /// - The configuration file fails to parse
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The input file cannot be read or parsed as CSV/TSV
    /// - The sanitized output cannot be written
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for pseudobank operations.
pub type Result<T> = std::result::Result<T, Error>;
