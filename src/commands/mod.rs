//! CLI command handlers.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `run` | Sanitize a report and write the clean copy |
//! | `inspect` | List a report's columns with sample values |

mod inspect;
mod interactive;
mod run;

pub use inspect::{ColumnInfo, InspectOutputFormat, cmd_inspect};
pub use run::{RunArgs, cmd_run};
