//! Run command handler.

use crate::commands::interactive;
use crate::config::PseudobankConfig;
use crate::models::ColumnRule;
use crate::{Error, Result, engine, io};
use std::path::PathBuf;

/// Arguments for the run command.
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Input file to sanitize.
    pub input: PathBuf,
    /// Explicit output path; defaults to `<output_dir>/<prefix><name>`.
    pub output: Option<PathBuf>,
    /// Column rules from `--column NAME=PREFIX` arguments.
    pub rules: Vec<ColumnRule>,
    /// Skip the interactive walkthrough and confirmation.
    pub assume_yes: bool,
}

/// Executes the run command: load, select columns, sanitize, save.
///
/// Column rules come from the command line, or the config file, or the
/// interactive walkthrough, in that order of preference. The input file is
/// never modified; the sanitized copy is written atomically, so a failed
/// run leaves no partial output behind.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, a rule names a missing
/// column, no rules are available in `--yes` mode, or the save fails.
pub fn cmd_run(config: &PseudobankConfig, args: RunArgs) -> Result<()> {
    let input = config.resolve_input(&args.input);
    let mut table = io::load_table(&input)?;
    println!("Loaded: {}", input.display());
    println!("Found {} rows of data", table.row_count());

    let Some(rules) = resolve_rules(config, &args, &table)? else {
        return Ok(());
    };

    let summary = engine::sanitize(&mut table, &rules)?;

    let output = args
        .output
        .unwrap_or_else(|| config.output_path_for(&input));
    io::save_table(&output, &table)?;

    println!();
    println!("Sanitization completed:");
    for column in &summary.columns {
        let note = if column.overflowed {
            " (over 999 values; labels beyond 999 are unpadded)"
        } else {
            ""
        };
        println!(
            "  Replaced {} unique values in '{}' with random {}_XXX{note}",
            column.distinct_values, column.column, column.prefix
        );
    }
    println!();
    println!("Your clean file is ready: {}", output.display());
    println!("Each run assigns fresh random numbers, so labels differ next time.");

    Ok(())
}

/// Picks the column rules for this run.
///
/// Returns `Ok(None)` when the operator cancelled the walkthrough.
fn resolve_rules(
    config: &PseudobankConfig,
    args: &RunArgs,
    table: &crate::models::Table,
) -> Result<Option<Vec<ColumnRule>>> {
    if !args.rules.is_empty() {
        return Ok(Some(args.rules.clone()));
    }
    if !config.columns.is_empty() {
        tracing::debug!(rules = config.columns.len(), "using column rules from config");
        return Ok(Some(config.columns.clone()));
    }
    if args.assume_yes {
        return Err(Error::InvalidInput(
            "no column rules given; pass --column 'NAME=PREFIX' or configure [[columns]]"
                .to_string(),
        ));
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    interactive::select_rules(&mut input, &mut out, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_table;

    fn write_report(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("report.csv");
        std::fs::write(&path, "Vendor Name,Amount\nAcme Corp,1200\nAcme Corp,880\n").unwrap();
        path
    }

    fn config_for(dir: &std::path::Path) -> PseudobankConfig {
        PseudobankConfig {
            input_dir: dir.to_path_buf(),
            output_dir: dir.join("output"),
            ..PseudobankConfig::default()
        }
    }

    #[test]
    fn test_run_writes_clean_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_report(dir.path());
        let config = config_for(dir.path());

        cmd_run(
            &config,
            RunArgs {
                input: input.clone(),
                output: None,
                rules: vec![ColumnRule::new("Vendor Name", "Vendor")],
                assume_yes: true,
            },
        )
        .unwrap();

        let output = dir.path().join("output/CLEAN_report.csv");
        let clean = load_table(&output).unwrap();
        assert_eq!(clean.row_count(), 2);
        assert!(clean.rows()[0][0].starts_with("Vendor_"));
        assert_eq!(clean.rows()[0][0], clean.rows()[1][0]);
        assert_eq!(clean.rows()[0][1], "1200", "amount column untouched");

        // The input file itself is never modified.
        let original = load_table(&input).unwrap();
        assert_eq!(original.rows()[0][0], "Acme Corp");
    }

    #[test]
    fn test_run_missing_column_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_report(dir.path());
        let config = config_for(dir.path());

        let err = cmd_run(
            &config,
            RunArgs {
                input,
                output: None,
                rules: vec![ColumnRule::new("Nope", "X")],
                assume_yes: true,
            },
        )
        .unwrap_err();

        assert!(matches!(err, Error::ColumnNotFound { .. }));
        assert!(!dir.path().join("output/CLEAN_report.csv").exists());
    }

    #[test]
    fn test_run_yes_without_rules_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_report(dir.path());
        let config = config_for(dir.path());

        let err = cmd_run(
            &config,
            RunArgs {
                input,
                output: None,
                rules: vec![],
                assume_yes: true,
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_run_uses_config_rules() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_report(dir.path());
        let mut config = config_for(dir.path());
        config.columns = vec![ColumnRule::new("Vendor Name", "Org")];

        cmd_run(
            &config,
            RunArgs {
                input,
                output: Some(dir.path().join("custom.csv")),
                rules: vec![],
                assume_yes: true,
            },
        )
        .unwrap();

        let clean = load_table(&dir.path().join("custom.csv")).unwrap();
        assert!(clean.rows()[0][0].starts_with("Org_"));
    }

    #[test]
    fn test_run_zero_row_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.csv");
        std::fs::write(&input, "Vendor Name,Amount\n").unwrap();
        let config = config_for(dir.path());

        cmd_run(
            &config,
            RunArgs {
                input,
                output: None,
                rules: vec![ColumnRule::new("Vendor Name", "Vendor")],
                assume_yes: true,
            },
        )
        .unwrap();

        let clean = load_table(&dir.path().join("output/CLEAN_empty.csv")).unwrap();
        assert_eq!(clean.row_count(), 0);
        assert_eq!(clean.headers(), ["Vendor Name", "Amount"]);
    }
}
