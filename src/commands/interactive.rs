//! Interactive column selection.
//!
//! Walks the operator through picking the columns to hide and a placeholder
//! prefix for each, then asks for confirmation. Reads and writes go through
//! generic streams so the walkthrough is testable without a terminal.

use crate::models::{ColumnRule, Table, tidy_prefix};
use crate::{Error, Result};
use std::io::{BufRead, Write};

const MAX_SAMPLE_LEN: usize = 30;

/// Runs the selection walkthrough.
///
/// Returns `Ok(None)` if the operator entered `none` or declined the final
/// confirmation.
///
/// # Errors
///
/// Returns an error if reading or writing the streams fails.
pub fn select_rules<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    table: &Table,
) -> Result<Option<Vec<ColumnRule>>> {
    print_columns(out, table)?;

    let Some(selected) = prompt_column_numbers(input, out, table)? else {
        writeln!(out, "\nNo columns selected. Your file will not be changed.").map_err(io_err)?;
        return Ok(None);
    };

    let mut rules = Vec::with_capacity(selected.len());
    for &index in &selected {
        let name = &table.headers()[index];
        let prefix = prompt_prefix(input, out, name)?;
        writeln!(
            out,
            "  Got it! Values in '{name}' will become {prefix}_XXX (random numbers)"
        )
        .map_err(io_err)?;
        rules.push(ColumnRule::new(name.clone(), prefix));
    }

    if confirm(input, out, table, &rules)? {
        Ok(Some(rules))
    } else {
        writeln!(out, "\nCancelled. No changes made.").map_err(io_err)?;
        Ok(None)
    }
}

/// Shows the numbered column list with an example value per column.
fn print_columns<W: Write>(out: &mut W, table: &Table) -> Result<()> {
    writeln!(out, "Your file has these columns:\n").map_err(io_err)?;
    for (i, name) in table.headers().iter().enumerate() {
        let sample = table.sample_value(i).unwrap_or("(empty)");
        writeln!(out, "  {}. {name}", i + 1).map_err(io_err)?;
        writeln!(out, "      Example value: {}", truncate(sample)).map_err(io_err)?;
    }
    Ok(())
}

/// Prompts for comma-separated column numbers until the answer is valid.
fn prompt_column_numbers<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    table: &Table,
) -> Result<Option<Vec<usize>>> {
    let count = table.headers().len();
    loop {
        write!(out, "\nColumn numbers to hide (or 'none' to skip): ").map_err(io_err)?;
        out.flush().map_err(io_err)?;

        let line = read_line(input)?;
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("none") {
            return Ok(None);
        }

        match parse_numbers(answer, count) {
            Ok(indexes) if !indexes.is_empty() => return Ok(Some(indexes)),
            Ok(_) | Err(_) => {
                writeln!(
                    out,
                    "  Please enter numbers between 1 and {count}, separated by commas (e.g., 1, 3, 5)"
                )
                .map_err(io_err)?;
            },
        }
    }
}

/// Parses `1, 3, 5` into zero-based column indexes.
fn parse_numbers(answer: &str, count: usize) -> std::result::Result<Vec<usize>, ()> {
    let mut indexes = Vec::new();
    for part in answer.split(',') {
        let n: usize = part.trim().parse().map_err(|_| ())?;
        if !(1..=count).contains(&n) {
            return Err(());
        }
        let index = n - 1;
        if !indexes.contains(&index) {
            indexes.push(index);
        }
    }
    Ok(indexes)
}

/// Prompts for a non-empty placeholder prefix.
fn prompt_prefix<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    column: &str,
) -> Result<String> {
    loop {
        write!(
            out,
            "\nWhat prefix should I use for '{column}'? (e.g., Vendor, Program): "
        )
        .map_err(io_err)?;
        out.flush().map_err(io_err)?;

        let line = read_line(input)?;
        let tidy = tidy_prefix(line.trim());
        if tidy.is_empty() {
            writeln!(out, "  Please enter a prefix (like 'Vendor' or 'Program')")
                .map_err(io_err)?;
        } else {
            return Ok(tidy);
        }
    }
}

/// Shows the plan and asks a yes/no question.
fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    table: &Table,
    rules: &[ColumnRule],
) -> Result<bool> {
    writeln!(out, "\nHere's what I'm about to do:\n").map_err(io_err)?;
    writeln!(out, "  Rows: {}", table.row_count()).map_err(io_err)?;
    writeln!(out, "  Columns to hide:").map_err(io_err)?;
    for rule in rules {
        writeln!(out, "    '{}' -> {}_XXX (random numbers)", rule.column, rule.prefix)
            .map_err(io_err)?;
    }
    writeln!(out, "  Columns that will stay the same:").map_err(io_err)?;
    for name in table.headers() {
        if !rules.iter().any(|r| &r.column == name) {
            writeln!(out, "    '{name}'").map_err(io_err)?;
        }
    }

    loop {
        write!(out, "\nDoes this look right? (y/n): ").map_err(io_err)?;
        out.flush().map_err(io_err)?;
        match read_line(input)?.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                writeln!(out, "Please enter 'y' for yes or 'n' for no.").map_err(io_err)?;
            },
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(io_err)?;
    if read == 0 {
        return Err(Error::InvalidInput(
            "input ended before the walkthrough finished".to_string(),
        ));
    }
    Ok(line)
}

fn truncate(sample: &str) -> String {
    if sample.chars().count() > MAX_SAMPLE_LEN {
        let head: String = sample.chars().take(MAX_SAMPLE_LEN - 3).collect();
        format!("{head}...")
    } else {
        sample.to_string()
    }
}

fn io_err(e: std::io::Error) -> Error {
    Error::OperationFailed {
        operation: "interactive_prompt".to_string(),
        cause: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table() -> Table {
        Table::new(
            vec!["Vendor Name".to_string(), "Amount".to_string()],
            vec![vec!["Acme Corp".to_string(), "1200".to_string()]],
        )
    }

    fn run_walkthrough(answers: &str) -> (Result<Option<Vec<ColumnRule>>>, String) {
        let mut input = Cursor::new(answers.to_string());
        let mut out = Vec::new();
        let result = select_rules(&mut input, &mut out, &table());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_walkthrough() {
        let (result, transcript) = run_walkthrough("1\nvendor\ny\n");
        let rules = result.unwrap().unwrap();
        assert_eq!(rules, vec![ColumnRule::new("Vendor Name", "Vendor")]);
        assert!(transcript.contains("Example value: Acme Corp"));
        assert!(transcript.contains("'Amount'"), "unselected column listed");
    }

    #[test]
    fn test_none_skips() {
        let (result, _) = run_walkthrough("none\n");
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_declined_confirmation() {
        let (result, transcript) = run_walkthrough("1\nVendor\nn\n");
        assert!(result.unwrap().is_none());
        assert!(transcript.contains("Cancelled"));
    }

    #[test]
    fn test_invalid_numbers_reprompt() {
        let (result, transcript) = run_walkthrough("99\n1,2\nVendor\nAmount\ny\n");
        let rules = result.unwrap().unwrap();
        assert_eq!(rules.len(), 2);
        assert!(transcript.contains("between 1 and 2"));
    }

    #[test]
    fn test_prefix_is_tidied() {
        let (result, _) = run_walkthrough("1\nsub contractor\ny\n");
        let rules = result.unwrap().unwrap();
        assert_eq!(rules[0].prefix, "Sub_Contractor");
    }

    #[test]
    fn test_eof_is_an_error() {
        let (result, _) = run_walkthrough("1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_numbers_dedupes() {
        assert_eq!(parse_numbers("1, 1, 2", 3).unwrap(), vec![0, 1]);
        assert!(parse_numbers("0", 3).is_err());
        assert!(parse_numbers("a", 3).is_err());
    }
}
