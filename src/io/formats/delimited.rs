//! Delimited table reader and writer built on the `csv` crate.
//!
//! The first record is always treated as headers. Records with a field
//! count different from the header width are accepted on read (the table
//! pads or truncates them) so slightly ragged exports still load.

use super::Format;
use crate::models::Table;
use crate::{Error, Result};
use std::io::{BufRead, Write};

/// Reads a whole table from a delimited stream.
///
/// # Errors
///
/// Returns an error if the headers or any record cannot be parsed.
pub fn read_table<R: BufRead>(reader: R, format: Format) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| Error::OperationFailed {
            operation: "read_headers".to_string(),
            cause: e.to_string(),
        })?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        let has_record = csv_reader
            .read_record(&mut record)
            .map_err(|e| Error::OperationFailed {
                operation: "read_record".to_string(),
                cause: e.to_string(),
            })?;
        if !has_record {
            break;
        }
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Writes a whole table to a delimited stream, headers first.
///
/// # Errors
///
/// Returns an error if any record fails to write or the flush fails.
pub fn write_table<W: Write>(writer: W, format: Format, table: &Table) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(table.headers())
        .map_err(|e| Error::OperationFailed {
            operation: "write_headers".to_string(),
            cause: e.to_string(),
        })?;

    for row in table.rows() {
        csv_writer
            .write_record(row)
            .map_err(|e| Error::OperationFailed {
                operation: "write_record".to_string(),
                cause: e.to_string(),
            })?;
    }

    csv_writer.flush().map_err(|e| Error::OperationFailed {
        operation: "flush".to_string(),
        cause: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_basic_csv() {
        let input = "Vendor Name,Amount\nAcme Corp,1200\nBoeing,880\n";
        let table = read_table(Cursor::new(input), Format::Csv).unwrap();

        assert_eq!(table.headers(), ["Vendor Name", "Amount"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], vec!["Acme Corp", "1200"]);
    }

    #[test]
    fn test_read_ragged_rows() {
        let input = "A,B,C\nx\ny,2,3,4\n";
        let table = read_table(Cursor::new(input), Format::Csv).unwrap();

        assert_eq!(table.rows()[0], vec!["x", "", ""]);
        assert_eq!(table.rows()[1], vec!["y", "2", "3"]);
    }

    #[test]
    fn test_read_tsv() {
        let input = "A\tB\n1\t2\n";
        let table = read_table(Cursor::new(input), Format::Tsv).unwrap();
        assert_eq!(table.rows()[0], vec!["1", "2"]);
    }

    #[test]
    fn test_write_quotes_when_needed() {
        let table = Table::new(
            vec!["Vendor Name".to_string()],
            vec![vec!["Acme, Inc".to_string()]],
        );
        let mut out = Vec::new();
        write_table(&mut out, Format::Csv, &table).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, "Vendor Name\n\"Acme, Inc\"\n");
    }

    #[test]
    fn test_roundtrip_preserves_structure() {
        let input = "A,B\n1,2\n,\n3,4\n";
        let table = read_table(Cursor::new(input), Format::Csv).unwrap();
        let mut out = Vec::new();
        write_table(&mut out, Format::Csv, &table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), input);
    }

    #[test]
    fn test_empty_file_headers_only() {
        let input = "A,B\n";
        let table = read_table(Cursor::new(input), Format::Csv).unwrap();
        assert_eq!(table.row_count(), 0);

        let mut out = Vec::new();
        write_table(&mut out, Format::Csv, &table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A,B\n");
    }
}
