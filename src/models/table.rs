//! In-memory tabular data.

/// An ordered table of named columns.
///
/// Rows are stored as cell vectors aligned with `headers`; the column set
/// and order are fixed for the table's lifetime. An empty-string cell means
/// "no value" and is never substituted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, in file order.
    headers: Vec<String>,
    /// Row data; every row has exactly `headers.len()` cells.
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from headers and rows.
    ///
    /// Rows shorter than the header width are padded with empty cells;
    /// longer rows are truncated to it.
    #[must_use]
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { headers, rows }
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns mutable access to the rows.
    pub fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    /// Finds the index of a column by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterates over the cells of one column, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(move |row| {
            row.get(index).map(String::as_str)
        })
    }

    /// Returns the first non-empty value in a column, if any.
    ///
    /// Used for showing the operator an example of what a column holds.
    #[must_use]
    pub fn sample_value(&self, index: usize) -> Option<&str> {
        self.column(index).find(|cell| !cell.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor_table() -> Table {
        Table::new(
            vec!["Vendor Name".to_string(), "Amount".to_string()],
            vec![
                vec!["Acme Corp".to_string(), "1200".to_string()],
                vec!["Boeing".to_string(), "880".to_string()],
            ],
        )
    }

    #[test]
    fn test_column_index() {
        let table = vendor_table();
        assert_eq!(table.column_index("Vendor Name"), Some(0));
        assert_eq!(table.column_index("Amount"), Some(1));
        assert_eq!(table.column_index("Missing"), None);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = Table::new(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec![vec!["x".to_string()]],
        );
        assert_eq!(table.rows()[0], vec!["x", "", ""]);
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let table = Table::new(
            vec!["A".to_string()],
            vec![vec!["x".to_string(), "extra".to_string()]],
        );
        assert_eq!(table.rows()[0], vec!["x"]);
    }

    #[test]
    fn test_sample_value_skips_empty_cells() {
        let table = Table::new(
            vec!["A".to_string()],
            vec![
                vec![String::new()],
                vec!["first real value".to_string()],
            ],
        );
        assert_eq!(table.sample_value(0), Some("first real value"));
    }

    #[test]
    fn test_sample_value_empty_column() {
        let table = Table::new(vec!["A".to_string()], vec![]);
        assert_eq!(table.sample_value(0), None);
    }
}
