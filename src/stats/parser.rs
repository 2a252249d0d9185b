//! Table parser for HAProxy `show stat` output.
//!
//! The stats socket returns a comma-separated table whose header line is
//! prefixed with `"# "`. Every line additionally ends in a trailing comma,
//! which yields one spurious empty field per row (and one empty column name
//! in the header). The parser is header-driven: rows are zipped positionally
//! with the column names taken from the header, never from fixed positions,
//! except for stripping that trailing quirk.

use std::sync::Arc;

use crate::error::FormatError;

/// One data row of the statistics table: the shared header plus this row's
/// values, looked up by column name.
#[derive(Debug, Clone)]
pub struct RawRow {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl RawRow {
    /// Looks up a field by column name. Header-driven: returns `None` for
    /// columns the snapshot's header did not declare.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i].as_str())
    }

    /// Iterates `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

/// A parsed snapshot: the column set plus all data rows, in source order.
#[derive(Debug, Clone)]
pub struct RawTable {
    columns: Arc<[String]>,
    rows: Vec<RawRow>,
}

impl RawTable {
    /// Column names declared by this snapshot's header, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parses one raw `show stat` blob into a [`RawTable`].
///
/// The header is everything after the `"# "` marker on the first line; all
/// subsequent non-empty lines are data rows. A header with zero data rows is
/// a valid, empty table.
pub fn parse_stat_table(blob: &str) -> Result<RawTable, FormatError> {
    let body = match blob.find("# ") {
        Some(idx) => &blob[idx + 2..],
        None => return Err(FormatError::MissingHeader),
    };

    let mut lines = body.lines();
    let header = lines.next().ok_or(FormatError::MissingHeader)?;

    let mut columns: Vec<String> = header.split(',').map(str::to_string).collect();
    // The header line ends in a trailing comma, producing one empty column
    // name. Drop it; it is not a real column.
    if columns.last().is_some_and(|c| c.is_empty()) {
        columns.pop();
    }
    let columns: Arc<[String]> = columns.into();

    let mut rows = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let row = rows.len();
        let mut values: Vec<String> = line.split(',').map(str::to_string).collect();

        if values.len() == columns.len() + 1 {
            let last = values.pop().unwrap_or_default();
            if !last.is_empty() {
                return Err(FormatError::TrailingField { row, value: last });
            }
        }
        if values.len() != columns.len() {
            return Err(FormatError::ColumnCount {
                row,
                expected: columns.len(),
                found: values.len(),
            });
        }

        rows.push(RawRow {
            columns: Arc::clone(&columns),
            values,
        });
    }

    Ok(RawTable { columns, rows })
}
