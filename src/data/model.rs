use std::fmt;

use crate::error::{AnnotateError, Result};

/// Key column used to match rows between the two tables.
pub const METRIC_COLUMN: &str = "Metric";

// ---------------------------------------------------------------------------
// Classification – the value written into the new column
// ---------------------------------------------------------------------------

/// Presence of a primary row's metric in the secondary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Yes,
    No,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Yes => "Yes",
            Classification::No => "No",
        }
    }
}

impl From<bool> for Classification {
    fn from(present: bool) -> Self {
        if present {
            Classification::Yes
        } else {
            Classification::No
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Table – header plus string rows, as read from a CSV file
// ---------------------------------------------------------------------------

/// An ordered set of columns and rows of opaque string values.
///
/// Every row holds exactly one value per column, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != columns.len())
            .map(|(i, r)| (i, r.len()))
        {
            return Err(AnnotateError::RaggedRow {
                row,
                expected: columns.len(),
                found,
            });
        }
        Ok(Table { columns, rows })
    }

    /// Single-column table, mostly handy for tests and small lookups.
    pub fn from_column<I, S>(name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: vec![name.to_string()],
            rows: values.into_iter().map(|v| vec![v.into()]).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value of `column` in row `row`, if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// All values of one column in row order.
    pub fn column_values<'a>(&'a self, column: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column_index(column)?;
        Some(self.rows.iter().map(move |r| r[idx].as_str()))
    }

    /// Set `name` to `values`, overwriting in place if the column exists
    /// and appending it otherwise.
    ///
    /// `values` must hold exactly one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(AnnotateError::ColumnLength {
                column: name.to_string(),
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}
