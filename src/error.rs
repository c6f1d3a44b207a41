use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two input tables an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    /// The table being annotated.
    Primary,
    /// The table the primary is compared against.
    Secondary,
}

impl fmt::Display for TableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableRole::Primary => write!(f, "primary"),
            TableRole::Secondary => write!(f, "secondary"),
        }
    }
}

/// Errors raised while loading, annotating or saving tables.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("{table} table has no 'Metric' column")]
    MissingColumn { table: TableRole },

    #[error("new column name must not be empty")]
    EmptyColumnName,

    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row} has {found} fields but the header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column '{column}' needs {expected} values, got {found}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("reading rule file {}: {source}", path.display())]
    RulesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing rule file {}: {source}", path.display())]
    RulesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AnnotateError {
    /// True for failures that happen before any output is produced.
    pub fn is_read_error(&self) -> bool {
        matches!(self, AnnotateError::Read { .. } | AnnotateError::RaggedRow { .. })
    }
}

pub type Result<T> = std::result::Result<T, AnnotateError>;
