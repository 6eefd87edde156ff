/*!
 * Storage Types
 * Errors raised while reading or writing the process store
 */

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Storage operation result
pub type StorageResult<T> = Result<T, StorageError>;

/// Numeric field of a persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Grade,
    CpuBurst,
    Priority,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Grade => f.write_str("grade"),
            RecordField::CpuBurst => f.write_str("cpu_burst"),
            RecordField::Priority => f.write_str("priority"),
        }
    }
}

/// A persisted line that does not describe a process
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum RecordParseError {
    #[error("line {line}: expected 5 '|'-separated fields, found {found}")]
    #[diagnostic(
        code(storage::field_count),
        help("Records look like `name | id | grade | cpu_burst | priority`.")
    )]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid {field} {value:?}")]
    #[diagnostic(
        code(storage::invalid_field),
        help("grade is a decimal number, cpu_burst a non-negative integer, priority an integer.")
    )]
    InvalidField {
        line: usize,
        field: RecordField,
        value: String,
    },
}

impl RecordParseError {
    /// 1-based line number of the offending record
    pub fn line(&self) -> usize {
        match self {
            RecordParseError::FieldCount { line, .. } => *line,
            RecordParseError::InvalidField { line, .. } => *line,
        }
    }
}

/// Storage errors
#[derive(Error, Debug, Diagnostic)]
pub enum StorageError {
    #[error("Failed to read process store {path}: {source}")]
    #[diagnostic(
        code(storage::read_failed),
        help("Check that the store path is a readable file.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append to process store {path}: {source}")]
    #[diagnostic(
        code(storage::write_failed),
        help("Check file permissions and disk space.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot store {field} {value:?}: it would not read back unchanged")]
    #[diagnostic(
        code(storage::unstorable_field),
        help("Names and ids must not contain '|' or line breaks, nor start or end with whitespace.")
    )]
    Unstorable { field: &'static str, value: String },

    #[error("Malformed record: {0}")]
    #[diagnostic(transparent)]
    Parse(#[from] RecordParseError),
}
