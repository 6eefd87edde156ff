/*!
 * Process Records
 * Pipe-delimited line format of the process store
 */

use super::types::{RecordField, RecordParseError, StorageError, StorageResult};
use crate::core::types::{Grade, Priority, Units};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const FIELD_SEPARATOR: char = '|';
const FIELD_COUNT: usize = 5;

/// Persisted fields of a process: `name | id | grade | cpu_burst | priority`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub name: String,
    pub id: String,
    pub grade: Grade,
    pub cpu_burst: Units,
    pub priority: Priority,
}

impl ProcessRecord {
    /// Parse one store line; `line` is the 1-based line number for errors
    pub fn parse_line(text: &str, line: usize) -> Result<Self, RecordParseError> {
        let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            return Err(RecordParseError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        Ok(Self {
            name: fields[0].to_string(),
            id: fields[1].to_string(),
            grade: parse_field(fields[2], RecordField::Grade, line)?,
            cpu_burst: parse_field(fields[3], RecordField::CpuBurst, line)?,
            priority: parse_field(fields[4], RecordField::Priority, line)?,
        })
    }

    /// Reject text fields that would not survive a write and reload
    pub fn check_storable(&self) -> StorageResult<()> {
        for (field, value) in [("name", &self.name), ("id", &self.id)] {
            let breaks_line = value.contains(|c: char| c == FIELD_SEPARATOR || c == '\n' || c == '\r');
            if breaks_line || value.trim() != value.as_str() {
                return Err(StorageError::Unstorable {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Render as a store line (no trailing newline)
    pub fn to_line(&self) -> String {
        format!(
            "{} | {} | {:?} | {} | {}",
            self.name, self.id, self.grade, self.cpu_burst, self.priority
        )
    }
}

fn parse_field<T: FromStr>(value: &str, field: RecordField, line: usize) -> Result<T, RecordParseError> {
    value.parse().map_err(|_| RecordParseError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}
