/*!
 * Process Store
 * Append-only flat file of process records
 */

use super::record::ProcessRecord;
use super::types::{RecordParseError, StorageError, StorageResult};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a load found on disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    /// Parsed records in file order
    pub records: Vec<ProcessRecord>,
    /// Lines that were skipped
    pub skipped: Vec<RecordParseError>,
    /// The store file did not exist
    pub missing: bool,
}

/// Flat-file process store
#[derive(Debug, Clone)]
pub struct ProcessStore {
    path: PathBuf,
}

impl ProcessStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record
    ///
    /// A missing file is an empty store. Blank lines are ignored and
    /// malformed lines are skipped with a warning.
    pub fn load(&self) -> StorageResult<LoadOutcome> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Process store not found, starting empty");
                return Ok(LoadOutcome {
                    missing: true,
                    ..LoadOutcome::default()
                });
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };

        let mut outcome = LoadOutcome::default();
        for (index, text) in contents.lines().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            match ProcessRecord::parse_line(text, index + 1) {
                Ok(record) => outcome.records.push(record),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Skipping malformed record");
                    outcome.skipped.push(e);
                }
            }
        }

        debug!(
            path = %self.path.display(),
            records = outcome.records.len(),
            skipped = outcome.skipped.len(),
            "Process store loaded"
        );
        Ok(outcome)
    }

    /// Append one record as a new line
    ///
    /// Records whose name or id would not read back unchanged are refused
    /// before the file is touched.
    pub fn append(&self, record: &ProcessRecord) -> StorageResult<()> {
        record.check_storable()?;

        let write_err = |source| StorageError::Write {
            path: self.path.display().to_string(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{}", record.to_line()).map_err(write_err)?;

        debug!(path = %self.path.display(), id = %record.id, "Record appended");
        Ok(())
    }
}
