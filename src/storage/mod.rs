/*!
 * Storage Module
 * Flat-file persistence for process records
 */

mod record;
mod store;
mod types;

pub use record::ProcessRecord;
pub use store::{LoadOutcome, ProcessStore};
pub use types::{RecordField, RecordParseError, StorageError, StorageResult};
