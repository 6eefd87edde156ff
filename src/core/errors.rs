/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use thiserror::Error;

pub use super::config::ConfigError;
pub use crate::process::ProcessError;
pub use crate::scheduler::SchedulerError;
pub use crate::storage::{RecordParseError, StorageError};

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Storage error: {0}")]
    #[diagnostic(transparent)]
    Storage(#[from] StorageError),
}

impl From<RecordParseError> for SimError {
    fn from(err: RecordParseError) -> Self {
        SimError::Storage(StorageError::Parse(err))
    }
}
