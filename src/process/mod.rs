/*!
 * Process Module
 * The simulated process entity
 */

pub mod types;

pub use types::{Process, ProcessError, ProcessResult, ProcessState};
