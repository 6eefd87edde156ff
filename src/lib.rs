/*!
 * Process Scheduling Simulator Library
 * Process entity, page table, scheduling policies and the engine that runs them
 */

pub mod core;
pub mod engine;
pub mod memory;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod storage;

// Re-exports
pub use crate::core::{ConfigError, SimConfig, SimError, SimResult};
pub use engine::{FixedDelay, NoDelay, Pacer, ProcessManager, ProcessManagerBuilder, Slice, SAMPLE_PROCESSES};
pub use memory::{Allocation, MemoryTable, PageSource, RandomPageSource, ScriptedPageSource};
pub use monitoring::{init_tracing, EventLog, Observer, ReportFormat, RunStats, SimEvent};
pub use process::{Process, ProcessError, ProcessState};
pub use scheduler::{RoundRobinMemory, SchedulerError, SchedulingPolicy};
pub use storage::{ProcessRecord, ProcessStore, RecordParseError, StorageError};
