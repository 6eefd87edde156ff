/*!
 * Scheduling & Memory Engine
 *
 * Owns the active process list, the completed list, the page table and the
 * cumulative CPU-time counter, and drives every process through
 * allocate -> execute -> free under the chosen policy.
 *
 * Everything runs on the caller's thread. Pacing and observers are
 * injected and never influence scheduling decisions.
 */

mod builder;
mod execution;
mod memory_ops;
pub mod pacing;
mod policies;

pub use builder::ProcessManagerBuilder;
pub use execution::Slice;
pub use pacing::{FixedDelay, NoDelay, Pacer};

use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::types::{Grade, Priority, SimResult, Ticks, Units};
use crate::core::SimConfig;
use crate::memory::{MemoryTable, PageSource};
use crate::monitoring::{ListingKind, Observer, RunStats, SimEvent};
use crate::process::{Process, ProcessError, ProcessResult};
use crate::storage::ProcessStore;
use tracing::{info, warn};

/// Processes added by the demonstration run: (name, id, grade, burst, priority)
pub const SAMPLE_PROCESSES: [(&str, &str, Grade, Units, Priority); 3] = [
    ("Alice", "001", 85.0, 3, 2),
    ("Bob", "002", 90.5, 2, 4),
    ("Charlie", "003", 78.2, 4, 3),
];

/// Process manager
pub struct ProcessManager {
    processes: Vec<Process>,
    completed: Vec<Process>,
    cpu_time: Ticks,
    memory: MemoryTable,
    pages: Box<dyn PageSource>,
    pacer: Box<dyn Pacer>,
    observers: Vec<Box<dyn Observer>>,
    store: Option<ProcessStore>,
    config: SimConfig,
}

impl ProcessManager {
    /// Manager with default configuration
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for configuring ProcessManager
    pub fn builder() -> ProcessManagerBuilder {
        ProcessManagerBuilder::new()
    }

    /// Load persisted processes into the active list
    ///
    /// A missing store starts the manager empty. Malformed records are
    /// skipped and reported. Returns the number of processes loaded.
    pub fn load(&mut self) -> SimResult<usize> {
        let Some(store) = self.store.clone() else {
            return Ok(0);
        };
        let path = store.path().display().to_string();
        let outcome = store.load()?;

        if outcome.missing {
            self.emit(SimEvent::StoreMissing { path });
            return Ok(0);
        }

        for error in &outcome.skipped {
            self.emit(SimEvent::RecordSkipped {
                line: error.line(),
                reason: error.to_string(),
            });
        }

        let count = outcome.records.len();
        for record in &outcome.records {
            let process = Process::from_record(record, &mut *self.pages);
            self.processes.push(process);
        }

        info!(path = %path, count, skipped = outcome.skipped.len(), "Processes loaded");
        self.emit(SimEvent::ProcessesLoaded { path, count });
        Ok(count)
    }

    /// Create a process, append it to the active list and persist it
    ///
    /// A failed write is reported and the process stays active. Returns the
    /// index of the new process.
    pub fn add_process(
        &mut self,
        name: impl Into<String>,
        id: impl Into<String>,
        grade: Grade,
        cpu_burst: Units,
        priority: Priority,
    ) -> usize {
        let process = Process::new(name, id, grade, cpu_burst, priority, &mut *self.pages);
        self.push_process(process)
    }

    /// `add_process` with the default priority
    pub fn add_process_default(
        &mut self,
        name: impl Into<String>,
        id: impl Into<String>,
        grade: Grade,
        cpu_burst: Units,
    ) -> usize {
        self.add_process(name, id, grade, cpu_burst, DEFAULT_PRIORITY)
    }

    /// Append an already constructed process and persist it
    pub fn push_process(&mut self, process: Process) -> usize {
        let write_failure = self.store.as_ref().and_then(|store| {
            store
                .append(&process.record())
                .err()
                .map(|e| (store.path().display().to_string(), e))
        });
        if let Some((path, e)) = write_failure {
            warn!(error = %e, id = %process.id, "Failed to persist process");
            self.emit(SimEvent::StoreWriteFailed {
                path,
                error: e.to_string(),
            });
        }

        info!(name = %process.name, id = %process.id, pages = process.memory_pages, "Process added");
        self.emit(SimEvent::ProcessAdded {
            process: process.clone(),
        });
        self.processes.push(process);
        self.processes.len() - 1
    }

    /// Add the three demonstration processes
    pub fn add_sample_processes(&mut self) {
        for (name, id, grade, burst, priority) in SAMPLE_PROCESSES {
            self.add_process(name, id, grade, burst, priority);
        }
    }

    /// Report the active list
    pub fn report_active(&mut self) {
        let processes = self.processes.clone();
        self.emit(SimEvent::ProcessListing {
            kind: ListingKind::Active,
            processes,
        });
    }

    /// Report the completed list
    pub fn report_completed(&mut self) {
        let processes = self.completed.clone();
        self.emit(SimEvent::ProcessListing {
            kind: ListingKind::Completed,
            processes,
        });
    }

    /// Aggregate statistics over the run so far
    pub fn stats(&self) -> RunStats {
        RunStats {
            total_cpu_time: self.cpu_time,
            completed: self.completed.len(),
            total_page_faults: self.completed.iter().map(|p| u64::from(p.page_faults)).sum(),
        }
    }

    /// Report aggregate statistics
    pub fn report_stats(&mut self) -> RunStats {
        let stats = self.stats();
        self.emit(SimEvent::RunSummary { stats });
        stats
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Snapshots of processes taken when they terminated, in completion order
    pub fn completed(&self) -> &[Process] {
        &self.completed
    }

    pub fn process(&self, index: usize) -> ProcessResult<&Process> {
        self.processes.get(index).ok_or(ProcessError::NotFound {
            index,
            len: self.processes.len(),
        })
    }

    pub fn memory(&self) -> &MemoryTable {
        &self.memory
    }

    pub fn cpu_time(&self) -> Ticks {
        self.cpu_time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn store(&self) -> Option<&ProcessStore> {
        self.store.as_ref()
    }

    fn check_index(&self, index: usize) -> ProcessResult<()> {
        self.process(index).map(|_| ())
    }

    fn emit(&mut self, event: SimEvent) {
        for observer in &mut self.observers {
            observer.observe(&event);
        }
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}
