/*!
 * Process Types
 * The schedulable unit and its lifecycle state
 */

use crate::core::limits::{DEFAULT_PRIORITY, MAX_MEMORY_PAGES, MIN_MEMORY_PAGES};
use crate::core::types::{Grade, PageNumber, Priority, Units};
use crate::memory::PageSource;
use crate::storage::ProcessRecord;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ProcessError {
    #[error("Process index {index} out of range ({len} active processes)")]
    #[diagnostic(
        code(process::not_found),
        help("Use an index from the active process list.")
    )]
    NotFound { index: usize, len: usize },
}

/// Process lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Created, not yet picked up by a policy
    New,
    /// Picked up by a policy, waiting for its slice
    Ready,
    /// Executing unit steps
    Running,
    /// Executed its whole burst
    Terminated,
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessState::New => "New",
            ProcessState::Ready => "Ready",
            ProcessState::Running => "Running",
            ProcessState::Terminated => "Terminated",
        };
        f.write_str(name)
    }
}

/// A simulated process
///
/// Identity (`name`, `id`, `grade`) and scheduling attributes come from the
/// caller or the process store. Runtime progress is mutated by the engine.
/// `memory_pages` is drawn once at construction and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub name: String,
    pub id: String,
    pub grade: Grade,
    pub cpu_burst: Units,
    pub priority: Priority,
    pub state: ProcessState,
    pub execution_time: Units,
    pub page_faults: u32,
    pub memory_pages: u32,
    pub allocated_pages: BTreeSet<PageNumber>,
}

impl Process {
    /// Create a process, drawing its page demand from `pages`
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        grade: Grade,
        cpu_burst: Units,
        priority: Priority,
        pages: &mut dyn PageSource,
    ) -> Self {
        let memory_pages = pages.draw_demand(MIN_MEMORY_PAGES, MAX_MEMORY_PAGES);
        Self::with_memory_pages(name, id, grade, cpu_burst, priority, memory_pages)
    }

    /// Create a process with the default priority
    pub fn with_default_priority(
        name: impl Into<String>,
        id: impl Into<String>,
        grade: Grade,
        cpu_burst: Units,
        pages: &mut dyn PageSource,
    ) -> Self {
        Self::new(name, id, grade, cpu_burst, DEFAULT_PRIORITY, pages)
    }

    /// Create a process with a fixed page demand
    pub fn with_memory_pages(
        name: impl Into<String>,
        id: impl Into<String>,
        grade: Grade,
        cpu_burst: Units,
        priority: Priority,
        memory_pages: u32,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            grade,
            cpu_burst,
            priority,
            state: ProcessState::New,
            execution_time: 0,
            page_faults: 0,
            memory_pages,
            allocated_pages: BTreeSet::new(),
        }
    }

    /// Rebuild a process from a persisted record (page demand is redrawn)
    pub fn from_record(record: &ProcessRecord, pages: &mut dyn PageSource) -> Self {
        Self::new(
            record.name.clone(),
            record.id.clone(),
            record.grade,
            record.cpu_burst,
            record.priority,
            pages,
        )
    }

    /// Persistable fields of this process
    pub fn record(&self) -> ProcessRecord {
        ProcessRecord {
            name: self.name.clone(),
            id: self.id.clone(),
            grade: self.grade,
            cpu_burst: self.cpu_burst,
            priority: self.priority,
        }
    }

    /// Units still to execute
    pub fn remaining(&self) -> Units {
        self.cpu_burst.saturating_sub(self.execution_time)
    }

    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    pub fn holds_memory(&self) -> bool {
        !self.allocated_pages.is_empty()
    }

    /// Return runtime progress to a freshly created state
    ///
    /// Held pages must be released through the memory table first.
    pub(crate) fn reset(&mut self) {
        debug_assert!(self.allocated_pages.is_empty());
        self.state = ProcessState::New;
        self.execution_time = 0;
        self.page_faults = 0;
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process ID: {}, Name: {}, Grade: {:?}, State: {}, CPU Burst: {}, Priority: {}, Memory Pages: {}, Page Faults: {}",
            self.id,
            self.name,
            self.grade,
            self.state,
            self.cpu_burst,
            self.priority,
            self.memory_pages,
            self.page_faults
        )
    }
}
