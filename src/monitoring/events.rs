/*!
 * Simulation Events
 * Everything the engine reports while it runs
 */

use crate::core::types::{PageNumber, Ticks, Units};
use crate::process::Process;
use crate::scheduler::SchedulingPolicy;
use serde::{Deserialize, Serialize};

/// Which process list a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Active,
    Completed,
}

/// End-of-run aggregates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Cumulative simulated CPU time
    pub total_cpu_time: Ticks,
    /// Entries in the completed list
    pub completed: usize,
    /// Page faults summed over the completed list
    pub total_page_faults: u64,
}

/// Observable simulation event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    ProcessAdded {
        process: Process,
    },
    StoreMissing {
        path: String,
    },
    StoreWriteFailed {
        path: String,
        error: String,
    },
    RecordSkipped {
        line: usize,
        reason: String,
    },
    ProcessesLoaded {
        path: String,
        count: usize,
    },
    PolicyStarted {
        policy: SchedulingPolicy,
    },
    ProcessSkipped {
        name: String,
        id: String,
    },
    AllocationStarted {
        name: String,
        id: String,
        pages: u32,
    },
    PageGranted {
        name: String,
        page: PageNumber,
    },
    PageFault {
        name: String,
        page: PageNumber,
        total_faults: u32,
    },
    AllocationShort {
        name: String,
        held: u32,
        requested: u32,
    },
    MemoryFreed {
        name: String,
        pages: Vec<PageNumber>,
    },
    ExecutionStarted {
        name: String,
        id: String,
        units: Units,
    },
    UnitStep {
        cpu_time: Ticks,
        name: String,
        executed: Units,
        burst: Units,
        page_faults: u32,
    },
    ProcessCompleted {
        name: String,
        id: String,
        cpu_time: Ticks,
    },
    StateReset {
        processes: usize,
    },
    ProcessListing {
        kind: ListingKind,
        processes: Vec<Process>,
    },
    RunSummary {
        stats: RunStats,
    },
}
