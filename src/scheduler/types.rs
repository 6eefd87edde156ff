/*!
 * Scheduler Types
 * Policies and round-robin memory handling
 */

use crate::core::types::Units;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Scheduler-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum SchedulerError {
    #[error("Invalid round-robin quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The quantum must be at least 1 unit, otherwise no process ever advances.")
    )]
    InvalidQuantum(Units),
}

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SchedulingPolicy {
    /// First come, first served (insertion order)
    Fcfs,
    /// Shortest job first (ascending burst)
    Sjf,
    /// Highest priority value first
    Priority,
    /// FIFO rotation with a fixed time quantum
    RoundRobin { quantum: Units },
}

impl SchedulingPolicy {
    /// Round-robin policy with a validated quantum
    pub fn round_robin(quantum: Units) -> SchedulerResult<Self> {
        let policy = SchedulingPolicy::RoundRobin { quantum };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> SchedulerResult<()> {
        match *self {
            SchedulingPolicy::RoundRobin { quantum: 0 } => Err(SchedulerError::InvalidQuantum(0)),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingPolicy::Fcfs => f.write_str("FCFS"),
            SchedulingPolicy::Sjf => f.write_str("SJF"),
            SchedulingPolicy::Priority => f.write_str("Priority"),
            SchedulingPolicy::RoundRobin { .. } => f.write_str("Round Robin"),
        }
    }
}

/// When round-robin releases a process's pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundRobinMemory {
    /// Pages stay held across requeues and are freed on the terminating turn
    RetainUntilExit,
    /// Pages are freed after every slice and reacquired on the next turn
    ReleaseEachTurn,
}

impl Default for RoundRobinMemory {
    fn default() -> Self {
        RoundRobinMemory::RetainUntilExit
    }
}
