/*!
 * Core Types
 * Common types used across the simulator
 */

/// Page number inside the simulated address space
pub type PageNumber = u32;

/// Execution units (bursts, slices, progress)
pub type Units = u32;

/// Cumulative simulated CPU time
pub type Ticks = u64;

/// Scheduling priority (higher is more urgent)
pub type Priority = i32;

/// Informational score attached to a process
pub type Grade = f64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
