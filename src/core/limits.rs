/*!
 * Simulation Limits and Constants
 *
 * Centralized location for the fixed numbers the simulation runs on.
 * Grouped by domain.
 */

use super::types::{PageNumber, Priority, Units};
use std::time::Duration;

// =============================================================================
// MEMORY
// =============================================================================

/// First page of the simulated address space
pub const FIRST_PAGE: PageNumber = 1;

/// Last page of the simulated address space (inclusive)
pub const LAST_PAGE: PageNumber = 100;

/// Smallest page demand drawn for a new process
pub const MIN_MEMORY_PAGES: u32 = 1;

/// Largest page demand drawn for a new process
pub const MAX_MEMORY_PAGES: u32 = 3;

/// Draws allowed per demanded page before allocation gives up
pub const ALLOC_RETRY_FACTOR: u32 = 10;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Priority assigned when none is given
pub const DEFAULT_PRIORITY: Priority = 1;

/// Round-robin quantum used by the full demonstration run
pub const DEFAULT_QUANTUM: Units = 2;

// =============================================================================
// RUNTIME
// =============================================================================

/// Default flat-file process store
pub const DEFAULT_STORE_PATH: &str = "processes.txt";

/// Pacing delay the binary uses between unit steps
pub const DEMO_STEP_DELAY: Duration = Duration::from_millis(50);
