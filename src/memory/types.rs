/*!
 * Memory Types
 * Outcome of a page allocation attempt
 */

use crate::core::types::PageNumber;
use serde::{Deserialize, Serialize};

/// Result of one `allocate` call
///
/// A short allocation is not an error: the process runs with whatever pages
/// it obtained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Page demand of the process
    pub requested: u32,
    /// Pages held by the process after the call
    pub held: u32,
    /// Pages newly claimed during this call, in draw order
    pub granted: Vec<PageNumber>,
    /// Occupied pages drawn during this call, in draw order
    pub faults: Vec<PageNumber>,
    /// Total draws made
    pub attempts: u32,
}

impl Allocation {
    pub fn new(requested: u32) -> Self {
        Self {
            requested,
            ..Self::default()
        }
    }

    /// Retry budget ran out before demand was met
    pub fn is_short(&self) -> bool {
        self.held < self.requested
    }
}
