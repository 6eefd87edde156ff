/*!
 * Process Selection
 * Order in which a policy visits the active processes
 */

use super::types::SchedulingPolicy;
use crate::process::Process;
use std::cmp::Reverse;

/// Indices of `processes` in the order `policy` serves them
///
/// Sorting is stable, so ties keep insertion order. Round-robin starts from
/// insertion order and rotates from there.
pub fn selection_order(policy: SchedulingPolicy, processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    match policy {
        SchedulingPolicy::Fcfs | SchedulingPolicy::RoundRobin { .. } => {}
        SchedulingPolicy::Sjf => order.sort_by_key(|&i| processes[i].cpu_burst),
        SchedulingPolicy::Priority => order.sort_by_key(|&i| Reverse(processes[i].priority)),
    }
    order
}
