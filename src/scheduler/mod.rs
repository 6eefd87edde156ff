/*!
 * CPU Scheduler
 * Policy definitions and per-policy process ordering
 */

mod selection;
mod types;

pub use selection::selection_order;
pub use types::{RoundRobinMemory, SchedulerError, SchedulerResult, SchedulingPolicy};
