/*!
 * Process Execution
 * Unit-step execution against the simulated clock
 */

use super::ProcessManager;
use crate::core::types::Units;
use crate::monitoring::SimEvent;
use crate::process::{ProcessResult, ProcessState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of one `execute` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Units executed in this call
    pub executed: Units,
    /// The process reached its burst during this call
    pub completed: bool,
}

impl ProcessManager {
    /// Run the process at `index` for `slice` units, or its remaining burst
    ///
    /// The slice is capped at the remaining burst. A process that reaches its
    /// burst becomes Terminated and a snapshot is appended to the completed
    /// list. Calling this on a Terminated process does nothing.
    pub fn execute(&mut self, index: usize, slice: Option<Units>) -> ProcessResult<Slice> {
        self.check_index(index)?;

        if self.processes[index].is_terminated() {
            debug!(process = %self.processes[index].name, "Execute on terminated process ignored");
            return Ok(Slice {
                executed: 0,
                completed: false,
            });
        }

        let (name, id, run_time) = {
            let p = &mut self.processes[index];
            p.state = ProcessState::Running;
            let remaining = p.remaining();
            (p.name.clone(), p.id.clone(), slice.map_or(remaining, |s| s.min(remaining)))
        };
        self.emit(SimEvent::ExecutionStarted {
            name: name.clone(),
            id: id.clone(),
            units: run_time,
        });

        for _ in 0..run_time {
            self.pacer.pause();

            let process = &mut self.processes[index];
            process.execution_time += 1;
            self.cpu_time += 1;

            let event = SimEvent::UnitStep {
                cpu_time: self.cpu_time,
                name: name.clone(),
                executed: process.execution_time,
                burst: process.cpu_burst,
                page_faults: process.page_faults,
            };
            self.emit(event);
        }

        let process = &mut self.processes[index];
        let completed = process.execution_time >= process.cpu_burst;
        if completed {
            process.state = ProcessState::Terminated;
            let snapshot = process.clone();
            self.completed.push(snapshot);

            info!(process = %name, id = %id, cpu_time = self.cpu_time, "Process completed");
            self.emit(SimEvent::ProcessCompleted {
                name,
                id,
                cpu_time: self.cpu_time,
            });
        }

        Ok(Slice {
            executed: run_time,
            completed,
        })
    }
}
