/*!
 * Scheduling Policies
 *
 * Every policy runs the same per-process cycle:
 * mark Ready -> allocate (if holding nothing) -> execute a slice -> free.
 *
 * FCFS, SJF and Priority visit each process once and run its remaining
 * burst. Round-robin rotates a FIFO queue in slices of at most `quantum`
 * units until every process terminates.
 *
 * Terminated is absorbing: processes terminated by an earlier run in the
 * same session are skipped unless `reset_runtime_state` is called first.
 */

use super::ProcessManager;
use crate::core::types::{SimResult, Units};
use crate::monitoring::{policy_span, RunStats, SimEvent};
use crate::process::{ProcessResult, ProcessState};
use crate::scheduler::{selection_order, RoundRobinMemory, SchedulingPolicy};
use std::collections::VecDeque;
use tracing::{debug, info};

impl ProcessManager {
    /// First come, first served
    pub fn fcfs(&mut self) -> SimResult<()> {
        self.run_policy(SchedulingPolicy::Fcfs)
    }

    /// Shortest job first
    pub fn sjf(&mut self) -> SimResult<()> {
        self.run_policy(SchedulingPolicy::Sjf)
    }

    /// Highest priority first
    pub fn priority_scheduling(&mut self) -> SimResult<()> {
        self.run_policy(SchedulingPolicy::Priority)
    }

    /// Round robin with the given quantum
    pub fn round_robin(&mut self, quantum: Units) -> SimResult<()> {
        self.run_policy(SchedulingPolicy::round_robin(quantum)?)
    }

    /// Run one policy over the active list
    pub fn run_policy(&mut self, policy: SchedulingPolicy) -> SimResult<()> {
        policy.validate()?;

        let span = policy_span(policy);
        let _entered = span.enter();
        info!(processes = self.processes.len(), "Policy run started");
        self.emit(SimEvent::PolicyStarted { policy });

        let cpu_before = self.cpu_time;
        match policy {
            SchedulingPolicy::RoundRobin { quantum } => self.rotate(quantum)?,
            _ => self.run_to_completion(policy)?,
        }

        info!(cpu_units = self.cpu_time - cpu_before, "Policy run finished");
        Ok(())
    }

    /// Return every process to New, releasing held pages
    ///
    /// The completed list and the CPU-time counter are kept.
    pub fn reset_runtime_state(&mut self) -> ProcessResult<()> {
        for index in 0..self.processes.len() {
            if self.processes[index].holds_memory() {
                self.free(index)?;
            }
            self.processes[index].reset();
        }

        let processes = self.processes.len();
        info!(processes, "Runtime state reset");
        self.emit(SimEvent::StateReset { processes });
        Ok(())
    }

    /// The full demonstration: samples, all four policies, summary
    pub fn run_all(&mut self) -> SimResult<RunStats> {
        let quantum = self.config.quantum;
        let policies = [
            SchedulingPolicy::Fcfs,
            SchedulingPolicy::Sjf,
            SchedulingPolicy::Priority,
            SchedulingPolicy::round_robin(quantum)?,
        ];

        self.add_sample_processes();
        self.report_active();

        for (n, policy) in policies.into_iter().enumerate() {
            if n > 0 && self.config.reset_between_policies {
                self.reset_runtime_state()?;
            }
            self.run_policy(policy)?;
        }

        self.report_completed();
        Ok(self.report_stats())
    }

    fn run_to_completion(&mut self, policy: SchedulingPolicy) -> ProcessResult<()> {
        for index in selection_order(policy, &self.processes) {
            if self.skip_terminated(index) {
                continue;
            }

            self.processes[index].state = ProcessState::Ready;
            self.allocate(index)?;
            self.execute(index, None)?;
            self.free(index)?;
        }
        Ok(())
    }

    fn rotate(&mut self, quantum: Units) -> ProcessResult<()> {
        let release_each_turn = self.config.rr_memory == RoundRobinMemory::ReleaseEachTurn;
        let mut queue: VecDeque<usize> =
            selection_order(SchedulingPolicy::RoundRobin { quantum }, &self.processes).into();

        while let Some(index) = queue.pop_front() {
            if self.skip_terminated(index) {
                continue;
            }

            self.processes[index].state = ProcessState::Ready;
            if !self.processes[index].holds_memory() {
                self.allocate(index)?;
            }

            let share = quantum.min(self.processes[index].remaining());
            let slice = self.execute(index, Some(share))?;

            if slice.completed {
                self.free(index)?;
            } else {
                if release_each_turn {
                    self.free(index)?;
                }
                self.processes[index].state = ProcessState::Ready;
                queue.push_back(index);
            }
        }
        Ok(())
    }

    fn skip_terminated(&mut self, index: usize) -> bool {
        let process = &self.processes[index];
        if !process.is_terminated() {
            return false;
        }

        debug!(process = %process.name, "Already terminated, skipping");
        let event = SimEvent::ProcessSkipped {
            name: process.name.clone(),
            id: process.id.clone(),
        };
        self.emit(event);
        true
    }
}
