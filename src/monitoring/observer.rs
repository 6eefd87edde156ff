/*!
 * Observers
 * Sinks for simulation events. Observers never feed back into scheduling.
 */

use super::events::{ListingKind, SimEvent};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

/// Event sink
pub trait Observer {
    fn observe(&mut self, event: &SimEvent);
}

/// How the binary reports a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable transcript on stdout
    Console,
    /// One JSON object per event on stdout
    Json,
    /// No report
    None,
}

impl ReportFormat {
    pub fn observer(self) -> Box<dyn Observer> {
        match self {
            ReportFormat::Console => Box::new(ConsoleObserver::stdout()),
            ReportFormat::Json => Box::new(JsonObserver::new(io::stdout())),
            ReportFormat::None => Box::new(NullObserver),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" | "text" => Ok(ReportFormat::Console),
            "json" => Ok(ReportFormat::Json),
            "none" | "off" => Ok(ReportFormat::None),
            other => Err(format!("unknown report format '{}' (console, json, none)", other)),
        }
    }
}

/// Render an event as console text, `None` for events the console skips
pub fn render_console(event: &SimEvent) -> Option<String> {
    let text = match event {
        SimEvent::ProcessAdded { process } => format!("Added: {}\n", process),
        SimEvent::StoreMissing { path } => format!("No existing data ({}). Starting fresh.\n", path),
        SimEvent::StoreWriteFailed { path, error } => {
            format!("Warning: could not save to {}: {}", path, error)
        }
        SimEvent::RecordSkipped { line, reason } => {
            format!("Skipping malformed record on line {}: {}", line, reason)
        }
        SimEvent::ProcessesLoaded { path, count } => {
            format!("Loaded {} processes from {}.", count, path)
        }
        SimEvent::PolicyStarted { policy } => format!("\n== {} Scheduling ==", policy),
        SimEvent::ProcessSkipped { name, id } => {
            format!("{} ({}) already terminated, skipping.", name, id)
        }
        SimEvent::AllocationStarted { name, pages, .. } => {
            format!("Allocating {} pages for {}...", pages, name)
        }
        SimEvent::PageGranted { .. } => return None,
        SimEvent::PageFault { name, page, .. } => {
            format!("Page fault: {} could not allocate page {}.", name, page)
        }
        SimEvent::AllocationShort { held, requested, .. } => {
            format!("Warning: Only allocated {} / {} pages.", held, requested)
        }
        SimEvent::MemoryFreed { name, .. } => format!("Freeing memory for {}...", name),
        SimEvent::ExecutionStarted { name, id, units } => {
            format!("-- Executing {} ({}) for {} units.", name, id, units)
        }
        SimEvent::UnitStep {
            cpu_time,
            name,
            executed,
            burst,
            page_faults,
        } => format!(
            "[Time {}] {}: {}/{} units, Faults: {}",
            cpu_time, name, executed, burst, page_faults
        ),
        SimEvent::ProcessCompleted { name, .. } => format!("*** {} completed.\n", name),
        SimEvent::StateReset { processes } => {
            format!("\nReset runtime state of {} processes.", processes)
        }
        SimEvent::ProcessListing { kind, processes } => {
            let title = match kind {
                ListingKind::Active => "Active",
                ListingKind::Completed => "Completed",
            };
            let mut text = format!("\n-- {} Processes --", title);
            for process in processes {
                let _ = write!(text, "\n{}", process);
            }
            text
        }
        SimEvent::RunSummary { stats } => format!(
            "\nTotal CPU Time: {} units.\nCompleted: {} processes. Page Faults: {}\n",
            stats.total_cpu_time, stats.completed, stats.total_page_faults
        ),
    };
    Some(text)
}

/// Human-readable transcript
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn observe(&mut self, event: &SimEvent) {
        if let Some(text) = render_console(event) {
            if let Err(e) = writeln!(self.out, "{}", text) {
                warn!(error = %e, "Console report write failed");
            }
        }
    }
}

/// JSON lines report
pub struct JsonObserver<W: Write> {
    out: W,
}

impl<W: Write> JsonObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for JsonObserver<W> {
    fn observe(&mut self, event: &SimEvent) {
        let written = serde_json::to_writer(&mut self.out, event)
            .map_err(io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(e) = written {
            warn!(error = %e, "JSON report write failed");
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn observe(&mut self, _event: &SimEvent) {}
}

/// Shared in-memory event recorder
///
/// Clones share the same buffer, so a test can keep one handle and give
/// another to the engine.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<SimEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SimEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// (process name, units) for each execution slice, in order
    pub fn slices(&self) -> Vec<(String, u32)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SimEvent::ExecutionStarted { name, units, .. } => Some((name.clone(), *units)),
                _ => None,
            })
            .collect()
    }

    /// Names of processes in completion order
    pub fn completions(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SimEvent::ProcessCompleted { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Observer for EventLog {
    fn observe(&mut self, event: &SimEvent) {
        self.events.lock().push(event.clone());
    }
}
