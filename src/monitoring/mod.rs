/*!
 * Monitoring
 * Tracing setup, simulation events and report observers
 */

pub mod events;
pub mod observer;
pub mod tracer;

pub use events::{ListingKind, RunStats, SimEvent};
pub use observer::{
    render_console, ConsoleObserver, EventLog, JsonObserver, NullObserver, Observer, ReportFormat,
};
pub use tracer::{generate_run_id, init_tracing, policy_span};
