/*!
 * Process Scheduling Simulator - Main Entry Point
 *
 * Loads persisted processes, adds the sample processes and runs FCFS, SJF,
 * Priority and Round Robin over the same process list, then reports the
 * completed processes and aggregate statistics.
 */

use procsim::core::config::ENV_STEP_DELAY_MS;
use procsim::core::limits::DEMO_STEP_DELAY;
use procsim::{init_tracing, ProcessManager, SimConfig};
use tracing::{info, warn};

fn main() -> miette::Result<()> {
    // Initialize structured tracing
    init_tracing();

    let mut config = SimConfig::from_env()?;
    if std::env::var_os(ENV_STEP_DELAY_MS).is_none() {
        config.step_delay = DEMO_STEP_DELAY;
    }

    info!(
        store = %config.store_path.display(),
        quantum = config.quantum,
        step_delay = ?config.step_delay,
        "Process simulator starting"
    );

    let mut manager = ProcessManager::builder().with_config(config).build();

    if let Err(e) = manager.load() {
        warn!(error = %e, "Could not load persisted processes, starting empty");
    }

    let stats = manager.run_all()?;

    info!(
        total_cpu_time = stats.total_cpu_time,
        completed = stats.completed,
        total_page_faults = stats.total_page_faults,
        "Simulation complete"
    );
    Ok(())
}
