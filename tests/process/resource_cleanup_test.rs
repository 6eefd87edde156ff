/*!
 * Resource Cleanup Tests
 * Page release after slices, completion and state resets
 */

use pretty_assertions::assert_eq;
use procsim::{
    EventLog, MemoryTable, Process, ProcessManager, ProcessState, RoundRobinMemory,
    ScriptedPageSource, SimConfig, SimEvent,
};

fn manager(log: &EventLog, rr_memory: RoundRobinMemory) -> ProcessManager {
    ProcessManager::builder()
        .with_config(SimConfig::default().with_rr_memory(rr_memory))
        .without_store()
        .with_page_source(ScriptedPageSource::new())
        .with_observer(log.clone())
        .build()
}

fn count_for(log: &EventLog, target: &str, pick: fn(&SimEvent) -> Option<&str>) -> usize {
    log.events()
        .iter()
        .filter(|e| pick(e) == Some(target))
        .count()
}

fn allocation_name(event: &SimEvent) -> Option<&str> {
    match event {
        SimEvent::AllocationStarted { name, .. } => Some(name.as_str()),
        _ => None,
    }
}

fn free_name(event: &SimEvent) -> Option<&str> {
    match event {
        SimEvent::MemoryFreed { name, .. } => Some(name.as_str()),
        _ => None,
    }
}

#[test]
fn test_free_clears_process_and_table() {
    let log = EventLog::new();
    let mut pm = manager(&log, RoundRobinMemory::RetainUntilExit);
    let idx = pm.push_process(Process::with_memory_pages("A", "1", 0.0, 1, 1, 3));

    let allocation = pm.allocate(idx).unwrap();
    assert_eq!(allocation.held, 3);
    assert_eq!(pm.memory().pages_of("1").len(), 3);

    let released = pm.free(idx).unwrap();
    assert_eq!(released.len(), 3);
    assert!(pm.processes()[idx].allocated_pages.is_empty());
    assert!(pm.memory().pages_of("1").is_empty());
}

#[test]
fn test_run_to_completion_policies_leave_no_pages() {
    let log = EventLog::new();
    let mut pm = manager(&log, RoundRobinMemory::RetainUntilExit);
    pm.add_sample_processes();

    pm.priority_scheduling().unwrap();

    assert!(pm.memory().is_empty());
    assert!(pm.memory().is_consistent_with(pm.processes()));
}

#[test]
fn test_round_robin_retains_pages_across_requeues() {
    let log = EventLog::new();
    let mut pm = manager(&log, RoundRobinMemory::RetainUntilExit);
    pm.push_process(Process::with_memory_pages("A", "1", 0.0, 5, 1, 2));
    pm.push_process(Process::with_memory_pages("B", "2", 0.0, 3, 1, 1));

    pm.round_robin(2).unwrap();

    // One allocation and one release per process
    assert_eq!(count_for(&log, "A", allocation_name), 1);
    assert_eq!(count_for(&log, "A", free_name), 1);
    assert_eq!(count_for(&log, "B", allocation_name), 1);
    assert!(pm.memory().is_empty());
}

#[test]
fn test_round_robin_release_each_turn() {
    let log = EventLog::new();
    let mut pm = manager(&log, RoundRobinMemory::ReleaseEachTurn);
    pm.push_process(Process::with_memory_pages("A", "1", 0.0, 5, 1, 2));
    pm.push_process(Process::with_memory_pages("B", "2", 0.0, 3, 1, 1));

    pm.round_robin(2).unwrap();

    // A runs three turns (2, 2, 1), B two turns (2, 1)
    assert_eq!(count_for(&log, "A", allocation_name), 3);
    assert_eq!(count_for(&log, "A", free_name), 3);
    assert_eq!(count_for(&log, "B", allocation_name), 2);
    assert_eq!(count_for(&log, "B", free_name), 2);
    assert!(pm.memory().is_empty());
}

#[test]
fn test_reset_releases_pages_and_progress() {
    let log = EventLog::new();
    let mut pm = manager(&log, RoundRobinMemory::RetainUntilExit);
    let idx = pm.push_process(Process::with_memory_pages("A", "1", 0.0, 4, 1, 2));

    pm.allocate(idx).unwrap();
    pm.execute(idx, Some(2)).unwrap();
    pm.reset_runtime_state().unwrap();

    let process = &pm.processes()[idx];
    assert_eq!(process.state, ProcessState::New);
    assert_eq!(process.execution_time, 0);
    assert_eq!(process.page_faults, 0);
    assert!(process.allocated_pages.is_empty());
    assert!(pm.memory().is_empty());
    // The counter is cumulative across resets
    assert_eq!(pm.cpu_time(), 2);
}

#[test]
fn test_small_address_space_reports_shortfall() {
    let log = EventLog::new();
    let mut pm = ProcessManager::builder()
        .without_store()
        .with_memory(MemoryTable::with_range(1, 2))
        .with_page_source(ScriptedPageSource::new().with_demands([3]))
        .with_observer(log.clone())
        .build();
    let idx = pm.add_process("Alice", "001", 85.0, 3, 2);

    let allocation = pm.allocate(idx).unwrap();

    assert!(allocation.is_short());
    assert_eq!(allocation.held, 2);
    assert_eq!(allocation.attempts, 30);
    assert_eq!(pm.memory().capacity(), 2);
    assert!(log.events().iter().any(|e| matches!(
        e,
        SimEvent::AllocationShort { held: 2, requested: 3, .. }
    )));
    assert!(pm.memory().is_consistent_with(pm.processes()));
}

#[test]
fn test_table_consistent_between_slices() {
    let log = EventLog::new();
    let mut pm = ProcessManager::builder()
        .without_store()
        .with_page_source(ScriptedPageSource::new().with_demands([2, 1]).with_pages([10, 11, 20]))
        .with_observer(log.clone())
        .build();
    let a = pm.add_process("A", "001", 80.0, 3, 1);
    let b = pm.add_process("B", "002", 80.0, 2, 1);

    pm.allocate(a).unwrap();
    pm.execute(a, Some(2)).unwrap();
    assert_eq!(
        pm.memory().entries().collect::<Vec<_>>(),
        vec![(10, "001"), (11, "001")]
    );
    assert!(pm.memory().is_consistent_with(pm.processes()));

    pm.allocate(b).unwrap();
    let slice = pm.execute(b, Some(2)).unwrap();
    assert!(slice.completed);
    assert_eq!(
        pm.memory().entries().collect::<Vec<_>>(),
        vec![(10, "001"), (11, "001"), (20, "002")]
    );
    assert!(pm.memory().is_consistent_with(pm.processes()));

    pm.free(b).unwrap();
    assert_eq!(pm.memory().pages_of("002"), Vec::<u32>::new());
    assert!(pm.memory().is_consistent_with(pm.processes()));

    let slice = pm.execute(a, Some(2)).unwrap();
    assert_eq!(slice.executed, 1);
    assert!(pm.memory().is_consistent_with(pm.processes()));
    pm.free(a).unwrap();
    assert!(pm.memory().is_empty());
    assert!(pm.processes().iter().all(|p| p.allocated_pages.is_empty()));
}
