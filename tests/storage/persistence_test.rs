/*!
 * Persistence Round-Trip Tests
 * Processes added through one manager and reloaded by another
 */

use pretty_assertions::assert_eq;
use procsim::{EventLog, ProcessManager, ProcessState, ScriptedPageSource, SimConfig, SimEvent};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn manager_at(path: &Path, log: &EventLog, source: ScriptedPageSource) -> ProcessManager {
    ProcessManager::builder()
        .with_config(SimConfig::default().with_store_path(path))
        .with_page_source(source)
        .with_observer(log.clone())
        .build()
}

#[test]
fn test_added_process_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("processes.txt");

    let log = EventLog::new();
    let mut first = manager_at(&path, &log, ScriptedPageSource::new().with_demands([3]));
    first.add_process("Dana", "004", 88.25, 5, 7);
    first.add_process("Eve", "005", 61.0, 1, -1);

    let log = EventLog::new();
    let mut second = manager_at(&path, &log, ScriptedPageSource::new().with_demands([1, 2]));
    let loaded = second.load().unwrap();

    assert_eq!(loaded, 2);
    let reloaded: Vec<_> = second.processes().iter().map(|p| p.record()).collect();
    let original: Vec<_> = first.processes().iter().map(|p| p.record()).collect();
    assert_eq!(reloaded, original);

    // Page demand is redrawn, runtime state starts fresh
    assert_eq!(second.processes()[0].memory_pages, 1);
    assert_eq!(second.processes()[1].memory_pages, 2);
    assert_eq!(second.processes()[0].state, ProcessState::New);
}

#[test]
fn test_load_does_not_reappend() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("processes.txt");

    let log = EventLog::new();
    let mut first = manager_at(&path, &log, ScriptedPageSource::new());
    first.add_sample_processes();
    let before = fs::read_to_string(&path).unwrap();

    let mut second = manager_at(&path, &log, ScriptedPageSource::new());
    second.load().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(before.lines().count(), 3);
}

#[test]
fn test_missing_store_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nothing.txt");
    let log = EventLog::new();
    let mut pm = manager_at(&path, &log, ScriptedPageSource::new());

    let loaded = pm.load().unwrap();

    assert_eq!(loaded, 0);
    assert!(pm.processes().is_empty());
    assert!(matches!(log.events()[0], SimEvent::StoreMissing { .. }));
}

#[test]
fn test_malformed_record_reported_and_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("processes.txt");
    fs::write(&path, "Alice | 001 | 85.0 | 3 | 2\nnot a record\n").unwrap();
    let log = EventLog::new();
    let mut pm = manager_at(&path, &log, ScriptedPageSource::new());

    let loaded = pm.load().unwrap();

    assert_eq!(loaded, 1);
    let skipped: Vec<usize> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            SimEvent::RecordSkipped { line, .. } => Some(*line),
            _ => None,
        })
        .collect();
    assert_eq!(skipped, vec![2]);
}

#[test]
fn test_unwritable_store_keeps_process_active() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be opened for appending
    let log = EventLog::new();
    let mut pm = manager_at(dir.path(), &log, ScriptedPageSource::new());

    let idx = pm.add_process("Alice", "001", 85.0, 3, 2);

    assert_eq!(pm.processes()[idx].name, "Alice");
    assert!(log
        .events()
        .iter()
        .any(|e| matches!(e, SimEvent::StoreWriteFailed { .. })));
}

#[test]
fn test_unstorable_names_refused_not_lost() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("processes.txt");

    let log = EventLog::new();
    let mut first = manager_at(&path, &log, ScriptedPageSource::new());
    first.add_process("Ann|Lee", "010", 70.0, 2, 1);
    first.add_process("  Pad ", "011", 71.0, 2, 1);
    first.add_process("Ok", "012", 72.0, 2, 1);

    // Refused records stay active and are reported at add time
    assert_eq!(first.processes().len(), 3);
    let failures = log
        .events()
        .iter()
        .filter(|e| matches!(e, SimEvent::StoreWriteFailed { .. }))
        .count();
    assert_eq!(failures, 2);

    let log = EventLog::new();
    let mut second = manager_at(&path, &log, ScriptedPageSource::new());
    assert_eq!(second.load().unwrap(), 1);
    assert_eq!(second.processes()[0].record(), first.processes()[2].record());
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
}
