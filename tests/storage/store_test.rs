/*!
 * Process Store Tests
 * Loading and appending the flat record file
 */

use pretty_assertions::assert_eq;
use procsim::storage::RecordField;
use procsim::{ProcessRecord, ProcessStore, RecordParseError};
use std::fs;
use tempfile::TempDir;

fn record(name: &str, id: &str, grade: f64, burst: u32, priority: i32) -> ProcessRecord {
    ProcessRecord {
        name: name.to_string(),
        id: id.to_string(),
        grade,
        cpu_burst: burst,
        priority,
    }
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = ProcessStore::new(dir.path().join("absent.txt"));

    let outcome = store.load().unwrap();

    assert!(outcome.missing);
    assert!(outcome.records.is_empty());
    assert!(outcome.skipped.is_empty());
}

#[test]
fn test_append_creates_and_extends_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("processes.txt");
    let store = ProcessStore::new(&path);

    store.append(&record("Alice", "001", 85.0, 3, 2)).unwrap();
    store.append(&record("Bob", "002", 90.5, 2, 4)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Alice | 001 | 85.0 | 3 | 2\nBob | 002 | 90.5 | 2 | 4\n");
}

#[test]
fn test_append_never_rewrites_existing_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("processes.txt");
    fs::write(&path, "Old|000|1|1|1\n").unwrap();
    let store = ProcessStore::new(&path);

    store.append(&record("New", "009", 2.5, 1, 1)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Old|000|1|1|1\n"));
    assert!(contents.ends_with("New | 009 | 2.5 | 1 | 1\n"));
}

#[test]
fn test_load_skips_malformed_and_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("processes.txt");
    fs::write(
        &path,
        "Alice | 001 | 85.0 | 3 | 2\n\nBroken | 002\nBob | 002 | ninety | 2 | 4\nCharlie|003|78.2|4|3\n",
    )
    .unwrap();
    let store = ProcessStore::new(&path);

    let outcome = store.load().unwrap();

    assert!(!outcome.missing);
    assert_eq!(
        outcome.records,
        vec![
            record("Alice", "001", 85.0, 3, 2),
            record("Charlie", "003", 78.2, 4, 3),
        ]
    );
    assert_eq!(
        outcome.skipped,
        vec![
            RecordParseError::FieldCount { line: 3, found: 2 },
            RecordParseError::InvalidField {
                line: 4,
                field: RecordField::Grade,
                value: "ninety".to_string(),
            },
        ]
    );
}

#[test]
fn test_load_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = ProcessStore::new(dir.path());

    assert!(store.load().is_err());
}
