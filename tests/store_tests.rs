//! Persistence tests - JSON progress file round trips and tolerant reads

use tui_tenpair::store::{Progress, ProgressStore};

#[test]
fn test_save_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));

    let mut progress = Progress::default();
    progress.record_score(240);
    progress.toggle_day(1);
    progress.toggle_day(17);
    progress.toggle_day(30);
    store.save(&progress).unwrap();

    assert_eq!(store.load(), progress);
    assert!(store.load().is_day_done(17));
    assert!(!store.load().is_day_done(2));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("deep").join("nested").join("progress.json"));

    store.save(&Progress::default()).unwrap();
    assert!(store.path().exists());
}

#[test]
fn test_corrupt_file_loads_as_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, "{ not json at all").unwrap();

    let store = ProgressStore::at(&path);
    assert_eq!(store.load(), Progress::default());
}

#[test]
fn test_partial_document_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, r#"{"high_score": 80}"#).unwrap();

    let store = ProgressStore::at(&path);
    let progress = store.load();
    assert_eq!(progress.high_score, 80);
    assert!(progress.daily.is_empty());
}

#[test]
fn test_clear_removes_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));

    store.save(&Progress::default()).unwrap();
    assert!(store.path().exists());

    store.clear().unwrap();
    assert!(!store.path().exists());

    // Clearing again is not an error.
    store.clear().unwrap();
}

#[test]
fn test_overwrite_replaces_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));

    let mut first = Progress::default();
    first.toggle_day(3);
    store.save(&first).unwrap();

    let mut second = Progress::default();
    second.record_score(10);
    store.save(&second).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.high_score, 10);
    assert!(!loaded.is_day_done(3));
}
