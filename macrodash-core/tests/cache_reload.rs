use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use macrodash_core::{CsvSource, DatasetCache, MacroError, RawTable, TableSource};

const HEADER: &str = "Date,Name,Alias,Value,Unit,Freq,Method\n";

fn write_with_mtime(path: &Path, body: &str, mtime: SystemTime) {
    fs::write(path, body).expect("write fixture");
    fs::File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(mtime))
        .expect("set mtime");
}

fn t0() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

fn fixture(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("macro.csv");
    write_with_mtime(&path, &format!("{HEADER}{body}"), t0());
    path
}

#[test]
fn unchanged_file_is_parsed_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "2024-01-15,USD/RUB,,90.0,RUB,M,avg\n");
    let cache = DatasetCache::new(&path, None);

    let first = cache.get_current_dataset().unwrap();
    let second = cache.get_current_dataset().unwrap();

    assert_eq!(cache.loads(), 1, "second call should be served from cache");
    assert_eq!(*first, *second);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.aliases(), vec!["USD/RUB"]);
}

#[test]
fn changed_mtime_triggers_full_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "2024-01-15,USD/RUB,,90.0,RUB,M,avg\n");
    let cache = DatasetCache::new(&path, None);
    let before = cache.get_current_dataset().unwrap();

    write_with_mtime(
        &path,
        &format!("{HEADER}2024-01-15,USD/RUB,,90.0,RUB,M,avg\n2024-02-15,USD/RUB,,92.0,RUB,M,avg\n"),
        t0() + Duration::from_secs(60),
    );
    let after = cache.get_current_dataset().unwrap();

    assert_eq!(cache.loads(), 2);
    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
}

#[test]
fn snapshot_survives_later_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "2024-01-15,A,,1,,M,avg\n");
    let cache = DatasetCache::new(&path, None);
    let held = cache.get_current_dataset().unwrap();

    write_with_mtime(&path, &format!("{HEADER}2024-01-15,B,,2,,M,avg\n"), t0() + Duration::from_secs(1));
    let fresh = cache.get_current_dataset().unwrap();

    assert_eq!(held.aliases(), vec!["A"]);
    assert_eq!(fresh.aliases(), vec!["B"]);
}

#[test]
fn missing_file_is_data_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let cache = DatasetCache::new(dir.path().join("absent.csv"), None);
    let err = cache.get_current_dataset().unwrap_err();
    assert!(matches!(err, MacroError::DataFileMissing { .. }), "{err:?}");
    assert_eq!(cache.loads(), 0);
}

#[test]
fn deleting_the_file_fails_even_with_a_warm_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "2024-01-15,A,,1,,M,avg\n");
    let cache = DatasetCache::new(&path, None);
    cache.get_current_dataset().unwrap();

    fs::remove_file(&path).unwrap();
    assert!(matches!(
        cache.get_current_dataset(),
        Err(MacroError::DataFileMissing { .. })
    ));
}

#[test]
fn unknown_extension_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("macro.json");
    fs::write(&path, "{}").unwrap();
    let err = DatasetCache::new(&path, None).get_current_dataset().unwrap_err();
    assert_eq!(err, MacroError::unsupported_format(".json"));
}

#[test]
fn missing_column_is_invalid_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("macro.csv");
    fs::write(&path, "Date,Name,Value,Unit,Freq\n2024-01-15,A,1,,M\n").unwrap();
    let err = DatasetCache::new(&path, None).get_current_dataset().unwrap_err();
    assert!(matches!(err, MacroError::InvalidSchema { ref column, .. } if column == "Method"), "{err:?}");
}

#[test]
fn failed_reload_is_retried_on_next_call() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "2024-01-15,A,,1,,M,avg\n");
    let cache = DatasetCache::new(&path, None);
    cache.get_current_dataset().unwrap();

    write_with_mtime(&path, &format!("{HEADER}garbage,A,,1,,M,avg\n"), t0() + Duration::from_secs(5));
    assert!(matches!(cache.get_current_dataset(), Err(MacroError::Data(_))));
    assert!(matches!(cache.get_current_dataset(), Err(MacroError::Data(_))));
    assert_eq!(cache.loads(), 3);

    write_with_mtime(&path, &format!("{HEADER}2024-03-15,C,,3,,M,avg\n"), t0() + Duration::from_secs(10));
    assert_eq!(cache.get_current_dataset().unwrap().aliases(), vec!["C"]);
}

#[test]
fn invalidate_forces_reparse() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "2024-01-15,A,,1,,M,avg\n");
    let cache = DatasetCache::new(&path, None);
    cache.get_current_dataset().unwrap();
    cache.invalidate();
    cache.get_current_dataset().unwrap();
    assert_eq!(cache.loads(), 2);
}

struct CountingSource {
    reads: Arc<AtomicUsize>,
}

impl TableSource for CountingSource {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn read(&self, path: &Path, sheet: Option<&str>) -> Result<RawTable, MacroError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        CsvSource.read(path, sheet)
    }
}

#[test]
fn injected_source_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("macro.dat");
    write_with_mtime(&path, &format!("{HEADER}2024-01-15,A,,1,,M,avg\n"), t0());

    let reads = Arc::new(AtomicUsize::new(0));
    let cache = DatasetCache::new(&path, Some("ignored".into()))
        .with_source(Arc::new(CountingSource { reads: reads.clone() }));

    for _ in 0..3 {
        assert_eq!(cache.get_current_dataset().unwrap().len(), 1);
    }
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[test]
fn concurrent_readers_see_consistent_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(&dir, "2024-01-15,A,,1,,M,avg\n2024-02-15,A,,2,,M,avg\n");
    let cache = Arc::new(DatasetCache::new(&path, None));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.get_current_dataset().map(|d| d.len()))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Ok(2));
    }
    assert!(cache.loads() >= 1);
}
