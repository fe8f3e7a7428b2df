use std::path::PathBuf;

use macrodash::Dashboard;
use tempfile::TempDir;

/// Fixture dataset written to a temporary CSV file.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("macro_data.csv");
    macrodash_mock::write_csv(&path, &macrodash_mock::observations()).unwrap();
    Fixture { _dir: dir, path }
}

pub fn dashboard(fx: &Fixture) -> Dashboard {
    Dashboard::builder().data_file(&fx.path).build().unwrap()
}
