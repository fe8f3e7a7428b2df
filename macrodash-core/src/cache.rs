//! Modification-time keyed cache of the parsed dataset.
//!
//! Each call stats the backing file. The parsed dataset is reused while the
//! file's modification time is unchanged and rebuilt from scratch otherwise.
//! Readers share an immutable `Arc<Dataset>` snapshot; a reload replaces the
//! whole snapshot, so concurrent callers can at worst parse the file twice.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use crate::source::{TableSource, source_for_path};
use crate::{DashboardConfig, Dataset, MacroError, schema};

struct Snapshot {
    modified: SystemTime,
    dataset: Arc<Dataset>,
}

/// Cache of the dataset backing a dashboard.
pub struct DatasetCache {
    path: PathBuf,
    sheet: Option<String>,
    source: Option<Arc<dyn TableSource>>,
    state: Mutex<Option<Snapshot>>,
    loads: AtomicUsize,
}

impl std::fmt::Debug for DatasetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetCache")
            .field("path", &self.path)
            .field("sheet", &self.sheet)
            .field("loads", &self.loads())
            .finish_non_exhaustive()
    }
}

impl DatasetCache {
    /// Cache for `path`. `sheet` selects a workbook sheet; `None` or a blank
    /// name means the first sheet.
    pub fn new(path: impl Into<PathBuf>, sheet: Option<String>) -> Self {
        Self {
            path: path.into(),
            sheet: macrodash_types::normalize_sheet(sheet),
            source: None,
            state: Mutex::new(None),
            loads: AtomicUsize::new(0),
        }
    }

    /// Cache for the data file and sheet named in `cfg`.
    #[must_use]
    pub fn from_config(cfg: &DashboardConfig) -> Self {
        Self::new(cfg.data_file.clone(), cfg.sheet.clone())
    }

    /// Read through `source` instead of picking one by file extension.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn TableSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of times the file has been parsed (successfully or not).
    #[must_use]
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Return the current dataset, reloading it if the file changed.
    ///
    /// # Errors
    /// - `DataFileMissing` if the file cannot be stat'ed or the sheet is absent.
    /// - `UnsupportedFormat` if the extension has no table source.
    /// - `InvalidSchema` if a required column is missing.
    /// - `Data` if the content cannot be parsed.
    ///
    /// A failed reload leaves the previous snapshot untouched.
    pub fn get_current_dataset(&self) -> Result<Arc<Dataset>, MacroError> {
        let modified = self.modified()?;

        if let Some(snap) = self.lock().as_ref()
            && snap.modified == modified
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %self.path.display(), "dataset cache hit");
            return Ok(Arc::clone(&snap.dataset));
        }

        let dataset = Arc::new(self.reload()?);
        *self.lock() = Some(Snapshot {
            modified,
            dataset: Arc::clone(&dataset),
        });
        Ok(dataset)
    }

    /// Drop the cached snapshot so the next call reparses the file.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> MutexGuard<'_, Option<Snapshot>> {
        // The snapshot is replaced wholesale, so a poisoned guard still holds
        // a consistent value.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn modified(&self) -> Result<SystemTime, MacroError> {
        std::fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(|e| MacroError::data_file_missing(self.path.display().to_string(), e.to_string()))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macrodash::cache::reload",
            skip(self),
            fields(path = %self.path.display(), sheet = ?self.sheet),
            err,
        )
    )]
    fn reload(&self) -> Result<Dataset, MacroError> {
        let source: &dyn TableSource = match &self.source {
            Some(s) => s.as_ref(),
            None => source_for_path(&self.path)?,
        };
        self.loads.fetch_add(1, Ordering::SeqCst);

        let source_name = match &self.sheet {
            Some(sheet) => format!("{} [{sheet}]", self.path.display()),
            None => self.path.display().to_string(),
        };
        let table = source.read(&self.path, self.sheet.as_deref())?;
        let dataset = schema::normalize(&table, &source_name)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            source = source.name(),
            rows = dataset.len(),
            aliases = dataset.aliases().len(),
            "dataset reloaded"
        );
        Ok(dataset)
    }
}
