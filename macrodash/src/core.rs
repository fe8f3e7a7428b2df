use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use macrodash_core::{
    DashboardConfig, Dataset, DatasetCache, Frequency, HeaderLabels, IndicatorQuery, MacroError,
    TableSource,
};

/// Dashboard core: a cached dataset plus the rules for viewing it.
#[derive(Debug)]
pub struct Dashboard {
    pub(crate) cache: DatasetCache,
    pub(crate) cfg: DashboardConfig,
}

/// Builder for constructing a [`Dashboard`] with custom configuration.
pub struct DashboardBuilder {
    cfg: DashboardConfig,
    data_file: Option<PathBuf>,
    source: Option<Arc<dyn TableSource>>,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with the default locks, orderings and labels.
    ///
    /// Behavior and trade-offs:
    /// - Starts without a data file; you must set one via [`data_file`](Self::data_file)
    ///   or [`config`](Self::config) before [`build`](Self::build).
    /// - Defaults lock `Инфляция, % м/м` to monthly and `ВВП, % г/г` to annual,
    ///   list `USD/RUB` first and use English table labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: DashboardConfig::default(),
            data_file: None,
            source: None,
        }
    }

    /// Replace the whole configuration, including its data file.
    ///
    /// Behavior and trade-offs:
    /// - Overwrites anything set earlier on this builder; call the finer-grained
    ///   modifiers afterwards to adjust individual settings.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.data_file = Some(cfg.data_file.clone());
        self.cfg = cfg;
        self
    }

    /// Set the spreadsheet or CSV file backing the dataset.
    ///
    /// The format is picked from the extension when the dataset is first read,
    /// so an unsupported file only fails on the first request.
    #[must_use]
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Select the workbook sheet. `None` or a blank name reads the first sheet.
    #[must_use]
    pub fn sheet(mut self, sheet: Option<String>) -> Self {
        self.cfg.sheet = sheet;
        self
    }

    /// Force `alias` to be shown at `freq` whatever the request asks for.
    ///
    /// Behavior and trade-offs:
    /// - A lock also overrides `AUTO`, so the native frequency is never shown
    ///   for a locked alias.
    /// - Locking a lower frequency than the native one keeps the native rows;
    ///   resampling only ever aggregates into the locked periods.
    #[must_use]
    pub fn lock_frequency(mut self, alias: impl Into<String>, freq: Frequency) -> Self {
        self.cfg.frequency_locks.insert(alias.into(), freq);
        self
    }

    /// Replace the lock table.
    #[must_use]
    pub fn frequency_locks(mut self, locks: BTreeMap<String, Frequency>) -> Self {
        self.cfg.frequency_locks = locks;
        self
    }

    /// Aliases listed first by [`Dashboard::indicators`], in this order.
    ///
    /// Behavior and trade-offs:
    /// - Aliases missing from the dataset are skipped, not reported.
    /// - Remaining aliases follow in ascending order.
    #[must_use]
    pub fn preferred_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.preferred_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Candidates for [`Dashboard::landing_alias`], tried in order.
    #[must_use]
    pub fn landing_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.landing_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Labels used in the table header.
    #[must_use]
    pub fn labels(mut self, labels: HeaderLabels) -> Self {
        self.cfg.labels = labels;
        self
    }

    /// Read the data file through `source` instead of choosing a reader by
    /// extension.
    #[must_use]
    pub fn table_source(mut self, source: Arc<dyn TableSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the `Dashboard`.
    ///
    /// Nothing is read here; the data file is first opened by the first request.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no data file has been set, or the path is empty.
    pub fn build(mut self) -> Result<Dashboard, MacroError> {
        let Some(path) = self.data_file.filter(|p| !p.as_os_str().is_empty()) else {
            return Err(MacroError::InvalidArg(
                "no data file set; add one via data_file(...) or config(...)".to_string(),
            ));
        };
        self.cfg.data_file = path;
        self.cfg.sheet = macrodash_types::normalize_sheet(self.cfg.sheet);

        let mut cache = DatasetCache::from_config(&self.cfg);
        if let Some(source) = self.source {
            cache = cache.with_source(source);
        }
        Ok(Dashboard {
            cache,
            cfg: self.cfg,
        })
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    ///
    /// ```rust,no_run
    /// use macrodash::{Dashboard, Frequency};
    ///
    /// let dash = Dashboard::builder()
    ///     .data_file("data/macro_data.xlsx")
    ///     .sheet(Some("main".into()))
    ///     .lock_frequency("ВВП, % г/г", Frequency::Annual)
    ///     .build()?;
    /// let list = dash.indicators()?;
    /// # Ok::<(), macrodash::MacroError>(())
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Dashboard for an already assembled configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `cfg.data_file` is empty.
    pub fn from_config(cfg: DashboardConfig) -> Result<Self, MacroError> {
        DashboardBuilder::new().config(cfg).build()
    }

    /// Dashboard configured from `DATA_FILE` and `MAIN_SHEET`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `DATA_FILE` resolves to an empty path.
    pub fn from_env() -> Result<Self, MacroError> {
        Self::from_config(DashboardConfig::from_env())
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }

    /// Underlying dataset cache.
    #[must_use]
    pub const fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Current dataset snapshot, reloading it if the file changed.
    ///
    /// # Errors
    /// Propagates the cache's load errors.
    pub fn dataset(&self) -> Result<Arc<Dataset>, MacroError> {
        let res = self.cache.get_current_dataset();
        #[cfg(feature = "tracing")]
        if let Err(e) = &res {
            tracing::warn!(path = %self.cache.path().display(), error = %e, "dataset load failed");
        }
        res
    }

    /// Fill in a blank alias with the alias of the dataset's first row.
    pub(crate) fn resolve_query(dataset: &Dataset, query: &IndicatorQuery) -> IndicatorQuery {
        let mut q = query.clone();
        if q.alias.trim().is_empty() {
            q.alias = dataset.first_alias().unwrap_or_default().to_string();
        }
        q
    }
}
