//! macrodash-core
//!
//! Dataset loading and the frequency-resampling engine behind the macrodash
//! indicator dashboard.
//!
//! - `source`: raw table readers for CSV and spreadsheet files.
//! - `schema`: synonym-based column resolution and row normalization.
//! - `cache`: modification-time keyed cache of the parsed dataset.
//! - `timeseries`: period arithmetic, resampling and date filtering.
//! - `select`: the select-lock-resample-filter pipeline and its two outputs.
//! - `format`: table and axis formatting.
//!
//! Everything here is synchronous. The only shared mutable state is the
//! [`DatasetCache`] snapshot, guarded by a mutex and handed out as an
//! immutable `Arc<Dataset>`.
#![warn(missing_docs)]

/// Modification-time keyed dataset cache.
pub mod cache;
/// Table and axis formatting helpers.
pub mod format;
/// Column resolution and row normalization.
pub mod schema;
/// Selection pipeline producing tables and chart series.
pub mod select;
/// Raw table readers.
pub mod source;
/// Time-series utilities for resampling and filtering.
pub mod timeseries;
pub mod types;

pub use cache::DatasetCache;
pub use select::{IndicatorView, SeriesData, build_series, build_table, effective_frequency};
pub use source::{Cell, CsvSource, RawTable, SpreadsheetSource, TableSource, source_for_path};
pub use timeseries::filter::DateWindow;
pub use timeseries::resample::{resample_to_effective, resample_to_frequency};
pub use types::*;
