//! Macrodash serves a spreadsheet of macroeconomic indicators as tables and
//! chart series at a chosen reporting frequency.
//!
//! Overview
//! - A [`Dashboard`] owns a dataset cache keyed by the data file's
//!   modification time: edits to the file are picked up on the next request,
//!   an unchanged file is parsed once.
//! - Each request selects one indicator by alias, applies the frequency lock
//!   table, resamples to the effective frequency, filters by date and formats
//!   the result.
//!
//! Key behaviors and trade-offs
//! - Resampling: `avg` indicators take the mean of each period, `eop`
//!   indicators its last value; periods are labelled with their last day and
//!   empty periods are kept as missing values.
//! - Locks: a locked alias ignores the requested view frequency, `AUTO`
//!   included.
//! - Leniency: unknown aliases, malformed date bounds and unrecognized codes
//!   degrade to documented defaults. Only loading the dataset can fail.
//!
//! Examples
//! ```rust,no_run
//! use macrodash::{Dashboard, IndicatorQuery};
//!
//! let dash = Dashboard::builder().data_file("data/macro_data.csv").build()?;
//! let table = dash.table(
//!     &IndicatorQuery::new("USD/RUB")
//!         .view_frequency("Q")
//!         .date_from("2024-01-01"),
//! )?;
//! for [date, value] in &table.rows {
//!     println!("{date}\t{value}");
//! }
//! # Ok::<(), macrodash::MacroError>(())
//! ```
#![warn(missing_docs)]

mod core;
mod views;

pub use crate::core::{Dashboard, DashboardBuilder};
pub use macrodash_core::{
    Cell, DashboardConfig, Dataset, DatasetCache, EffectiveFrequency, Frequency, HeaderLabels,
    IndicatorList, IndicatorQuery, MacroError, Method, NamedSeries, Observation, RawTable,
    SeriesMeta, SeriesResponse, TableResponse, TableSource, ViewFrequency,
};
