//! Macrodash data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod frequency;
mod reports;

pub use config::{DATA_FILE_ENV, DashboardConfig, HeaderLabels, SHEET_ENV, normalize_sheet};
pub use error::MacroError;
pub use frequency::{EffectiveFrequency, Frequency, Method, ViewFrequency};
pub use reports::{
    IndicatorList, IndicatorQuery, NamedSeries, SeriesMeta, SeriesResponse, TableResponse,
};
