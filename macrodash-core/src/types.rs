//! Normalized dataset records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use macrodash_types::{
    DashboardConfig, EffectiveFrequency, Frequency, HeaderLabels, IndicatorList, IndicatorQuery,
    MacroError, Method, NamedSeries, SeriesMeta, SeriesResponse, TableResponse, ViewFrequency,
};

/// One normalized row of the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,
    /// Display name of the indicator.
    pub name: String,
    /// Grouping key; equals `name` unless the source provides one.
    pub alias: String,
    /// Observed value; `None` when the cell is blank or not numeric.
    pub value: Option<f64>,
    /// Unit of measure, if any.
    pub unit: Option<String>,
    /// Native frequency declared by the row.
    pub freq: Frequency,
    /// Aggregation method declared by the row.
    pub method: Method,
}

/// A dated value of a derived indicator series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Observation date, or period-end date after resampling.
    pub date: NaiveDate,
    /// Value; `None` marks a missing observation or an empty period.
    pub value: Option<f64>,
}

impl SeriesPoint {
    /// Construct a point.
    #[must_use]
    pub const fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// Immutable collection of observations sorted by `(alias, date)`.
///
/// Serialized as a plain list of rows; deserializing re-sorts them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct Dataset {
    rows: Vec<Observation>,
}

impl Dataset {
    /// Build a dataset, sorting rows by `(alias, date)`.
    ///
    /// The sort is stable: rows sharing an alias and date keep their source order.
    #[must_use]
    pub fn from_observations(mut rows: Vec<Observation>) -> Self {
        rows.sort_by(|a, b| a.alias.cmp(&b.alias).then(a.date.cmp(&b.date)));
        Self { rows }
    }

    /// All rows in `(alias, date)` order.
    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Contiguous rows of one alias, in date order. Empty for unknown aliases.
    #[must_use]
    pub fn select(&self, alias: &str) -> &[Observation] {
        let start = self.rows.partition_point(|r| r.alias.as_str() < alias);
        let len = self.rows[start..].partition_point(|r| r.alias == alias);
        &self.rows[start..start + len]
    }

    /// Distinct aliases in ascending order.
    #[must_use]
    pub fn aliases(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.rows {
            if out.last() != Some(&r.alias.as_str()) {
                out.push(&r.alias);
            }
        }
        out
    }

    /// Alias of the first row, used when a request names no indicator.
    #[must_use]
    pub fn first_alias(&self) -> Option<&str> {
        self.rows.first().map(|r| r.alias.as_str())
    }
}

impl From<Vec<Observation>> for Dataset {
    fn from(rows: Vec<Observation>) -> Self {
        Self::from_observations(rows)
    }
}

impl From<Dataset> for Vec<Observation> {
    fn from(dataset: Dataset) -> Self {
        dataset.rows
    }
}
