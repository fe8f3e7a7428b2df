//! Request and response envelopes exchanged with the request-handling layer.

use serde::{Deserialize, Serialize};

use crate::frequency::{EffectiveFrequency, Frequency, Method, ViewFrequency};

/// Selection of one indicator with an optional date window.
///
/// Date bounds are kept as raw strings: malformed bounds are ignored at
/// filter time instead of being rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorQuery {
    /// Alias of the indicator. Blank selects the dataset's first alias.
    pub alias: String,
    /// Inclusive lower date bound.
    pub date_from: Option<String>,
    /// Inclusive upper date bound.
    pub date_to: Option<String>,
    /// Requested view frequency, `AUTO` by default.
    pub view_frequency: ViewFrequency,
}

impl IndicatorQuery {
    /// Query an alias at its native frequency over the full history.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::default()
        }
    }

    /// Set the requested view frequency from a raw caller string.
    #[must_use]
    pub fn view_frequency(mut self, raw: &str) -> Self {
        self.view_frequency = ViewFrequency::parse(raw);
        self
    }

    /// Set the inclusive lower date bound.
    #[must_use]
    pub fn date_from(mut self, raw: impl Into<String>) -> Self {
        self.date_from = Some(raw.into());
        self
    }

    /// Set the inclusive upper date bound.
    #[must_use]
    pub fn date_to(mut self, raw: impl Into<String>) -> Self {
        self.date_to = Some(raw.into());
        self
    }
}

/// Human-formatted table for one indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableResponse {
    /// Date column header and value column header.
    pub columns: [String; 2],
    /// `[DD.MM.YYYY, formatted value]` pairs in date order.
    pub rows: Vec<[String; 2]>,
    /// Number of rows.
    pub total: usize,
    /// Native frequency of the indicator (`Monthly` when unknown).
    pub native_frequency: Frequency,
}

/// Descriptive metadata accompanying a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMeta {
    /// Native frequency of the indicator (`Monthly` when unknown).
    pub native_frequency: Frequency,
    /// Frequency the series was rendered at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_frequency: Option<EffectiveFrequency>,
    /// Display name of the indicator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Unit of measure; empty when the dataset carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Aggregation method of the indicator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
}

impl SeriesMeta {
    /// Metadata for an alias with no rows.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            native_frequency: Frequency::Monthly,
            effective_frequency: None,
            display_name: None,
            unit: None,
            method: None,
        }
    }
}

/// One named line of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    /// Legend label.
    pub name: String,
    /// Values aligned with the response's `x`; `None` marks a missing value.
    pub y: Vec<Option<f64>>,
}

/// Chart-ready series for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    /// ISO `YYYY-MM-DD` dates.
    pub x: Vec<String>,
    /// Series sharing the `x` axis.
    pub series: Vec<NamedSeries>,
    /// Descriptive metadata.
    pub meta: SeriesMeta,
}

/// Aliases available in the current dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndicatorList {
    /// Preferred aliases first, then the rest in ascending order.
    pub indicators: Vec<String>,
}
