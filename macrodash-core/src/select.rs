//! Select-lock-resample-filter pipeline shared by the table and series views.

use std::collections::BTreeMap;

use crate::format::{iso_date, table_date, table_value, value_header};
use crate::timeseries::filter::DateWindow;
use crate::timeseries::resample::resample_to_effective;
use crate::{
    DashboardConfig, Dataset, EffectiveFrequency, Frequency, IndicatorQuery, Method, Observation,
    SeriesMeta, SeriesPoint, TableResponse, ViewFrequency,
};

/// Resolve the frequency a series is rendered at.
///
/// A lock for `alias` wins over everything, including `Auto`. Otherwise `Auto`
/// means native and any other request is used verbatim.
#[must_use]
pub fn effective_frequency(
    alias: &str,
    native: Frequency,
    view: &ViewFrequency,
    locks: &BTreeMap<String, Frequency>,
) -> EffectiveFrequency {
    if let Some(locked) = locks.get(alias) {
        return EffectiveFrequency::Fixed(*locked);
    }
    match view {
        ViewFrequency::Auto => EffectiveFrequency::Fixed(native),
        ViewFrequency::Fixed(f) => EffectiveFrequency::Fixed(*f),
        ViewFrequency::Unrecognized(raw) => EffectiveFrequency::Unrecognized(raw.clone()),
    }
}

/// Resolved view of one indicator, before output formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorView {
    /// Frequency of the first row of the alias group.
    pub native: Frequency,
    /// Frequency the points are expressed in.
    pub effective: EffectiveFrequency,
    /// Display name of the first row.
    pub display_name: String,
    /// First non-blank unit of the group, or empty.
    pub unit: String,
    /// Method of the first row.
    pub method: Method,
    /// Resampled and filtered points in date order.
    pub points: Vec<SeriesPoint>,
}

/// Run the shared pipeline. Returns `None` for an alias without rows.
#[must_use]
pub fn indicator_view(dataset: &Dataset, query: &IndicatorQuery, cfg: &DashboardConfig) -> Option<IndicatorView> {
    let rows: &[Observation] = dataset.select(&query.alias);
    let first = rows.first()?;

    let native = first.freq;
    let method = first.method;
    let effective = effective_frequency(&query.alias, native, &query.view_frequency, &cfg.frequency_locks);

    let mut points: Vec<SeriesPoint> = rows.iter().map(|r| SeriesPoint::new(r.date, r.value)).collect();
    points.sort_by_key(|p| p.date);

    if !effective.is_native(native) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            alias = %query.alias,
            native = %native,
            effective = %effective,
            method = %method,
            points = points.len(),
            "resampling indicator"
        );
        points = resample_to_effective(points, &effective, method);
    }

    let window = DateWindow::parse(query.date_from.as_deref(), query.date_to.as_deref());
    let points = window.apply(points);

    let unit = rows
        .iter()
        .find_map(|r| r.unit.as_deref().filter(|u| !u.trim().is_empty()))
        .unwrap_or_default()
        .to_string();

    Some(IndicatorView {
        native,
        effective,
        display_name: first.name.clone(),
        unit,
        method,
        points,
    })
}

/// Build the human-formatted table for one indicator.
///
/// Unknown aliases produce an empty table whose value column is the alias
/// itself and whose native frequency is `Monthly`.
#[must_use]
pub fn build_table(dataset: &Dataset, query: &IndicatorQuery, cfg: &DashboardConfig) -> TableResponse {
    let labels = &cfg.labels;
    let Some(view) = indicator_view(dataset, query, cfg) else {
        return TableResponse {
            columns: [labels.date.clone(), query.alias.clone()],
            rows: Vec::new(),
            total: 0,
            native_frequency: Frequency::Monthly,
        };
    };

    let rows: Vec<[String; 2]> = view
        .points
        .iter()
        .map(|p| [table_date(p.date), table_value(p.value)])
        .collect();

    TableResponse {
        columns: [
            labels.date.clone(),
            value_header(&view.display_name, view.method, &view.unit, labels),
        ],
        total: rows.len(),
        rows,
        native_frequency: view.native,
    }
}

/// Chart-ready series: ISO dates, optional values and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    /// ISO `YYYY-MM-DD` dates.
    pub x: Vec<String>,
    /// Values aligned with `x`.
    pub y: Vec<Option<f64>>,
    /// Descriptive metadata.
    pub meta: SeriesMeta,
}

/// Build the numeric series for one indicator.
///
/// Unknown aliases produce empty `x`/`y` and metadata carrying only the
/// `Monthly` native frequency.
#[must_use]
pub fn build_series(dataset: &Dataset, query: &IndicatorQuery, cfg: &DashboardConfig) -> SeriesData {
    let Some(view) = indicator_view(dataset, query, cfg) else {
        return SeriesData {
            x: Vec::new(),
            y: Vec::new(),
            meta: SeriesMeta::empty(),
        };
    };

    let (x, y) = view.points.iter().map(|p| (iso_date(p.date), p.value)).unzip();
    SeriesData {
        x,
        y,
        meta: SeriesMeta {
            native_frequency: view.native,
            effective_frequency: Some(view.effective),
            display_name: Some(view.display_name),
            unit: Some(view.unit),
            method: Some(view.method),
        },
    }
}
