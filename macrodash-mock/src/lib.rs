//! Deterministic macro indicator fixtures for CI-safe tests and demos.
//!
//! The fixture covers every alias the default dashboard configuration knows
//! about plus one extra (`Brent`) so that ordering and locking rules have
//! something to act on. [`write_csv`] puts the rows on disk in the layout the
//! dataset cache reads.
use std::path::Path;

use macrodash_core::{Dataset, Observation};

mod fixtures;

/// Canonical header row written by [`write_csv`].
pub const CANONICAL_HEADERS: [&str; 7] = ["Date", "Name", "Alias", "Value", "Unit", "Freq", "Method"];

/// Russian header row, resolved through the column synonym table.
pub const RUSSIAN_HEADERS: [&str; 7] = [
    "Дата",
    "Наименование",
    "Псевдоним",
    "Значение",
    "Единицы",
    "Частота",
    "Метод",
];

/// Aliases present in [`observations`], in ascending order.
pub const ALIASES: [&str; 5] = [
    "Brent",
    "USD/RUB",
    "ВВП, % г/г",
    "Инфляция, % м/м",
    "Ключевая ставка",
];

/// Fixture rows for `alias`, in date order.
#[must_use]
pub fn by_alias(alias: &str) -> Option<Vec<Observation>> {
    match alias {
        "USD/RUB" => Some(fixtures::market::usd_rub()),
        "Ключевая ставка" => Some(fixtures::market::key_rate()),
        "Brent" => Some(fixtures::market::brent()),
        "Инфляция, % м/м" => Some(fixtures::economy::inflation()),
        "ВВП, % г/г" => Some(fixtures::economy::gdp()),
        _ => None,
    }
}

/// Every fixture row, grouped by alias in [`ALIASES`] order.
#[must_use]
pub fn observations() -> Vec<Observation> {
    ALIASES.iter().filter_map(|a| by_alias(a)).flatten().collect()
}

/// The fixture rows as a sorted dataset.
#[must_use]
pub fn dataset() -> Dataset {
    Dataset::from_observations(observations())
}

/// Write `rows` to `path` as CSV with [`CANONICAL_HEADERS`].
///
/// # Errors
/// Returns the writer error if the file cannot be created or written.
pub fn write_csv(path: &Path, rows: &[Observation]) -> Result<(), csv::Error> {
    write_csv_with_headers(path, &CANONICAL_HEADERS, rows)
}

/// Write `rows` to `path` with a caller-chosen header row.
///
/// Columns are always written in canonical order; `headers` only changes
/// their names, which lets tests exercise the synonym table. Missing values
/// and units are written as empty cells.
///
/// # Errors
/// Returns the writer error if the file cannot be created or written.
pub fn write_csv_with_headers(
    path: &Path,
    headers: &[&str; 7],
    rows: &[Observation],
) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(headers)?;
    for r in rows {
        let date = r.date.format("%Y-%m-%d").to_string();
        let value = r.value.map(|v| v.to_string()).unwrap_or_default();
        w.write_record([
            date.as_str(),
            r.name.as_str(),
            r.alias.as_str(),
            value.as_str(),
            r.unit.as_deref().unwrap_or(""),
            r.freq.code(),
            r.method.code(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
