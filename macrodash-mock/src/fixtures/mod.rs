pub mod economy;
pub mod market;

use chrono::NaiveDate;
use macrodash_core::{Frequency, Method, Observation};

pub struct Series<'a> {
    pub name: &'a str,
    pub alias: &'a str,
    pub unit: Option<&'a str>,
    pub freq: Frequency,
    pub method: Method,
}

pub fn build(series: &Series<'_>, rows: &[(&str, Option<f64>)]) -> Vec<Observation> {
    rows.iter()
        .map(|(date, value)| Observation {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            name: series.name.to_string(),
            alias: series.alias.to_string(),
            value: *value,
            unit: series.unit.map(str::to_string),
            freq: series.freq,
            method: series.method,
        })
        .collect()
}
