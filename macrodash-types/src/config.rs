//! Configuration types shared by the cache, the resampler and the facade.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;

/// Environment variable naming the data file.
pub const DATA_FILE_ENV: &str = "DATA_FILE";
/// Environment variable naming the spreadsheet sheet.
pub const SHEET_ENV: &str = "MAIN_SHEET";

/// Static labels used when rendering the display table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLabels {
    /// Header of the first (date) column.
    pub date: String,
    /// Method label for `Method::Average`.
    pub period_average: String,
    /// Method label for `Method::EndOfPeriod`.
    pub end_of_period: String,
}

impl HeaderLabels {
    /// English labels.
    #[must_use]
    pub fn english() -> Self {
        Self {
            date: "Date".to_string(),
            period_average: "period average".to_string(),
            end_of_period: "end of period".to_string(),
        }
    }

    /// Russian labels.
    #[must_use]
    pub fn russian() -> Self {
        Self {
            date: "Дата".to_string(),
            period_average: "в среднем за период".to_string(),
            end_of_period: "на конец периода".to_string(),
        }
    }
}

impl Default for HeaderLabels {
    fn default() -> Self {
        Self::english()
    }
}

/// Global configuration for a `Dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Spreadsheet or CSV file backing the dataset.
    pub data_file: PathBuf,
    /// Sheet to read for spreadsheet formats. `None` selects the first sheet.
    pub sheet: Option<String>,
    /// Aliases whose view frequency is forced regardless of the request.
    pub frequency_locks: BTreeMap<String, Frequency>,
    /// Aliases listed first by the indicator listing, in this order.
    pub preferred_aliases: Vec<String>,
    /// Candidates for the alias shown when no alias is requested, in order.
    pub landing_aliases: Vec<String>,
    /// Labels used for the table header.
    pub labels: HeaderLabels,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data").join("macro_data.xlsx"),
            sheet: Some("main".to_string()),
            frequency_locks: default_frequency_locks(),
            preferred_aliases: vec![
                "USD/RUB".to_string(),
                "Инфляция, % м/м".to_string(),
                "Ключевая ставка".to_string(),
                "ВВП, % г/г".to_string(),
            ],
            landing_aliases: vec!["USD/RUB".to_string(), "Ключевая ставка".to_string()],
            labels: HeaderLabels::default(),
        }
    }
}

impl DashboardConfig {
    /// Build a configuration from `DATA_FILE` / `MAIN_SHEET`, keeping defaults
    /// for anything unset. A blank `MAIN_SHEET` selects the first sheet.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(path) = lookup(DATA_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            cfg.data_file = PathBuf::from(path);
        }
        if let Some(sheet) = lookup(SHEET_ENV) {
            cfg.sheet = normalize_sheet(Some(sheet));
        }
        cfg
    }
}

/// Trim a sheet name; blank names mean "first sheet".
#[must_use]
pub fn normalize_sheet(sheet: Option<String>) -> Option<String> {
    sheet
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn default_frequency_locks() -> BTreeMap<String, Frequency> {
    BTreeMap::from([
        ("Инфляция, % м/м".to_string(), Frequency::Monthly),
        ("ВВП, % г/г".to_string(), Frequency::Annual),
    ])
}
