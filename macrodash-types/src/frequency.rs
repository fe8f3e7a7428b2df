//! Reporting frequencies and aggregation methods.
//!
//! Both enums parse leniently: dirty spreadsheet codes fall back to a default
//! instead of failing the load.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Native or view frequency of an indicator series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Frequency {
    /// Calendar month.
    #[default]
    #[serde(rename = "M")]
    Monthly,
    /// Calendar quarter.
    #[serde(rename = "Q")]
    Quarterly,
    /// Calendar year ending in December.
    #[serde(rename = "A")]
    Annual,
}

impl Frequency {
    /// All supported frequencies, finest first.
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Quarterly, Self::Annual];

    /// Strict parse of a frequency code (`M`, `Q`, `A`, `A-DEC`) or long name.
    ///
    /// Case-insensitive; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "M" | "MONTHLY" => Some(Self::Monthly),
            "Q" | "QUARTERLY" => Some(Self::Quarterly),
            "A" | "A-DEC" | "ANNUAL" => Some(Self::Annual),
            _ => None,
        }
    }

    /// Parse the `Freq` column of the source dataset.
    ///
    /// Only the short codes are recognized; anything else (including a blank
    /// cell) silently becomes `Monthly`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "Q" => Self::Quarterly,
            "A" | "A-DEC" => Self::Annual,
            _ => Self::Monthly,
        }
    }

    /// Wire code used in responses.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Monthly => "M",
            Self::Quarterly => "Q",
            Self::Annual => "A",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Aggregation used when collapsing several observations into one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Method {
    /// Mean of the non-missing values in the period.
    #[default]
    #[serde(rename = "avg")]
    Average,
    /// Last non-missing value in the period.
    #[serde(rename = "eop")]
    EndOfPeriod,
}

impl Method {
    /// Parse the `Method` column of the source dataset; unknown values become `Average`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "eop" | "end" | "last" => Self::EndOfPeriod,
            _ => Self::Average,
        }
    }

    /// Wire code used in responses.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Average => "avg",
            Self::EndOfPeriod => "eop",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Frequency requested by the caller.
///
/// Unknown values are kept verbatim rather than rejected; they resample with
/// monthly boundaries downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewFrequency {
    /// Use the indicator's native frequency.
    #[default]
    Auto,
    /// A recognized frequency.
    Fixed(Frequency),
    /// Anything else, uppercased and trimmed.
    Unrecognized(String),
}

impl ViewFrequency {
    /// Parse a caller-supplied frequency string. Blank means `Auto`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let up = raw.trim().to_uppercase();
        if up.is_empty() || up == "AUTO" {
            return Self::Auto;
        }
        Frequency::parse_code(&up).map_or(Self::Unrecognized(up), Self::Fixed)
    }
}

impl From<String> for ViewFrequency {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ViewFrequency> for String {
    fn from(v: ViewFrequency) -> Self {
        match v {
            ViewFrequency::Auto => "AUTO".to_string(),
            ViewFrequency::Fixed(f) => f.code().to_string(),
            ViewFrequency::Unrecognized(s) => s,
        }
    }
}

impl From<Frequency> for ViewFrequency {
    fn from(f: Frequency) -> Self {
        Self::Fixed(f)
    }
}

/// Frequency actually applied to a series after locks and `Auto` resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectiveFrequency {
    /// A recognized frequency.
    Fixed(Frequency),
    /// A caller-supplied code passed through unchanged.
    Unrecognized(String),
}

impl EffectiveFrequency {
    /// Frequency whose period boundaries are used for resampling.
    ///
    /// Unrecognized codes resample on monthly boundaries.
    #[must_use]
    pub const fn boundaries(&self) -> Frequency {
        match self {
            Self::Fixed(f) => *f,
            Self::Unrecognized(_) => Frequency::Monthly,
        }
    }

    /// True if this resolves to exactly `native`; unrecognized codes never do.
    #[must_use]
    pub fn is_native(&self, native: Frequency) -> bool {
        matches!(self, Self::Fixed(f) if *f == native)
    }
}

impl fmt::Display for EffectiveFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(freq) => f.write_str(freq.code()),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
