//! Inclusive date-window filtering with fail-open bounds.

use chrono::NaiveDate;

use super::util::parse_date;
use crate::SeriesPoint;

/// Inclusive date window. A missing side imposes no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateWindow {
    /// Inclusive lower bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    /// Build a window from raw caller strings.
    ///
    /// Blank or unparsable bounds are dropped silently.
    #[must_use]
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_date),
            to: to.and_then(parse_date),
        }
    }

    /// True if `date` lies inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|f| date >= f) && self.to.is_none_or(|t| date <= t)
    }

    /// Keep only the points inside the window.
    #[must_use]
    pub fn apply(&self, mut points: Vec<SeriesPoint>) -> Vec<SeriesPoint> {
        points.retain(|p| self.contains(p.date));
        points
    }
}
