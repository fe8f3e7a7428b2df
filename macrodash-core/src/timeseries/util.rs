//! Shared date parsing helpers used by the loader and the date filter.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a calendar date from free-form text.
///
/// Accepted shapes, tried in order:
/// - `YYYY-MM-DD`, `DD.MM.YYYY`, `YYYY/MM/DD`, `MM/DD/YYYY`
/// - the same ISO date followed by a time (`T` or space separated); the time is dropped
/// - RFC 3339 timestamps; the local date is kept
/// - `YYYY-MM` and `YYYY`, meaning the first day of the month / year
///
/// ```
/// use chrono::NaiveDate;
/// use macrodash_core::timeseries::util::parse_date;
///
/// let d = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// assert_eq!(parse_date("2024-03-31"), Some(d));
/// assert_eq!(parse_date(" 31.03.2024 "), Some(d));
/// assert_eq!(parse_date("2024-03-31 00:00:00"), Some(d));
/// assert_eq!(parse_date("not-a-date"), None);
/// ```
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if s.len() == 7 {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Some(d);
        }
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<i32>().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
    }
    None
}

/// Convert an Excel serial day number (1900 date system) to a date.
///
/// Fractional parts (time of day) are dropped. Returns `None` for negative,
/// non-finite or out-of-range serials.
#[must_use]
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 || serial > 2_958_465.0 {
        return None;
    }
    // Day 0 is 1899-12-30, which absorbs Excel's phantom 1900-02-29.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let days = serial.floor() as u64;
    epoch.checked_add_days(Days::new(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_common_shapes() {
        assert_eq!(parse_date("2024/01/15"), Some(d(2024, 1, 15)));
        assert_eq!(parse_date("01/15/2024"), Some(d(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(d(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15T10:30:00+03:00"), Some(d(2024, 1, 15)));
        assert_eq!(parse_date("2024-02"), Some(d(2024, 2, 1)));
        assert_eq!(parse_date("2024"), Some(d(2024, 1, 1)));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("12345"), None);
    }

    #[test]
    fn excel_serials() {
        assert_eq!(excel_serial_to_date(45_306.0), Some(d(2024, 1, 15)));
        assert_eq!(excel_serial_to_date(45_306.75), Some(d(2024, 1, 15)));
        assert_eq!(excel_serial_to_date(61.0), Some(d(1900, 3, 1)));
        assert_eq!(excel_serial_to_date(-1.0), None);
        assert_eq!(excel_serial_to_date(f64::NAN), None);
    }
}
