//! Text formatting for the display table and the chart axis.

use chrono::NaiveDate;

use crate::{HeaderLabels, Method};

/// `DD.MM.YYYY`, as shown in the display table.
#[must_use]
pub fn table_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `YYYY-MM-DD`, as used on the chart axis.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One decimal for magnitudes of at least one, two decimals below that, and
/// an empty string for a missing value.
///
/// ```
/// use macrodash_core::format::table_value;
///
/// assert_eq!(table_value(Some(91.0)), "91.0");
/// assert_eq!(table_value(Some(-1.26)), "-1.3");
/// assert_eq!(table_value(Some(0.456)), "0.46");
/// assert_eq!(table_value(None), "");
/// ```
#[must_use]
pub fn table_value(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.is_nan() => String::new(),
        Some(v) if v.abs() >= 1.0 => format!("{v:.1}"),
        Some(v) => format!("{v:.2}"),
    }
}

/// Label describing the aggregation method.
#[must_use]
pub fn method_label(method: Method, labels: &HeaderLabels) -> &str {
    match method {
        Method::Average => &labels.period_average,
        Method::EndOfPeriod => &labels.end_of_period,
    }
}

/// Header of the value column: `"{name} ({method}, {unit})"`, or
/// `"{name} ({method})"` when the unit is blank.
#[must_use]
pub fn value_header(display_name: &str, method: Method, unit: &str, labels: &HeaderLabels) -> String {
    let label = method_label(method, labels);
    if unit.trim().is_empty() {
        format!("{display_name} ({label})")
    } else {
        format!("{display_name} ({label}, {unit})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(table_date(d), "01.03.2024");
        assert_eq!(iso_date(d), "2024-03-01");
    }

    #[test]
    fn value_precision_switches_at_one() {
        assert_eq!(table_value(Some(1.0)), "1.0");
        assert_eq!(table_value(Some(0.999)), "1.00");
        assert_eq!(table_value(Some(-0.5)), "-0.50");
        assert_eq!(table_value(Some(16.0)), "16.0");
        assert_eq!(table_value(Some(f64::NAN)), "");
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(table_value(Some(0.125)), "0.12");
        assert_eq!(table_value(Some(0.375)), "0.38");
        assert_eq!(table_value(Some(2.25)), "2.2");
    }

    #[test]
    fn headers_omit_blank_unit() {
        let en = HeaderLabels::english();
        assert_eq!(
            value_header("USD/RUB", Method::Average, "RUB", &en),
            "USD/RUB (period average, RUB)"
        );
        assert_eq!(value_header("Key rate", Method::EndOfPeriod, " ", &en), "Key rate (end of period)");
        assert_eq!(
            value_header("Ставка", Method::EndOfPeriod, "%", &HeaderLabels::russian()),
            "Ставка (на конец периода, %)"
        );
    }
}
