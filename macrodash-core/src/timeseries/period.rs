//! Calendar period arithmetic for the three reporting frequencies.
//!
//! Periods are numbered by a single integer so that consecutive periods differ
//! by one: months as `year * 12 + month0`, quarters as `year * 4 + quarter0`,
//! years as the year itself.

use chrono::{Datelike, Months, NaiveDate};

use crate::Frequency;

/// Index of the period containing `date`.
#[must_use]
pub fn period_index(freq: Frequency, date: NaiveDate) -> i64 {
    let year = i64::from(date.year());
    let month0 = i64::from(date.month0());
    match freq {
        Frequency::Monthly => year * 12 + month0,
        Frequency::Quarterly => year * 4 + month0 / 3,
        Frequency::Annual => year,
    }
}

/// Last calendar day of the period with the given index.
///
/// Returns `None` if the index lies outside chrono's representable range.
#[must_use]
pub fn period_end(freq: Frequency, index: i64) -> Option<NaiveDate> {
    let (year, last_month) = match freq {
        Frequency::Monthly => (index.div_euclid(12), index.rem_euclid(12) + 1),
        Frequency::Quarterly => (index.div_euclid(4), index.rem_euclid(4) * 3 + 3),
        Frequency::Annual => (index, 12),
    };
    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(last_month).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// First calendar day of the period with the given index.
#[must_use]
pub fn period_start(freq: Frequency, index: i64) -> Option<NaiveDate> {
    let (year, first_month) = match freq {
        Frequency::Monthly => (index.div_euclid(12), index.rem_euclid(12) + 1),
        Frequency::Quarterly => (index.div_euclid(4), index.rem_euclid(4) * 3 + 1),
        Frequency::Annual => (index, 1),
    };
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, u32::try_from(first_month).ok()?, 1)
}
