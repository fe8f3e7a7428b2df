use chrono::NaiveDate;

use super::period::{period_end, period_index};
use crate::{EffectiveFrequency, Frequency, Method, SeriesPoint};

/// Running aggregate of one period.
#[derive(Default)]
struct PeriodAgg {
    sum: f64,
    count: usize,
    last: Option<f64>,
}

impl PeriodAgg {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
            self.last = Some(v);
        }
    }

    fn finish(&self, method: Method) -> Option<f64> {
        match method {
            #[allow(clippy::cast_precision_loss)]
            Method::Average => (self.count > 0).then(|| self.sum / self.count as f64),
            Method::EndOfPeriod => self.last,
        }
    }
}

/// Generic resampler: groups sorted points by an integer period key and
/// aggregates each period with `method`.
///
/// Periods between the first and the last observed period that contain no
/// points are emitted with a `None` value, so the output is contiguous.
fn resample_by<K, L>(
    mut points: Vec<SeriesPoint>,
    method: Method,
    bucket_of: K,
    label_of: L,
) -> Vec<SeriesPoint>
where
    K: Fn(NaiveDate) -> i64,
    L: Fn(i64) -> Option<NaiveDate>,
{
    if points.is_empty() {
        return points;
    }
    points.sort_by_key(|p| p.date);

    let mut out: Vec<SeriesPoint> = Vec::new();
    let mut emit = |bucket: i64, value: Option<f64>| {
        if let Some(date) = label_of(bucket) {
            out.push(SeriesPoint::new(date, value));
        }
    };

    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };
    let mut cur_bucket = bucket_of(first.date);
    let mut agg = PeriodAgg::default();
    agg.push(first.value);

    for p in iter {
        let bucket = bucket_of(p.date);
        if bucket != cur_bucket {
            emit(cur_bucket, agg.finish(method));
            for gap in (cur_bucket + 1)..bucket {
                emit(gap, None);
            }
            cur_bucket = bucket;
            agg = PeriodAgg::default();
        }
        agg.push(p.value);
    }
    emit(cur_bucket, agg.finish(method));

    out
}

/// Resample a series onto calendar periods of `freq`.
///
/// - Monthly = calendar month, Quarterly = calendar quarter, Annual = calendar
///   year ending in December.
/// - Each output point is dated at the **last day** of its period.
/// - `Average`: mean of the non-missing values in the period.
/// - `EndOfPeriod`: the chronologically last non-missing value in the period.
/// - A period without any non-missing value yields `None`, including gap
///   periods between the first and last observation.
///
/// ```
/// use chrono::NaiveDate;
/// use macrodash_core::{Frequency, Method, SeriesPoint, resample_to_frequency};
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let monthly = vec![
///     SeriesPoint::new(d(2024, 1, 15), Some(90.0)),
///     SeriesPoint::new(d(2024, 2, 15), Some(92.0)),
/// ];
/// let q = resample_to_frequency(monthly, Frequency::Quarterly, Method::Average);
/// assert_eq!(q, vec![SeriesPoint::new(d(2024, 3, 31), Some(91.0))]);
/// ```
#[must_use]
pub fn resample_to_frequency(points: Vec<SeriesPoint>, freq: Frequency, method: Method) -> Vec<SeriesPoint> {
    resample_by(
        points,
        method,
        move |date| period_index(freq, date),
        move |idx| period_end(freq, idx),
    )
}

/// Resample to an effective frequency; unrecognized codes use monthly periods.
#[must_use]
pub fn resample_to_effective(
    points: Vec<SeriesPoint>,
    effective: &EffectiveFrequency,
    method: Method,
) -> Vec<SeriesPoint> {
    resample_to_frequency(points, effective.boundaries(), method)
}
