//! Time-series utilities for building indicator views.
//!
//! Modules include:
//! - `period`: calendar period numbering for monthly/quarterly/annual views
//! - `resample`: aggregate a series onto coarser (or other) periods
//! - `filter`: inclusive, fail-open date windows
//! - `util`: date parsing shared with the dataset loader
/// Inclusive date-window filtering.
pub mod filter;
/// Calendar period arithmetic.
pub mod period;
/// Resampling utilities for period-average and end-of-period aggregation.
pub mod resample;
/// Date parsing helpers.
pub mod util;
