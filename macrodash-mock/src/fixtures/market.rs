use macrodash_core::{Frequency, Method, Observation};

use super::{Series, build};

pub fn usd_rub() -> Vec<Observation> {
    build(
        &Series {
            name: "Курс доллара США",
            alias: "USD/RUB",
            unit: Some("руб."),
            freq: Frequency::Monthly,
            method: Method::Average,
        },
        &[
            ("2023-10-15", Some(97.5)),
            ("2023-11-15", Some(90.5)),
            ("2023-12-15", Some(90.0)),
            ("2024-01-15", Some(90.0)),
            ("2024-02-15", Some(92.0)),
            ("2024-03-15", Some(91.5)),
            ("2024-04-15", Some(93.0)),
            ("2024-05-15", Some(90.5)),
            ("2024-06-15", Some(87.0)),
        ],
    )
}

pub fn key_rate() -> Vec<Observation> {
    build(
        &Series {
            name: "Ключевая ставка",
            alias: "Ключевая ставка",
            unit: Some("%"),
            freq: Frequency::Monthly,
            method: Method::EndOfPeriod,
        },
        &[
            ("2023-10-31", Some(15.0)),
            ("2023-11-30", Some(15.0)),
            ("2023-12-31", Some(16.0)),
            ("2024-01-31", Some(16.0)),
            ("2024-02-29", Some(16.0)),
            ("2024-03-31", Some(16.0)),
            ("2024-04-30", Some(16.0)),
            ("2024-05-31", Some(16.0)),
            ("2024-06-30", Some(16.0)),
            ("2024-07-31", Some(18.0)),
        ],
    )
}

/// No unit, so its table header omits the unit part. Nothing is observed
/// in March or in the third quarter.
pub fn brent() -> Vec<Observation> {
    build(
        &Series {
            name: "Нефть Brent",
            alias: "Brent",
            unit: None,
            freq: Frequency::Monthly,
            method: Method::Average,
        },
        &[
            ("2024-01-31", Some(80.1)),
            ("2024-02-29", Some(83.5)),
            ("2024-04-30", Some(89.0)),
            ("2024-10-31", Some(75.0)),
        ],
    )
}
