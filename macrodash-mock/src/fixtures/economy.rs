use macrodash_core::{Frequency, Method, Observation};

use super::{Series, build};

/// Monthly inflation with a missing March print.
pub fn inflation() -> Vec<Observation> {
    build(
        &Series {
            name: "Инфляция, % м/м",
            alias: "Инфляция, % м/м",
            unit: Some("%"),
            freq: Frequency::Monthly,
            method: Method::Average,
        },
        &[
            ("2024-01-31", Some(0.86)),
            ("2024-02-29", Some(0.68)),
            ("2024-03-31", None),
            ("2024-04-30", Some(0.5)),
            ("2024-05-31", Some(0.74)),
            ("2024-06-30", Some(0.64)),
        ],
    )
}

/// Quarterly GDP growth, locked to annual by the default configuration.
pub fn gdp() -> Vec<Observation> {
    build(
        &Series {
            name: "ВВП, % г/г",
            alias: "ВВП, % г/г",
            unit: Some("%"),
            freq: Frequency::Quarterly,
            method: Method::Average,
        },
        &[
            ("2023-03-31", Some(-1.6)),
            ("2023-06-30", Some(5.1)),
            ("2023-09-30", Some(5.7)),
            ("2023-12-31", Some(4.8)),
            ("2024-03-31", Some(5.4)),
            ("2024-06-30", Some(4.0)),
        ],
    )
}
