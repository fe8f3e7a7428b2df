mod common;

use macrodash::{EffectiveFrequency, Frequency, IndicatorQuery, Method};

fn approx(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn usd_rub_quarterly_average() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);

    let q = IndicatorQuery::new("USD/RUB")
        .view_frequency("Q")
        .date_from("2024-01-01")
        .date_to("2024-06-30");
    let table = dash.table(&q).unwrap();
    assert_eq!(table.native_frequency, Frequency::Monthly);
    assert_eq!(table.columns[0], "Date");
    assert_eq!(table.columns[1], "Курс доллара США (period average, руб.)");
    assert_eq!(
        table.rows,
        vec![
            ["31.03.2024".to_string(), "91.2".to_string()],
            ["30.06.2024".to_string(), "90.2".to_string()],
        ]
    );
    assert_eq!(table.total, 2);
}

#[test]
fn key_rate_end_of_period_annual() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);

    let s = dash
        .series(&IndicatorQuery::new("Ключевая ставка").view_frequency("a"))
        .unwrap();
    assert_eq!(s.x, vec!["2023-12-31", "2024-12-31"]);
    assert_eq!(s.series.len(), 1);
    assert_eq!(s.series[0].name, "Ключевая ставка");
    assert_eq!(s.series[0].y, vec![Some(16.0), Some(18.0)]);
    assert_eq!(s.meta.method, Some(Method::EndOfPeriod));
    assert_eq!(s.meta.effective_frequency, Some(EffectiveFrequency::Fixed(Frequency::Annual)));
}

#[test]
fn gdp_is_locked_to_annual() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);

    for view in ["AUTO", "Q", "M"] {
        let s = dash.series(&IndicatorQuery::new("ВВП, % г/г").view_frequency(view)).unwrap();
        assert_eq!(s.x, vec!["2023-12-31", "2024-12-31"], "view {view}");
        assert!(approx(s.series[0].y[0], 3.5));
        assert!(approx(s.series[0].y[1], 4.7));
        assert_eq!(s.meta.native_frequency, Frequency::Quarterly);
    }
}

#[test]
fn inflation_gap_survives_as_null() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);

    let q = IndicatorQuery::new("Инфляция, % м/м").view_frequency("Q");
    let s = dash.series(&q).unwrap();
    // Locked to monthly: the missing March print stays missing.
    assert_eq!(s.x.len(), 6);
    assert_eq!(s.series[0].y[2], None);

    let json = serde_json::to_value(&s).unwrap();
    assert!(json["series"][0]["y"][2].is_null());

    let table = dash.table(&q).unwrap();
    assert_eq!(table.rows[2], ["31.03.2024".to_string(), String::new()]);
    assert_eq!(table.rows[0][1], "0.86");
}

#[test]
fn native_view_keeps_observed_dates_only() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);

    // Monthly is Brent's native frequency, so the missing March is not filled.
    let s = dash.series(&IndicatorQuery::new("Brent").view_frequency("M")).unwrap();
    assert_eq!(s.x, vec!["2024-01-31", "2024-02-29", "2024-04-30", "2024-10-31"]);
    assert!(s.series[0].y.iter().all(Option::is_some));
}

#[test]
fn empty_quarters_become_missing_values() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);
    let q = IndicatorQuery::new("Brent").view_frequency("Q");

    let s = dash.series(&q).unwrap();
    assert_eq!(s.x, vec!["2024-03-31", "2024-06-30", "2024-09-30", "2024-12-31"]);
    let y = &s.series[0].y;
    assert!(approx(y[0], 81.8));
    assert!(approx(y[1], 89.0));
    assert_eq!(y[2], None);
    assert!(approx(y[3], 75.0));

    let table = dash.table(&q).unwrap();
    assert_eq!(table.columns[1], "Нефть Brent (period average)");
    assert_eq!(table.total, 4);
    assert_eq!(table.rows[2], ["30.09.2024".to_string(), String::new()]);
}

#[test]
fn unknown_alias_yields_empty_views() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);
    let q = IndicatorQuery::new("EUR/RUB");

    let table = dash.table(&q).unwrap();
    assert_eq!(table.total, 0);
    assert_eq!(table.columns, ["Date".to_string(), "EUR/RUB".to_string()]);

    let s = dash.series(&q).unwrap();
    assert!(s.x.is_empty());
    assert_eq!(s.series[0].name, "EUR/RUB");
    assert!(s.series[0].y.is_empty());
    assert_eq!(s.meta.native_frequency, Frequency::Monthly);
    assert_eq!(s.meta.effective_frequency, None);
}

#[test]
fn blank_alias_uses_first_row() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);

    let table = dash.table(&IndicatorQuery::default()).unwrap();
    assert!(table.columns[1].starts_with("Нефть Brent"));
    let s = dash.series(&IndicatorQuery::new("  ")).unwrap();
    assert_eq!(s.series[0].name, "Нефть Brent");
}

#[test]
fn malformed_bounds_are_ignored() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);

    let all = dash.table(&IndicatorQuery::new("USD/RUB")).unwrap();
    let q = IndicatorQuery::new("USD/RUB").date_from("yesterday").date_to("");
    assert_eq!(dash.table(&q).unwrap(), all);
    assert_eq!(all.total, 9);
    assert_eq!(all.rows[0], ["15.10.2023".to_string(), "97.5".to_string()]);
}

#[test]
fn indicators_list_preferred_first() {
    let fx = common::fixture();
    let dash = common::dashboard(&fx);

    let list = dash.indicators().unwrap();
    assert_eq!(
        list.indicators,
        vec!["USD/RUB", "Инфляция, % м/м", "Ключевая ставка", "ВВП, % г/г", "Brent"]
    );
    assert_eq!(dash.landing_alias().unwrap().as_deref(), Some("USD/RUB"));
}
