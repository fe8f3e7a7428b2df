//! Write the fixture dataset to a temporary CSV and print a few views of it.
//!
//! Run with `RUST_LOG=macrodash=debug cargo run -p macrodash --example quarterly_view --features tracing`.

use macrodash::{Dashboard, IndicatorQuery};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("macro_data.csv");
    macrodash_mock::write_csv(&path, &macrodash_mock::observations())?;

    let dash = Dashboard::builder().data_file(&path).build()?;
    println!("indicators: {:?}", dash.indicators()?.indicators);

    let Some(alias) = dash.landing_alias()? else {
        println!("dataset is empty");
        return Ok(());
    };
    let table = dash.table(&IndicatorQuery::new(&alias).view_frequency("Q"))?;
    println!("{} | {}", table.columns[0], table.columns[1]);
    for [date, value] in &table.rows {
        println!("{date} | {value}");
    }

    let series = dash.series(&IndicatorQuery::new("ВВП, % г/г"))?;
    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}
