//! Runs a simple report and exports it to CSV.
//!
//! Expects `GA4_ACCESS_TOKEN` and `GA4_PROPERTY_ID` in the environment.

use std::error::Error;

use ga4_api_rs::prelude::*;
use ga4_frame_rs::{export, query};

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let client = AnalyticsClient::from_env()?;
    let property = PropertyId::new(std::env::var("GA4_PROPERTY_ID")?)?;

    let request = RunReportRequest::new()
        .with_dimensions("country")
        .with_metrics(["activeUsers", "sessions"])
        .with_date_ranges(query::last_n_days(28, "yesterday").map_err(Box::<dyn Error>::from)?);

    let frame = query::run_report_frame(&client, &property, &request).map_err(Box::<dyn Error>::from)?;

    println!("{}", frame.headers().join(","));
    for row in frame.rows() {
        let rendered: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        println!("{}", rendered.join(","));
    }

    export::write_csv(&frame, "countries.csv").map_err(Box::<dyn Error>::from)?;
    println!("wrote countries.csv ({} rows)", frame.row_count());
    Ok(())
}
