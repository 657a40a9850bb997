//! Builds a combined filter tree: US desktop traffic with real volume,
//! excluding internal pages.
//!
//! Expects `GA4_ACCESS_TOKEN` and `GA4_PROPERTY_ID` in the environment.

use std::error::Error;

use ga4_api_rs::prelude::*;
use ga4_frame_rs::query;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let client = AnalyticsClient::from_env()?;
    let property = PropertyId::new(std::env::var("GA4_PROPERTY_ID")?)?;

    let dimension_filters = and_filter(vec![
        dimension_filter("country", "==", "United States")?,
        dimension_filter("deviceCategory", "in", vec!["desktop", "tablet"])?,
        not_filter(dimension_filter("pagePath", "starts_with", "/internal")?),
    ])?;

    let request = RunReportRequest::new()
        .with_dimensions(["pagePath", "deviceCategory"])
        .with_metrics(["screenPageViews", "activeUsers"])
        .with_date_ranges(("2024-01-01", "2024-01-31"))
        .with_dimension_filter(dimension_filters)
        .with_metric_filter(metric_filter("screenPageViews", ">", 100)?)
        .with_order_bys(vec![OrderBy::metric_desc("screenPageViews")])
        .with_limit(25);

    let frame = query::run_report_frame(&client, &property, &request).map_err(Box::<dyn Error>::from)?;
    for row in frame.rows() {
        println!("{}  {}  {}", row[0], row[2], row[1]);
    }
    Ok(())
}
