//! High-level query helpers that return frames.

use std::collections::HashMap;

use chrono::{Days, Local, NaiveDate};
use tracing::debug;

use ga4_api_rs::models::{DateRange, Dimension, Metric, OrderBy, RunReportRequest};
use ga4_api_rs::normalize::{IntoDimensions, IntoMetrics};
use ga4_api_rs::report::ReportRequest;
use ga4_api_rs::{AnalyticsClient, PropertyId};

use crate::convert::{self, ReportFrames};
use crate::error::FrameResult;
use crate::frame::{Cell, Frame};

/// Runs a request of any report kind and converts the response to frames.
pub fn query(
    client: &AnalyticsClient,
    property: &PropertyId,
    request: &ReportRequest,
) -> FrameResult<ReportFrames> {
    let response = client.query(property, request)?;
    convert::response_to_frames(&response)
}

/// Runs a standard report and converts the response to a frame.
pub fn run_report_frame(
    client: &AnalyticsClient,
    property: &PropertyId,
    request: &RunReportRequest,
) -> FrameResult<Frame> {
    let response = client.run_report(property, request)?;
    convert::report_to_frame(&response)
}

/// Fetches property metadata as a frame sorted by kind then API name.
pub fn metadata_frame(client: &AnalyticsClient, property: &PropertyId) -> FrameResult<Frame> {
    convert::metadata_to_frame(&client.get_metadata(property)?)
}

/// Compares metrics across two date ranges.
///
/// Runs the same report over the current and previous ranges, outer-joins
/// the results on the dimension columns, and emits `{metric}_current`,
/// `{metric}_previous`, `{metric}_change`, and `{metric}_change_pct`
/// columns per metric. A side with no matching row counts as zero; a zero
/// previous value yields a `0` percentage change rather than a division
/// error.
///
/// # Examples
///
/// ```no_run
/// use ga4_api_rs::prelude::*;
/// use ga4_frame_rs::query;
///
/// # fn main() -> std::result::Result<(), ga4_frame_rs::FrameError> {
/// let client = AnalyticsClient::from_env()?;
/// let property = PropertyId::new("123456789")?;
/// let comparison = query::compare_date_ranges(
///     &client,
///     &property,
///     "country",
///     ["activeUsers", "sessions"],
///     ("2024-01-01", "2024-01-31"),
///     ("2023-01-01", "2023-01-31"),
/// )?;
/// println!("{} countries", comparison.row_count());
/// # Ok(())
/// # }
/// ```
pub fn compare_date_ranges(
    client: &AnalyticsClient,
    property: &PropertyId,
    dimensions: impl IntoDimensions,
    metrics: impl IntoMetrics,
    current: impl Into<DateRange>,
    previous: impl Into<DateRange>,
) -> FrameResult<Frame> {
    let dimensions = dimensions.into_dimensions();
    let metrics = metrics.into_metrics();

    let base = RunReportRequest::new()
        .with_dimensions(dimensions.clone())
        .with_metrics(metrics.clone());

    let current_frame =
        run_report_frame(client, property, &base.clone().with_date_ranges(current.into()))?;
    let previous_frame =
        run_report_frame(client, property, &base.with_date_ranges(previous.into()))?;
    debug!(
        current_rows = current_frame.row_count(),
        previous_rows = previous_frame.row_count(),
        "merging comparison"
    );

    merge_comparison(&current_frame, &previous_frame, &dimensions, &metrics)
}

/// Top pages by views for a date range.
pub fn top_pages(
    client: &AnalyticsClient,
    property: &PropertyId,
    date_range: impl Into<DateRange>,
    limit: i64,
) -> FrameResult<Frame> {
    let request = RunReportRequest::new()
        .with_dimensions(["pagePath", "pageTitle"])
        .with_metrics(["screenPageViews", "activeUsers", "averageSessionDuration"])
        .with_date_ranges(date_range.into())
        .with_order_bys(vec![OrderBy::metric_desc("screenPageViews")])
        .with_limit(limit);
    run_report_frame(client, property, &request)
}

/// Top traffic sources by sessions for a date range.
pub fn traffic_sources(
    client: &AnalyticsClient,
    property: &PropertyId,
    date_range: impl Into<DateRange>,
    limit: i64,
) -> FrameResult<Frame> {
    let request = RunReportRequest::new()
        .with_dimensions(["sessionSource", "sessionMedium", "sessionCampaign"])
        .with_metrics(["sessions", "activeUsers", "conversions"])
        .with_date_ranges(date_range.into())
        .with_order_bys(vec![OrderBy::metric_desc("sessions")])
        .with_limit(limit);
    run_report_frame(client, property, &request)
}

/// Builds a concrete date range covering the last `days` days.
///
/// `end` is `today`, `yesterday`, or an explicit `YYYY-MM-DD` date; the
/// range includes the end day, so `last_n_days(7, "today")` spans today and
/// the six days before it.
pub fn last_n_days(days: u32, end: &str) -> FrameResult<DateRange> {
    let end_date = match end {
        "today" => Local::now().date_naive(),
        "yesterday" => Local::now().date_naive() - Days::new(1),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")?,
    };
    let start_date = end_date - Days::new(u64::from(days.saturating_sub(1)));

    Ok(DateRange::new(
        start_date.format("%Y-%m-%d").to_string(),
        end_date.format("%Y-%m-%d").to_string(),
    ))
}

/// Outer-joins the two frames on their dimension columns.
fn merge_comparison(
    current: &Frame,
    previous: &Frame,
    dimensions: &[Dimension],
    metrics: &[Metric],
) -> FrameResult<Frame> {
    let dim_count = dimensions.len();
    let metric_count = metrics.len();

    let mut headers: Vec<String> = dimensions.iter().map(|d| d.name.clone()).collect();
    for metric in metrics {
        headers.push(format!("{}_current", metric.name));
        headers.push(format!("{}_previous", metric.name));
        headers.push(format!("{}_change", metric.name));
        headers.push(format!("{}_change_pct", metric.name));
    }

    // Keys appear in current-frame order, then previous-only keys.
    let mut order: Vec<Vec<String>> = Vec::new();
    let mut current_map: HashMap<Vec<String>, Vec<f64>> = HashMap::new();
    let mut previous_map: HashMap<Vec<String>, Vec<f64>> = HashMap::new();

    for row in current.rows() {
        let (key, values) = split_row(row, dim_count, metric_count);
        if !current_map.contains_key(&key) {
            order.push(key.clone());
        }
        current_map.insert(key, values);
    }
    for row in previous.rows() {
        let (key, values) = split_row(row, dim_count, metric_count);
        if !current_map.contains_key(&key) && !previous_map.contains_key(&key) {
            order.push(key.clone());
        }
        previous_map.insert(key, values);
    }

    let mut frame = Frame::new(headers);
    let zeros = vec![0.0; metric_count];
    for key in order {
        let current_values = current_map.get(&key).unwrap_or(&zeros);
        let previous_values = previous_map.get(&key).unwrap_or(&zeros);

        let mut row: Vec<Cell> = key.into_iter().map(Cell::Str).collect();
        for i in 0..metric_count {
            let current_value = current_values.get(i).copied().unwrap_or(0.0);
            let previous_value = previous_values.get(i).copied().unwrap_or(0.0);
            let change = current_value - previous_value;
            let change_pct = if previous_value != 0.0 {
                change / previous_value * 100.0
            } else {
                0.0
            };
            row.push(Cell::Float(current_value));
            row.push(Cell::Float(previous_value));
            row.push(Cell::Float(change));
            row.push(Cell::Float(change_pct));
        }
        frame.push_row(row)?;
    }

    Ok(frame)
}

fn split_row(row: &[Cell], dim_count: usize, metric_count: usize) -> (Vec<String>, Vec<f64>) {
    let key = row
        .iter()
        .take(dim_count)
        .map(|cell| cell.to_string())
        .collect();
    let values = row
        .iter()
        .skip(dim_count)
        .take(metric_count)
        .map(|cell| cell.as_f64().unwrap_or(0.0))
        .collect();
    (key, values)
}
