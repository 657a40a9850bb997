//! Converts report responses into frames.
//!
//! Columns are the dimension headers followed by the metric headers, in
//! response order. Dimension values stay strings; metric values coerce per
//! the declared [`MetricType`], with unparseable numerics becoming
//! [`Cell::Null`].

use ga4_api_rs::models::{
    BatchRunPivotReportsResponse, BatchRunReportsResponse, Metadata, MetricType,
    RunReportResponse,
};
use ga4_api_rs::report::ReportResponse;

use crate::error::FrameResult;
use crate::frame::{Cell, Frame};

/// One frame for single reports, several for batch reports.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportFrames {
    /// Result of a single report query.
    Single(Frame),
    /// Results of a batch query, in request order.
    Batch(Vec<Frame>),
}

impl ReportFrames {
    /// The single frame, if this is a single-report result.
    pub fn into_single(self) -> Option<Frame> {
        match self {
            ReportFrames::Single(frame) => Some(frame),
            ReportFrames::Batch(_) => None,
        }
    }

    /// The frames of a batch result.
    pub fn into_batch(self) -> Option<Vec<Frame>> {
        match self {
            ReportFrames::Single(_) => None,
            ReportFrames::Batch(frames) => Some(frames),
        }
    }
}

/// Converts a report response into a frame.
pub fn report_to_frame(response: &RunReportResponse) -> FrameResult<Frame> {
    let headers = response
        .dimension_headers
        .iter()
        .map(|h| h.name.clone())
        .chain(response.metric_headers.iter().map(|h| h.name.clone()));
    let mut frame = Frame::new(headers);

    for row in &response.rows {
        let mut cells = Vec::with_capacity(frame.column_count());
        for value in &row.dimension_values {
            cells.push(Cell::Str(value.value.clone()));
        }
        for (value, header) in row.metric_values.iter().zip(&response.metric_headers) {
            cells.push(coerce_metric(&value.value, header.metric_type));
        }
        frame.push_row(cells)?;
    }

    Ok(frame)
}

/// Converts a batch response into one frame per report, in request order.
pub fn batch_to_frames(response: &BatchRunReportsResponse) -> FrameResult<Vec<Frame>> {
    response.reports.iter().map(report_to_frame).collect()
}

/// Converts a batch pivot response into one frame per report, in request order.
pub fn batch_pivots_to_frames(
    response: &BatchRunPivotReportsResponse,
) -> FrameResult<Vec<Frame>> {
    response.pivot_reports.iter().map(report_to_frame).collect()
}

/// Converts a response of any kind into frames.
pub fn response_to_frames(response: &ReportResponse) -> FrameResult<ReportFrames> {
    match response {
        ReportResponse::Report(r) | ReportResponse::Pivot(r) | ReportResponse::Realtime(r) => {
            Ok(ReportFrames::Single(report_to_frame(r)?))
        }
        ReportResponse::BatchReport(r) => Ok(ReportFrames::Batch(batch_to_frames(r)?)),
        ReportResponse::BatchPivot(r) => Ok(ReportFrames::Batch(batch_pivots_to_frames(r)?)),
    }
}

/// Converts property metadata into a frame sorted by kind then API name,
/// with duplicates dropped.
pub fn metadata_to_frame(metadata: &Metadata) -> FrameResult<Frame> {
    let mut entries: Vec<[String; 6]> = Vec::new();

    for dimension in &metadata.dimensions {
        entries.push([
            "Dimension".to_string(),
            "STRING".to_string(),
            dimension.api_name.clone(),
            dimension.ui_name.clone(),
            dimension.description.clone(),
            dimension.custom_definition.to_string(),
        ]);
    }
    for metric in &metadata.metrics {
        entries.push([
            "Metric".to_string(),
            metric.metric_type.as_str().to_string(),
            metric.api_name.clone(),
            metric.ui_name.clone(),
            metric.description.clone(),
            metric.custom_definition.to_string(),
        ]);
    }

    entries.sort_by(|a, b| (&a[0], &a[2]).cmp(&(&b[0], &b[2])));
    entries.dedup();

    let mut frame = Frame::new([
        "type",
        "dataType",
        "apiName",
        "uiName",
        "description",
        "customDefinition",
    ]);
    for entry in entries {
        frame.push_row(entry.into_iter().map(Cell::Str).collect())?;
    }
    Ok(frame)
}

fn coerce_metric(value: &str, metric_type: MetricType) -> Cell {
    if metric_type.is_integer() {
        value.parse::<i64>().map(Cell::Int).unwrap_or(Cell::Null)
    } else if metric_type.is_float() {
        value.parse::<f64>().map(Cell::Float).unwrap_or(Cell::Null)
    } else {
        Cell::Str(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ga4_api_rs::models::{DimensionMetadata, MetricMetadata};

    fn sample_response() -> RunReportResponse {
        serde_json::from_str(
            r#"{
                "kind": "analyticsData#runReport",
                "dimensionHeaders": [{"name": "country"}],
                "metricHeaders": [
                    {"name": "activeUsers", "type": "TYPE_INTEGER"},
                    {"name": "bounceRate", "type": "TYPE_FLOAT"},
                    {"name": "currency", "type": "TYPE_CURRENCY"},
                    {"name": "opaque"}
                ],
                "rows": [
                    {
                        "dimensionValues": [{"value": "United States"}],
                        "metricValues": [
                            {"value": "1234"},
                            {"value": "0.41"},
                            {"value": "10.50"},
                            {"value": "n/a"}
                        ]
                    },
                    {
                        "dimensionValues": [{"value": "United Kingdom"}],
                        "metricValues": [
                            {"value": "not-a-number"},
                            {"value": ""},
                            {"value": "3"},
                            {"value": "ok"}
                        ]
                    }
                ],
                "rowCount": 2
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_headers_concatenate_dimensions_then_metrics() {
        let frame = report_to_frame(&sample_response()).unwrap();
        assert_eq!(
            frame.headers(),
            ["country", "activeUsers", "bounceRate", "currency", "opaque"]
        );
    }

    #[test]
    fn test_metric_values_coerce_by_declared_type() {
        let frame = report_to_frame(&sample_response()).unwrap();
        let row = &frame.rows()[0];
        assert_eq!(row[0], Cell::Str("United States".to_string()));
        assert_eq!(row[1], Cell::Int(1234));
        assert_eq!(row[2], Cell::Float(0.41));
        assert_eq!(row[3], Cell::Float(10.50));
        // Unspecified type stays a string
        assert_eq!(row[4], Cell::Str("n/a".to_string()));
    }

    #[test]
    fn test_unparseable_numerics_become_null() {
        let frame = report_to_frame(&sample_response()).unwrap();
        let row = &frame.rows()[1];
        assert_eq!(row[1], Cell::Null);
        assert_eq!(row[2], Cell::Null);
    }

    #[test]
    fn test_empty_response_yields_empty_frame() {
        let response = RunReportResponse::default();
        let frame = report_to_frame(&response).unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.column_count(), 0);
    }

    #[test]
    fn test_batch_preserves_report_order() {
        let batch = BatchRunReportsResponse {
            kind: "analyticsData#batchRunReports".to_string(),
            reports: vec![sample_response(), RunReportResponse::default()],
        };
        let frames = batch_to_frames(&batch).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].row_count(), 2);
        assert!(frames[1].is_empty());
    }

    #[test]
    fn test_metadata_frame_sorts_and_dedupes() {
        let metadata = Metadata {
            name: "properties/1/metadata".to_string(),
            dimensions: vec![
                DimensionMetadata {
                    api_name: "country".to_string(),
                    ui_name: "Country".to_string(),
                    ..Default::default()
                },
                DimensionMetadata {
                    api_name: "city".to_string(),
                    ui_name: "City".to_string(),
                    ..Default::default()
                },
                // duplicate
                DimensionMetadata {
                    api_name: "city".to_string(),
                    ui_name: "City".to_string(),
                    ..Default::default()
                },
            ],
            metrics: vec![MetricMetadata {
                api_name: "activeUsers".to_string(),
                metric_type: MetricType::TypeInteger,
                ..Default::default()
            }],
        };

        let frame = metadata_to_frame(&metadata).unwrap();
        assert_eq!(frame.row_count(), 3);
        let names: Vec<String> = frame
            .column("apiName")
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(names, vec!["city", "country", "activeUsers"]);
        assert_eq!(
            frame.column("dataType").unwrap()[2].to_string(),
            "TYPE_INTEGER"
        );
    }
}
