//! Report response types.

use serde::{Deserialize, Serialize};

/// Describes one dimension column of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionHeader {
    /// The dimension's API name.
    #[serde(default)]
    pub name: String,
}

/// Describes one metric column of a report, including its value type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricHeader {
    /// The metric's API name.
    #[serde(default)]
    pub name: String,

    /// Declared value type, used to coerce the stringly-typed row values.
    #[serde(rename = "type", default)]
    pub metric_type: MetricType,
}

/// Value types a metric column can declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    /// Type not declared; values stay strings.
    #[default]
    MetricTypeUnspecified,
    /// Integer count.
    TypeInteger,
    /// Floating-point value.
    TypeFloat,
    /// Duration in seconds.
    TypeSeconds,
    /// Duration in milliseconds.
    TypeMilliseconds,
    /// Duration in minutes.
    TypeMinutes,
    /// Duration in hours.
    TypeHours,
    /// Custom standard unit.
    TypeStandard,
    /// Currency amount.
    TypeCurrency,
    /// Length in feet.
    TypeFeet,
    /// Length in miles.
    TypeMiles,
    /// Length in meters.
    TypeMeters,
    /// Length in kilometers.
    TypeKilometers,
}

impl MetricType {
    /// Whether values of this type coerce to integers.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            MetricType::TypeInteger | MetricType::TypeSeconds | MetricType::TypeMilliseconds
        )
    }

    /// Whether values of this type coerce to floats.
    pub fn is_float(&self) -> bool {
        matches!(
            self,
            MetricType::TypeFloat
                | MetricType::TypeCurrency
                | MetricType::TypeStandard
                | MetricType::TypeMinutes
                | MetricType::TypeHours
                | MetricType::TypeFeet
                | MetricType::TypeMiles
                | MetricType::TypeMeters
                | MetricType::TypeKilometers
        )
    }

    /// The wire name of the type (e.g. `TYPE_INTEGER`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::MetricTypeUnspecified => "METRIC_TYPE_UNSPECIFIED",
            MetricType::TypeInteger => "TYPE_INTEGER",
            MetricType::TypeFloat => "TYPE_FLOAT",
            MetricType::TypeSeconds => "TYPE_SECONDS",
            MetricType::TypeMilliseconds => "TYPE_MILLISECONDS",
            MetricType::TypeMinutes => "TYPE_MINUTES",
            MetricType::TypeHours => "TYPE_HOURS",
            MetricType::TypeStandard => "TYPE_STANDARD",
            MetricType::TypeCurrency => "TYPE_CURRENCY",
            MetricType::TypeFeet => "TYPE_FEET",
            MetricType::TypeMiles => "TYPE_MILES",
            MetricType::TypeMeters => "TYPE_METERS",
            MetricType::TypeKilometers => "TYPE_KILOMETERS",
        }
    }
}

/// One dimension value within a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionValue {
    /// The value as a string.
    #[serde(default)]
    pub value: String,
}

/// One metric value within a row. Always a string on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    /// The value as a string.
    #[serde(default)]
    pub value: String,
}

/// One report row: dimension values followed by metric values, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Values for each dimension header.
    #[serde(default)]
    pub dimension_values: Vec<DimensionValue>,

    /// Values for each metric header.
    #[serde(default)]
    pub metric_values: Vec<MetricValue>,
}

/// Response body of the `runReport` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportResponse {
    /// Response kind identifier (e.g. `analyticsData#runReport`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Dimension column descriptions, in column order.
    #[serde(default)]
    pub dimension_headers: Vec<DimensionHeader>,

    /// Metric column descriptions, in column order.
    #[serde(default)]
    pub metric_headers: Vec<MetricHeader>,

    /// Report rows.
    #[serde(default)]
    pub rows: Vec<Row>,

    /// Total number of rows matching the query, ignoring `limit`/`offset`.
    #[serde(default)]
    pub row_count: i64,
}

/// Pivot report responses share the tabular shape of standard reports.
pub type RunPivotReportResponse = RunReportResponse;

/// Realtime report responses share the tabular shape of standard reports.
pub type RunRealtimeReportResponse = RunReportResponse;

/// Response body of the `batchRunReports` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRunReportsResponse {
    /// Response kind identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// One response per batched request, in request order.
    #[serde(default)]
    pub reports: Vec<RunReportResponse>,
}

/// Response body of the `batchRunPivotReports` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRunPivotReportsResponse {
    /// Response kind identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// One response per batched request, in request order.
    #[serde(default)]
    pub pivot_reports: Vec<RunPivotReportResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_type_deserializes_wire_names() {
        let t: MetricType = serde_json::from_str("\"TYPE_INTEGER\"").unwrap();
        assert_eq!(t, MetricType::TypeInteger);
        let t: MetricType = serde_json::from_str("\"TYPE_CURRENCY\"").unwrap();
        assert_eq!(t, MetricType::TypeCurrency);
    }

    #[test]
    fn test_metric_type_as_str_round_trips() {
        for t in [
            MetricType::MetricTypeUnspecified,
            MetricType::TypeInteger,
            MetricType::TypeFloat,
            MetricType::TypeSeconds,
            MetricType::TypeMilliseconds,
            MetricType::TypeMinutes,
            MetricType::TypeHours,
            MetricType::TypeStandard,
            MetricType::TypeCurrency,
            MetricType::TypeFeet,
            MetricType::TypeMiles,
            MetricType::TypeMeters,
            MetricType::TypeKilometers,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_metric_type_coercion_classes_are_disjoint() {
        assert!(MetricType::TypeInteger.is_integer());
        assert!(!MetricType::TypeInteger.is_float());
        assert!(MetricType::TypeCurrency.is_float());
        assert!(!MetricType::TypeCurrency.is_integer());
        assert!(!MetricType::MetricTypeUnspecified.is_integer());
        assert!(!MetricType::MetricTypeUnspecified.is_float());
    }

    #[test]
    fn test_run_report_response_deserializes() {
        let json = r#"{
            "kind": "analyticsData#runReport",
            "dimensionHeaders": [{"name": "country"}],
            "metricHeaders": [{"name": "activeUsers", "type": "TYPE_INTEGER"}],
            "rows": [
                {
                    "dimensionValues": [{"value": "United States"}],
                    "metricValues": [{"value": "1234"}]
                }
            ],
            "rowCount": 1
        }"#;

        let response: RunReportResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.kind, "analyticsData#runReport");
        assert_eq!(response.dimension_headers[0].name, "country");
        assert_eq!(response.metric_headers[0].metric_type, MetricType::TypeInteger);
        assert_eq!(response.rows[0].metric_values[0].value, "1234");
        assert_eq!(response.row_count, 1);
    }

    #[test]
    fn test_missing_fields_default() {
        let response: RunReportResponse = serde_json::from_str("{}").unwrap();
        assert!(response.rows.is_empty());
        assert_eq!(response.row_count, 0);
        assert!(response.kind.is_empty());
    }

    #[test]
    fn test_batch_response_preserves_report_order() {
        let json = r#"{
            "kind": "analyticsData#batchRunReports",
            "reports": [
                {"rowCount": 1},
                {"rowCount": 2}
            ]
        }"#;
        let response: BatchRunReportsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.reports.len(), 2);
        assert_eq!(response.reports[1].row_count, 2);
    }
}
