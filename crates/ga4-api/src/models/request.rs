//! Report request types.
//!
//! Builder methods on the request structs accept loose inputs through the
//! conversion traits in [`crate::normalize`], so a bare name string, a typed
//! object, or a sequence of either all canonicalize to the same request.

use serde::{Deserialize, Serialize};

use crate::filter::FilterExpression;
use crate::normalize::{IntoDateRanges, IntoDimensions, IntoMetrics};

/// A categorical field requested from the API.
///
/// # Examples
///
/// ```
/// use ga4_api_rs::models::Dimension;
///
/// let country = Dimension::new("country");
/// assert_eq!(country.name, "country");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    /// The API name of the dimension (e.g. `country`, `pagePath`).
    pub name: String,
}

impl Dimension {
    /// Creates a dimension from its API name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Dimension {
    fn from(name: &str) -> Self {
        Dimension::new(name)
    }
}

impl From<String> for Dimension {
    fn from(name: String) -> Self {
        Dimension::new(name)
    }
}

/// A numeric field requested from the API.
///
/// # Examples
///
/// ## A plain metric
///
/// ```
/// use ga4_api_rs::models::Metric;
///
/// let users = Metric::new("activeUsers");
/// assert!(users.expression.is_none());
/// ```
///
/// ## A derived-expression metric
///
/// ```
/// use ga4_api_rs::models::Metric;
///
/// let per_user = Metric::with_expression("revenuePerUser", "totalRevenue/activeUsers");
/// assert_eq!(per_user.expression.as_deref(), Some("totalRevenue/activeUsers"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// The API name of the metric (e.g. `activeUsers`, `sessions`).
    pub name: String,

    /// Mathematical expression for a derived metric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Excluded from the response; usable in filters and expressions.
    #[serde(default)]
    pub invisible: bool,
}

impl Metric {
    /// Creates a metric from its API name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: None,
            invisible: false,
        }
    }

    /// Creates a derived metric from a name and an expression.
    pub fn with_expression(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: Some(expression.into()),
            invisible: false,
        }
    }
}

impl From<&str> for Metric {
    fn from(name: &str) -> Self {
        Metric::new(name)
    }
}

impl From<String> for Metric {
    fn from(name: String) -> Self {
        Metric::new(name)
    }
}

/// An inclusive date interval.
///
/// Start and end accept `YYYY-MM-DD` dates or the relative forms `today`,
/// `yesterday`, and `NdaysAgo`; values are carried verbatim to the API.
///
/// # Examples
///
/// ```
/// use ga4_api_rs::models::DateRange;
///
/// let january: DateRange = ("2024-01-01", "2024-01-31").into();
/// let rolling = DateRange::new("7daysAgo", "yesterday");
/// assert_eq!(january.start_date, "2024-01-01");
/// assert_eq!(rolling.end_date, "yesterday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First day of the interval.
    pub start_date: String,

    /// Last day of the interval.
    pub end_date: String,

    /// Optional name echoed back in the `dateRange` response dimension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DateRange {
    /// Creates a date range from start and end dates.
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            name: None,
        }
    }

    /// Creates a named date range.
    pub fn named(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            name: Some(name.into()),
        }
    }
}

impl From<(&str, &str)> for DateRange {
    fn from((start, end): (&str, &str)) -> Self {
        DateRange::new(start, end)
    }
}

impl From<(String, String)> for DateRange {
    fn from((start, end): (String, String)) -> Self {
        DateRange::new(start, end)
    }
}

/// Sort order for report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    /// Sort descending when true.
    #[serde(default)]
    pub desc: bool,

    /// Order by a metric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricOrderBy>,

    /// Order by a dimension value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionOrderBy>,
}

/// Metric ordering target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricOrderBy {
    /// The metric to sort by.
    pub metric_name: String,
}

/// Dimension ordering target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionOrderBy {
    /// The dimension to sort by.
    pub dimension_name: String,
}

impl OrderBy {
    /// Sorts ascending by a metric.
    pub fn metric(name: impl Into<String>) -> Self {
        Self {
            desc: false,
            metric: Some(MetricOrderBy {
                metric_name: name.into(),
            }),
            dimension: None,
        }
    }

    /// Sorts descending by a metric.
    pub fn metric_desc(name: impl Into<String>) -> Self {
        Self {
            desc: true,
            ..Self::metric(name)
        }
    }

    /// Sorts ascending by a dimension.
    pub fn dimension(name: impl Into<String>) -> Self {
        Self {
            desc: false,
            metric: None,
            dimension: Some(DimensionOrderBy {
                dimension_name: name.into(),
            }),
        }
    }

    /// Sorts descending by a dimension.
    pub fn dimension_desc(name: impl Into<String>) -> Self {
        Self {
            desc: true,
            ..Self::dimension(name)
        }
    }
}

/// Pivots the report on a set of dimension values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pivot {
    /// Dimension names to pivot on.
    pub field_names: Vec<String>,

    /// Maximum number of pivot columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Ordering of the pivoted values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<OrderBy>,
}

impl Pivot {
    /// Creates a pivot over the given dimension names.
    pub fn new<I, S>(field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field_names: field_names.into_iter().map(Into::into).collect(),
            limit: None,
            order_bys: Vec::new(),
        }
    }

    /// Caps the number of pivot columns.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request body for the `runReport` operation.
///
/// # Examples
///
/// ```
/// use ga4_api_rs::models::RunReportRequest;
///
/// let request = RunReportRequest::new()
///     .with_dimensions("country")
///     .with_metrics(["activeUsers", "sessions"])
///     .with_date_ranges(("2024-01-01", "2024-01-31"))
///     .with_limit(50);
/// assert_eq!(request.metrics.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
    /// Dimensions to group by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,

    /// Metrics to aggregate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,

    /// Date intervals to report over.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_ranges: Vec<DateRange>,

    /// Filter applied to dimension values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<FilterExpression>,

    /// Filter applied to aggregated metric values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_filter: Option<FilterExpression>,

    /// Row ordering.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<OrderBy>,

    /// Maximum number of rows to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Row offset for paging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Keep rows whose metrics are all zero.
    #[serde(default)]
    pub keep_empty_rows: bool,
}

impl RunReportRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dimensions from a name, a typed object, or a sequence of either.
    pub fn with_dimensions(mut self, dimensions: impl IntoDimensions) -> Self {
        self.dimensions = dimensions.into_dimensions();
        self
    }

    /// Sets the metrics from a name, a typed object, or a sequence of either.
    pub fn with_metrics(mut self, metrics: impl IntoMetrics) -> Self {
        self.metrics = metrics.into_metrics();
        self
    }

    /// Sets the date ranges from a tuple, a typed object, or a sequence of either.
    pub fn with_date_ranges(mut self, date_ranges: impl IntoDateRanges) -> Self {
        self.date_ranges = date_ranges.into_date_ranges();
        self
    }

    /// Sets the dimension filter.
    pub fn with_dimension_filter(mut self, filter: FilterExpression) -> Self {
        self.dimension_filter = Some(filter);
        self
    }

    /// Sets the metric filter.
    pub fn with_metric_filter(mut self, filter: FilterExpression) -> Self {
        self.metric_filter = Some(filter);
        self
    }

    /// Sets the row ordering.
    pub fn with_order_bys(mut self, order_bys: Vec<OrderBy>) -> Self {
        self.order_bys = order_bys;
        self
    }

    /// Caps the number of returned rows.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` rows.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Request body for the `batchRunReports` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRunReportsRequest {
    /// Individual report requests, answered in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<RunReportRequest>,
}

impl BatchRunReportsRequest {
    /// Creates a batch from individual report requests.
    pub fn new(requests: Vec<RunReportRequest>) -> Self {
        Self { requests }
    }
}

/// Request body for the `runPivotReport` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPivotReportRequest {
    /// Dimensions to group by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,

    /// Metrics to aggregate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,

    /// Date intervals to report over.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_ranges: Vec<DateRange>,

    /// Pivot descriptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pivots: Vec<Pivot>,

    /// Filter applied to dimension values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<FilterExpression>,

    /// Filter applied to aggregated metric values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_filter: Option<FilterExpression>,
}

impl RunPivotReportRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dimensions from a name, a typed object, or a sequence of either.
    pub fn with_dimensions(mut self, dimensions: impl IntoDimensions) -> Self {
        self.dimensions = dimensions.into_dimensions();
        self
    }

    /// Sets the metrics from a name, a typed object, or a sequence of either.
    pub fn with_metrics(mut self, metrics: impl IntoMetrics) -> Self {
        self.metrics = metrics.into_metrics();
        self
    }

    /// Sets the date ranges from a tuple, a typed object, or a sequence of either.
    pub fn with_date_ranges(mut self, date_ranges: impl IntoDateRanges) -> Self {
        self.date_ranges = date_ranges.into_date_ranges();
        self
    }

    /// Adds a pivot.
    pub fn with_pivot(mut self, pivot: Pivot) -> Self {
        self.pivots.push(pivot);
        self
    }

    /// Sets the dimension filter.
    pub fn with_dimension_filter(mut self, filter: FilterExpression) -> Self {
        self.dimension_filter = Some(filter);
        self
    }
}

/// Request body for the `batchRunPivotReports` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRunPivotReportsRequest {
    /// Individual pivot report requests, answered in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<RunPivotReportRequest>,
}

impl BatchRunPivotReportsRequest {
    /// Creates a batch from individual pivot report requests.
    pub fn new(requests: Vec<RunPivotReportRequest>) -> Self {
        Self { requests }
    }
}

/// Request body for the `runRealtimeReport` operation.
///
/// Realtime reports cover the last 30 minutes and take no date ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRealtimeReportRequest {
    /// Dimensions to group by.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,

    /// Metrics to aggregate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<Metric>,

    /// Filter applied to dimension values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<FilterExpression>,

    /// Filter applied to aggregated metric values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_filter: Option<FilterExpression>,

    /// Maximum number of rows to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl RunRealtimeReportRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dimensions from a name, a typed object, or a sequence of either.
    pub fn with_dimensions(mut self, dimensions: impl IntoDimensions) -> Self {
        self.dimensions = dimensions.into_dimensions();
        self
    }

    /// Sets the metrics from a name, a typed object, or a sequence of either.
    pub fn with_metrics(mut self, metrics: impl IntoMetrics) -> Self {
        self.metrics = metrics.into_metrics();
        self
    }

    /// Caps the number of returned rows.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
