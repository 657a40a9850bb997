//! Request and response models for the Analytics Data API.

pub mod metadata;
pub mod request;
pub mod response;

pub use metadata::{DimensionMetadata, Metadata, MetricMetadata};
pub use request::{
    BatchRunPivotReportsRequest, BatchRunReportsRequest, DateRange, Dimension, DimensionOrderBy,
    Metric, MetricOrderBy, OrderBy, Pivot, RunPivotReportRequest, RunRealtimeReportRequest,
    RunReportRequest,
};
pub use response::{
    BatchRunPivotReportsResponse, BatchRunReportsResponse, DimensionHeader, DimensionValue,
    MetricHeader, MetricType, MetricValue, Row, RunPivotReportResponse, RunRealtimeReportResponse,
    RunReportResponse,
};
