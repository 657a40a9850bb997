//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types so library consumers can import
//! everything they need with a single use statement.
//!
//! # Example
//!
//! ```
//! use ga4_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - AnalyticsClient (API client)
//! // - Error, ApiError, FilterError, Result (error handling)
//! // - dimension_filter, metric_filter, and_filter, ... (filter builder)
//! // - RunReportRequest, Dimension, Metric, DateRange, ... (models)
//! ```

// Client types
pub use crate::client::AnalyticsClient;

// Error types
pub use crate::error::{ApiError, Error, Result};

// Property identifiers
pub use crate::property::PropertyId;

// Filter builder
pub use crate::filter::{
    and_filter, dimension_filter, dimension_filter_case_sensitive, metric_filter, not_filter,
    or_filter, FilterError, FilterExpression, FilterValue,
};

// Request models
pub use crate::models::{
    BatchRunPivotReportsRequest, BatchRunReportsRequest, DateRange, Dimension, Metric, OrderBy,
    Pivot, RunPivotReportRequest, RunRealtimeReportRequest, RunReportRequest,
};

// Response models
pub use crate::models::{
    BatchRunPivotReportsResponse, BatchRunReportsResponse, Metadata, MetricType,
    RunPivotReportResponse, RunRealtimeReportResponse, RunReportResponse,
};

// Normalization traits
pub use crate::normalize::{IntoDateRanges, IntoDimensions, IntoMetrics};

// Report kinds
pub use crate::report::{ReportRequest, ReportResponse, ReportType};

// Credentials
pub use crate::auth::ServiceAccountKey;
