//! Report kinds and kind-dispatched request/response unions.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{
    BatchRunPivotReportsRequest, BatchRunPivotReportsResponse, BatchRunReportsRequest,
    BatchRunReportsResponse, RunPivotReportRequest, RunPivotReportResponse,
    RunRealtimeReportRequest, RunRealtimeReportResponse, RunReportRequest, RunReportResponse,
};

/// The supported report kinds.
///
/// Parses from the snake_case names used throughout the API surface;
/// unknown strings fail with [`Error::InvalidReportType`].
///
/// # Examples
///
/// ```
/// use ga4_api_rs::ReportType;
///
/// let kind: ReportType = "batch_report".parse().unwrap();
/// assert_eq!(kind, ReportType::BatchReport);
/// assert!("weekly".parse::<ReportType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    /// A single `runReport` query.
    Report,
    /// Several report queries answered together.
    BatchReport,
    /// A single `runPivotReport` query.
    Pivot,
    /// Several pivot queries answered together.
    BatchPivot,
    /// A `runRealtimeReport` query over the last 30 minutes.
    Realtime,
}

impl ReportType {
    /// The snake_case name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Report => "report",
            ReportType::BatchReport => "batch_report",
            ReportType::Pivot => "pivot",
            ReportType::BatchPivot => "batch_pivot",
            ReportType::Realtime => "realtime",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(ReportType::Report),
            "batch_report" => Ok(ReportType::BatchReport),
            "pivot" => Ok(ReportType::Pivot),
            "batch_pivot" => Ok(ReportType::BatchPivot),
            "realtime" => Ok(ReportType::Realtime),
            other => Err(Error::invalid_report_type(other)),
        }
    }
}

/// A request of any report kind, for kind-dispatched querying.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRequest {
    /// A `runReport` request.
    Report(RunReportRequest),
    /// A `batchRunReports` request.
    BatchReport(BatchRunReportsRequest),
    /// A `runPivotReport` request.
    Pivot(RunPivotReportRequest),
    /// A `batchRunPivotReports` request.
    BatchPivot(BatchRunPivotReportsRequest),
    /// A `runRealtimeReport` request.
    Realtime(RunRealtimeReportRequest),
}

impl ReportRequest {
    /// The kind of report this request produces.
    pub fn report_type(&self) -> ReportType {
        match self {
            ReportRequest::Report(_) => ReportType::Report,
            ReportRequest::BatchReport(_) => ReportType::BatchReport,
            ReportRequest::Pivot(_) => ReportType::Pivot,
            ReportRequest::BatchPivot(_) => ReportType::BatchPivot,
            ReportRequest::Realtime(_) => ReportType::Realtime,
        }
    }
}

impl From<RunReportRequest> for ReportRequest {
    fn from(request: RunReportRequest) -> Self {
        ReportRequest::Report(request)
    }
}

impl From<BatchRunReportsRequest> for ReportRequest {
    fn from(request: BatchRunReportsRequest) -> Self {
        ReportRequest::BatchReport(request)
    }
}

impl From<RunPivotReportRequest> for ReportRequest {
    fn from(request: RunPivotReportRequest) -> Self {
        ReportRequest::Pivot(request)
    }
}

impl From<BatchRunPivotReportsRequest> for ReportRequest {
    fn from(request: BatchRunPivotReportsRequest) -> Self {
        ReportRequest::BatchPivot(request)
    }
}

impl From<RunRealtimeReportRequest> for ReportRequest {
    fn from(request: RunRealtimeReportRequest) -> Self {
        ReportRequest::Realtime(request)
    }
}

/// A response of any report kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportResponse {
    /// A `runReport` response.
    Report(RunReportResponse),
    /// A `batchRunReports` response.
    BatchReport(BatchRunReportsResponse),
    /// A `runPivotReport` response.
    Pivot(RunPivotReportResponse),
    /// A `batchRunPivotReports` response.
    BatchPivot(BatchRunPivotReportsResponse),
    /// A `runRealtimeReport` response.
    Realtime(RunRealtimeReportResponse),
}

impl ReportResponse {
    /// The kind of report this response carries.
    pub fn report_type(&self) -> ReportType {
        match self {
            ReportResponse::Report(_) => ReportType::Report,
            ReportResponse::BatchReport(_) => ReportType::BatchReport,
            ReportResponse::Pivot(_) => ReportType::Pivot,
            ReportResponse::BatchPivot(_) => ReportType::BatchPivot,
            ReportResponse::Realtime(_) => ReportType::Realtime,
        }
    }
}
