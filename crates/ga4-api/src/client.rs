//! HTTP client wrapper for the Analytics Data API.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth;
use crate::error::{ApiError, Error, Result};
use crate::models::{
    BatchRunPivotReportsRequest, BatchRunPivotReportsResponse, BatchRunReportsRequest,
    BatchRunReportsResponse, Metadata, RunPivotReportRequest, RunPivotReportResponse,
    RunRealtimeReportRequest, RunRealtimeReportResponse, RunReportRequest, RunReportResponse,
};
use crate::property::PropertyId;
use crate::report::{ReportRequest, ReportResponse};

/// Base URL for the Analytics Data API v1beta.
const BASE_URL: &str = "https://analyticsdata.googleapis.com/v1beta";

/// Client for the Analytics Data API.
///
/// Calls are synchronous and blocking; errors are returned to the caller and
/// never retried.
///
/// # Examples
///
/// ```no_run
/// use ga4_api_rs::prelude::*;
///
/// # fn main() -> ga4_api_rs::Result<()> {
/// let client = AnalyticsClient::from_env()?;
/// let property = PropertyId::new("123456789")?;
/// let request = RunReportRequest::new()
///     .with_dimensions("country")
///     .with_metrics("activeUsers")
///     .with_date_ranges(("2024-01-01", "2024-01-31"));
/// let response = client.run_report(&property, &request)?;
/// println!("{} rows", response.row_count);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AnalyticsClient {
    token: String,
    http_client: reqwest::blocking::Client,
    base_url: String,
}

impl AnalyticsClient {
    /// Creates a client from a ready OAuth2 bearer access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            http_client: reqwest::blocking::Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a client from the `GA4_ACCESS_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(auth::token_from_env()?))
    }

    /// Creates a client with a custom base URL (primarily for testing).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            http_client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs a standard report.
    pub fn run_report(
        &self,
        property: &PropertyId,
        request: &RunReportRequest,
    ) -> Result<RunReportResponse> {
        self.post(&format!("/{}:runReport", property.resource_name()), request)
    }

    /// Runs several reports in one round trip.
    pub fn batch_run_reports(
        &self,
        property: &PropertyId,
        request: &BatchRunReportsRequest,
    ) -> Result<BatchRunReportsResponse> {
        self.post(
            &format!("/{}:batchRunReports", property.resource_name()),
            request,
        )
    }

    /// Runs a pivot report.
    pub fn run_pivot_report(
        &self,
        property: &PropertyId,
        request: &RunPivotReportRequest,
    ) -> Result<RunPivotReportResponse> {
        self.post(
            &format!("/{}:runPivotReport", property.resource_name()),
            request,
        )
    }

    /// Runs several pivot reports in one round trip.
    pub fn batch_run_pivot_reports(
        &self,
        property: &PropertyId,
        request: &BatchRunPivotReportsRequest,
    ) -> Result<BatchRunPivotReportsResponse> {
        self.post(
            &format!("/{}:batchRunPivotReports", property.resource_name()),
            request,
        )
    }

    /// Runs a realtime report over the last 30 minutes.
    pub fn run_realtime_report(
        &self,
        property: &PropertyId,
        request: &RunRealtimeReportRequest,
    ) -> Result<RunRealtimeReportResponse> {
        self.post(
            &format!("/{}:runRealtimeReport", property.resource_name()),
            request,
        )
    }

    /// Fetches the dimensions and metrics available on a property.
    pub fn get_metadata(&self, property: &PropertyId) -> Result<Metadata> {
        self.get(&format!("/{}/metadata", property.resource_name()))
    }

    /// Dispatches a request of any report kind.
    pub fn query(&self, property: &PropertyId, request: &ReportRequest) -> Result<ReportResponse> {
        debug!(kind = %request.report_type(), property = %property, "dispatching query");
        match request {
            ReportRequest::Report(r) => Ok(ReportResponse::Report(self.run_report(property, r)?)),
            ReportRequest::BatchReport(r) => Ok(ReportResponse::BatchReport(
                self.batch_run_reports(property, r)?,
            )),
            ReportRequest::Pivot(r) => {
                Ok(ReportResponse::Pivot(self.run_pivot_report(property, r)?))
            }
            ReportRequest::BatchPivot(r) => Ok(ReportResponse::BatchPivot(
                self.batch_run_pivot_reports(property, r)?,
            )),
            ReportRequest::Realtime(r) => Ok(ReportResponse::Realtime(
                self.run_realtime_report(property, r)?,
            )),
        }
    }

    /// Performs a GET request to the given endpoint.
    fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .send()?;

        self.handle_response(response)
    }

    /// Performs a POST request to the given endpoint with a JSON body.
    fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "POST");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()?;

        self.handle_response(response)
    }

    /// Handles the HTTP response, converting failures to our error types.
    fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.json::<T>()?;
            return Ok(body);
        }

        Err(self.parse_error_response(response))
    }

    /// Parses an error response into our error types.
    fn parse_error_response(&self, response: reqwest::blocking::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        // Extract retry-after header for rate limiting
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response.text().unwrap_or_default();
        let message = extract_error_message(&body).unwrap_or(body);

        let api_error = match status_code {
            401 | 403 => ApiError::Auth {
                message: if message.is_empty() {
                    "Authentication failed".to_string()
                } else {
                    message
                },
            },
            429 => ApiError::RateLimit { retry_after },
            400 => ApiError::Validation {
                message: if message.is_empty() {
                    "Bad request".to_string()
                } else {
                    message
                },
            },
            _ => ApiError::Http {
                status: status_code,
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    message
                },
            },
        };

        Error::Api(api_error)
    }
}

/// Pulls the human-readable message out of a Google error body.
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        #[serde(default)]
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.is_empty())
}

impl fmt::Debug for AnalyticsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticsClient")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
