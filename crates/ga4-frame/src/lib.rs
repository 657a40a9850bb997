//! Tabular results, export, and high-level query helpers for the
//! Analytics Data API.
//!
//! # Quick Start
//!
//! ```no_run
//! use ga4_api_rs::prelude::*;
//! use ga4_frame_rs::{export, query};
//!
//! # fn main() -> std::result::Result<(), ga4_frame_rs::FrameError> {
//! let client = AnalyticsClient::from_env()?;
//! let property = PropertyId::new("123456789")?;
//!
//! let request = RunReportRequest::new()
//!     .with_dimensions("country")
//!     .with_metrics(["activeUsers", "sessions"])
//!     .with_date_ranges(("2024-01-01", "2024-01-31"));
//!
//! let frame = query::run_report_frame(&client, &property, &request)?;
//! export::write_csv(&frame, "report.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod error;
pub mod export;
pub mod frame;
pub mod query;

pub use convert::ReportFrames;
pub use error::{FrameError, FrameResult};
pub use frame::{Cell, Frame};

// Re-export the API crate so callers need only one dependency.
pub use ga4_api_rs as api;
