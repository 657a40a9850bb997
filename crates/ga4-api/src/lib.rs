//! Google Analytics 4 Data API client library
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use ga4_api_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`AnalyticsClient`],
//! error types, the filter builder, and the report request/response models.
//!
//! A minimal report request:
//!
//! ```
//! use ga4_api_rs::prelude::*;
//!
//! let request = RunReportRequest::new()
//!     .with_dimensions(["country", "city"])
//!     .with_metrics("activeUsers")
//!     .with_date_ranges(("2024-01-01", "2024-01-31"));
//! assert_eq!(request.dimensions.len(), 2);
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod prelude;
pub mod property;
pub mod report;

pub use client::AnalyticsClient;
pub use error::{ApiError, Error, Result};
pub use property::PropertyId;
pub use report::ReportType;
