//! Error types for the Analytics Data API client.

use thiserror::Error;

use crate::filter::FilterError;

/// A specialized Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate.
///
/// Every operation fails synchronously with one of these variants; nothing
/// is retried or recovered internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The service-account key file is missing, unreadable, or malformed.
    #[error("credential error: {message}")]
    Credential {
        /// What went wrong while loading the key file.
        message: String,
    },

    /// The property ID is not a numeric identifier.
    #[error("invalid property ID: {value} (expected a numeric ID)")]
    InvalidPropertyId {
        /// The rejected input.
        value: String,
    },

    /// The report type string is not one of the supported kinds.
    #[error(
        "invalid report type: {value} (expected one of: report, batch_report, pivot, batch_pivot, realtime)"
    )]
    InvalidReportType {
        /// The rejected input.
        value: String,
    },

    /// A filter expression could not be built.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// The API rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The HTTP transport failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    /// Creates a credential error.
    pub fn credential(message: impl Into<String>) -> Self {
        Error::Credential {
            message: message.into(),
        }
    }

    /// Creates an invalid property ID error.
    pub fn invalid_property_id(value: impl Into<String>) -> Self {
        Error::InvalidPropertyId {
            value: value.into(),
        }
    }

    /// Creates an invalid report type error.
    pub fn invalid_report_type(value: impl Into<String>) -> Self {
        Error::InvalidReportType {
            value: value.into(),
        }
    }
}

/// Errors reported by the Analytics Data API itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    #[error("HTTP error {status}: {message}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// Authentication failure (401/403).
    #[error("auth error: {message}")]
    Auth {
        /// Message extracted from the error body.
        message: String,
    },

    /// Quota exhausted (429).
    #[error("rate limited")]
    RateLimit {
        /// Value of the `Retry-After` header, if the API sent one.
        retry_after: Option<u64>,
    },

    /// The API rejected the request as invalid (400).
    #[error("validation error: {message}")]
    Validation {
        /// Message extracted from the error body.
        message: String,
    },
}
