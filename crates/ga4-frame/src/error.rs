//! Error types for frames, conversion, and export.

use thiserror::Error;

/// A specialized Result type for frame operations.
pub type FrameResult<T> = std::result::Result<T, FrameError>;

/// Errors that can occur while building, converting, or exporting frames.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The underlying API call failed.
    #[error(transparent)]
    Api(#[from] ga4_api_rs::Error),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Excel serialization failed.
    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A date string could not be parsed.
    #[error("date parse error: {0}")]
    Date(#[from] chrono::ParseError),

    /// Sheet names were supplied but don't match the number of frames.
    #[error("expected {expected} sheet names, got {got}")]
    SheetNames {
        /// Number of frames being exported.
        expected: usize,
        /// Number of sheet names supplied.
        got: usize,
    },

    /// A row's cell count does not match the frame's column count.
    #[error("row has {got} cells, frame has {expected} columns")]
    ColumnCount {
        /// Number of columns in the frame.
        expected: usize,
        /// Number of cells in the rejected row.
        got: usize,
    },
}
