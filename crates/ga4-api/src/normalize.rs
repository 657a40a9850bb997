//! Conversion traits that promote loose inputs into typed request fields.
//!
//! A bare name string, an already-typed object, or a sequence of either all
//! canonicalize to the same `Vec` of typed objects: a scalar promotes to a
//! singleton sequence, and a typed object passes through unchanged. The
//! Vec-of-names shorthand and the typed form are interchangeable anywhere a
//! request builder takes one of these traits.
//!
//! # Examples
//!
//! ```
//! use ga4_api_rs::models::Dimension;
//! use ga4_api_rs::normalize::IntoDimensions;
//!
//! // Scalar and singleton sequence are equivalent.
//! assert_eq!("country".into_dimensions(), ["country"].into_dimensions());
//!
//! // Typed objects pass through unchanged.
//! let typed = vec![Dimension::new("country"), Dimension::new("city")];
//! assert_eq!(typed.clone().into_dimensions(), typed);
//! ```

use crate::models::{DateRange, Dimension, Metric};

/// Canonicalizes a dimension input into an ordered list of [`Dimension`]s.
pub trait IntoDimensions {
    /// Performs the conversion.
    fn into_dimensions(self) -> Vec<Dimension>;
}

impl IntoDimensions for Dimension {
    fn into_dimensions(self) -> Vec<Dimension> {
        vec![self]
    }
}

impl IntoDimensions for &str {
    fn into_dimensions(self) -> Vec<Dimension> {
        vec![self.into()]
    }
}

impl IntoDimensions for String {
    fn into_dimensions(self) -> Vec<Dimension> {
        vec![self.into()]
    }
}

impl<T: Into<Dimension>> IntoDimensions for Vec<T> {
    fn into_dimensions(self) -> Vec<Dimension> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Dimension>, const N: usize> IntoDimensions for [T; N] {
    fn into_dimensions(self) -> Vec<Dimension> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Dimension> + Clone> IntoDimensions for &[T] {
    fn into_dimensions(self) -> Vec<Dimension> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// Canonicalizes a metric input into an ordered list of [`Metric`]s.
pub trait IntoMetrics {
    /// Performs the conversion.
    fn into_metrics(self) -> Vec<Metric>;
}

impl IntoMetrics for Metric {
    fn into_metrics(self) -> Vec<Metric> {
        vec![self]
    }
}

impl IntoMetrics for &str {
    fn into_metrics(self) -> Vec<Metric> {
        vec![self.into()]
    }
}

impl IntoMetrics for String {
    fn into_metrics(self) -> Vec<Metric> {
        vec![self.into()]
    }
}

impl<T: Into<Metric>> IntoMetrics for Vec<T> {
    fn into_metrics(self) -> Vec<Metric> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Metric>, const N: usize> IntoMetrics for [T; N] {
    fn into_metrics(self) -> Vec<Metric> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Metric> + Clone> IntoMetrics for &[T] {
    fn into_metrics(self) -> Vec<Metric> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// Canonicalizes a date-range input into an ordered list of [`DateRange`]s.
pub trait IntoDateRanges {
    /// Performs the conversion.
    fn into_date_ranges(self) -> Vec<DateRange>;
}

impl IntoDateRanges for DateRange {
    fn into_date_ranges(self) -> Vec<DateRange> {
        vec![self]
    }
}

impl IntoDateRanges for (&str, &str) {
    fn into_date_ranges(self) -> Vec<DateRange> {
        vec![self.into()]
    }
}

impl IntoDateRanges for (String, String) {
    fn into_date_ranges(self) -> Vec<DateRange> {
        vec![self.into()]
    }
}

impl<T: Into<DateRange>> IntoDateRanges for Vec<T> {
    fn into_date_ranges(self) -> Vec<DateRange> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<DateRange>, const N: usize> IntoDateRanges for [T; N] {
    fn into_date_ranges(self) -> Vec<DateRange> {
        self.into_iter().map(Into::into).collect()
    }
}
