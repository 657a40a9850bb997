//! Error types for the filter builder.

use thiserror::Error;

/// A specialized Result type for filter-building operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while building filter expressions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The operator string is not a recognized alias.
    #[error("unsupported filter operator: {operator}")]
    UnsupportedOperator {
        /// The unrecognized operator string.
        operator: String,
    },

    /// The value shape does not fit the operator.
    #[error("operator '{operator}' requires {expected}")]
    ValueType {
        /// The operator whose value was rejected.
        operator: String,
        /// Description of the expected value shape.
        expected: &'static str,
    },

    /// `between` takes exactly two values.
    #[error("operator 'between' requires exactly two values: [min, max]")]
    BetweenBounds,

    /// A combinator was given no children.
    #[error("filter group requires at least one expression")]
    EmptyGroup,
}

impl FilterError {
    /// Creates an unsupported operator error.
    pub fn unsupported_operator(operator: impl Into<String>) -> Self {
        FilterError::UnsupportedOperator {
            operator: operator.into(),
        }
    }

    /// Creates a value type error.
    pub fn value_type(operator: impl Into<String>, expected: &'static str) -> Self {
        FilterError::ValueType {
            operator: operator.into(),
            expected,
        }
    }
}
