//! The filter expression tree.
//!
//! [`FilterExpression`] is a tagged-variant enum matching the Analytics Data
//! API's `FilterExpression` message: a leaf comparison, or an AND/OR/NOT
//! combination of child expressions. Trees are immutable once built and
//! serialize to the exact JSON wire shape the API expects.

use serde::{Deserialize, Serialize};

use super::error::{FilterError, FilterResult};

/// A parsed filter expression.
///
/// # Examples
///
/// ```
/// use ga4_api_rs::filter::{dimension_filter, FilterExpression};
///
/// let us = dimension_filter("country", "==", "United States").unwrap();
/// let not_us = FilterExpression::negate(us);
/// assert!(matches!(not_us, FilterExpression::NotExpression(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterExpression {
    /// A single comparison predicate.
    Filter(FieldFilter),

    /// Logical AND of child expressions.
    AndGroup(ExpressionList),

    /// Logical OR of child expressions.
    OrGroup(ExpressionList),

    /// Logical NOT of a child expression.
    NotExpression(Box<FilterExpression>),
}

impl FilterExpression {
    /// Creates a leaf expression from a field filter.
    pub fn leaf(filter: FieldFilter) -> Self {
        FilterExpression::Filter(filter)
    }

    /// Combines child expressions with AND logic.
    ///
    /// Child order and count are preserved; a singleton group collapses to
    /// the child itself. Fails on an empty child list.
    pub fn and_group(children: Vec<FilterExpression>) -> FilterResult<Self> {
        Self::group(children, FilterExpression::AndGroup)
    }

    /// Combines child expressions with OR logic.
    ///
    /// Child order and count are preserved; a singleton group collapses to
    /// the child itself. Fails on an empty child list.
    pub fn or_group(children: Vec<FilterExpression>) -> FilterResult<Self> {
        Self::group(children, FilterExpression::OrGroup)
    }

    /// Negates an expression.
    pub fn negate(inner: FilterExpression) -> Self {
        FilterExpression::NotExpression(Box::new(inner))
    }

    fn group(
        mut children: Vec<FilterExpression>,
        wrap: fn(ExpressionList) -> FilterExpression,
    ) -> FilterResult<Self> {
        match children.len() {
            0 => Err(FilterError::EmptyGroup),
            1 => Ok(children.remove(0)),
            _ => Ok(wrap(ExpressionList {
                expressions: children,
            })),
        }
    }
}

/// Child expressions of an AND/OR group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionList {
    /// The child expressions, in caller order.
    pub expressions: Vec<FilterExpression>,
}

/// One comparison against a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFilter {
    /// The dimension or metric name being compared.
    pub field_name: String,

    /// The predicate applied to the field.
    #[serde(flatten)]
    pub kind: FilterKind,
}

/// The predicate kinds a leaf filter can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    /// String comparison (exact, substring, prefix/suffix, regex).
    StringFilter(StringFilter),

    /// Set membership.
    InListFilter(InListFilter),

    /// Numeric comparison.
    NumericFilter(NumericFilter),

    /// Inclusive numeric range.
    BetweenFilter(BetweenFilter),

    /// Matches empty/unset values.
    EmptyFilter(EmptyFilter),
}

/// String comparison predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFilter {
    /// How the value is matched against the field.
    pub match_type: MatchType,

    /// The value to compare against.
    pub value: String,

    /// Whether the comparison is case-sensitive.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Match behavior for [`StringFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    /// Exact match.
    Exact,
    /// Begins with the value.
    BeginsWith,
    /// Ends with the value.
    EndsWith,
    /// Contains the value.
    Contains,
    /// Full match against a regular expression.
    FullRegexp,
    /// Partial match against a regular expression.
    PartialRegexp,
}

/// Set-membership predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InListFilter {
    /// Candidate values, in caller order.
    pub values: Vec<String>,

    /// Whether the comparison is case-sensitive.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Numeric comparison predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericFilter {
    /// The comparison operation.
    pub operation: NumericOperation,

    /// The value to compare against.
    pub value: NumericValue,
}

/// Comparison operation for [`NumericFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumericOperation {
    /// Equal.
    Equal,
    /// Less than.
    LessThan,
    /// Less than or equal.
    LessThanOrEqual,
    /// Greater than.
    GreaterThan,
    /// Greater than or equal.
    GreaterThanOrEqual,
}

/// Inclusive numeric range predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetweenFilter {
    /// Lower bound (inclusive).
    pub from_value: NumericValue,

    /// Upper bound (inclusive).
    pub to_value: NumericValue,
}

/// Matches empty/unset field values. Carries no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyFilter {}

/// An integer or floating-point comparison value.
///
/// Integers travel as `int64Value`, floats as `doubleValue`, matching the
/// API's `NumericValue` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericValue {
    /// Integer value.
    Int64Value(i64),
    /// Floating-point value.
    DoubleValue(f64),
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Int64Value(value)
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        NumericValue::Int64Value(value as i64)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::DoubleValue(value)
    }
}
