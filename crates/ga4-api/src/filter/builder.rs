//! Builds filter expressions from operator strings.
//!
//! Operator strings are trimmed and case-folded before matching, so
//! `" == "` and `"EQUALS"` build the same predicate as `"=="`.

use super::error::{FilterError, FilterResult};
use super::expr::{
    BetweenFilter, EmptyFilter, FieldFilter, FilterExpression, FilterKind, InListFilter,
    MatchType, NumericFilter, NumericOperation, NumericValue, StringFilter,
};

/// A loosely-typed comparison value accepted by the filter builder.
///
/// Conversions exist for strings, integers, floats, lists of strings, and
/// numeric pairs, so callers can pass plain literals:
///
/// ```
/// use ga4_api_rs::filter::{dimension_filter, metric_filter};
///
/// dimension_filter("country", "==", "United States").unwrap();
/// dimension_filter("browser", "in", vec!["Chrome", "Firefox"]).unwrap();
/// metric_filter("activeUsers", ">", 1000).unwrap();
/// metric_filter("sessions", "between", (100, 500)).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A list of string values (for `in`/`not_in`).
    List(Vec<String>),
    /// A numeric pair (for `between`).
    Range(NumericValue, NumericValue),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value as i64)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for FilterValue {
    fn from(values: Vec<S>) -> Self {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for FilterValue {
    fn from(values: [S; N]) -> Self {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<NumericValue>, B: Into<NumericValue>> From<(A, B)> for FilterValue {
    fn from((from, to): (A, B)) -> Self {
        FilterValue::Range(from.into(), to.into())
    }
}

impl FilterValue {
    /// Renders scalar values to the string form string filters carry.
    fn into_string(self, operator: &str) -> FilterResult<String> {
        match self {
            FilterValue::Str(s) => Ok(s),
            FilterValue::Int(i) => Ok(i.to_string()),
            FilterValue::Float(f) => Ok(f.to_string()),
            FilterValue::List(_) | FilterValue::Range(_, _) => Err(FilterError::value_type(
                operator,
                "a string or numeric value",
            )),
        }
    }

    fn into_numeric(self, operator: &str) -> FilterResult<NumericValue> {
        match self {
            FilterValue::Int(i) => Ok(NumericValue::Int64Value(i)),
            FilterValue::Float(f) => Ok(NumericValue::DoubleValue(f)),
            _ => Err(FilterError::value_type(operator, "a numeric value")),
        }
    }
}

/// Creates a dimension filter from an operator alias.
///
/// Supported operators:
///
/// - `==` / `equals`, `!=` / `not_equals`
/// - `contains`, `not_contains`
/// - `starts_with` / `begins_with`, `ends_with`
/// - `in`, `not_in` (list value required)
/// - `regex` / `matches_regex`
/// - `is_null` / `is_empty`, `is_not_null` / `is_not_empty`
///
/// Comparisons are case-insensitive; see
/// [`dimension_filter_case_sensitive`] for the case-sensitive form.
/// Unknown operators fail with [`FilterError::UnsupportedOperator`] and no
/// partial tree is produced.
///
/// # Examples
///
/// ```
/// use ga4_api_rs::filter::dimension_filter;
///
/// let by_country = dimension_filter("country", "==", "United States").unwrap();
/// let by_city = dimension_filter("city", "contains", "New").unwrap();
/// ```
pub fn dimension_filter(
    field: impl Into<String>,
    operator: &str,
    value: impl Into<FilterValue>,
) -> FilterResult<FilterExpression> {
    build_dimension_filter(field.into(), operator, value.into(), false)
}

/// Case-sensitive variant of [`dimension_filter`].
pub fn dimension_filter_case_sensitive(
    field: impl Into<String>,
    operator: &str,
    value: impl Into<FilterValue>,
) -> FilterResult<FilterExpression> {
    build_dimension_filter(field.into(), operator, value.into(), true)
}

fn build_dimension_filter(
    field: String,
    operator: &str,
    value: FilterValue,
    case_sensitive: bool,
) -> FilterResult<FilterExpression> {
    let operator = operator.trim().to_ascii_lowercase();

    match operator.as_str() {
        "is_null" | "is_empty" => Ok(empty_leaf(field)),
        "is_not_null" | "is_not_empty" => Ok(FilterExpression::negate(empty_leaf(field))),
        "in" | "not_in" => {
            let values = match value {
                FilterValue::List(values) => values,
                _ => return Err(FilterError::value_type(&operator, "a list of values")),
            };
            let leaf = FilterExpression::leaf(FieldFilter {
                field_name: field,
                kind: FilterKind::InListFilter(InListFilter {
                    values,
                    case_sensitive,
                }),
            });
            if operator == "not_in" {
                Ok(FilterExpression::negate(leaf))
            } else {
                Ok(leaf)
            }
        }
        _ => {
            let (match_type, negated) = match operator.as_str() {
                "==" | "equals" => (MatchType::Exact, false),
                "!=" | "not_equals" => (MatchType::Exact, true),
                "contains" => (MatchType::Contains, false),
                "not_contains" => (MatchType::Contains, true),
                "starts_with" | "begins_with" => (MatchType::BeginsWith, false),
                "ends_with" => (MatchType::EndsWith, false),
                "regex" | "matches_regex" => (MatchType::FullRegexp, false),
                _ => return Err(FilterError::unsupported_operator(operator)),
            };
            let value = value.into_string(&operator)?;
            let leaf = FilterExpression::leaf(FieldFilter {
                field_name: field,
                kind: FilterKind::StringFilter(StringFilter {
                    match_type,
                    value,
                    case_sensitive,
                }),
            });
            if negated {
                Ok(FilterExpression::negate(leaf))
            } else {
                Ok(leaf)
            }
        }
    }
}

/// Creates a metric filter from an operator alias.
///
/// Supported operators:
///
/// - `==` / `equals`, `!=` / `not_equals`
/// - `<` / `less_than`, `<=` / `less_than_or_equal`
/// - `>` / `greater_than`, `>=` / `greater_than_or_equal`
/// - `between` (inclusive; takes a numeric pair)
///
/// # Examples
///
/// ```
/// use ga4_api_rs::filter::metric_filter;
///
/// let busy = metric_filter("activeUsers", ">", 1000).unwrap();
/// let mid = metric_filter("sessions", "between", (100, 500)).unwrap();
/// let low_bounce = metric_filter("bounceRate", "<=", 0.5).unwrap();
/// ```
pub fn metric_filter(
    field: impl Into<String>,
    operator: &str,
    value: impl Into<FilterValue>,
) -> FilterResult<FilterExpression> {
    let field = field.into();
    let operator = operator.trim().to_ascii_lowercase();
    let value = value.into();

    if operator == "between" {
        let (from_value, to_value) = match value {
            FilterValue::Range(from, to) => (from, to),
            _ => return Err(FilterError::BetweenBounds),
        };
        return Ok(FilterExpression::leaf(FieldFilter {
            field_name: field,
            kind: FilterKind::BetweenFilter(BetweenFilter {
                from_value,
                to_value,
            }),
        }));
    }

    let (operation, negated) = match operator.as_str() {
        "==" | "equals" => (NumericOperation::Equal, false),
        "!=" | "not_equals" => (NumericOperation::Equal, true),
        "<" | "less_than" => (NumericOperation::LessThan, false),
        "<=" | "less_than_or_equal" => (NumericOperation::LessThanOrEqual, false),
        ">" | "greater_than" => (NumericOperation::GreaterThan, false),
        ">=" | "greater_than_or_equal" => (NumericOperation::GreaterThanOrEqual, false),
        _ => return Err(FilterError::unsupported_operator(operator)),
    };

    let leaf = FilterExpression::leaf(FieldFilter {
        field_name: field,
        kind: FilterKind::NumericFilter(NumericFilter {
            operation,
            value: value.into_numeric(&operator)?,
        }),
    });
    if negated {
        Ok(FilterExpression::negate(leaf))
    } else {
        Ok(leaf)
    }
}

/// Combines filters with AND logic. All children must match.
///
/// Child order and count are preserved; a singleton list collapses to the
/// child itself; an empty list fails with [`FilterError::EmptyGroup`].
pub fn and_filter(filters: Vec<FilterExpression>) -> FilterResult<FilterExpression> {
    FilterExpression::and_group(filters)
}

/// Combines filters with OR logic. At least one child must match.
///
/// Child order and count are preserved; a singleton list collapses to the
/// child itself; an empty list fails with [`FilterError::EmptyGroup`].
pub fn or_filter(filters: Vec<FilterExpression>) -> FilterResult<FilterExpression> {
    FilterExpression::or_group(filters)
}

/// Negates a filter expression.
pub fn not_filter(filter: FilterExpression) -> FilterExpression {
    FilterExpression::negate(filter)
}

fn empty_leaf(field: String) -> FilterExpression {
    FilterExpression::leaf(FieldFilter {
        field_name: field,
        kind: FilterKind::EmptyFilter(EmptyFilter::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unwrap_leaf(expr: &FilterExpression) -> &FieldFilter {
        match expr {
            FilterExpression::Filter(filter) => filter,
            e => panic!("expected leaf, got: {e:?}"),
        }
    }

    fn unwrap_negated(expr: &FilterExpression) -> &FilterExpression {
        match expr {
            FilterExpression::NotExpression(inner) => inner,
            e => panic!("expected notExpression, got: {e:?}"),
        }
    }

    // ==================== Dimension filters ====================

    #[test]
    fn test_equals_aliases_build_the_same_tree() {
        let canonical = dimension_filter("country", "==", "US").unwrap();
        for alias in ["equals", "EQUALS", " == ", "Equals"] {
            assert_eq!(
                dimension_filter("country", alias, "US").unwrap(),
                canonical,
                "alias {alias:?} diverged"
            );
        }
    }

    #[test]
    fn test_prefix_aliases_build_the_same_tree() {
        let canonical = dimension_filter("pagePath", "starts_with", "/blog").unwrap();
        assert_eq!(
            dimension_filter("pagePath", "begins_with", "/blog").unwrap(),
            canonical
        );
        let leaf = unwrap_leaf(&canonical);
        match &leaf.kind {
            FilterKind::StringFilter(f) => assert_eq!(f.match_type, MatchType::BeginsWith),
            k => panic!("expected string filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_regex_aliases_build_the_same_tree() {
        let canonical = dimension_filter("pagePath", "regex", "^/blog/.*").unwrap();
        assert_eq!(
            dimension_filter("pagePath", "matches_regex", "^/blog/.*").unwrap(),
            canonical
        );
        let leaf = unwrap_leaf(&canonical);
        match &leaf.kind {
            FilterKind::StringFilter(f) => assert_eq!(f.match_type, MatchType::FullRegexp),
            k => panic!("expected string filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_not_equals_wraps_exact_match_in_not() {
        let expr = dimension_filter("country", "!=", "US").unwrap();
        let inner = unwrap_negated(&expr);
        let leaf = unwrap_leaf(inner);
        match &leaf.kind {
            FilterKind::StringFilter(f) => {
                assert_eq!(f.match_type, MatchType::Exact);
                assert_eq!(f.value, "US");
            }
            k => panic!("expected string filter, got: {k:?}"),
        }
        assert_eq!(dimension_filter("country", "not_equals", "US").unwrap(), expr);
    }

    #[test]
    fn test_not_contains_wraps_contains_in_not() {
        let expr = dimension_filter("city", "not_contains", "New").unwrap();
        let leaf = unwrap_leaf(unwrap_negated(&expr));
        match &leaf.kind {
            FilterKind::StringFilter(f) => assert_eq!(f.match_type, MatchType::Contains),
            k => panic!("expected string filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_in_requires_a_list() {
        let err = dimension_filter("browser", "in", "Chrome").unwrap_err();
        assert_eq!(
            err,
            FilterError::value_type("in", "a list of values")
        );
    }

    #[test]
    fn test_in_preserves_value_order() {
        let expr = dimension_filter("browser", "in", vec!["Chrome", "Firefox", "Safari"]).unwrap();
        let leaf = unwrap_leaf(&expr);
        match &leaf.kind {
            FilterKind::InListFilter(f) => {
                assert_eq!(f.values, vec!["Chrome", "Firefox", "Safari"]);
                assert!(!f.case_sensitive);
            }
            k => panic!("expected in-list filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_not_in_negates_membership() {
        let expr = dimension_filter("browser", "not_in", vec!["IE"]).unwrap();
        let leaf = unwrap_leaf(unwrap_negated(&expr));
        assert!(matches!(leaf.kind, FilterKind::InListFilter(_)));
    }

    #[test]
    fn test_null_check_aliases() {
        let null = dimension_filter("landingPage", "is_null", "").unwrap();
        assert_eq!(dimension_filter("landingPage", "is_empty", "").unwrap(), null);
        let leaf = unwrap_leaf(&null);
        assert!(matches!(leaf.kind, FilterKind::EmptyFilter(_)));

        let not_null = dimension_filter("landingPage", "is_not_null", "").unwrap();
        assert_eq!(
            dimension_filter("landingPage", "is_not_empty", "").unwrap(),
            not_null
        );
        assert!(matches!(not_null, FilterExpression::NotExpression(_)));
    }

    #[test]
    fn test_numeric_dimension_value_renders_to_string() {
        let expr = dimension_filter("hour", "==", 7).unwrap();
        let leaf = unwrap_leaf(&expr);
        match &leaf.kind {
            FilterKind::StringFilter(f) => assert_eq!(f.value, "7"),
            k => panic!("expected string filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_case_sensitive_variant_sets_flag() {
        let expr = dimension_filter_case_sensitive("country", "==", "US").unwrap();
        let leaf = unwrap_leaf(&expr);
        match &leaf.kind {
            FilterKind::StringFilter(f) => assert!(f.case_sensitive),
            k => panic!("expected string filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_unknown_dimension_operator_is_rejected() {
        let err = dimension_filter("country", "~=", "US").unwrap_err();
        assert_eq!(err, FilterError::unsupported_operator("~="));
    }

    // ==================== Metric filters ====================

    #[test]
    fn test_comparison_aliases_build_the_same_tree() {
        for (symbol, word, operation) in [
            ("==", "equals", NumericOperation::Equal),
            ("<", "less_than", NumericOperation::LessThan),
            ("<=", "less_than_or_equal", NumericOperation::LessThanOrEqual),
            (">", "greater_than", NumericOperation::GreaterThan),
            (">=", "greater_than_or_equal", NumericOperation::GreaterThanOrEqual),
        ] {
            let canonical = metric_filter("sessions", symbol, 100).unwrap();
            assert_eq!(
                metric_filter("sessions", word, 100).unwrap(),
                canonical,
                "alias {word:?} diverged from {symbol:?}"
            );
            let leaf = unwrap_leaf(&canonical);
            match &leaf.kind {
                FilterKind::NumericFilter(f) => assert_eq!(f.operation, operation),
                k => panic!("expected numeric filter, got: {k:?}"),
            }
        }
    }

    #[test]
    fn test_metric_not_equals_wraps_equal_in_not() {
        let expr = metric_filter("sessions", "!=", 0).unwrap();
        let leaf = unwrap_leaf(unwrap_negated(&expr));
        match &leaf.kind {
            FilterKind::NumericFilter(f) => assert_eq!(f.operation, NumericOperation::Equal),
            k => panic!("expected numeric filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_integer_value_travels_as_int64() {
        let expr = metric_filter("activeUsers", ">", 1000).unwrap();
        let leaf = unwrap_leaf(&expr);
        match &leaf.kind {
            FilterKind::NumericFilter(f) => {
                assert_eq!(f.value, NumericValue::Int64Value(1000));
            }
            k => panic!("expected numeric filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_float_value_travels_as_double() {
        let expr = metric_filter("bounceRate", "<=", 0.5).unwrap();
        let leaf = unwrap_leaf(&expr);
        match &leaf.kind {
            FilterKind::NumericFilter(f) => {
                assert_eq!(f.value, NumericValue::DoubleValue(0.5));
            }
            k => panic!("expected numeric filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_between_builds_inclusive_range() {
        let expr = metric_filter("sessions", "between", (100, 500)).unwrap();
        let leaf = unwrap_leaf(&expr);
        match &leaf.kind {
            FilterKind::BetweenFilter(f) => {
                assert_eq!(f.from_value, NumericValue::Int64Value(100));
                assert_eq!(f.to_value, NumericValue::Int64Value(500));
            }
            k => panic!("expected between filter, got: {k:?}"),
        }
    }

    #[test]
    fn test_between_requires_a_pair() {
        assert_eq!(
            metric_filter("sessions", "between", 100).unwrap_err(),
            FilterError::BetweenBounds
        );
    }

    #[test]
    fn test_metric_operator_requires_a_number() {
        let err = metric_filter("sessions", ">", "lots").unwrap_err();
        assert_eq!(err, FilterError::value_type(">", "a numeric value"));
    }

    #[test]
    fn test_unknown_metric_operator_is_rejected() {
        let err = metric_filter("sessions", "almost", 10).unwrap_err();
        assert_eq!(err, FilterError::unsupported_operator("almost"));
    }

    // ==================== Combinators ====================

    #[test]
    fn test_and_filter_preserves_order_and_count() {
        let a = dimension_filter("country", "==", "US").unwrap();
        let b = metric_filter("sessions", ">", 100).unwrap();
        let combined = and_filter(vec![a.clone(), b.clone()]).unwrap();
        match combined {
            FilterExpression::AndGroup(list) => assert_eq!(list.expressions, vec![a, b]),
            e => panic!("expected AndGroup, got: {e:?}"),
        }
    }

    #[test]
    fn test_or_filter_preserves_order_and_count() {
        let a = dimension_filter("country", "==", "US").unwrap();
        let b = dimension_filter("country", "==", "UK").unwrap();
        let combined = or_filter(vec![a.clone(), b.clone()]).unwrap();
        match combined {
            FilterExpression::OrGroup(list) => assert_eq!(list.expressions, vec![a, b]),
            e => panic!("expected OrGroup, got: {e:?}"),
        }
    }

    #[test]
    fn test_not_filter_wraps_child() {
        let inner = dimension_filter("country", "==", "US").unwrap();
        let negated = not_filter(inner.clone());
        assert_eq!(negated, FilterExpression::negate(inner));
    }
}
