//! Filter expressions for report requests.
//!
//! A filter is a boolean tree of comparison predicates applied server-side
//! before aggregation. The [`builder`] module converts human-friendly
//! operator strings (`"=="`, `"contains"`, `"between"`, ...) into the
//! canonical [`FilterExpression`] tree; the combinators
//! [`and_filter`]/[`or_filter`]/[`not_filter`] wrap child nodes.

mod builder;
mod error;
mod expr;

pub use builder::{
    and_filter, dimension_filter, dimension_filter_case_sensitive, metric_filter, not_filter,
    or_filter, FilterValue,
};
pub use error::{FilterError, FilterResult};
pub use expr::{
    BetweenFilter, EmptyFilter, ExpressionList, FieldFilter, FilterExpression, FilterKind,
    InListFilter, MatchType, NumericFilter, NumericOperation, NumericValue, StringFilter,
};
