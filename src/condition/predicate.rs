//! Built-in field-value leaf predicates
//!
//! Compares one field of a row against a constant. No type coercion:
//! numbers compare numerically, strings lexically, booleans as booleans,
//! and mismatched types never match. Null values only match `IsEmpty`.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::result::Row;

use super::condition::{Condition, RowPredicate};
use super::errors::ConditionResult;

/// Comparison applied by a [`FieldPredicate`]
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOp {
    /// field = value
    Eq(Value),
    /// field <> value
    Ne(Value),
    /// field > value
    Gt(Value),
    /// field >= value
    Gte(Value),
    /// field < value
    Lt(Value),
    /// field <= value
    Lte(Value),
    /// field is null, empty string or empty array
    IsEmpty,
    /// substring for strings, element for arrays
    Contains(Value),
}

impl FilterOp {
    /// Returns the operator symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOp::Eq(_) => "=",
            FilterOp::Ne(_) => "<>",
            FilterOp::Gt(_) => ">",
            FilterOp::Gte(_) => ">=",
            FilterOp::Lt(_) => "<",
            FilterOp::Lte(_) => "<=",
            FilterOp::IsEmpty => "IS EMPTY",
            FilterOp::Contains(_) => "CONTAINS",
        }
    }

    fn operand(&self) -> Option<&Value> {
        match self {
            FilterOp::Eq(v)
            | FilterOp::Ne(v)
            | FilterOp::Gt(v)
            | FilterOp::Gte(v)
            | FilterOp::Lt(v)
            | FilterOp::Lte(v)
            | FilterOp::Contains(v) => Some(v),
            FilterOp::IsEmpty => None,
        }
    }

    /// Applies the operator to a field value
    pub fn matches(&self, actual: &Value) -> bool {
        match self {
            FilterOp::IsEmpty => is_empty_value(actual),
            _ if actual.is_null() => false,
            FilterOp::Eq(expected) => values_equal(actual, expected),
            FilterOp::Ne(expected) => {
                same_kind(actual, expected) && !values_equal(actual, expected)
            }
            FilterOp::Gt(bound) => compare(actual, bound) == Some(Ordering::Greater),
            FilterOp::Gte(bound) => matches!(
                compare(actual, bound),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FilterOp::Lt(bound) => compare(actual, bound) == Some(Ordering::Less),
            FilterOp::Lte(bound) => matches!(
                compare(actual, bound),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FilterOp::Contains(needle) => contains(actual, needle),
        }
    }
}

/// Leaf predicate testing the value at `field_index`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPredicate {
    /// Field position within the row
    pub field_index: usize,
    /// Comparison to apply
    pub op: FilterOp,
}

impl FieldPredicate {
    pub fn new(field_index: usize, op: FilterOp) -> Self {
        Self { field_index, op }
    }

    /// Wraps this predicate as a condition leaf
    pub fn into_condition(self) -> Condition {
        Condition::leaf(self)
    }
}

impl RowPredicate for FieldPredicate {
    fn check(&self, row: &Row<'_>) -> ConditionResult<bool> {
        let actual = row.value(self.field_index)?;
        Ok(self.op.matches(actual))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.field_index, self.op.symbol())?;
        if let Some(operand) = self.op.operand() {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}

impl Condition {
    pub fn field_eq(field_index: usize, value: Value) -> Condition {
        FieldPredicate::new(field_index, FilterOp::Eq(value)).into_condition()
    }

    pub fn field_ne(field_index: usize, value: Value) -> Condition {
        FieldPredicate::new(field_index, FilterOp::Ne(value)).into_condition()
    }

    pub fn field_gt(field_index: usize, value: Value) -> Condition {
        FieldPredicate::new(field_index, FilterOp::Gt(value)).into_condition()
    }

    pub fn field_gte(field_index: usize, value: Value) -> Condition {
        FieldPredicate::new(field_index, FilterOp::Gte(value)).into_condition()
    }

    pub fn field_lt(field_index: usize, value: Value) -> Condition {
        FieldPredicate::new(field_index, FilterOp::Lt(value)).into_condition()
    }

    pub fn field_lte(field_index: usize, value: Value) -> Condition {
        FieldPredicate::new(field_index, FilterOp::Lte(value)).into_condition()
    }

    pub fn field_is_empty(field_index: usize) -> Condition {
        FieldPredicate::new(field_index, FilterOp::IsEmpty).into_condition()
    }

    pub fn field_contains(field_index: usize, value: Value) -> Condition {
        FieldPredicate::new(field_index, FilterOp::Contains(value)).into_condition()
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

fn compare(actual: &Value, bound: &Value) -> Option<Ordering> {
    match (actual, bound) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(ai), Some(bi)) = (exact_integer(a), exact_integer(b)) {
                return Some(ai.cmp(&bi));
            }
            a.as_f64()?.partial_cmp(&b.as_f64()?)
        }
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Integer value without precision loss; every i64 and u64 fits in i128
fn exact_integer(n: &serde_json::Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn values_equal(actual: &Value, expected: &Value) -> bool {
    match compare(actual, expected) {
        Some(ordering) => ordering == Ordering::Equal,
        None => actual == expected,
    }
}

fn contains(actual: &Value, needle: &Value) -> bool {
    match (actual, needle) {
        (Value::String(haystack), Value::String(n)) => haystack.contains(n.as_str()),
        (Value::Array(items), n) => items.iter().any(|item| values_equal(item, n)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionError;
    use crate::result::{MetaInfo, QueryResult, ResultError, ResultSet, ServerResponse};
    use serde_json::json;

    fn result(record: Value) -> QueryResult {
        QueryResult::from_server_response(
            MetaInfo::new("FI"),
            ServerResponse::new(vec![record]).unwrap(),
        )
    }

    #[test]
    fn test_no_type_coercion() {
        let r = result(json!([123, "123"]));
        let row = r.row_at(0).unwrap();

        assert!(Condition::field_eq(0, json!(123)).check(&row).unwrap());
        assert!(!Condition::field_eq(0, json!("123")).check(&row).unwrap());
        assert!(Condition::field_eq(1, json!("123")).check(&row).unwrap());
        assert!(!Condition::field_ne(0, json!("x")).check(&row).unwrap());
    }

    #[test]
    fn test_numeric_equality_across_representations() {
        assert!(FilterOp::Eq(json!(1)).matches(&json!(1.0)));
        assert!(FilterOp::Gt(json!(2)).matches(&json!(2.5)));
        assert!(!FilterOp::Gt(json!(-1)).matches(&json!(-1)));
    }

    #[test]
    fn test_integers_beyond_i64_compare_exactly() {
        let r = result(json!([u64::MAX, -1]));
        let row = r.row_at(0).unwrap();

        assert!(!Condition::field_eq(0, json!(u64::MAX - 1)).check(&row).unwrap());
        assert!(Condition::field_eq(0, json!(u64::MAX)).check(&row).unwrap());
        assert!(Condition::field_gt(0, json!(u64::MAX - 1)).check(&row).unwrap());
        assert!(Condition::field_ne(0, json!(u64::MAX - 1)).check(&row).unwrap());

        // Negative i64 against a u64 beyond i64::MAX
        assert!(Condition::field_lt(1, json!(u64::MAX)).check(&row).unwrap());
        assert!(Condition::field_gt(0, json!(i64::MIN)).check(&row).unwrap());
    }

    #[test]
    fn test_range_predicates() {
        let r = result(json!([25, "m"]));
        let row = r.row_at(0).unwrap();

        assert!(Condition::field_gte(0, json!(18)).check(&row).unwrap());
        assert!(Condition::field_lte(0, json!(25)).check(&row).unwrap());
        assert!(!Condition::field_gt(0, json!(25)).check(&row).unwrap());
        assert!(!Condition::field_lt(0, json!(25)).check(&row).unwrap());
        assert!(Condition::field_lt(1, json!("n")).check(&row).unwrap());
    }

    #[test]
    fn test_null_only_matches_is_empty() {
        let r = result(json!([null, "", [], 0]));
        let row = r.row_at(0).unwrap();

        assert!(!Condition::field_eq(0, json!(null)).check(&row).unwrap());
        assert!(!Condition::field_ne(0, json!(1)).check(&row).unwrap());
        assert!(Condition::field_is_empty(0).check(&row).unwrap());
        assert!(Condition::field_is_empty(1).check(&row).unwrap());
        assert!(Condition::field_is_empty(2).check(&row).unwrap());
        assert!(!Condition::field_is_empty(3).check(&row).unwrap());
    }

    #[test]
    fn test_contains() {
        let r = result(json!(["Acme Corp", ["a", "b"]]));
        let row = r.row_at(0).unwrap();

        assert!(Condition::field_contains(0, json!("Corp")).check(&row).unwrap());
        assert!(!Condition::field_contains(0, json!("corp")).check(&row).unwrap());
        assert!(Condition::field_contains(1, json!("b")).check(&row).unwrap());
        assert!(!Condition::field_contains(1, json!("c")).check(&row).unwrap());
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let r = result(json!(["only"]));
        let row = r.row_at(0).unwrap();

        let err = Condition::field_eq(4, json!("x")).check(&row).unwrap_err();
        assert!(matches!(
            err,
            ConditionError::Field(ResultError::IndexOutOfRange { index: 4, .. })
        ));
    }

    #[test]
    fn test_display() {
        let pred = FieldPredicate::new(2, FilterOp::Eq(json!("Acme")));
        assert_eq!(pred.to_string(), "#2 = \"Acme\"");
        assert_eq!(
            FieldPredicate::new(0, FilterOp::IsEmpty).to_string(),
            "#0 IS EMPTY"
        );
        let tree = Condition::field_gt(1, json!(5)).negate();
        assert_eq!(tree.to_string(), "NOT(#1 > 5)");
    }
}
