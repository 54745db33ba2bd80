//! Comparison semantics
//!
//! Numbers compare numerically regardless of representation, strings compare
//! lexicographically, and every other pair only supports equality. An absent
//! operand is never equal to anything.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::jsonpath::ast::ComparisonOp;

pub(super) fn compare(left: Option<&Value>, operator: ComparisonOp, right: Option<&Value>) -> bool {
    let (Some(left), Some(right)) = (left, right) else {
        return operator == ComparisonOp::NotEqual;
    };

    match operator {
        ComparisonOp::Equal => values_equal(left, right),
        ComparisonOp::NotEqual => !values_equal(left, right),
        ComparisonOp::Less => ordering(left, right) == Some(Ordering::Less),
        ComparisonOp::LessEq => matches!(
            ordering(left, right),
            Some(Ordering::Less | Ordering::Equal)
        ),
        ComparisonOp::Greater => ordering(left, right) == Some(Ordering::Greater),
        ComparisonOp::GreaterEq => matches!(
            ordering(left, right),
            Some(Ordering::Greater | Ordering::Equal)
        ),
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b) == Some(Ordering::Equal),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => left == right,
    }
}

fn ordering(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return Some(x.cmp(&y));
    }
    a.as_f64()?.partial_cmp(&b.as_f64()?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integers_and_floats_compare_numerically() {
        assert!(compare(Some(&json!(1)), ComparisonOp::Equal, Some(&json!(1.0))));
        assert!(compare(Some(&json!(2)), ComparisonOp::Greater, Some(&json!(1.5))));
        assert!(compare(Some(&json!(-1)), ComparisonOp::LessEq, Some(&json!(-1))));
    }

    #[test]
    fn strings_order_lexicographically() {
        assert!(compare(Some(&json!("abc")), ComparisonOp::Less, Some(&json!("abd"))));
        assert!(!compare(Some(&json!("10")), ComparisonOp::Less, Some(&json!(9))));
    }

    #[test]
    fn structures_support_only_equality() {
        assert!(compare(
            Some(&json!([1, {"a": 2}])),
            ComparisonOp::Equal,
            Some(&json!([1.0, {"a": 2}]))
        ));
        assert!(!compare(Some(&json!([1])), ComparisonOp::Less, Some(&json!([2]))));
        assert!(compare(Some(&json!(null)), ComparisonOp::Equal, Some(&json!(null))));
    }

    #[test]
    fn absent_operands() {
        assert!(!compare(None, ComparisonOp::Equal, None));
        assert!(compare(None, ComparisonOp::NotEqual, Some(&json!(1))));
        assert!(!compare(Some(&json!(1)), ComparisonOp::GreaterEq, None));
    }
}
