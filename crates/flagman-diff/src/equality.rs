//! Semantic equality of JSON-like values.

use serde_json::{Number, Value};

/// Deep structural equality.
///
/// Objects compare without regard to key order. Numbers compare by numeric
/// value, so `10` equals `10.0`.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if x.is_f64() || y.is_f64() {
        x.as_f64() == y.as_f64()
    } else {
        x == y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_and_float_spelling_are_equal() {
        assert!(values_equal(&json!(10), &json!(10.0)));
        assert!(!values_equal(&json!(10), &json!(10.5)));
    }

    #[test]
    fn object_key_order_is_irrelevant() {
        let a: Value = serde_json::from_str(r#"{"a": 1, "b": {"c": [1, 2]}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b": {"c": [1, 2]}, "a": 1}"#).unwrap();
        assert!(values_equal(&a, &b));
    }

    #[test]
    fn array_order_matters() {
        assert!(!values_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!values_equal(&json!([1]), &json!([1, 1])));
    }

    #[test]
    fn nested_numbers_compare_numerically() {
        assert!(values_equal(&json!({"limits": [1, 2.0]}), &json!({"limits": [1.0, 2]})));
    }

    #[test]
    fn missing_key_differs() {
        assert!(!values_equal(&json!({"a": null}), &json!({"b": null})));
    }

    #[test]
    fn mismatched_types_differ() {
        assert!(!values_equal(&json!("1"), &json!(1)));
        assert!(!values_equal(&json!(null), &json!(false)));
    }
}
