use serde_json::Value;

/// Parse a JSON value as a finite float.
///
/// Accepts numbers and numeric strings; anything else is `None`.
#[inline]
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Parse a JSON value as a finite float, falling back to `default`.
#[inline]
pub fn number_or(value: Option<&Value>, default: f64) -> f64 {
    value.and_then(number).unwrap_or(default)
}

/// Parse a JSON value as an integer.
///
/// Accepts integer numbers, floats with no fractional part, and integer
/// strings.
#[inline]
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && v.fract() == 0.0)
                .map(|v| v as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Truthiness of an optional JSON value.
///
/// `false`, `null`, zero, empty strings, empty arrays, empty objects, and
/// a missing value are all falsy; everything else is truthy.
#[inline]
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_accepts_numeric_strings() {
        assert_eq!(number(&json!("950")), Some(950.0));
        assert_eq!(number(&json!(" 12.5 ")), Some(12.5));
        assert_eq!(number(&json!(42)), Some(42.0));
    }

    #[test]
    fn test_number_rejects_garbage() {
        assert_eq!(number(&json!("oops")), None);
        assert_eq!(number(&json!(null)), None);
        assert_eq!(number(&json!([1200])), None);
        assert_eq!(number(&json!(true)), None);
    }

    #[test]
    fn test_number_or_default() {
        assert_eq!(number_or(Some(&json!("oops")), 0.0), 0.0);
        assert_eq!(number_or(None, 42.0), 42.0);
        assert_eq!(number_or(Some(&json!(900)), 0.0), 900.0);
    }

    #[test]
    fn test_integer_parses_whole_floats() {
        assert_eq!(integer(&json!(2)), Some(2));
        assert_eq!(integer(&json!(2.0)), Some(2));
        assert_eq!(integer(&json!(2.5)), None);
        assert_eq!(integer(&json!("3")), Some(3));
        assert_eq!(integer(&json!("three")), None);
    }

    #[test]
    fn test_truthy() {
        assert!(truthy(Some(&json!(true))));
        assert!(truthy(Some(&json!(1))));
        assert!(truthy(Some(&json!("yes"))));
        assert!(!truthy(Some(&json!(false))));
        assert!(!truthy(Some(&json!(0))));
        assert!(!truthy(Some(&json!(""))));
        assert!(!truthy(Some(&json!(null))));
        assert!(!truthy(None));
    }
}
