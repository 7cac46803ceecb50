//! Operand conversion and summation.

use serde_json::Value;
use tracing::debug;

use crate::calc::types::{json_kind, AdditionRequest, AdditionResult, CalcError, Field};

/// Add the two operands of a request.
///
/// Absent operands count as zero. Overflow, infinities and NaN follow plain
/// IEEE-754 double arithmetic.
pub fn add(request: &AdditionRequest) -> Result<AdditionResult, CalcError> {
    let a = operand(request, Field::A)?;
    let b = operand(request, Field::B)?;
    let sum = a + b;

    debug!(a, b, sum, "performing addition");

    Ok(AdditionResult { a, b, sum })
}

fn operand(request: &AdditionRequest, field: Field) -> Result<f64, CalcError> {
    let value = match request.get(field) {
        Some(v) => v,
        None => return Ok(0.0),
    };

    match value {
        // Literals beyond f64 range (e.g. `1e400`) keep their text and
        // overflow to infinity here.
        Value::Number(n) => n
            .as_f64()
            .or_else(|| n.to_string().parse().ok())
            .ok_or_else(|| CalcError::InvalidNumber {
                field,
                input: n.to_string(),
            }),
        Value::String(s) => parse_decimal(s).ok_or_else(|| CalcError::InvalidNumber {
            field,
            input: s.clone(),
        }),
        Value::Bool(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
        other => Err(CalcError::Unsupported {
            field,
            kind: json_kind(other),
        }),
    }
}

/// Parse user-typed numeric text.
///
/// Accepts surrounding whitespace, an optional sign, decimal and exponent
/// forms, `inf`/`infinity`/`nan` in any case, and `_` between two digits.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if !trimmed.contains('_') {
        return trimmed.parse().ok();
    }

    let bytes = trimmed.as_bytes();
    let mut cleaned = String::with_capacity(trimmed.len());
    for (i, c) in trimmed.char_indices() {
        if c != '_' {
            cleaned.push(c);
            continue;
        }
        let prev_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let next_digit = bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit());
        if !(prev_digit && next_digit) {
            return None;
        }
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(payload: Value) -> AdditionRequest {
        AdditionRequest::from_payload(payload).unwrap()
    }

    #[test]
    fn test_add_numbers() {
        let result = add(&request(json!({"a": 10, "b": 20.5}))).unwrap();
        assert_eq!(result, AdditionResult { a: 10.0, b: 20.5, sum: 30.5 });
    }

    #[test]
    fn test_add_numeric_strings() {
        let result = add(&request(json!({"a": "12.5", "b": "3.14"}))).unwrap();
        assert_eq!(result.sum, 15.64);
    }

    #[test]
    fn test_add_is_commutative() {
        let pairs = [(0.1, 0.2), (-5.0, 3.0), (1e308, 1e308), (-0.0, 0.0), (7.25, -7.25)];
        for (a, b) in pairs {
            let ab = add(&request(json!({"a": a, "b": b}))).unwrap();
            let ba = add(&request(json!({"a": b, "b": a}))).unwrap();
            assert_eq!(ab.sum, a + b);
            assert_eq!(ab.sum.to_bits(), ba.sum.to_bits());
        }
    }

    #[test]
    fn test_missing_operand_defaults_to_zero() {
        let result = add(&request(json!({"b": "5"}))).unwrap();
        assert_eq!(result, AdditionResult { a: 0.0, b: 5.0, sum: 5.0 });

        let empty = add(&request(json!({}))).unwrap();
        assert_eq!(empty.sum, 0.0);
    }

    #[test]
    fn test_non_numeric_string_rejected() {
        let err = add(&request(json!({"a": "abc", "b": "1"}))).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidNumber { field: Field::A, input: "abc".into() }
        );
        assert_eq!(err.to_string(), "supplied values are not valid numbers");
    }

    #[test]
    fn test_null_operand_is_unsupported() {
        let err = add(&request(json!({"a": 1, "b": null}))).unwrap_err();
        assert_eq!(err, CalcError::Unsupported { field: Field::B, kind: "null" });
    }

    #[test]
    fn test_booleans_convert() {
        let result = add(&request(json!({"a": true, "b": false}))).unwrap();
        assert_eq!(result.sum, 1.0);
    }

    #[test]
    fn test_overflow_propagates() {
        let result = add(&request(json!({"a": 1.7e308, "b": 1.7e308}))).unwrap();
        assert!(result.sum.is_infinite());

        let result = add(&request(json!({"a": "inf", "b": "-inf"}))).unwrap();
        assert!(result.sum.is_nan());
    }

    #[test]
    fn test_out_of_range_literal_overflows() {
        let payload: Value = serde_json::from_str(r#"{"a": 1e400, "b": 1}"#).unwrap();
        let result = add(&request(payload)).unwrap();
        assert_eq!(result.a, f64::INFINITY);
        assert_eq!(result.sum, f64::INFINITY);

        let payload: Value = serde_json::from_str(r#"{"a": -1e400, "b": "2"}"#).unwrap();
        assert_eq!(add(&request(payload)).unwrap().sum, f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_decimal(" 42 "), Some(42.0));
        assert_eq!(parse_decimal("+1.5"), Some(1.5));
        assert_eq!(parse_decimal("-.5"), Some(-0.5));
        assert_eq!(parse_decimal("2e3"), Some(2000.0));
        assert_eq!(parse_decimal("1_000"), Some(1000.0));
        assert_eq!(parse_decimal("Infinity"), Some(f64::INFINITY));
        assert!(parse_decimal("NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn test_parse_decimal_rejects() {
        for text in ["", "   ", "abc", "1,5", "_1", "1_", "1__0", "1_.5", "0x10", "1 2"] {
            assert_eq!(parse_decimal(text), None, "{text:?} should not parse");
        }
    }
}
