//! Request, result and error types for the addition endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Operand names as they appear in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    A,
    B,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::A => "a",
            Field::B => "b",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors produced while turning a payload into a sum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Body was not a JSON object.
    #[error("expected a structured payload")]
    NotStructured { reason: String },

    /// An operand could not be read as a number.
    #[error("supplied values are not valid numbers")]
    InvalidNumber { field: Field, input: String },

    /// Body parsed as JSON but is not an object (array, number, string, bool).
    #[error("internal error: payload is {kind}, not an object")]
    NotAnObject { kind: &'static str },

    /// An operand had a JSON type with no numeric meaning (null, array, object).
    #[error("internal error: cannot convert `{field}` from {kind} to a number")]
    Unsupported { field: Field, kind: &'static str },
}

impl CalcError {
    /// Whether the caller can fix this by resubmitting different input.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            CalcError::Unsupported { .. } | CalcError::NotAnObject { .. }
        )
    }

    /// Underlying cause, surfaced only in debug mode.
    pub fn detail(&self) -> String {
        match self {
            CalcError::NotStructured { reason } => reason.clone(),
            CalcError::InvalidNumber { field, input } => {
                format!("could not convert `{field}` to a number: {input:?}")
            }
            CalcError::NotAnObject { kind } => format!("payload is {kind}"),
            CalcError::Unsupported { field, kind } => {
                format!("`{field}` is {kind}")
            }
        }
    }
}

/// Operands picked out of the payload, still in their wire form.
///
/// `None` means the key was absent. An explicit JSON `null` is kept as
/// `Some(Value::Null)` so it can be told apart from a missing key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditionRequest {
    pub a: Option<Value>,
    pub b: Option<Value>,
}

impl AdditionRequest {
    /// Build a request from a decoded JSON body.
    ///
    /// A `null` body counts as no payload at all; any other non-object body
    /// is a fault after successful decoding.
    pub fn from_payload(payload: Value) -> Result<Self, CalcError> {
        match payload {
            Value::Object(mut map) => Ok(Self {
                a: map.remove(Field::A.key()),
                b: map.remove(Field::B.key()),
            }),
            Value::Null => Err(CalcError::NotStructured {
                reason: "payload is null".to_string(),
            }),
            other => Err(CalcError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        match field {
            Field::A => self.a.as_ref(),
            Field::B => self.b.as_ref(),
        }
    }
}

/// Successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdditionResult {
    pub a: f64,
    pub b: f64,
    #[serde(rename = "resultado")]
    pub sum: f64,
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_payload_picks_fields() {
        let req = AdditionRequest::from_payload(json!({"a": 1, "b": "2", "c": true})).unwrap();
        assert_eq!(req.a, Some(json!(1)));
        assert_eq!(req.b, Some(json!("2")));
    }

    #[test]
    fn test_from_payload_keeps_explicit_null() {
        let req = AdditionRequest::from_payload(json!({"a": null})).unwrap();
        assert_eq!(req.get(Field::A), Some(&Value::Null));
        assert_eq!(req.get(Field::B), None);
    }

    #[test]
    fn test_from_payload_non_object_is_server_side() {
        for (payload, kind) in [
            (json!([1, 2]), "an array"),
            (json!(5), "a number"),
            (json!("x"), "a string"),
        ] {
            let err = AdditionRequest::from_payload(payload).unwrap_err();
            assert_eq!(err, CalcError::NotAnObject { kind });
            assert!(!err.is_client_error());
            assert_eq!(
                err.to_string(),
                format!("internal error: payload is {kind}, not an object")
            );
        }
    }

    #[test]
    fn test_from_payload_null_is_not_structured() {
        let err = AdditionRequest::from_payload(Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "expected a structured payload");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_result_uses_wire_names() {
        let body = serde_json::to_value(AdditionResult { a: 1.0, b: 2.0, sum: 3.0 }).unwrap();
        assert_eq!(body, json!({"a": 1.0, "b": 2.0, "resultado": 3.0}));
    }

    #[test]
    fn test_unsupported_is_server_side() {
        let err = CalcError::Unsupported { field: Field::B, kind: "null" };
        assert!(!err.is_client_error());
        assert!(err.to_string().starts_with("internal error:"));
    }
}
