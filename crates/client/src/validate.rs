//! Response and value validators
//!
//! A flat assertion vocabulary: each function checks one contract
//! property and reports expected vs. actual on failure. There is no
//! rule engine or combinator layer; tests compose plain calls and
//! fail fast on the first `Err`.

use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::http::ApiResponse;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

/// Result alias for validator calls
pub type ValidationResult = std::result::Result<(), ValidationError>;

/// A failed assertion, carrying expected vs. actual
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Expected status {expected}, got {actual}")]
    Status { expected: u16, actual: u16 },

    #[error("Status {actual} not in allowed set {allowed:?}")]
    StatusNotAllowed { allowed: Vec<u16>, actual: u16 },

    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Field '{field}' is null")]
    NullField { field: String },

    #[error("Field '{field}' should be {expected}, got {actual}")]
    WrongType {
        field: String,
        expected: JsonKind,
        actual: JsonKind,
    },

    #[error("Expected an array, got {actual}")]
    NotAnArray { actual: JsonKind },

    #[error("Array has {actual} element(s), expected at least {min}")]
    TooFewElements { min: usize, actual: usize },

    #[error("Field '{field}' expected {expected}, got {actual}")]
    WrongValue {
        field: String,
        expected: Value,
        actual: Value,
    },

    #[error("Field '{field}' value {actual} not in the allowed set")]
    ValueNotAllowed { field: String, actual: Value },

    #[error("'{value}' is not a valid {kind}")]
    BadFormat { kind: &'static str, value: String },

    #[error("Value {actual} outside range [{min}, {max}]")]
    OutOfRange { min: f64, max: f64, actual: f64 },

    #[error("Length {actual} outside bounds [{min}, {max:?}]")]
    BadLength {
        min: usize,
        max: Option<usize>,
        actual: usize,
    },

    #[error("Content-Type '{actual}' does not contain '{expected}'")]
    ContentType { expected: String, actual: String },

    #[error("Response took {actual:?}, limit {limit:?}")]
    TooSlow { limit: Duration, actual: Duration },

    #[error("Values differ at {path}")]
    NotEqual { path: String },

    #[error("Value is not JSON-serializable: {reason}")]
    NotSerializable { reason: String },
}

/// JSON primitive kinds, for schema checks and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// Exact status match.
pub fn validate_status(actual: u16, expected: u16) -> ValidationResult {
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::Status { expected, actual })
    }
}

/// Status within an allowed set.
pub fn validate_status_in(actual: u16, allowed: &[u16]) -> ValidationResult {
    if allowed.contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::StatusNotAllowed {
            allowed: allowed.to_vec(),
            actual,
        })
    }
}

/// Every named field is present and non-null.
pub fn validate_fields(value: &Value, fields: &[&str]) -> ValidationResult {
    for &field in fields {
        match value.get(field) {
            None => {
                return Err(ValidationError::MissingField {
                    field: field.to_string(),
                })
            }
            Some(Value::Null) => {
                return Err(ValidationError::NullField {
                    field: field.to_string(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Every named field is present with the expected JSON kind.
pub fn validate_schema(value: &Value, schema: &[(&str, JsonKind)]) -> ValidationResult {
    for &(field, expected) in schema {
        let Some(found) = value.get(field) else {
            return Err(ValidationError::MissingField {
                field: field.to_string(),
            });
        };
        let actual = JsonKind::of(found);
        if actual != expected {
            return Err(ValidationError::WrongType {
                field: field.to_string(),
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// The value is an array with at least `min_len` elements. An empty
/// array passes at `min_len == 0` and fails at `min_len == 1`.
pub fn validate_array(value: &Value, min_len: usize) -> ValidationResult {
    let Some(items) = value.as_array() else {
        return Err(ValidationError::NotAnArray {
            actual: JsonKind::of(value),
        });
    };
    if items.len() < min_len {
        return Err(ValidationError::TooFewElements {
            min: min_len,
            actual: items.len(),
        });
    }
    Ok(())
}

/// Array whose every element carries the named fields non-null.
pub fn validate_array_items_have_fields(value: &Value, fields: &[&str]) -> ValidationResult {
    let Some(items) = value.as_array() else {
        return Err(ValidationError::NotAnArray {
            actual: JsonKind::of(value),
        });
    };
    for item in items {
        validate_fields(item, fields)?;
    }
    Ok(())
}

/// A dotted path (`"address.geo.lat"`) resolves to a non-null value.
pub fn validate_nested_field(value: &Value, path: &str) -> ValidationResult {
    let mut current = value;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => {
                return Err(ValidationError::MissingField {
                    field: path.to_string(),
                })
            }
        }
    }
    if current.is_null() {
        return Err(ValidationError::NullField {
            field: path.to_string(),
        });
    }
    Ok(())
}

/// The named field equals `expected`.
pub fn validate_field_eq(value: &Value, field: &str, expected: &Value) -> ValidationResult {
    match value.get(field) {
        None => Err(ValidationError::MissingField {
            field: field.to_string(),
        }),
        Some(actual) if actual == expected => Ok(()),
        Some(actual) => Err(ValidationError::WrongValue {
            field: field.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
        }),
    }
}

/// The named field's value is a member of `allowed`.
pub fn validate_field_in(value: &Value, field: &str, allowed: &[Value]) -> ValidationResult {
    match value.get(field) {
        None => Err(ValidationError::MissingField {
            field: field.to_string(),
        }),
        Some(actual) if allowed.contains(actual) => Ok(()),
        Some(actual) => Err(ValidationError::ValueNotAllowed {
            field: field.to_string(),
            actual: actual.clone(),
        }),
    }
}

pub fn validate_email(text: &str) -> ValidationResult {
    if EMAIL_RE.is_match(text) {
        Ok(())
    } else {
        Err(ValidationError::BadFormat {
            kind: "email",
            value: text.to_string(),
        })
    }
}

pub fn validate_uuid(text: &str) -> ValidationResult {
    if UUID_RE.is_match(text) {
        Ok(())
    } else {
        Err(ValidationError::BadFormat {
            kind: "UUID",
            value: text.to_string(),
        })
    }
}

/// `min <= actual <= max`, inclusive both ends.
pub fn validate_range(actual: f64, min: f64, max: f64) -> ValidationResult {
    if actual >= min && actual <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { min, max, actual })
    }
}

/// Character count within `[min, max]`; `max == None` means unbounded.
pub fn validate_string_length(text: &str, min: usize, max: Option<usize>) -> ValidationResult {
    let actual = text.chars().count();
    if actual < min || max.is_some_and(|m| actual > m) {
        return Err(ValidationError::BadLength { min, max, actual });
    }
    Ok(())
}

/// The response Content-Type contains the expected substring.
pub fn validate_content_type(response: &ApiResponse, expected: &str) -> ValidationResult {
    let actual = response.content_type().unwrap_or_default();
    if actual.contains(expected) {
        Ok(())
    } else {
        Err(ValidationError::ContentType {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// The measured response time is within `limit`.
pub fn validate_response_time(elapsed: Duration, limit: Duration) -> ValidationResult {
    if elapsed <= limit {
        Ok(())
    } else {
        Err(ValidationError::TooSlow {
            limit,
            actual: elapsed,
        })
    }
}

/// Structural equality, reporting the first differing path.
pub fn validate_deep_eq(actual: &Value, expected: &Value) -> ValidationResult {
    match diff_path(actual, expected, "$".to_string()) {
        None => Ok(()),
        Some(path) => Err(ValidationError::NotEqual { path }),
    }
}

/// The value serializes to JSON without error.
pub fn validate_json_serializable<T: Serialize + ?Sized>(value: &T) -> ValidationResult {
    serde_json::to_string(value)
        .map(drop)
        .map_err(|e| ValidationError::NotSerializable {
            reason: e.to_string(),
        })
}

fn diff_path(a: &Value, b: &Value, path: String) -> Option<String> {
    match (a, b) {
        (Value::Object(ma), Value::Object(mb)) => {
            for (key, bv) in mb {
                let sub = format!("{path}.{key}");
                match ma.get(key) {
                    None => return Some(sub),
                    Some(av) => {
                        if let Some(found) = diff_path(av, bv, sub) {
                            return Some(found);
                        }
                    }
                }
            }
            ma.keys()
                .find(|key| !mb.contains_key(*key))
                .map(|key| format!("{path}.{key}"))
        }
        (Value::Array(aa), Value::Array(ab)) => {
            if aa.len() != ab.len() {
                return Some(format!("{path}.length"));
            }
            for (i, (av, bv)) in aa.iter().zip(ab).enumerate() {
                if let Some(found) = diff_path(av, bv, format!("{path}[{i}]")) {
                    return Some(found);
                }
            }
            None
        }
        _ => {
            if a == b {
                None
            } else {
                Some(path)
            }
        }
    }
}
