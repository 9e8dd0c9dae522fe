//! Shared validation protocol for loosely-typed payloads.
//!
//! Every entity constructor runs the same two ordered phases over its checked
//! fields: first a presence check over all of them, then a type check. The
//! phases never interleave; a payload that is both incomplete and mistyped
//! reports the missing fields.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::errors::DomainError;

pub const MISSING_REQUIRED_FIELDS: &str = "MISSING_REQUIRED_FIELDS";
pub const INVALID_DATA_TYPES: &str = "INVALID_DATA_TYPES";

/// Date input for the detail entities.
///
/// Storage rows carry a typed timestamp, which is normalized to an ISO-8601
/// string before validation runs; any other input goes through as a raw JSON
/// value and must already be a string.
#[derive(Debug, Clone)]
pub enum DateField {
    Timestamp(DateTime<Utc>),
    Raw(Value),
}

impl Default for DateField {
    fn default() -> Self {
        Self::Raw(Value::Null)
    }
}

impl DateField {
    pub fn normalize(self) -> Value {
        match self {
            Self::Timestamp(ts) => {
                Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Raw(value) => value,
        }
    }
}

impl From<DateTime<Utc>> for DateField {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<&str> for DateField {
    fn from(text: &str) -> Self {
        Self::Raw(Value::String(text.to_owned()))
    }
}

/// Truthiness-style presence check: null, missing, empty string, zero and
/// `false` all count as absent.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

/// Looks up a field on a payload object; anything absent reads as null.
pub fn field<'a>(payload: &'a Value, name: &str) -> &'a Value {
    payload.get(name).unwrap_or(&Value::Null)
}

/// Runs both validation phases over `fields` and hands back the owned string
/// values in the same order.
pub fn require_strings<const N: usize>(
    scope: &str,
    fields: [&Value; N],
) -> Result<[String; N], DomainError> {
    if fields.iter().any(|value| !is_present(value)) {
        return Err(DomainError::validation(scope, MISSING_REQUIRED_FIELDS));
    }

    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, value) in out.iter_mut().zip(fields) {
        match value.as_str() {
            Some(text) => *slot = text.to_owned(),
            None => return Err(DomainError::validation(scope, INVALID_DATA_TYPES)),
        }
    }
    Ok(out)
}
