//! Response payloads and the shared `error` envelope check.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// A response body that passed the envelope check.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// No body: `204 No Content`.
    #[default]
    Empty,
    /// Decoded JSON body without an `error` field.
    Json(Value),
}

impl Payload {
    /// Apply the envelope check to a decoded body.
    ///
    /// Any JSON object carrying a top-level `error` key is a failed call,
    /// whatever the HTTP status was.
    pub fn from_body(body: Value) -> Result<Self> {
        if let Some(error) = body.as_object().and_then(|o| o.get("error")) {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(Error::api(message));
        }
        Ok(Payload::Json(body))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    /// Borrow the JSON body, if any.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Empty => None,
            Payload::Json(v) => Some(v),
        }
    }

    /// Decode into an endpoint-specific type.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Empty => Err(Error::parse("expected a response body, got none")),
            Payload::Json(v) => serde_json::from_value(v).map_err(Error::Json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_field_fails() {
        let err = Payload::from_body(json!({ "error": "X" })).unwrap_err();
        assert!(matches!(err, Error::Api { ref message } if message == "X"));
    }

    #[test]
    fn test_non_string_error_is_rendered() {
        let err = Payload::from_body(json!({ "error": { "code": 3 } })).unwrap_err();
        assert_eq!(err.to_string(), r#"{"code":3}"#);
    }

    #[test]
    fn test_body_without_error_passes_whole() {
        let body = json!({ "userId": 1, "username": "admin" });
        let payload = Payload::from_body(body.clone()).unwrap();
        assert_eq!(payload.as_json(), Some(&body));
    }

    #[test]
    fn test_arrays_are_never_errors() {
        let payload = Payload::from_body(json!([{ "error": "nested" }])).unwrap();
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_decode_empty_fails() {
        let result: Result<Value> = Payload::Empty.decode();
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
