//! Decoding of the script endpoints' response envelopes.
//!
//! The endpoints answer reads in one of three recognized shapes, checked
//! in this order:
//!
//! 1. a wrapped array: `{ "data": [...] }` (optionally with a `success`
//!    flag)
//! 2. a bare array: `[...]`
//! 3. an error envelope: `{ "error": ... }`, `{ "status": "error",
//!    "message": ... }`, or `{ "success": false, ... }`
//!
//! Anything else is an unrecognized format. The HTTP status is decided on
//! only after the body failed to classify; see
//! [`SheetClient`](crate::SheetClient).

use crate::FetchError;
use raktadan_types::text;
use serde_json::Value;

/// Maximum characters of a raw body quoted in a parse error.
const EXCERPT_LEN: usize = 100;

/// A classified response body.
#[derive(Debug)]
pub enum Envelope {
    /// One of the recognized success shapes; carries the raw rows.
    Records(Vec<Value>),
    /// A recognized error envelope with its message.
    Error(String),
    /// Valid JSON in no known shape.
    Unrecognized,
}

/// Parses a raw body as JSON, quoting a truncated excerpt on failure.
pub fn parse_body(body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|_| FetchError::Parse {
        excerpt: text::excerpt(body, EXCERPT_LEN),
    })
}

/// Classifies a parsed body into one of the recognized envelopes.
pub fn classify(value: Value) -> Envelope {
    match value {
        Value::Array(rows) => Envelope::Records(rows),
        Value::Object(mut map) => {
            if let Some(Value::Array(rows)) = map.remove("data") {
                return Envelope::Records(rows);
            }
            if let Some(message) = error_message(&map) {
                return Envelope::Error(message);
            }
            Envelope::Unrecognized
        }
        _ => Envelope::Unrecognized,
    }
}

/// Extracts the message of an error envelope, if this is one.
fn error_message(map: &serde_json::Map<String, Value>) -> Option<String> {
    if let Some(error) = map.get("error") {
        return Some(stringify(error));
    }

    let declared_failure = matches!(map.get("status"), Some(Value::String(s)) if s == "error")
        || matches!(map.get("success"), Some(Value::Bool(false)));
    if declared_failure {
        let message = map
            .get("message")
            .map(stringify)
            .unwrap_or_else(|| "server reported a failure".to_string());
        return Some(message);
    }

    None
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
