// src/presentation/http/codec.rs
//! Request-side codec of the callable protocol.
//!
//! Clients send plain JSON, except that 64-bit integers travel as protobuf
//! wrapper objects:
//! `{"@type": "type.googleapis.com/google.protobuf.Int64Value", "value": "123"}`.
//! Results go back as plain JSON.

use serde_json::{Map, Number, Value};

pub const LONG_TYPE: &str = "type.googleapis.com/google.protobuf.Int64Value";
pub const UNSIGNED_LONG_TYPE: &str = "type.googleapis.com/google.protobuf.UInt64Value";

/// Decode a request payload. Never fails: a wrapper whose value does not
/// parse is passed through as an ordinary object.
#[must_use]
pub fn decode(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(decode).collect()),
        Value::Object(map) => match unwrap_long(&map) {
            Some(number) => Value::Number(number),
            None => Value::Object(map.into_iter().map(|(k, v)| (k, decode(v))).collect()),
        },
        other => other,
    }
}

fn unwrap_long(map: &Map<String, Value>) -> Option<Number> {
    if map.len() != 2 {
        return None;
    }
    let kind = map.get("@type")?.as_str()?;
    let raw = map.get("value")?.as_str()?;
    match kind {
        LONG_TYPE => raw.parse::<i64>().ok().map(Number::from),
        UNSIGNED_LONG_TYPE => raw.parse::<u64>().ok().map(Number::from),
        _ => None,
    }
}
