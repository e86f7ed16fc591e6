//! JSON bridge over `serde_json`.
//!
//! `serde_json` is built with `arbitrary_precision`, so every number is
//! decoded as [`Value::Number`] holding its literal text and written back
//! out verbatim.

use std::io::Read;
use std::str::FromStr;

use serde_json::Value as JsonValue;

use super::CodecError;
use crate::Value;

pub fn decode(bytes: &[u8]) -> Result<Value, CodecError> {
    let doc: JsonValue = serde_json::from_slice(bytes)?;
    Ok(Value::from(doc))
}

pub fn decode_reader<R: Read>(reader: R) -> Result<Value, CodecError> {
    let doc: JsonValue = serde_json::from_reader(reader)?;
    Ok(Value::from(doc))
}

pub fn encode(value: &Value) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&to_json_value(value)?)?)
}

/// Two-space indented output.
pub fn encode_pretty(value: &Value) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec_pretty(&to_json_value(value)?)?)
}

/// Convert a [`Value`] tree into a `serde_json::Value`.
///
/// `Absent` becomes `null`, binary becomes an array of byte values, and
/// decimal text that is not valid JSON number syntax is emitted as a string.
/// NaN and infinities have no JSON form and fail with
/// [`CodecError::NonFiniteFloat`].
pub fn to_json_value(value: &Value) -> Result<JsonValue, CodecError> {
    Ok(match value {
        Value::Absent | Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::from(*i),
        Value::Uint(u) => JsonValue::from(*u),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or(CodecError::NonFiniteFloat(*f))?,
        Value::Number(text) => serde_json::Number::from_str(text)
            .map(JsonValue::Number)
            .unwrap_or_else(|_| JsonValue::String(text.clone())),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Binary(bytes) => JsonValue::Array(bytes.iter().map(|b| JsonValue::from(*b)).collect()),
        Value::Sequence(seq) => JsonValue::Array(
            seq.borrow()
                .iter()
                .map(to_json_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Map(map) => JsonValue::Object(
            map.borrow()
                .iter()
                .map(|(k, v)| Ok((k.clone(), to_json_value(v)?)))
                .collect::<Result<serde_json::Map<_, _>, CodecError>>()?,
        ),
    })
}
