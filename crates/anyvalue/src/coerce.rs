//! Numeric coercion.
//!
//! One rule set, applied to every numeric kind regardless of source format:
//!
//! - decimal text to integer: parsed in base 10. Fractional, malformed or
//!   out-of-range text fails with [`Error::InvalidNumber`].
//! - decimal text to float: parsed as an IEEE-754 double.
//! - float to integer: truncated toward zero with Rust `as` semantics, so
//!   out-of-range values saturate at the target bounds and NaN becomes 0.
//! - signed to unsigned and back: bit pattern reinterpretation (`as`);
//!   negative values wrap.
//!
//! Native numeric casts never fail on overflow; they are inexact instead.

use std::str::FromStr;

use crate::{Error, Result, Value};

fn parse_text<T>(text: &str, expected: &'static str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    text.parse::<T>().map_err(|err| Error::InvalidNumber {
        text: text.to_owned(),
        expected,
        reason: err.to_string(),
    })
}

pub(crate) fn to_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Number(text) => parse_text(text, "float"),
        Value::Float(f) => Ok(*f),
        Value::Int(i) => Ok(*i as f64),
        Value::Uint(u) => Ok(*u as f64),
        other => Err(Error::mismatch("number", other)),
    }
}

pub(crate) fn to_i64(value: &Value) -> Result<i64> {
    match value {
        Value::Number(text) => parse_text(text, "64-bit integer"),
        Value::Float(f) => Ok(*f as i64),
        Value::Int(i) => Ok(*i),
        Value::Uint(u) => Ok(*u as i64),
        other => Err(Error::mismatch("number", other)),
    }
}

pub(crate) fn to_u64(value: &Value) -> Result<u64> {
    match value {
        Value::Number(text) => parse_text(text, "64-bit unsigned integer"),
        Value::Float(f) => Ok(*f as u64),
        Value::Int(i) => Ok(*i as u64),
        Value::Uint(u) => Ok(*u),
        other => Err(Error::mismatch("number", other)),
    }
}

/// Picks the narrowest native numeric value for decimal text: `Int`, then
/// `Uint`, then `Float`. `None` when the text is not a number at all.
pub(crate) fn classify_number(text: &str) -> Option<Value> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Value::Int(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Some(Value::Uint(u));
    }
    text.parse::<f64>().ok().map(Value::Float)
}
