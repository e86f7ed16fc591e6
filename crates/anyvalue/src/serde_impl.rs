//! `serde::Serialize` for the value tree.
//!
//! Lets a [`Value`] or [`GenericValue`] be embedded in any serde-serializable
//! structure. Decimal text is written as the narrowest native number it
//! parses to, or as a string when it does not parse. Binary is written as a
//! sequence of bytes so text formats without a bytes type still accept it.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::coerce::classify_number;
use crate::{GenericValue, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Uint(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Number(text) => match classify_number(text) {
                Some(number) => number.serialize(serializer),
                None => serializer.serialize_str(text),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Binary(bytes) => serializer.collect_seq(bytes.iter()),
            Value::Sequence(seq) => {
                let items = seq.borrow();
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    out.serialize_element(item)?;
                }
                out.end()
            }
            Value::Map(map) => {
                let entries = map.borrow();
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, val) in entries.iter() {
                    out.serialize_entry(key, val)?;
                }
                out.end()
            }
        }
    }
}

impl Serialize for GenericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw().serialize(serializer)
    }
}
