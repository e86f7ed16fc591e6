//! YAML bridge over `serde_yaml`.

use std::io::Read;

use serde_yaml::Value as YamlValue;

use super::CodecError;
use crate::value::{normalize_key, Map, Value};

/// Decodes a single document. `<<` merge keys are resolved, with keys
/// written next to the merge taking precedence over merged ones. Input with
/// no document at all (only whitespace or comments) is rejected.
pub fn decode(bytes: &[u8]) -> Result<Value, CodecError> {
    if is_blank(bytes) {
        return Err(CodecError::EmptyDocument);
    }
    let mut doc: YamlValue = serde_yaml::from_slice(bytes)?;
    doc.apply_merge()?;
    Ok(from_yaml_value(doc))
}

pub fn decode_reader<R: Read>(mut reader: R) -> Result<Value, CodecError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.split(|b| *b == b'\n').all(|line| {
        line.iter()
            .find(|b| !b.is_ascii_whitespace())
            .map_or(true, |b| *b == b'#')
    })
}

pub fn encode(value: &Value) -> Result<Vec<u8>, CodecError> {
    Ok(serde_yaml::to_string(value)?.into_bytes())
}

/// Convert a `serde_yaml::Value` into a [`Value`] tree.
///
/// Integers that fit `i64` become `Int`, larger ones `Uint`. Tags are
/// dropped in favour of the tagged value. Mapping keys go through
/// [`normalize_key`].
pub fn from_yaml_value(node: YamlValue) -> Value {
    match node {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::Uint(u)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => {
            Value::Sequence(items.into_iter().map(from_yaml_value).collect())
        }
        YamlValue::Mapping(mapping) => {
            let map = Map::new();
            for (key, val) in mapping {
                match normalize_key(&from_yaml_value(key)) {
                    Some(key) => {
                        map.insert(key, from_yaml_value(val));
                    }
                    None => tracing::trace!("dropping YAML entry with a non-scalar key"),
                }
            }
            Value::Map(map)
        }
        YamlValue::Tagged(tagged) => from_yaml_value(tagged.value),
    }
}
