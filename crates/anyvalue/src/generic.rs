//! [`GenericValue`], the navigable and mutable wrapper around one [`Value`].
//!
//! Every navigation call returns a brand-new wrapper. Wrappers over maps and
//! sequences share storage with the tree they came from, so writes through a
//! child wrapper are visible from the parent:
//!
//! ```
//! use anyvalue::GenericValue;
//!
//! let root = GenericValue::from_json(br#"{"redis":{"addr":"127.0.0.1"}}"#).unwrap();
//! let mut redis = root.path("redis");
//! redis.set("max_conn", 16);
//! assert_eq!(root.path("redis.max_conn").as_int(0), 16);
//! assert!(root.path("redis.missing.deeper").is_absent());
//! ```

use std::io::Read;

use crate::codecs::{json, Format};
use crate::path::split_path;
use crate::{Error, Result, Value};

/// Navigable wrapper around a decoded [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenericValue {
    value: Value,
}

impl Default for GenericValue {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for GenericValue {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

impl From<GenericValue> for Value {
    fn from(v: GenericValue) -> Self {
        v.value
    }
}

impl GenericValue {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Wraps a fresh empty map.
    pub fn new() -> Self {
        Self {
            value: Value::Map(crate::Map::new()),
        }
    }

    /// The "not found" wrapper returned by failed lookups.
    pub fn absent() -> Self {
        Self {
            value: Value::Absent,
        }
    }

    /// Wraps an already-decoded value without validation.
    pub fn from_raw(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Decodes a document in `format`.
    pub fn decode(format: Format, bytes: &[u8]) -> Result<Self> {
        format.decode(bytes).map(Self::from).map_err(Error::Decode)
    }

    /// Decodes a document in `format` read to the end of `reader`.
    pub fn decode_reader<R: Read>(format: Format, reader: R) -> Result<Self> {
        format
            .decode_reader(reader)
            .map(Self::from)
            .map_err(Error::Decode)
    }

    /// Parses JSON text. Numbers are kept as decimal text.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Self::decode(Format::Json, bytes)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Self::decode_reader(Format::Json, reader)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml(bytes: &[u8]) -> Result<Self> {
        Self::decode(Format::Yaml, bytes)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        Self::decode_reader(Format::Yaml, reader)
    }

    #[cfg(feature = "msgpack")]
    pub fn from_msgpack(bytes: &[u8]) -> Result<Self> {
        Self::decode(Format::MsgPack, bytes)
    }

    #[cfg(feature = "msgpack")]
    pub fn from_msgpack_reader<R: Read>(reader: R) -> Result<Self> {
        Self::decode_reader(Format::MsgPack, reader)
    }

    /// The wrapped value.
    pub fn raw(&self) -> &Value {
        &self.value
    }

    pub fn into_raw(self) -> Value {
        self.value
    }

    /// Copies the wrapped subtree so it no longer shares storage.
    pub fn deep_clone(&self) -> Self {
        Self {
            value: self.value.deep_clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Looks up `key` in the wrapped map. Anything else yields an absent
    /// wrapper.
    pub fn child(&self, key: &str) -> Self {
        match &self.value {
            Value::Map(map) => map.get(key).map_or_else(Self::absent, Self::from),
            _ => Self::absent(),
        }
    }

    /// Follows a dotted path. Absence at any step stays absent.
    pub fn path(&self, path: &str) -> Self {
        self.path_segments(split_path(path))
    }

    /// Follows pre-split segments; an empty list returns the wrapper itself.
    pub fn path_segments<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self.clone();
        for segment in segments {
            if current.is_absent() {
                break;
            }
            current = current.child(segment.as_ref());
        }
        current
    }

    /// Element `index` of the wrapped sequence, or absent.
    pub fn index(&self, index: usize) -> Self {
        match &self.value {
            Value::Sequence(seq) => seq.get(index).map_or_else(Self::absent, Self::from),
            _ => Self::absent(),
        }
    }

    /// Like [`GenericValue::path`], but `None` when nothing is found.
    pub fn exists(&self, path: &str) -> Option<Self> {
        let found = self.path(path);
        (!found.is_absent()).then_some(found)
    }

    // -----------------------------------------------------------------------
    // Type inspection
    // -----------------------------------------------------------------------

    /// The canonical "not found" test.
    pub fn is_absent(&self) -> bool {
        self.value.is_absent()
    }

    pub fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self.value, Value::Map(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.value, Value::Sequence(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.value, Value::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.value, Value::String(_))
    }

    /// True for every numeric kind, decimal text included.
    pub fn is_number(&self) -> bool {
        self.value.is_number()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Writes `value` at a dotted path. See [`GenericValue::set_path`].
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Self {
        self.set_path(split_path(path), value)
    }

    /// Writes `value` at `segments`, creating missing intermediate maps.
    ///
    /// Any non-map node on the way, including the wrapped value itself, is
    /// replaced by an empty map. An empty segment list replaces the whole
    /// wrapped value. `Absent` written into a map is stored as `Null`.
    pub fn set_path<I, S>(&mut self, segments: I, value: impl Into<Value>) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let value = value.into();
        let Some(last) = segments.pop() else {
            self.value = value;
            return self;
        };
        let mut current = self.ensure_map();
        for segment in segments {
            current = current.vivify(segment);
        }
        current.insert(last, value);
        self
    }

    /// Removes `key` from the wrapped map; a no-op for anything else.
    pub fn delete(&self, key: &str) {
        if let Value::Map(map) = &self.value {
            map.remove(key);
        }
    }

    fn ensure_map(&mut self) -> crate::Map {
        if let Value::Map(map) = &self.value {
            return map.clone();
        }
        if !self.value.is_absent() {
            tracing::trace!(found = self.value.kind(), "replacing non-map root with a map");
        }
        let map = crate::Map::new();
        self.value = Value::Map(map.clone());
        map
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    pub fn encode(&self, format: Format) -> Result<Vec<u8>> {
        format.encode(&self.value).map_err(Error::Encode)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.encode(Format::Json)
    }

    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        json::encode_pretty(&self.value).map_err(Error::Encode)
    }

    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> Result<Vec<u8>> {
        self.encode(Format::Yaml)
    }

    #[cfg(feature = "msgpack")]
    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        self.encode(Format::MsgPack)
    }
}
