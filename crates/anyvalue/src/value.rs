//! The decoded value tree.
//!
//! [`Value`] is the universal sum type every codec decodes into. Maps and
//! sequences are shared handles: cloning a [`Value::Map`] or
//! [`Value::Sequence`] clones the handle, not the contents, so an edit made
//! through one handle is visible through every other handle to the same
//! subtree. Use [`Value::deep_clone`] for an independent copy.
//!
//! Storing a container inside itself creates a reference cycle. Nothing
//! detects this; equality, `Debug` and the encoders would recurse forever.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// A decoded value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// "No value found". Returned by failed lookups; distinct from `Null`.
    #[default]
    Absent,
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    /// A number kept as its decimal text so no precision is lost until it
    /// is coerced.
    Number(String),
    String(String),
    /// Raw bytes, produced by MessagePack `bin` payloads.
    Binary(Vec<u8>),
    Map(Map),
    Sequence(Sequence),
}

impl Value {
    /// Name of the runtime kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Uint(_) => "unsigned integer",
            Value::Float(_) => "float",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Binary(_) => "binary",
            Value::Map(_) => "map",
            Value::Sequence(_) => "sequence",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Uint(_) | Value::Float(_) | Value::Number(_)
        )
    }

    /// Copies the whole subtree into fresh storage.
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::Map(map) => Value::Map(map.deep_clone()),
            Value::Sequence(seq) => Value::Sequence(seq.deep_clone()),
            scalar => scalar.clone(),
        }
    }

    /// Containers never hold `Absent`; it is stored as `Null`.
    fn into_stored(self) -> Value {
        match self {
            Value::Absent => Value::Null,
            other => other,
        }
    }
}

/// Converts a decoded map key into a string key.
///
/// Scalar keys are stringified; null, binary and container keys yield `None`
/// and the entry is dropped by the caller.
pub fn normalize_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(text) => Some(text.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Uint(u) => Some(u.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Absent | Value::Null | Value::Binary(_) | Value::Map(_) | Value::Sequence(_) => {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

/// Shared, insertion-ordered string-keyed map.
#[derive(Clone, Default)]
pub struct Map(Rc<RefCell<IndexMap<String, Value>>>);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns the entry for `key`. Containers come back as aliasing handles.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Inserts or overwrites `key`, keeping the position of an existing key.
    /// `Absent` is stored as `Null`.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0
            .borrow_mut()
            .insert(key.into(), value.into().into_stored())
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().shift_remove(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// True when both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Map) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn deep_clone(&self) -> Map {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.deep_clone()))
            .collect()
    }

    pub(crate) fn borrow(&self) -> Ref<'_, IndexMap<String, Value>> {
        self.0.borrow()
    }

    /// Returns the map stored under `key`, first replacing whatever else is
    /// there (or nothing) with a new empty map.
    pub(crate) fn vivify(&self, key: String) -> Map {
        let mut entries = self.0.borrow_mut();
        if let Some(Value::Map(existing)) = entries.get(&key) {
            return existing.clone();
        }
        if let Some(found) = entries.get(&key) {
            tracing::trace!(key = %key, found = found.kind(), "replacing non-map node with a map");
        }
        let child = Map::new();
        entries.insert(key, Value::Map(child.clone()));
        child
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into().into_stored()))
            .collect::<IndexMap<_, _>>();
        Map(Rc::new(RefCell::new(entries)))
    }
}

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// Shared, ordered list of values.
#[derive(Clone, Default)]
pub struct Sequence(Rc<RefCell<Vec<Value>>>);

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Appends `value`; `Absent` is stored as `Null`.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into().into_stored());
    }

    /// Snapshot of the elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn deep_clone(&self) -> Sequence {
        self.0.borrow().iter().map(Value::deep_clone).collect()
    }

    pub(crate) fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

impl<V: Into<Value>> FromIterator<V> for Sequence {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let items = iter
            .into_iter()
            .map(|v| v.into().into_stored())
            .collect::<Vec<_>>();
        Sequence(Rc::new(RefCell::new(items)))
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Uint(v as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Value::Sequence(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

macro_rules! from_vec {
    ($($ty:ty),*) => {
        $(impl From<Vec<$ty>> for Value {
            fn from(v: Vec<$ty>) -> Self {
                Value::Sequence(v.into_iter().collect())
            }
        })*
    };
}

from_vec!(Value, bool, i32, i64, u64, f64, String, &str);

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.to_string()),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(obj.into_iter().collect()),
        }
    }
}
