//! Typed extraction.
//!
//! `try_*` accessors fail with [`Error::TypeMismatch`] (or
//! [`Error::InvalidNumber`] for unparsable decimal text). `as_*` accessors
//! never fail: they take one optional default and fall back to it, or to the
//! type's zero value when given `None`.
//!
//! ```
//! use anyvalue::GenericValue;
//!
//! let v = GenericValue::from_json(br#"{"port": 8080, "tags": ["a", 3, null]}"#).unwrap();
//! assert_eq!(v.child("port").as_int(None), 8080);
//! assert_eq!(v.child("timeout").as_int(30), 30);
//! assert_eq!(v.child("tags").as_string_sequence(None), vec!["a", ""]);
//! assert!(v.child("port").try_string().is_err());
//! ```
//!
//! The sequence accessors are lenient per element: `null` becomes the zero
//! value, a non-string element is skipped by the string variant, and a
//! non-numeric or unparsable element becomes zero in the numeric variants.
//! Only a non-sequence value makes them fail.

use crate::coerce::{to_f64, to_i64, to_u64};
use crate::{Error, GenericValue, Map, Result, Sequence, Value};

macro_rules! defaulted {
    ($($(#[$doc:meta])* $name:ident => $strict:ident -> $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self, default: impl Into<Option<$ty>>) -> $ty {
                self.$strict()
                    .unwrap_or_else(|_| default.into().unwrap_or_default())
            }
        )*
    };
}

impl GenericValue {
    // -----------------------------------------------------------------------
    // Strict
    // -----------------------------------------------------------------------

    /// The wrapped map, as a handle sharing storage with this tree.
    pub fn try_map(&self) -> Result<Map> {
        match self.raw() {
            Value::Map(map) => Ok(map.clone()),
            other => Err(Error::mismatch("map", other)),
        }
    }

    /// The wrapped sequence, as a handle sharing storage with this tree.
    pub fn try_sequence(&self) -> Result<Sequence> {
        match self.raw() {
            Value::Sequence(seq) => Ok(seq.clone()),
            other => Err(Error::mismatch("sequence", other)),
        }
    }

    pub fn try_bool(&self) -> Result<bool> {
        match self.raw() {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::mismatch("bool", other)),
        }
    }

    pub fn try_string(&self) -> Result<String> {
        match self.raw() {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::mismatch("string", other)),
        }
    }

    /// Raw bytes of a string, or the payload of a binary value.
    pub fn try_bytes(&self) -> Result<Vec<u8>> {
        match self.raw() {
            Value::String(s) => Ok(s.as_bytes().to_vec()),
            Value::Binary(bytes) => Ok(bytes.clone()),
            other => Err(Error::mismatch("string", other)),
        }
    }

    pub fn try_float64(&self) -> Result<f64> {
        to_f64(self.raw())
    }

    /// Platform-width integer; see [`GenericValue::try_int64`].
    pub fn try_int(&self) -> Result<isize> {
        to_i64(self.raw()).map(|i| i as isize)
    }

    pub fn try_int64(&self) -> Result<i64> {
        to_i64(self.raw())
    }

    pub fn try_uint64(&self) -> Result<u64> {
        to_u64(self.raw())
    }

    pub fn try_string_sequence(&self) -> Result<Vec<String>> {
        let seq = self.try_sequence()?;
        let items = seq.borrow();
        Ok(items
            .iter()
            .filter_map(|item| match item {
                Value::Null => Some(String::new()),
                Value::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect())
    }

    pub fn try_int64_sequence(&self) -> Result<Vec<i64>> {
        self.numeric_sequence(to_i64)
    }

    pub fn try_uint64_sequence(&self) -> Result<Vec<u64>> {
        self.numeric_sequence(to_u64)
    }

    pub fn try_float64_sequence(&self) -> Result<Vec<f64>> {
        self.numeric_sequence(to_f64)
    }

    fn numeric_sequence<T: Default>(&self, coerce: fn(&Value) -> Result<T>) -> Result<Vec<T>> {
        let seq = self.try_sequence()?;
        let items = seq.borrow();
        Ok(items
            .iter()
            .map(|item| coerce(item).unwrap_or_default())
            .collect())
    }

    // -----------------------------------------------------------------------
    // Defaulted
    // -----------------------------------------------------------------------

    defaulted! {
        /// The wrapped map, or the default (a fresh empty map for `None`).
        as_map => try_map -> Map;
        as_sequence => try_sequence -> Sequence;
        as_bool => try_bool -> bool;
        as_string => try_string -> String;
        as_bytes => try_bytes -> Vec<u8>;
        as_float64 => try_float64 -> f64;
        as_int => try_int -> isize;
        as_int64 => try_int64 -> i64;
        as_uint64 => try_uint64 -> u64;
        as_string_sequence => try_string_sequence -> Vec<String>;
        as_int64_sequence => try_int64_sequence -> Vec<i64>;
        as_uint64_sequence => try_uint64_sequence -> Vec<u64>;
        as_float64_sequence => try_float64_sequence -> Vec<f64>;
    }
}
