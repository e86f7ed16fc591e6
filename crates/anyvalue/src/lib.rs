//! Format-agnostic access to decoded JSON, YAML and MessagePack documents.
//!
//! A document is decoded into a tree of [`Value`]s and wrapped in a
//! [`GenericValue`], which navigates by key, dotted path or index, extracts
//! typed data through strict (`try_*`) or defaulted (`as_*`) accessors, and
//! edits the tree in place before encoding it again in any supported format.
//!
//! ```
//! use anyvalue::GenericValue;
//!
//! let mut cfg = GenericValue::from_json(br#"{"server":{"port":8080}}"#).unwrap();
//! assert_eq!(cfg.path("server.port").as_uint64(None), 8080);
//! cfg.set("server.host", "localhost");
//! assert_eq!(
//!     cfg.to_json().unwrap(),
//!     br#"{"server":{"port":8080,"host":"localhost"}}"#.to_vec()
//! );
//! ```
//!
//! The `yaml` and `msgpack` cargo features (both on by default) enable the
//! corresponding codecs.

mod accessors;
mod coerce;
mod error;
mod generic;
mod serde_impl;
mod value;

pub mod codecs;
#[cfg(feature = "msgpack")]
pub mod msgpack;
pub mod path;

pub use codecs::{CodecError, Format};
pub use error::{Error, Result};
pub use generic::GenericValue;
pub use value::{normalize_key, Map, Sequence, Value};

/// Crate version, as recorded in the package manifest.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
