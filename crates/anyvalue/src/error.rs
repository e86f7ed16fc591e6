//! Error types for value access and document codecs.

use thiserror::Error;

use crate::codecs::CodecError;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A strict accessor met a value of the wrong kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Decimal text that does not parse as the requested numeric type.
    #[error("type mismatch: number `{text}` is not a valid {expected}: {reason}")]
    InvalidNumber {
        text: String,
        expected: &'static str,
        reason: String,
    },
    #[error("decode error: {0}")]
    Decode(#[source] CodecError),
    #[error("encode error: {0}")]
    Encode(#[source] CodecError),
}

impl Error {
    pub(crate) fn mismatch(expected: &'static str, found: &crate::Value) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.kind(),
        }
    }

    /// True for both plain kind mismatches and unparsable decimal text.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            Error::TypeMismatch { .. } | Error::InvalidNumber { .. }
        )
    }
}
