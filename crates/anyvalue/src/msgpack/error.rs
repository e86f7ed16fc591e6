//! MessagePack decoder error type.

use anyvalue_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgPackError {
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEof(usize),
    #[error("invalid UTF-8 in string at offset {0}")]
    InvalidUtf8(usize),
    #[error("invalid MessagePack byte at offset {0}")]
    InvalidByte(usize),
    #[error("unsupported MessagePack extension type {0}")]
    UnsupportedExtension(i8),
    #[error("trailing bytes after value at offset {0}")]
    TrailingBytes(usize),
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}

impl From<BufferError> for MsgPackError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { offset, .. } => MsgPackError::UnexpectedEof(offset),
            BufferError::InvalidUtf8(offset) => MsgPackError::InvalidUtf8(offset),
        }
    }
}
