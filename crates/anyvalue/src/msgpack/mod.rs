//! MessagePack encoder/decoder for [`crate::Value`] trees.
//!
//! Format reference: <https://github.com/msgpack/msgpack/blob/master/spec.md>

mod decoder;
mod encoder;
mod error;

pub use decoder::MsgPackDecoder;
pub use encoder::MsgPackEncoder;
pub use error::MsgPackError;

/// Encoded MessagePack payload.
pub type MsgPack = Vec<u8>;

/// Encode a value with a fresh encoder.
pub fn encode(value: &crate::Value) -> MsgPack {
    MsgPackEncoder::new().encode(value)
}

/// Decode exactly one value; trailing bytes are an error.
pub fn decode(bytes: &[u8]) -> Result<crate::Value, MsgPackError> {
    MsgPackDecoder::new().decode(bytes)
}
