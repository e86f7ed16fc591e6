//! Document codecs.
//!
//! Each codec turns bytes into a [`Value`] tree and back. JSON and YAML
//! delegate parsing to `serde_json` / `serde_yaml`; MessagePack uses the
//! crate's own [`crate::msgpack`] encoder and decoder.

pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

use std::io::Read;

#[cfg(feature = "msgpack")]
use crate::msgpack::{MsgPackDecoder, MsgPackEncoder, MsgPackError};
use crate::Value;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "yaml")]
    #[error("YAML codec error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[cfg(feature = "msgpack")]
    #[error("MessagePack codec error: {0}")]
    MsgPack(#[from] MsgPackError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input contains no document")]
    EmptyDocument,
    #[error("cannot encode non-finite float {0} as JSON")]
    NonFiniteFloat(f64),
}

/// Document format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "msgpack")]
    MsgPack,
}

impl Format {
    pub fn id(&self) -> &'static str {
        match self {
            Format::Json => "json",
            #[cfg(feature = "yaml")]
            Format::Yaml => "yaml",
            #[cfg(feature = "msgpack")]
            Format::MsgPack => "msgpack",
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        tracing::debug!(format = self.id(), bytes = bytes.len(), "decoding document");
        match self {
            Format::Json => json::decode(bytes),
            #[cfg(feature = "yaml")]
            Format::Yaml => yaml::decode(bytes),
            #[cfg(feature = "msgpack")]
            Format::MsgPack => Ok(MsgPackDecoder::new().decode(bytes)?),
        }
    }

    pub fn decode_reader<R: Read>(&self, reader: R) -> Result<Value, CodecError> {
        match self {
            Format::Json => {
                tracing::debug!(format = self.id(), "decoding document from reader");
                json::decode_reader(reader)
            }
            #[cfg(feature = "yaml")]
            Format::Yaml => {
                tracing::debug!(format = self.id(), "decoding document from reader");
                yaml::decode_reader(reader)
            }
            #[cfg(feature = "msgpack")]
            Format::MsgPack => {
                let mut bytes = Vec::new();
                let mut reader = reader;
                reader.read_to_end(&mut bytes)?;
                self.decode(&bytes)
            }
        }
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        let bytes = match self {
            Format::Json => json::encode(value)?,
            #[cfg(feature = "yaml")]
            Format::Yaml => yaml::encode(value)?,
            #[cfg(feature = "msgpack")]
            Format::MsgPack => MsgPackEncoder::new().encode(value),
        };
        tracing::debug!(format = self.id(), bytes = bytes.len(), "encoded document");
        Ok(bytes)
    }
}
