//! MessagePack decoding into [`Value`] trees.

use anyvalue_buffers::Reader;

use super::MsgPackError;
use crate::value::{normalize_key, Map, Value};

/// Containers nested deeper than this are rejected.
pub const MAX_DEPTH: usize = 128;

/// MessagePack decoder.
///
/// Positive fixints and the signed family decode to `Int`, the unsigned
/// family (`uint8`..`uint64`) to `Uint`, float32/float64 to `Float`, `bin` to
/// `Binary`. Map keys go through [`normalize_key`]. Extension types are not
/// supported.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsgPackDecoder;

impl MsgPackDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode exactly one value from `bytes`.
    pub fn decode(&self, bytes: &[u8]) -> Result<Value, MsgPackError> {
        let mut reader = Reader::new(bytes);
        let value = self.read_any(&mut reader, 0)?;
        if !reader.is_eof() {
            return Err(MsgPackError::TrailingBytes(reader.x));
        }
        Ok(value)
    }

    fn read_any(&self, r: &mut Reader<'_>, depth: usize) -> Result<Value, MsgPackError> {
        let offset = r.x;
        let byte = r.u8()?;
        let value = match byte {
            0x00..=0x7f => Value::Int(byte as i64),
            0x80..=0x8f => self.read_obj(r, (byte & 0x0f) as usize, depth)?,
            0x90..=0x9f => self.read_arr(r, (byte & 0x0f) as usize, depth)?,
            0xa0..=0xbf => self.read_str(r, (byte & 0x1f) as usize)?,
            0xc0 => Value::Null,
            0xc1 => return Err(MsgPackError::InvalidByte(offset)),
            0xc2 => Value::Bool(false),
            0xc3 => Value::Bool(true),
            0xc4 => {
                let size = r.u8()? as usize;
                Value::Binary(r.buf(size)?.to_vec())
            }
            0xc5 => {
                let size = r.u16()? as usize;
                Value::Binary(r.buf(size)?.to_vec())
            }
            0xc6 => {
                let size = r.u32()? as usize;
                Value::Binary(r.buf(size)?.to_vec())
            }
            0xc7 | 0xc8 | 0xc9 => {
                match byte {
                    0xc7 => r.skip(1)?,
                    0xc8 => r.skip(2)?,
                    _ => r.skip(4)?,
                }
                return Err(MsgPackError::UnsupportedExtension(r.i8()?));
            }
            0xca => Value::Float(r.f32()? as f64),
            0xcb => Value::Float(r.f64()?),
            0xcc => Value::Uint(r.u8()? as u64),
            0xcd => Value::Uint(r.u16()? as u64),
            0xce => Value::Uint(r.u32()? as u64),
            0xcf => Value::Uint(r.u64()?),
            0xd0 => Value::Int(r.i8()? as i64),
            0xd1 => Value::Int(r.i16()? as i64),
            0xd2 => Value::Int(r.i32()? as i64),
            0xd3 => Value::Int(r.i64()?),
            0xd4..=0xd8 => return Err(MsgPackError::UnsupportedExtension(r.i8()?)),
            0xd9 => {
                let size = r.u8()? as usize;
                self.read_str(r, size)?
            }
            0xda => {
                let size = r.u16()? as usize;
                self.read_str(r, size)?
            }
            0xdb => {
                let size = r.u32()? as usize;
                self.read_str(r, size)?
            }
            0xdc => {
                let size = r.u16()? as usize;
                self.read_arr(r, size, depth)?
            }
            0xdd => {
                let size = r.u32()? as usize;
                self.read_arr(r, size, depth)?
            }
            0xde => {
                let size = r.u16()? as usize;
                self.read_obj(r, size, depth)?
            }
            0xdf => {
                let size = r.u32()? as usize;
                self.read_obj(r, size, depth)?
            }
            0xe0..=0xff => Value::Int(byte as i8 as i64),
        };
        Ok(value)
    }

    fn read_str(&self, r: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        Ok(Value::String(r.utf8(size)?.to_owned()))
    }

    fn read_arr(
        &self,
        r: &mut Reader<'_>,
        size: usize,
        depth: usize,
    ) -> Result<Value, MsgPackError> {
        if depth >= MAX_DEPTH {
            return Err(MsgPackError::TooDeep(MAX_DEPTH));
        }
        // Every element takes at least one byte.
        let mut items = Vec::with_capacity(size.min(r.size()));
        for _ in 0..size {
            items.push(self.read_any(r, depth + 1)?);
        }
        Ok(Value::Sequence(items.into_iter().collect()))
    }

    fn read_obj(
        &self,
        r: &mut Reader<'_>,
        size: usize,
        depth: usize,
    ) -> Result<Value, MsgPackError> {
        if depth >= MAX_DEPTH {
            return Err(MsgPackError::TooDeep(MAX_DEPTH));
        }
        let map = Map::new();
        for _ in 0..size {
            let key = self.read_any(r, depth + 1)?;
            let val = self.read_any(r, depth + 1)?;
            match normalize_key(&key) {
                Some(key) => {
                    map.insert(key, val);
                }
                None => tracing::trace!(kind = key.kind(), "dropping MessagePack entry with a non-scalar key"),
            }
        }
        Ok(Value::Map(map))
    }
}
