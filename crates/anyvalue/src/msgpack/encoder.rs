//! MessagePack encoding of [`Value`] trees.

use anyvalue_buffers::Writer;

use crate::coerce::classify_number;
use crate::Value;

/// MessagePack encoder.
///
/// Integers use the smallest representation that holds them; non-negative
/// signed integers are written with the unsigned family. Floats are always
/// written as float64. `Absent` is written as nil.
pub struct MsgPackEncoder {
    pub writer: Writer,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encode a value and return the MessagePack bytes.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    pub fn write_any(&mut self, value: &Value) {
        match value {
            Value::Absent | Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Int(i) => self.write_integer(*i),
            Value::Uint(u) => self.write_u_integer(*u),
            Value::Float(f) => self.write_float(*f),
            Value::Number(text) => self.write_number_text(text),
            Value::String(s) => self.write_str(s),
            Value::Binary(bytes) => self.write_bin(bytes),
            Value::Sequence(seq) => {
                let items = seq.borrow();
                self.write_arr_hdr(items.len());
                for item in items.iter() {
                    self.write_any(item);
                }
            }
            Value::Map(map) => {
                let entries = map.borrow();
                self.write_obj_hdr(entries.len());
                for (key, val) in entries.iter() {
                    self.write_str(key);
                    self.write_any(val);
                }
            }
        }
    }

    pub fn write_null(&mut self) {
        self.writer.u8(0xc0);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { 0xc3 } else { 0xc2 });
    }

    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.write_u_integer(int as u64);
        } else if int >= -32 {
            self.writer.i8(int as i8);
        } else if int >= i8::MIN as i64 {
            self.writer.u8(0xd0);
            self.writer.i8(int as i8);
        } else if int >= i16::MIN as i64 {
            self.writer.u8(0xd1);
            self.writer.i16(int as i16);
        } else if int >= i32::MIN as i64 {
            self.writer.u8(0xd2);
            self.writer.i32(int as i32);
        } else {
            self.writer.u8(0xd3);
            self.writer.i64(int);
        }
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        if uint <= 0x7f {
            self.writer.u8(uint as u8);
        } else if uint <= 0xff {
            self.writer.u8(0xcc);
            self.writer.u8(uint as u8);
        } else if uint <= 0xffff {
            self.writer.u8u16(0xcd, uint as u16);
        } else if uint <= 0xffff_ffff {
            self.writer.u8u32(0xce, uint as u32);
        } else {
            self.writer.u8u64(0xcf, uint);
        }
    }

    pub fn write_float(&mut self, float: f64) {
        self.writer.u8f64(0xcb, float);
    }

    /// Decimal text goes out as the narrowest native number it parses to;
    /// text that is not a number is written as a string.
    pub fn write_number_text(&mut self, text: &str) {
        match classify_number(text) {
            Some(Value::Int(i)) => self.write_integer(i),
            Some(Value::Uint(u)) => self.write_u_integer(u),
            Some(Value::Float(f)) => self.write_float(f),
            _ => self.write_str(text),
        }
    }

    pub fn write_str(&mut self, s: &str) {
        let length = s.len();
        if length <= 31 {
            self.writer.u8(0xa0 | length as u8);
        } else if length <= 0xff {
            self.writer.u8(0xd9);
            self.writer.u8(length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xda, length as u16);
        } else {
            self.writer.u8u32(0xdb, length as u32);
        }
        self.writer.utf8(s);
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        let length = buf.len();
        if length <= 0xff {
            self.writer.u8(0xc4);
            self.writer.u8(length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xc5, length as u16);
        } else {
            self.writer.u8u32(0xc6, length as u32);
        }
        self.writer.buf(buf);
    }

    pub fn write_arr_hdr(&mut self, length: usize) {
        if length <= 15 {
            self.writer.u8(0x90 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xdc, length as u16);
        } else {
            self.writer.u8u32(0xdd, length as u32);
        }
    }

    pub fn write_obj_hdr(&mut self, length: usize) {
        if length <= 15 {
            self.writer.u8(0x80 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xde, length as u16);
        } else {
            self.writer.u8u32(0xdf, length as u32);
        }
    }
}
