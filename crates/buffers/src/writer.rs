//! Auto-growing binary buffer writer.

/// Writes big-endian binary data into a growable buffer.
///
/// [`Writer::flush`] hands out everything written since the last flush and
/// leaves the writer empty for the next value.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self {
            uint8: Vec::with_capacity(64),
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Discards anything written since the last flush.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the written bytes and empties the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    #[inline]
    pub fn u8(&mut self, byte: u8) {
        self.uint8.push(byte);
    }

    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.uint8.push(val as u8);
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a type byte followed by a `u16`.
    pub fn u8u16(&mut self, byte: u8, val: u16) {
        self.u8(byte);
        self.u16(val);
    }

    /// Writes a type byte followed by a `u32`.
    pub fn u8u32(&mut self, byte: u8, val: u32) {
        self.u8(byte);
        self.u32(val);
    }

    /// Writes a type byte followed by a `u64`.
    pub fn u8u64(&mut self, byte: u8, val: u64) {
        self.u8(byte);
        self.u64(val);
    }

    /// Writes a type byte followed by an `f64`.
    pub fn u8f64(&mut self, byte: u8, val: f64) {
        self.u8(byte);
        self.f64(val);
    }

    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    pub fn utf8(&mut self, s: &str) {
        self.uint8.extend_from_slice(s.as_bytes());
    }
}
