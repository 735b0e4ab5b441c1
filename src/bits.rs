//! An MSB-first bit buffer.
//!
//! The embedded wire format is defined bit-by-bit, most significant bit
//! first, so both the payload framing and the LSB codec share this one
//! representation: packed bytes plus an explicit bit length.

/// A bit sequence packed MSB-first into bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bits {
    bytes: Vec<u8>,
    len: usize,
}

impl Bits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Wraps whole bytes; the resulting length is a multiple of 8.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let len = bytes.len() * 8;
        Self { bytes, len }
    }

    /// Wraps an already packed buffer together with its exact bit length.
    pub fn from_parts(bytes: Vec<u8>, len: usize) -> Self {
        debug_assert!(bytes.len() * 8 >= len);
        Self { bytes, len }
    }

    pub fn push(&mut self, bit: bool) {
        let shift = 7 - (self.len % 8);
        if shift == 7 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << shift;
        }
        self.len += 1;
    }

    pub fn push_byte(&mut self, byte: u8) {
        if self.len % 8 == 0 {
            self.bytes.push(byte);
            self.len += 8;
        } else {
            for shift in (0..8).rev() {
                self.push((byte >> shift) & 1 == 1);
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some((byte >> (7 - index % 8)) & 1 == 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| {
            (self.bytes[i / 8] >> (7 - i % 8)) & 1 == 1
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes; trailing bits of the last byte are zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
