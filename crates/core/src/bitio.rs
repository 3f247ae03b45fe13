//! Bit-level I/O utilities for reading and writing individual bits.
//!
//! This module provides BitWriter and BitReader for packing Huffman codes.
//! Both operate in LSB-first order: the first bit written lands in bit 0 of
//! the first byte, the ninth bit in bit 0 of the second byte, and so on.
//!
//! # Padding Rules
//! - BitWriter: the unused high bits of the final byte are left zero
//! - BitReader: cannot tell padding from data; the caller knows how many
//!   symbols to decode and stops there
//!
//! # Example
//! ```
//! use archiver_core::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);  // bits 1, 0, 1 into positions 0..3
//! writer.write_bits(0b11, 2);   // bits 1, 1 into positions 3..5
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b0001_1101]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(2).unwrap(), 0b11);
//! ```

use crate::error::{BitIoError, Result};

/// Writes bits LSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8
/// - bits of `bit_buffer` at or above `bit_count` are zero
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a BitWriter whose output buffer can hold `bytes` without
    /// reallocating.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.bit_buffer |= 1 << self.bit_count;
        }
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append the lowest `count` bits of `value`, bit 0 first.
    ///
    /// `count` is clamped to 64.
    pub fn write_bits(&mut self, value: u64, count: usize) {
        for i in 0..count.min(64) {
            self.write_bit((value >> i) & 1 == 1);
        }
    }

    /// Finish writing and return the output bytes.
    ///
    /// A trailing partial byte is emitted with its unused high bits zero.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        self.bytes
    }

    /// Return the total number of bits written (including partial byte).
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }
}

/// Reads bits LSB-first from a byte buffer.
///
/// # Invariants
/// - `bit_position` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Current bit position (0 = bit 0 of first byte)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader for the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Read a single bit.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` once every bit has been consumed.
    pub fn read_bit(&mut self) -> Result<bool> {
        let byte = self
            .data
            .get(self.bit_position / 8)
            .ok_or(BitIoError::UnexpectedEof)?;
        let bit = (byte >> (self.bit_position % 8)) & 1 == 1;
        self.bit_position += 1;
        Ok(bit)
    }

    /// Read up to 64 bits; the first bit read becomes bit 0 of the result.
    ///
    /// Nothing is consumed when fewer than `count` bits remain.
    pub fn read_bits(&mut self, count: usize) -> Result<u64> {
        let count = count.min(64);
        if count > self.bits_remaining() {
            return Err(BitIoError::UnexpectedEof.into());
        }

        let mut result = 0u64;
        for i in 0..count {
            if self.read_bit()? {
                result |= 1 << i;
            }
        }
        Ok(result)
    }

    /// Return the number of bits remaining in the buffer.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }

    /// Return the current bit position.
    pub fn position(&self) -> usize {
        self.bit_position
    }

    /// Check if we're at the end of the buffer.
    pub fn is_empty(&self) -> bool {
        self.bit_position >= self.data.len() * 8
    }
}
