//! Prefix-free code derivation from a Huffman tree.
//!
//! A left edge contributes bit 0 and a right edge bit 1. The walk uses an
//! explicit stack, so tree depth never turns into native call depth.

use crate::error::{HuffmanError, Result};
use crate::frequency::{FrequencyTable, SYMBOLS};
use crate::tree::{HuffmanTree, Node};
use std::fmt;

/// Longest code a 256-leaf tree can produce.
pub const MAX_CODE_LEN: usize = 255;

/// A variable-length bit string of at most [`MAX_CODE_LEN`] bits.
///
/// Bit `i` is the `i`-th edge taken from the root, stored in bit `i % 64` of
/// word `i / 64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    words: [u64; 4],
    len: u16,
}

impl Code {
    /// Copy of this code with `bit` appended.
    ///
    /// # Errors
    /// `HuffmanError::CodeLengthTooLong` past [`MAX_CODE_LEN`] bits.
    pub fn with_bit(mut self, bit: bool) -> Result<Self> {
        let i = self.len as usize;
        if i >= MAX_CODE_LEN {
            return Err(HuffmanError::CodeLengthTooLong { length: i + 1 }.into());
        }
        if bit {
            self.words[i / 64] |= 1 << (i % 64);
        }
        self.len += 1;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bit(&self, i: usize) -> bool {
        i < self.len() && (self.words[i / 64] >> (i % 64)) & 1 == 1
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit(i))
    }

    /// The code as `(word, bit count)` pieces of at most 64 bits, first bit in
    /// bit 0, ready for [`BitWriter::write_bits`](crate::bitio::BitWriter::write_bits).
    pub fn words(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        (0..self.len())
            .step_by(64)
            .map(move |start| (self.words[start / 64], (self.len() - start).min(64)))
    }

    /// True when every bit of `self` matches the start of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len() <= other.len() && (0..self.len()).all(|i| self.bit(i) == other.bit(i))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Code for every symbol present in the tree; absent symbols have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; SYMBOLS],
}

impl CodeTable {
    /// Walk `tree` depth-first and record the path to every leaf.
    ///
    /// Zero-weight leaves (the single-symbol padding leaf) get no code.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut codes = [None; SYMBOLS];
        let mut stack = vec![(tree.root(), Code::default())];

        while let Some((id, code)) = stack.pop() {
            match *tree.node(id) {
                Node::Leaf { symbol, weight } => {
                    if weight > 0 {
                        codes[symbol as usize] = Some(code);
                    }
                }
                Node::Internal { left, right, .. } => {
                    stack.push((right, code.with_bit(true)?));
                    stack.push((left, code.with_bit(false)?));
                }
            }
        }

        Ok(Self { codes })
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Symbols with a code, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|code| (symbol as u8, code)))
    }

    /// Number of payload bits needed to encode data with these frequencies.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(symbol, code)| frequencies.get(symbol) as u64 * code.len() as u64)
            .sum()
    }
}
