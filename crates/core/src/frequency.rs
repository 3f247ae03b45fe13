//! Per-byte occurrence counts.

use crate::error::{Error, Result};

/// Number of distinct symbols (byte values).
pub const SYMBOLS: usize = 256;

/// Occurrence count for every byte value, all 256 slots present.
///
/// The table fully determines the Huffman tree, which is why it is the only
/// thing the archive header carries besides the original length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; SYMBOLS],
}

impl FrequencyTable {
    /// Build a table from raw counts.
    pub fn from_counts(counts: [u32; SYMBOLS]) -> Self {
        Self { counts }
    }

    /// Tabulate the bytes of `data`.
    ///
    /// # Errors
    /// `Error::InputTooLarge` when `data` is longer than `u32::MAX`,
    /// since neither a count nor the header length could represent it.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if u32::try_from(data.len()).is_err() {
            return Err(Error::InputTooLarge { len: data.len() });
        }

        let mut counts = [0u32; SYMBOLS];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Ok(Self { counts })
    }

    /// Count for a single symbol.
    pub fn get(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    pub fn counts(&self) -> &[u32; SYMBOLS] {
        &self.counts
    }

    /// Sum of all counts. Widened so a hostile header cannot overflow it.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Number of symbols with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Symbols with a nonzero count, ascending.
    pub fn present(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self {
            counts: [0; SYMBOLS],
        }
    }
}
