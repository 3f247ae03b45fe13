//! Huffman archive header serialization and parsing.
//!
//! The header carries everything the decoder needs to rebuild the encoding
//! tree: the original length and the full frequency table. No tree shape is
//! transmitted; the decoder runs the same builder over the same counts.
//!
//! # Archive Format
//!
//! ```text
//! +------------------------+
//! | original_len (4)       |  u32 little-endian, decoded symbol count
//! +------------------------+
//! | frequency[0] (4)       |  u32 little-endian
//! | ...                    |
//! | frequency[255] (4)     |
//! +------------------------+  offset 1028
//! | payload                |  codes packed LSB-first, last byte
//! | (variable)             |  zero-padded
//! +------------------------+
//! ```
//!
//! An empty input is stored as an empty archive with no header at all.

use crate::error::{CorruptArchive, Result};
use crate::frequency::{FrequencyTable, SYMBOLS};

/// Size of the header in bytes: length field plus 256 counts.
pub const HEADER_LEN: usize = 4 + SYMBOLS * 4;

/// Parsed archive header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Number of symbols to decode
    pub original_len: u32,

    /// Counts the encoder measured, in symbol order
    pub frequencies: FrequencyTable,
}

impl Header {
    pub fn new(original_len: u32, frequencies: FrequencyTable) -> Self {
        Self {
            original_len,
            frequencies,
        }
    }

    /// Serialize into exactly [`HEADER_LEN`] bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN);
        self.encode_into(&mut bytes);
        bytes
    }

    /// Append the serialized header to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.original_len.to_le_bytes());
        for count in self.frequencies.counts() {
            out.extend_from_slice(&count.to_le_bytes());
        }
    }

    /// Parse a header from the start of `bytes`.
    ///
    /// Returns the header and the offset where the payload begins, which is
    /// always [`HEADER_LEN`].
    ///
    /// # Errors
    /// `CorruptArchive::HeaderTooShort` if fewer than [`HEADER_LEN`] bytes
    /// are available.
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize)> {
        if bytes.len() < HEADER_LEN {
            return Err(CorruptArchive::HeaderTooShort {
                required: HEADER_LEN,
                actual: bytes.len(),
            }
            .into());
        }

        let mut words = bytes[..HEADER_LEN]
            .chunks_exact(4)
            .map(|word| u32::from_le_bytes([word[0], word[1], word[2], word[3]]));

        let original_len = words.next().unwrap_or_default();
        let mut counts = [0u32; SYMBOLS];
        for (slot, count) in counts.iter_mut().zip(words) {
            *slot = count;
        }

        Ok((
            Self::new(original_len, FrequencyTable::from_counts(counts)),
            HEADER_LEN,
        ))
    }

    /// Check that the frequency table accounts for exactly `original_len`
    /// symbols and that there is at least one.
    pub fn validate(&self) -> Result<()> {
        if self.original_len == 0 {
            return Err(CorruptArchive::EmptyDeclaredLength.into());
        }

        let sum = self.frequencies.total();
        if sum != self.original_len as u64 {
            return Err(CorruptArchive::FrequencyMismatch {
                declared: self.original_len,
                sum,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_header_len() {
        assert_eq!(HEADER_LEN, 1028);
    }

    #[test]
    fn test_encode_layout() {
        let freqs = FrequencyTable::from_bytes(&[0x41, 0x41, 0x41, 0x42]).unwrap();
        let bytes = Header::new(4, freqs).encode();

        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(&bytes[0..4], &[4, 0, 0, 0]);
        let a = 4 + 0x41 * 4;
        assert_eq!(&bytes[a..a + 4], &[3, 0, 0, 0]);
        let b = 4 + 0x42 * 4;
        assert_eq!(&bytes[b..b + 4], &[1, 0, 0, 0]);
        assert_eq!(bytes.iter().map(|&x| x as u32).sum::<u32>(), 8);
    }

    #[test]
    fn test_decode_reports_payload_offset() {
        let freqs = FrequencyTable::from_bytes(b"hello").unwrap();
        let mut archive = Header::new(5, freqs.clone()).encode();
        archive.extend_from_slice(&[0xAA, 0xBB]);

        let (header, offset) = Header::decode(&archive).unwrap();
        assert_eq!(offset, HEADER_LEN);
        assert_eq!(header.original_len, 5);
        assert_eq!(header.frequencies, freqs);
        assert_eq!(&archive[offset..], &[0xAA, 0xBB]);
    }

    #[test]
    fn test_decode_too_short() {
        let result = Header::decode(&[0u8; 100]);
        assert!(matches!(
            result,
            Err(Error::Corrupt(CorruptArchive::HeaderTooShort {
                required: HEADER_LEN,
                actual: 100
            }))
        ));
    }

    #[test]
    fn test_validate_frequency_mismatch() {
        let freqs = FrequencyTable::from_bytes(b"abc").unwrap();
        let header = Header::new(4, freqs);
        assert!(matches!(
            header.validate(),
            Err(Error::Corrupt(CorruptArchive::FrequencyMismatch { declared: 4, sum: 3 }))
        ));
    }

    #[test]
    fn test_validate_empty_declared_length() {
        let header = Header::new(0, FrequencyTable::default());
        assert!(matches!(
            header.validate(),
            Err(Error::Corrupt(CorruptArchive::EmptyDeclaredLength))
        ));
    }

    #[test]
    fn test_validate_ok() {
        let freqs = FrequencyTable::from_bytes(b"abc").unwrap();
        Header::new(3, freqs).validate().unwrap();
    }
}
