//! Huffman compressor and decompressor.
//!
//! Compression: count frequencies, build the tree, derive codes, pack the
//! input's codes LSB-first, and prepend the 1028-byte header.
//!
//! Decompression: parse the header, check it against itself and against the
//! payload size, rebuild the tree with the same algorithm, then walk it bit by
//! bit until the declared number of symbols has been emitted. Padding bits in
//! the final byte are never read.
//!
//! Empty input and empty archive map to each other and skip all of the above.

use crate::bitio::{BitReader, BitWriter};
use crate::codec::Codec;
use crate::codes::CodeTable;
use crate::error::{CorruptArchive, Error, HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::header::{Header, HEADER_LEN};
use crate::tree::{HuffmanTree, Node};

/// The Huffman archiver (`.haff`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Huffman;

impl Codec for Huffman {
    fn name(&self) -> &'static str {
        "Huffman"
    }

    fn suffix(&self) -> &'static str {
        "haff"
    }

    fn marker(&self) -> &'static str {
        "HAFFMAN"
    }

    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress(data)
    }

    fn decompress_bytes(&self, archive: &[u8]) -> Result<Vec<u8>> {
        decompress(archive)
    }
}

/// Compress `data` into a Huffman archive.
///
/// # Errors
/// `Error::InputTooLarge` if `data` is longer than `u32::MAX` bytes.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let original_len =
        u32::try_from(data.len()).map_err(|_| Error::InputTooLarge { len: data.len() })?;
    let frequencies = FrequencyTable::from_bytes(data)?;
    let tree = HuffmanTree::build(&frequencies)?;
    let codes = CodeTable::from_tree(&tree)?;
    let payload_len = payload_len(codes.encoded_bits(&frequencies));

    let mut archive = Vec::with_capacity(HEADER_LEN + payload_len);
    Header::new(original_len, frequencies).encode_into(&mut archive);
    archive.extend_from_slice(&pack(data, &codes, payload_len)?);
    Ok(archive)
}

/// Restore the bytes a Huffman archive was made from.
///
/// # Errors
/// - `CorruptArchive::HeaderTooShort` for a nonempty archive under 1028 bytes
/// - `CorruptArchive::EmptyDeclaredLength` / `FrequencyMismatch` for a header
///   that contradicts itself
/// - `CorruptArchive::Truncated` / `TrailingBytes` when the payload size does
///   not match what the header's symbols need
/// - `CorruptArchive::InvalidCode` if the payload reaches the padding leaf
/// - `CorruptArchive::PayloadExhausted` if the bits run out before every
///   declared symbol is decoded
pub fn decompress(archive: &[u8]) -> Result<Vec<u8>> {
    if archive.is_empty() {
        return Ok(Vec::new());
    }

    let (header, offset) = Header::decode(archive)?;
    header.validate()?;

    let tree = HuffmanTree::build(&header.frequencies)?;
    let codes = CodeTable::from_tree(&tree)?;

    let payload = &archive[offset..];
    let required = payload_len(codes.encoded_bits(&header.frequencies));
    if payload.len() < required {
        return Err(CorruptArchive::Truncated {
            required,
            actual: payload.len(),
        }
        .into());
    }
    if payload.len() > required {
        return Err(CorruptArchive::TrailingBytes {
            required,
            actual: payload.len(),
        }
        .into());
    }

    unpack(payload, header.original_len as usize, &tree)
}

/// Bytes needed to hold `bits` bits.
fn payload_len(bits: u64) -> usize {
    bits.div_ceil(8) as usize
}

/// Concatenate the code of every byte of `data`, LSB-first.
fn pack(data: &[u8], codes: &CodeTable, capacity: usize) -> Result<Vec<u8>> {
    let mut writer = BitWriter::with_capacity(capacity);

    for &byte in data {
        let code = codes
            .get(byte)
            .ok_or(HuffmanError::MissingCode { symbol: byte })?;
        for (word, count) in code.words() {
            writer.write_bits(word, count);
        }
    }

    Ok(writer.finish())
}

/// Walk `tree` with the bits of `payload` until `count` symbols are out.
fn unpack(payload: &[u8], count: usize, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(payload);
    let mut output = Vec::with_capacity(count);
    let mut cursor = tree.root();

    while output.len() < count {
        let bit = reader
            .read_bit()
            .map_err(|_| CorruptArchive::PayloadExhausted {
                decoded: output.len(),
                declared: count,
            })?;
        if let Some(next) = tree.child(cursor, bit) {
            cursor = next;
        }

        if let Node::Leaf { symbol, weight } = *tree.node(cursor) {
            if weight == 0 {
                return Err(CorruptArchive::InvalidCode {
                    position: reader.position(),
                }
                .into());
            }
            output.push(symbol);
            cursor = tree.root();
        }
    }

    Ok(output)
}
