//! LZ78 dictionary archiver (`.lz78`).
//!
//! The archive is a flat list of 5-byte entries:
//!
//! ```text
//! +-------------------+-------------+
//! | phrase index (4)  | symbol (1)  |   u32 little-endian, then one byte
//! +-------------------+-------------+
//! ```
//!
//! Phrase 0 is the empty string. Entry `n` (counting from 1) defines phrase
//! `n` as `phrase[index] ++ symbol` and emits it. When the input ends in the
//! middle of a known phrase, that phrase is emitted once more as
//! `(its prefix, its last byte)`.

use crate::codec::Codec;
use crate::error::{CorruptArchive, Error, Lz78Error, Result};
use std::collections::HashMap;

/// Bytes per archive entry.
const ENTRY_LEN: usize = 5;

/// The LZ78 archiver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz78;

impl Codec for Lz78 {
    fn name(&self) -> &'static str {
        "LZ78"
    }

    fn suffix(&self) -> &'static str {
        "lz78"
    }

    fn marker(&self) -> &'static str {
        "LZ78"
    }

    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress(data)
    }

    fn decompress_bytes(&self, archive: &[u8]) -> Result<Vec<u8>> {
        decompress(archive)
    }
}

/// Encode `data` as LZ78 entries.
///
/// # Errors
/// `Error::InputTooLarge` if phrase indices could exceed `u32`.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    if u32::try_from(data.len()).is_err() {
        return Err(Error::InputTooLarge { len: data.len() });
    }

    // (prefix phrase, next byte) -> phrase
    let mut dictionary: HashMap<(u32, u8), u32> = HashMap::new();
    let mut out = Vec::new();
    let mut current = 0u32;
    let mut pending = None;

    for &byte in data {
        match dictionary.get(&(current, byte)) {
            Some(&phrase) => {
                pending = Some((current, byte));
                current = phrase;
            }
            None => {
                push_entry(&mut out, current, byte);
                let phrase = dictionary.len() as u32 + 1;
                dictionary.insert((current, byte), phrase);
                current = 0;
                pending = None;
            }
        }
    }

    if let Some((prefix, byte)) = pending {
        push_entry(&mut out, prefix, byte);
    }

    Ok(out)
}

/// Rebuild the original bytes from LZ78 entries.
///
/// # Errors
/// - `Lz78Error::PartialEntry` if the length is not a multiple of 5
/// - `Lz78Error::UnknownPhrase` if an entry refers forward
pub fn decompress(archive: &[u8]) -> Result<Vec<u8>> {
    if archive.len() % ENTRY_LEN != 0 {
        return Err(corrupt(Lz78Error::PartialEntry {
            len: archive.len(),
            entry_len: ENTRY_LEN,
        }));
    }

    // phrase n is out[start..start + len]
    let mut phrases: Vec<(usize, usize)> = vec![(0, 0)];
    let mut out = Vec::new();

    for (entry, chunk) in archive.chunks_exact(ENTRY_LEN).enumerate() {
        let index = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let symbol = chunk[4];

        let &(start, len) = phrases.get(index as usize).ok_or_else(|| {
            corrupt(Lz78Error::UnknownPhrase {
                entry,
                index,
                defined: phrases.len(),
            })
        })?;

        let phrase_start = out.len();
        out.extend_from_within(start..start + len);
        out.push(symbol);
        phrases.push((phrase_start, len + 1));
    }

    Ok(out)
}

fn push_entry(out: &mut Vec<u8>, index: u32, symbol: u8) {
    out.extend_from_slice(&index.to_le_bytes());
    out.push(symbol);
}

fn corrupt(err: Lz78Error) -> Error {
    CorruptArchive::from(err).into()
}
