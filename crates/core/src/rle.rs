//! Run-length archiver (`.rle`).
//!
//! # Stream Format
//!
//! ```text
//! run block:      [count 1..=255][value]          count copies of value
//! literal block:  [0][count 1..=255][bytes...]    count raw bytes
//! ```
//!
//! Runs of two or more equal bytes become run blocks; everything else is
//! gathered into literal blocks.

use crate::codec::Codec;
use crate::error::{CorruptArchive, Error, Result, RleError};

/// Longest run or literal a single block can describe.
const MAX_BLOCK: usize = 255;

/// The run-length archiver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rle;

impl Codec for Rle {
    fn name(&self) -> &'static str {
        "RLE"
    }

    fn suffix(&self) -> &'static str {
        "rle"
    }

    fn marker(&self) -> &'static str {
        "RLE"
    }

    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(compress(data))
    }

    fn decompress_bytes(&self, archive: &[u8]) -> Result<Vec<u8>> {
        decompress(archive)
    }
}

/// Encode `data` as run and literal blocks.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 2 + 2);
    let mut literal_start = 0;
    let mut i = 0;

    while i < data.len() {
        let run = run_length(&data[i..]);
        if run >= 2 {
            push_literals(&mut out, &data[literal_start..i]);
            out.push(run as u8);
            out.push(data[i]);
            i += run;
            literal_start = i;
        } else {
            i += 1;
        }
    }
    push_literals(&mut out, &data[literal_start..]);

    out
}

/// Expand run and literal blocks.
///
/// # Errors
/// `CorruptArchive::Rle` for a cut-off block, an empty literal block, or a
/// literal block longer than the remaining stream.
pub fn decompress(archive: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(archive.len() * 2);
    let mut offset = 0;

    while offset < archive.len() {
        let tag = archive[offset];
        let second = *archive
            .get(offset + 1)
            .ok_or_else(|| corrupt(RleError::IncompleteBlock { offset }))?;

        if tag == 0 {
            let len = second as usize;
            if len == 0 {
                return Err(corrupt(RleError::EmptyLiteral { offset }));
            }
            let start = offset + 2;
            let bytes = archive.get(start..start + len).ok_or_else(|| {
                corrupt(RleError::LiteralOverrun {
                    offset,
                    expected: len,
                    available: archive.len() - start,
                })
            })?;
            out.extend_from_slice(bytes);
            offset = start + len;
        } else {
            out.resize(out.len() + tag as usize, second);
            offset += 2;
        }
    }

    Ok(out)
}

/// Length of the run of equal bytes at the start of `data`, capped at one
/// block.
fn run_length(data: &[u8]) -> usize {
    match data.first() {
        Some(&first) => data
            .iter()
            .take(MAX_BLOCK)
            .take_while(|&&byte| byte == first)
            .count(),
        None => 0,
    }
}

fn push_literals(out: &mut Vec<u8>, bytes: &[u8]) {
    for block in bytes.chunks(MAX_BLOCK) {
        out.push(0);
        out.push(block.len() as u8);
        out.extend_from_slice(block);
    }
}

fn corrupt(err: RleError) -> Error {
    CorruptArchive::from(err).into()
}
