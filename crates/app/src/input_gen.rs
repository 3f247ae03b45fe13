//! Sample input generation.
//!
//! When no input file is given, a sample is generated so each codec has
//! something to show:
//! - Long runs of one byte, where RLE shines
//! - Text from a small alphabet, where Huffman gains the most
//! - Repeated words and patterns, which LZ78 picks up
//! - Random bytes, which nothing compresses

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::Path;

/// Largest section of one kind.
const SECTION_BYTES: usize = 4096;

const WORDS: &[&str] = &[
    "the", "archive", "header", "symbol", "frequency", "tree", "code", "bit", "byte", "leaf",
    "weight", "prefix", "stream", "block", "phrase",
];

/// Generate `size_bytes` of mixed-compressibility data from `seed`.
///
/// The same seed and size always produce the same bytes.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(rng.gen_range(256..=SECTION_BYTES));

        match rng.gen_range(0..10) {
            // runs of one byte, of varying length
            0..=1 => {
                let mut left = section;
                while left > 0 {
                    let run = left.min(rng.gen_range(1..=600));
                    let value: u8 = rng.gen();
                    data.resize(data.len() + run, value);
                    left -= run;
                }
            }

            // text-like, skewed letter frequencies
            2..=4 => {
                let alphabet = b"eeeeettttaaooiinnsshrdlu .,\n";
                data.extend((0..section).map(|_| alphabet[rng.gen_range(0..alphabet.len())]));
            }

            // prose from a fixed vocabulary
            5..=7 => {
                let start = data.len();
                while data.len() - start < section {
                    data.extend_from_slice(WORDS[rng.gen_range(0..WORDS.len())].as_bytes());
                    data.push(b' ');
                }
                data.truncate(start + section);
            }

            // random bytes
            _ => data.extend((0..section).map(|_| rng.gen::<u8>())),
        }
    }

    data.truncate(size_bytes);
    data
}

/// Generate a sample and write it to `path`.
pub fn write_sample_file(path: &Path, seed: u64, size_bytes: usize) -> std::io::Result<()> {
    fs::write(path, generate_sample_data(seed, size_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size() {
        for size in [0, 1, 255, 1000, 20_000] {
            assert_eq!(generate_sample_data(42, size).len(), size);
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_sample_data(12345, 5000), generate_sample_data(12345, 5000));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_sample_data(1, 5000), generate_sample_data(2, 5000));
    }

    #[test]
    fn test_sample_is_compressible() {
        let data = generate_sample_data(7, 65536);
        let archive = archiver_core::huffman::compress(&data).unwrap();
        assert!(archive.len() < data.len());
    }
}
