//! archiver-core: single-file archivers built around static Huffman coding
//!
//! This library provides:
//! - A Huffman compressor whose archive carries its own frequency table
//! - Run-length (RLE) and LZ78 archivers behind the same interface
//! - A file contract shared by all three (`name.ext` -> `name.ext.suffix`
//!   -> `name-MARKER.ext`)
//! - A comparison runner that measures every codec on the same file
//!
//! # Architecture
//!
//! - `bitio`: LSB-first bit reading/writing
//! - `frequency`: byte frequency tables
//! - `tree`: deterministic Huffman tree construction
//! - `codes`: code table derived from the tree
//! - `header`: fixed 1028-byte Huffman archive header
//! - `huffman`: Huffman compress/decompress
//! - `rle`, `lz78`: the other two archivers
//! - `codec`: the shared trait, file naming, and codec registry
//! - `metrics`: comparison runs and reporting
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and propagated
//! - **Deterministic**: The same input always yields the same archive
//! - **Self-describing**: A Huffman archive rebuilds its tree from its header

pub mod bitio;
pub mod codec;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod header;
pub mod huffman;
pub mod lz78;
pub mod metrics;
pub mod rle;
pub mod tree;

// Re-export commonly used types
pub use codec::Codec;
pub use error::{Error, Result};
pub use huffman::Huffman;
pub use lz78::Lz78;
pub use metrics::{compare, CodecRun, Comparison};
pub use rle::Rle;
