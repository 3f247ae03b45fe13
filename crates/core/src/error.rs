//! Error types for the archivers.
//!
//! Every codec propagates its failures to the caller; nothing is caught and
//! logged inside the library. A comparison run keeps one `Result` per codec,
//! so a failing codec never masks the outcome of another.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a specific failure domain:
/// - File contract: missing paths, archive names without the codec suffix
/// - Corrupt archives: headers or payloads that cannot describe the original
/// - Bit I/O: reading past the end of a bit stream
/// - Huffman: tree construction and size limits
/// - I/O: any other file system failure
#[derive(Debug, Error)]
pub enum Error {
    /// Source or archive path does not exist
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Archive path does not carry the codec's suffix
    #[error("unsupported format: {} does not end with .{expected}", path.display())]
    UnsupportedFormat { path: PathBuf, expected: &'static str },

    /// Input is longer than a 32-bit length or index can describe
    #[error("input of {len} bytes exceeds the 32-bit size limit")]
    InputTooLarge { len: usize },

    /// Archive content is inconsistent with itself
    #[error("corrupt archive: {0}")]
    Corrupt(#[from] CorruptArchive),

    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Huffman codec error (e.g., empty frequency table)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,
}

/// Huffman codec errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty frequency table: cannot build tree")]
    EmptyFrequencyTable,

    /// Code length exceeds maximum (255 bits)
    #[error("code length {length} exceeds maximum 255")]
    CodeLengthTooLong { length: usize },

    /// Input byte has no code in the table it is being packed with
    #[error("no code for symbol {symbol:#04x}")]
    MissingCode { symbol: u8 },
}

/// Ways an archive can fail validation before or during decoding.
#[derive(Debug, Error)]
pub enum CorruptArchive {
    /// Nonempty archive too short to hold the fixed header
    #[error("header too short: need {required} bytes, got {actual}")]
    HeaderTooShort { required: usize, actual: usize },

    /// Nonempty archive whose header declares zero symbols
    #[error("header declares an empty original in a nonempty archive")]
    EmptyDeclaredLength,

    /// Frequency table does not add up to the declared length
    #[error("frequency sum {sum} does not match declared length {declared}")]
    FrequencyMismatch { declared: u32, sum: u64 },

    /// Payload holds fewer bytes than the coded symbols need
    #[error("payload truncated: need {required} bytes, got {actual}")]
    Truncated { required: usize, actual: usize },

    /// Payload steers the decoder into the single-symbol padding leaf
    #[error("invalid huffman code ending at bit position {position}")]
    InvalidCode { position: usize },

    /// Payload bits run out before the declared number of symbols
    #[error("payload exhausted after {decoded} of {declared} symbols")]
    PayloadExhausted { decoded: usize, declared: usize },

    /// Payload holds more bytes than the coded symbols need
    #[error("payload has trailing bytes: need {required} bytes, got {actual}")]
    TrailingBytes { required: usize, actual: usize },

    /// Malformed run-length stream
    #[error("rle stream: {0}")]
    Rle(#[from] RleError),

    /// Malformed LZ78 entry stream
    #[error("lz78 stream: {0}")]
    Lz78(#[from] Lz78Error),
}

/// Run-length stream errors.
#[derive(Debug, Error)]
pub enum RleError {
    /// Block header cut off at the end of the stream
    #[error("block at offset {offset} is missing its second byte")]
    IncompleteBlock { offset: usize },

    /// Literal block claims zero bytes
    #[error("empty literal block at offset {offset}")]
    EmptyLiteral { offset: usize },

    /// Literal block runs past the end of the stream
    #[error("literal block at offset {offset} needs {expected} bytes, {available} available")]
    LiteralOverrun {
        offset: usize,
        expected: usize,
        available: usize,
    },
}

/// LZ78 entry stream errors.
#[derive(Debug, Error)]
pub enum Lz78Error {
    /// Stream length is not a whole number of entries
    #[error("stream length {len} is not a multiple of {entry_len}")]
    PartialEntry { len: usize, entry_len: usize },

    /// Entry refers to a phrase that has not been defined yet
    #[error("entry {entry} refers to phrase {index}, only {defined} defined")]
    UnknownPhrase {
        entry: usize,
        index: u32,
        defined: usize,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map an I/O error on `path` into the crate taxonomy.
    ///
    /// `NotFound` becomes [`Error::FileNotFound`]; everything else stays I/O.
    pub(crate) fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(err)
        }
    }
}
