//! The compress/decompress contract shared by every archiver.
//!
//! A codec turns bytes into archive bytes and back. On top of that, the
//! trait's provided methods implement the file contract:
//!
//! - `compress(path)` reads `path` and writes `path` + `.` + suffix.
//! - `decompress(path)` requires the suffix, strips it, and writes the result
//!   next to the archive with `-MARKER` inserted before the original
//!   extension (`notes.txt.haff` -> `notes-HAFFMAN.txt`), so outputs of
//!   different codecs for the same source never collide.
//!
//! Files are read and written whole; nothing is streamed.

use crate::error::{Error, Result};
use crate::huffman::Huffman;
use crate::lz78::Lz78;
use crate::rle::Rle;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// A byte-oriented compressor with a file naming convention.
///
/// Implementations hold no state between calls, so one instance can be
/// shared freely.
pub trait Codec: Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Archive file suffix, without the dot.
    fn suffix(&self) -> &'static str;

    /// Tag inserted into restored file names.
    fn marker(&self) -> &'static str;

    fn compress_bytes(&self, data: &[u8]) -> Result<Vec<u8>>;

    fn decompress_bytes(&self, archive: &[u8]) -> Result<Vec<u8>>;

    /// Compress the file at `path` into a sibling archive.
    ///
    /// Returns the archive path.
    ///
    /// # Errors
    /// - `Error::FileNotFound` if `path` does not exist
    /// - anything `compress_bytes` or the write reports
    fn compress(&self, path: &Path) -> Result<PathBuf> {
        let data = fs::read(path).map_err(|e| Error::from_io(e, path))?;
        let archive = self.compress_bytes(&data)?;

        let out = archive_path(path, self.suffix());
        fs::write(&out, archive)?;
        Ok(out)
    }

    /// Restore the archive at `path` to a marker-tagged sibling file.
    ///
    /// Returns the restored file's path.
    ///
    /// # Errors
    /// - `Error::FileNotFound` if `path` does not exist
    /// - `Error::UnsupportedFormat` if `path` lacks this codec's suffix
    /// - anything `decompress_bytes` or the write reports
    fn decompress(&self, path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let out = restored_path(path, self.suffix(), self.marker())?;

        let archive = fs::read(path).map_err(|e| Error::from_io(e, path))?;
        let data = self.decompress_bytes(&archive)?;
        fs::write(&out, data)?;
        Ok(out)
    }
}

/// `path` with `.suffix` appended to its full name.
pub fn archive_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Where `decompress` writes the archive at `path`.
///
/// Names are handled as `OsStr`, so non-UTF-8 names work. A name whose only
/// dot leads it (`.bashrc`) has no extension, and the marker goes at the end
/// (`.bashrc.haff` -> `.bashrc-HAFFMAN`).
///
/// # Errors
/// `Error::UnsupportedFormat` unless the file name ends in `.suffix` with
/// something before it.
pub fn restored_path(path: &Path, suffix: &'static str, marker: &str) -> Result<PathBuf> {
    let unsupported = || Error::UnsupportedFormat {
        path: path.to_path_buf(),
        expected: suffix,
    };

    if path.extension() != Some(OsStr::new(suffix)) {
        return Err(unsupported());
    }
    let original = Path::new(path.file_stem().ok_or_else(unsupported)?);
    let stem = original.file_stem().ok_or_else(unsupported)?;

    let mut restored = OsString::from(stem);
    restored.push("-");
    restored.push(marker);
    if let Some(ext) = original.extension() {
        restored.push(".");
        restored.push(ext);
    }

    Ok(path.with_file_name(restored))
}

/// Every codec, in the order a comparison runs them.
pub fn all() -> Vec<Box<dyn Codec>> {
    vec![Box::new(Rle), Box::new(Lz78), Box::new(Huffman)]
}

/// Look a codec up by name or suffix, case-insensitively.
///
/// # Errors
/// `Error::Config` for an unknown name.
pub fn by_name(name: &str) -> Result<Box<dyn Codec>> {
    match name.to_ascii_lowercase().as_str() {
        "rle" => Ok(Box::new(Rle)),
        "lz78" => Ok(Box::new(Lz78)),
        "huffman" | "haff" => Ok(Box::new(Huffman)),
        other => Err(Error::Config(format!("unknown codec: {other}"))),
    }
}
