//! Measurement and reporting for codec comparison runs.
//!
//! Each codec is run through the full file contract (compress the source,
//! decompress the archive) and recorded as a [`CodecRun`]:
//! - Archive size and compression ratio
//! - Compress and decompress wall time
//! - Whether the restored file matches the source
//!
//! # Failure Isolation
//!
//! A [`Comparison`] keeps one `Result` per codec. A codec that fails is
//! reported with its error; the remaining codecs still run and their numbers
//! are unaffected.

use crate::codec::Codec;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Measurements for one codec on one source file.
#[derive(Debug, Clone)]
pub struct CodecRun {
    /// Codec name
    pub codec: &'static str,

    /// Source file size
    pub original_bytes: u64,

    /// Archive file size
    pub archive_bytes: u64,

    pub archive_path: PathBuf,

    pub restored_path: PathBuf,

    pub compress_time: Duration,

    pub decompress_time: Duration,

    /// Restored file is byte-identical to the source
    pub verified: bool,
}

impl CodecRun {
    /// Compression ratio (archive / original).
    ///
    /// Returns 0.0 for an empty source.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            self.archive_bytes as f64 / self.original_bytes as f64
        }
    }
}

/// Outcome of one codec inside a comparison.
#[derive(Debug)]
pub struct CodecOutcome {
    pub codec: &'static str,
    pub result: Result<CodecRun>,
}

/// Results of running several codecs over the same source.
#[derive(Debug)]
pub struct Comparison {
    pub source: PathBuf,

    pub original_bytes: u64,

    /// One entry per codec, in run order
    pub outcomes: Vec<CodecOutcome>,

    /// Wall time of the whole comparison
    pub duration: Duration,
}

/// Compress `source` with `codec`, restore it, and measure both steps.
///
/// `original` is the source content, used to verify the restored file.
pub fn run_codec(codec: &dyn Codec, source: &Path, original: &[u8]) -> Result<CodecRun> {
    let started = Instant::now();
    let archive_path = codec.compress(source)?;
    let compress_time = started.elapsed();

    let archive_bytes = fs::metadata(&archive_path)
        .map_err(|e| Error::from_io(e, &archive_path))?
        .len();

    let started = Instant::now();
    let restored_path = codec.decompress(&archive_path)?;
    let decompress_time = started.elapsed();

    let restored = fs::read(&restored_path).map_err(|e| Error::from_io(e, &restored_path))?;

    Ok(CodecRun {
        codec: codec.name(),
        original_bytes: original.len() as u64,
        archive_bytes,
        archive_path,
        restored_path,
        compress_time,
        decompress_time,
        verified: restored == original,
    })
}

/// Run every codec in `codecs` over `source`.
///
/// # Errors
/// Only reading the source itself can fail the whole comparison
/// (`Error::FileNotFound` if it does not exist). Per-codec failures are
/// recorded in the returned [`Comparison`].
pub fn compare(source: &Path, codecs: &[Box<dyn Codec>]) -> Result<Comparison> {
    let started = Instant::now();
    let original = fs::read(source).map_err(|e| Error::from_io(e, source))?;

    let outcomes = codecs
        .iter()
        .map(|codec| CodecOutcome {
            codec: codec.name(),
            result: run_codec(codec.as_ref(), source, &original),
        })
        .collect();

    Ok(Comparison {
        source: source.to_path_buf(),
        original_bytes: original.len() as u64,
        outcomes,
        duration: started.elapsed(),
    })
}

impl Comparison {
    /// Successful runs, in run order.
    pub fn runs(&self) -> impl Iterator<Item = &CodecRun> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failed codecs and their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.codec, e)))
    }

    /// The verified run with the lowest ratio; the earliest wins a tie.
    pub fn best(&self) -> Option<&CodecRun> {
        self.runs()
            .filter(|run| run.verified)
            .fold(None, |best: Option<&CodecRun>, run| match best {
                Some(b) if b.ratio() <= run.ratio() => Some(b),
                _ => Some(run),
            })
    }

    /// Every codec ran and restored the source exactly.
    pub fn all_verified(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(&o.result, Ok(run) if run.verified))
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Comparison: {} ===", self.source.display());
        println!("Original size: {} bytes", self.original_bytes);
        println!();

        for outcome in &self.outcomes {
            println!("=== {} ===", outcome.codec);
            match &outcome.result {
                Ok(run) => {
                    println!("Compress:   {:.2} ms", run.compress_time.as_secs_f64() * 1000.0);
                    println!("Decompress: {:.2} ms", run.decompress_time.as_secs_f64() * 1000.0);
                    println!("Archive:    {} bytes ({})", run.archive_bytes, run.archive_path.display());
                    println!("Ratio:      {:.3}", run.ratio());
                    if run.verified {
                        println!("Restored:   {} (PASSED ✓)", run.restored_path.display());
                    } else {
                        println!("Restored:   {} (FAILED ✗ content mismatch)", run.restored_path.display());
                    }
                }
                Err(err) => println!("Failed: {}", err),
            }
            println!();
        }

        println!("=== Result ===");
        match self.best() {
            Some(best) => println!("Best ratio: {} ({:.3})", best.codec, best.ratio()),
            None => println!("Best ratio: none (no codec succeeded)"),
        }
        println!("Total time: {} ms", self.duration.as_millis());
        println!();
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self) {
        if self.all_verified() {
            println!("✓ All {} codecs restored the source exactly", self.outcomes.len());
        } else {
            for (codec, err) in self.failures() {
                println!("✗ {} failed: {}", codec, err);
            }
            for run in self.runs().filter(|run| !run.verified) {
                println!("✗ {} restored different content", run.codec);
            }
        }
    }

    /// Export as `key=value` lines (for parsing/testing).
    pub fn export_text(&self) -> String {
        let mut text = format!("original_bytes={}\n", self.original_bytes);

        for outcome in &self.outcomes {
            let key = outcome.codec.to_ascii_lowercase();
            match &outcome.result {
                Ok(run) => {
                    text.push_str(&format!(
                        "{key}.archive_bytes={}\n\
                         {key}.ratio={:.4}\n\
                         {key}.compress_us={}\n\
                         {key}.decompress_us={}\n\
                         {key}.verified={}\n",
                        run.archive_bytes,
                        run.ratio(),
                        run.compress_time.as_micros(),
                        run.decompress_time.as_micros(),
                        run.verified,
                    ));
                }
                Err(err) => text.push_str(&format!("{key}.error={err}\n")),
            }
        }

        if let Some(best) = self.best() {
            text.push_str(&format!("best={}\n", best.codec));
        }
        text
    }
}
