//! Configuration for the archiver application.
//!
//! Handles parsing command-line arguments and filling in defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: without `--in` it generates a
//! sample file from a seed and compares every codec on it. The seed is
//! printed so a run can be reproduced.

use archiver_core::codec::{self, Codec};
use std::path::PathBuf;

/// Complete configuration for a comparison run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input file path (None = generate sample)
    pub input_file: Option<PathBuf>,

    /// Where a generated sample is written
    pub sample_file: PathBuf,

    // === Sample ===
    /// Size of the generated sample in bytes
    pub sample_bytes: usize,

    /// Seed for sample generation
    pub seed: u64,

    // === Codecs ===
    /// Codec names in run order
    pub codecs: Vec<String>,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the detailed comparison summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not given, a time-based seed is used.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut sample_file: Option<PathBuf> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut codecs: Vec<String> = Vec::new();
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--sample-out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-out requires a path".to_string());
                    }
                    sample_file = Some(PathBuf::from(&args[i]));
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--codec" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--codec requires a name".to_string());
                    }
                    let name = args[i].to_ascii_lowercase();
                    if name == "all" {
                        codecs.clear();
                    } else {
                        codec::by_name(&name).map_err(|e| e.to_string())?;
                        if !codecs.contains(&name) {
                            codecs.push(name);
                        }
                    }
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or_default()
        });

        Ok(Config {
            input_file,
            sample_file: sample_file.unwrap_or_else(|| PathBuf::from("./sample.bin")),
            sample_bytes: sample_bytes.unwrap_or(65536), // 64 KiB
            seed,
            codecs,
            print_config,
            print_metrics,
        })
    }

    /// The file the comparison runs on.
    pub fn source(&self) -> &PathBuf {
        self.input_file.as_ref().unwrap_or(&self.sample_file)
    }

    /// Resolve the selected codec names; none selected means all of them.
    pub fn codecs(&self) -> archiver_core::Result<Vec<Box<dyn Codec>>> {
        if self.codecs.is_empty() {
            return Ok(codec::all());
        }
        self.codecs.iter().map(|name| codec::by_name(name)).collect()
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input_file {
            Some(path) => println!("Input file:  {}", path.display()),
            None => println!(
                "Input file:  (generate sample at {})",
                self.sample_file.display()
            ),
        }
        println!(
            "Sample size: {} bytes ({} KiB)",
            self.sample_bytes,
            self.sample_bytes / 1024
        );
        println!("Seed: {}", self.seed);
        if self.codecs.is_empty() {
            println!("Codecs: all");
        } else {
            println!("Codecs: {}", self.codecs.join(", "));
        }
        println!();
    }
}

fn print_help() {
    println!("archiver: Compare Huffman, RLE and LZ78 compression on one file");
    println!();
    println!("USAGE:");
    println!("    archiver [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>             Input file (default: generate sample)");
    println!("    --sample-out <PATH>     Where to write the sample (default: ./sample.bin)");
    println!("    --sample-bytes <N>      Sample size (default: 65536)");
    println!("    --seed <N>              Random seed for the sample");
    println!();
    println!("    --codec <NAME>          huffman, rle, lz78 or all (repeatable, default: all)");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --no-metrics            Don't print the comparison summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    archiver                                # Compare all codecs on a random sample");
    println!("    archiver --seed 42                      # Deterministic sample");
    println!("    archiver --in notes.txt --codec huffman # Huffman only, on a specific file");
    println!();
}
