//! archiver: compress one file with every codec and compare the results.

mod config;
mod input_gen;

use archiver_core::compare;
use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Run the comparison; `Ok(false)` when any codec failed or restored
/// different bytes.
fn run(config: &Config) -> archiver_core::Result<bool> {
    if config.print_config {
        config.print();
    }

    if config.input_file.is_none() {
        input_gen::write_sample_file(&config.sample_file, config.seed, config.sample_bytes)?;
        println!(
            "Generated {} sample bytes at {} (seed {})",
            config.sample_bytes,
            config.sample_file.display(),
            config.seed
        );
    }

    let codecs = config.codecs()?;
    let comparison = compare(config.source(), &codecs)?;

    if config.print_metrics {
        comparison.print_summary();
    }
    comparison.print_result();

    for (codec, err) in comparison.failures() {
        eprintln!("error: {} failed: {}", codec, err);
    }

    Ok(comparison.all_verified())
}
