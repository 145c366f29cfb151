use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use simgram::{CompareConfig, ComparisonReport, DEFAULT_TUPLE_SIZE, compare_files};

/// Screen two documents for textual overlap via synonym-normalized word N-grams.
///
/// Reports the fraction of file 1's word tuples that also occur in file 2.
#[derive(Debug, Parser)]
#[command(name = "simgram", version, about)]
struct Cli {
    /// Synonym table: one group per line, first word is the canonical root.
    synonyms: PathBuf,
    /// Reference document (the score is the fraction of ITS tuples found in file 2).
    file1: PathBuf,
    /// Candidate document.
    file2: PathBuf,
    /// Tuple (N-gram window) size. Values below 2 fall back to the default.
    #[arg(short = 'n', long, default_value_t = DEFAULT_TUPLE_SIZE)]
    tuple_size: usize,
    /// Emit the full comparison report as JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let tuple_size = if cli.tuple_size < 2 {
        warn!(
            requested = cli.tuple_size,
            default = DEFAULT_TUPLE_SIZE,
            "tuple size must be at least 2, falling back to default"
        );
        DEFAULT_TUPLE_SIZE
    } else {
        cli.tuple_size
    };
    let config = CompareConfig { tuple_size };

    let report = match compare_files(&cli.synonyms, &cli.file1, &cli.file2, &config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&report);
    }
    ExitCode::SUCCESS
}

fn print_report(report: &ComparisonReport) {
    println!("Synonyms file input: {}", report.synonyms_path);
    println!("File 1 input: {}", report.reference_path);
    println!("File 2 input: {}", report.candidate_path);
    println!("Tuple size: {}", report.outcome.tuple_size);
    println!();
    println!("Similarity: {:.2}%", report.outcome.similarity * 100.0);
}
