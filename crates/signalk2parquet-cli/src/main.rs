// signalk2parquet - partition SignalK telemetry streams into Parquet files
//
// Two subcommands: `process` runs the ingestion pipeline over stdin or a
// file, `generate` emits synthetic well-formed input for tests and demos.
// Logs go to stderr via tracing; the pipeline's status lines go to stdout.

mod generate;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use signalk2parquet_writer::{process, WriterConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signalk2parquet", version, about = "Partition SignalK telemetry into Parquet files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read newline-delimited JSON records and write partitioned Parquet files
    Process {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output root directory (overrides OUTPUT_DIR; default "output")
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Emit synthetic telemetry records to stdout, one JSON object per line
    Generate {
        /// Number of records to generate
        #[arg(short, long, default_value_t = 100)]
        count: usize,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_process(input: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<()> {
    let config = match output_dir {
        Some(root) => WriterConfig::new(root),
        None => WriterConfig::from_env(),
    };

    tracing::info!(output_root = %config.output_root.display(), "starting pipeline");

    let stdout = io::stdout();
    let mut status = stdout.lock();

    match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            process(BufReader::new(file), &mut status, config)
        }
        None => {
            let stdin = io::stdin();
            process(stdin.lock(), &mut status, config)
        }
    }
    .context("pipeline run failed")
}

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse().command {
        Command::Process { input, output_dir } => run_process(input, output_dir),
        Command::Generate { count } => {
            let stdout = io::stdout();
            generate::generate(&mut stdout.lock(), count)
                .context("failed to generate sample records")
        }
    }
}
