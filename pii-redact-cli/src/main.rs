//! Redacts PII from a CSV file whose rows carry a JSON payload.
//!
//! Usage: `pii-redact <INPUT> [--output <PATH>]`. Writes one output row per
//! input row with the masked payload and a `True`/`False` PII flag.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pii_redact::{redact_csv, BatchOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Path that selects stdin/stdout instead of a file.
const STDIO: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "pii-redact", version)]
#[command(about = "Detect and mask PII in CSV rows with JSON payloads")]
struct Cli {
    /// Input CSV file, or `-` for standard input
    input: PathBuf,

    /// Output CSV file, or `-` for standard output
    #[arg(
        short,
        long,
        env = "PII_REDACT_OUTPUT",
        default_value = "redacted_output.csv"
    )]
    output: PathBuf,

    /// Column holding the record id
    #[arg(long, env = "PII_REDACT_ID_COLUMN", default_value = "record_id")]
    id_column: String,

    /// Column holding the JSON payload
    #[arg(long, env = "PII_REDACT_PAYLOAD_COLUMN", default_value = "data_json")]
    payload_column: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            id_column: self.id_column.clone(),
            payload_column: self.payload_column.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input = open_input(&cli.input)?;
    let output = open_output(&cli.output)?;

    let summary = redact_csv(input, output, &cli.batch_options()).with_context(|| {
        format!(
            "failed to redact {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    tracing::info!(
        rows = summary.rows,
        pii_rows = summary.pii_rows,
        failed_rows = summary.failed_rows,
        output = %cli.output.display(),
        "wrote redacted output"
    );
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` flags raise the level from `warn`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file =
        File::open(path).with_context(|| format!("failed to open input {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create output {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}
