//! `s3crc` command-line tool.
//!
//! Run with:
//!     s3crc [--hex | --uppercase] [--json] [-j N] <PATTERN>...

use std::io::{self, IsTerminal, Write};
use std::num::NonZeroUsize;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use s3crc::batch::{self, Outcome};
use s3crc::source::{self, STDIN_LABEL};
use s3crc::{ChecksumError, Crc64Engine, Encoding, EngineConfig, OutputConfig, OutputFormat, report};

#[derive(Parser)]
#[command(
    name = "s3crc",
    version,
    about = "Compute CRC64-NVMe checksums compatible with AWS S3.",
    after_help = "Patterns are shell-style globs; use - to read standard input."
)]
struct Cli {
    /// Output checksum as uppercase hex
    #[arg(long)]
    uppercase: bool,

    /// Output results as formatted JSON
    #[arg(long)]
    json: bool,

    /// Output checksum as lowercase hex (takes precedence over --uppercase)
    #[arg(long)]
    hex: bool,

    /// Number of files to checksum concurrently
    #[arg(short, long, default_value = "1")]
    jobs: NonZeroUsize,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = 32 * 1024)]
    buffer_size: usize,

    /// Files or globs to process. Use - for stdin.
    #[arg(required = true)]
    patterns: Vec<String>,
}

impl Cli {
    fn output_config(&self) -> OutputConfig {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        OutputConfig::new(Encoding::from_flags(self.hex, self.uppercase), format)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .with_level(false)
        .init();
}

fn log_failure(err: &ChecksumError) {
    match err {
        ChecksumError::Unavailable { label, source } | ChecksumError::Read { label, source }
            if label == STDIN_LABEL =>
        {
            error!("error reading from stdin: {}", source);
        }
        ChecksumError::Unavailable { label, source } | ChecksumError::Read { label, source } => {
            error!("error on {}: {}", label, source);
        }
        other => error!("{}", other),
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let engine = Crc64Engine::new(EngineConfig::new(cli.buffer_size)?);
    let sources = source::expand_patterns(&cli.patterns);

    let outcomes: Vec<Outcome> = if cli.jobs.get() == 1 {
        batch::checksum_all(&engine, sources)
    } else {
        batch::checksum_all_parallel(&engine, sources, cli.jobs)
    };

    let mut failed = false;
    let mut entries = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                log_failure(&e);
                failed = true;
            }
        }
    }

    let rendered = report::render(&entries, &cli.output_config()).context("json marshal error")?;
    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("failed to write results")?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();
    run(&cli)
}
