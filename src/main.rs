use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use design_token_refs_core::{analyze, DEFAULT_FILE_PATH};
use tracing_subscriber::EnvFilter;

/// Lists which token categories reference which other tokens.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Design token JSON file to scan
    #[arg(default_value = DEFAULT_FILE_PATH)]
    file_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let index = analyze(&args.file_path)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{index}").context("failed to write report")?;
    stdout.flush().context("failed to write report")?;
    Ok(())
}

/// Logs go to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
