//! assetcat - concatenate a project's source assets into a single file
//!
//! assetcat provides:
//! - Extension-filtered directory scanning with deterministic ordering
//! - Concatenation into one document with a header per file
//! - Best-effort decoding of non-UTF-8 sources

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
