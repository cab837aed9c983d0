//! CLI module - Command-line interface definitions and the run entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::backends::scan::collect_files;
use crate::core::config::{CombineConfig, Overrides};
use crate::core::console::Console;
use crate::core::file_reader::DecodePolicy;
use crate::core::model::CombineSummary;
use crate::flows::combine::combine_files;

/// assetcat - concatenate a project's source assets into a single file.
#[derive(Parser, Debug)]
#[command(name = "assetcat")]
#[command(
    author,
    version,
    about,
    long_about = r#"assetcat scans a directory for files matching a set of extensions and
writes their contents, in sorted path order, into one output file. Each file
is preceded by a header naming its path:

    ============================================================
    FILE: ./src/App.tsx
    ============================================================

With no arguments it scans the current directory recursively for
.tsx, .css and .ts files and writes combined_assets.txt.

Examples:
    assetcat
    assetcat --root web --output snapshot.txt
    assetcat --ext js,jsx --no-recursive
    assetcat --config assetcat.json --stats
"#
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(
        long,
        value_name = "DIR",
        long_help = "Directory to scan (defaults to ./).\n\n\
Header paths are printed with this prefix exactly as given."
    )]
    pub root: Option<PathBuf>,

    /// Output file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        long_help = "File to write the combined document to (defaults to combined_assets.txt).\n\n\
Any existing content is replaced. The file is left untouched when no files match."
    )]
    pub output: Option<PathBuf>,

    /// Only scan the top level of ROOT.
    #[arg(
        long,
        long_help = "Only consider files directly inside ROOT; subdirectories are not visited."
    )]
    pub no_recursive: bool,

    /// Extensions to include (comma-separated).
    #[arg(
        short,
        long = "ext",
        value_name = "EXTS",
        value_delimiter = ',',
        long_help = "Comma-separated list of file-name suffixes to include, matched\n\
case-insensitively. A leading '.' is added when missing.\n\n\
Default: .tsx,.css,.ts\n\n\
Example: --ext js,jsx,.scss"
    )]
    pub extensions: Vec<String>,

    /// How to decode invalid UTF-8 (ignore/replace).
    #[arg(
        long,
        value_parser = ["ignore", "replace"],
        value_name = "POLICY",
        long_help = "What to do with byte sequences that are not valid UTF-8.\n\n\
Supported values:\n\
- ignore (default): drop them\n\
- replace: substitute U+FFFD"
    )]
    pub decode: Option<String>,

    /// Load settings from a JSON config file.
    #[arg(
        long,
        value_name = "FILE",
        long_help = "Read settings from a JSON file. Recognized keys: root, output,\n\
recursive, extensions, decode. Command-line flags take precedence.\n\n\
Example:\n\
  {\"root\": \"web\", \"extensions\": [\".ts\", \".tsx\"], \"decode\": \"replace\"}"
    )]
    pub config: Option<PathBuf>,

    /// Quiet mode (no progress lines).
    #[arg(
        short,
        long,
        long_help = "Suppress progress output. Per-file read failures are still printed,\n\
and fatal errors are still reported on stderr."
    )]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Print a summary of the run on stderr.
    #[arg(
        long,
        long_help = "Print run statistics (files written, failed, bytes) to stderr."
    )]
    pub stats: bool,
}

impl Cli {
    fn overrides(&self) -> Result<Overrides> {
        let decode = self
            .decode
            .as_deref()
            .map(str::parse::<DecodePolicy>)
            .transpose()
            .map_err(anyhow::Error::msg)?;

        Ok(Overrides {
            root: self.root.clone(),
            output: self.output.clone(),
            no_recursive: self.no_recursive,
            extensions: self.extensions.clone(),
            decode,
        })
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        Console::disable_color();
    }
    let console = Console::new(cli.quiet);

    let config = CombineConfig::resolve(cli.config.as_deref(), cli.overrides()?)
        .context("Failed to load configuration")?;

    let summary = run_combine(&config, &console)?;

    if cli.stats {
        print_stats(&summary);
    }

    Ok(())
}

/// Collect and combine according to `config`.
///
/// Returns an empty summary without touching the destination when nothing
/// matches.
pub fn run_combine(config: &CombineConfig, console: &Console) -> Result<CombineSummary> {
    console.info(&format!(
        "Scanning for {} files in {}...",
        config.extensions,
        config.root.display()
    ));

    let files = collect_files(&config.root, &config.extensions, config.recursive)
        .context("Failed to collect files")?;

    console.info(&format!("Found {} files", files.len()));

    if files.is_empty() {
        console.notice("No files found.");
        return Ok(CombineSummary::default());
    }

    let summary = combine_files(&files, &config.output, config.decode, console)
        .context("Failed to write combined file")?;

    console.done(&format!(
        "Done. Combined file saved as: {}",
        config.output.display()
    ));

    Ok(summary)
}

fn print_stats(summary: &CombineSummary) {
    eprintln!("Run Statistics:");
    eprintln!("   Files: {}", summary.total());
    eprintln!("   Written: {}", summary.files_written);
    if summary.files_failed > 0 {
        eprintln!("   Failed: {}", summary.files_failed);
    }
    if summary.files_lossy > 0 {
        eprintln!("   Lossy decodes: {}", summary.files_lossy);
    }
    eprintln!("   Bytes: {}", summary.bytes_written);
}
