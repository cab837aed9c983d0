//! Combine flow - concatenate collected files into one document
//!
//! Every file gets a block:
//!
//! ```text
//!
//! ============================================================
//! FILE: <path>
//! ============================================================
//!
//! <content>
//!
//! ```
//!
//! A file that cannot be read keeps its header with no body and the run moves
//! on to the next one.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::console::Console;
use crate::core::file_reader::{read_source, DecodePolicy};
use crate::core::model::{AssetError, CombineSummary, FileList};

/// Width of the separator lines around each header
pub const SEPARATOR_WIDTH: usize = 60;

/// Header part of a block
pub fn block_header(path: &str) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    format!("\n{sep}\nFILE: {path}\n{sep}\n\n", sep = separator, path = path)
}

/// Write every file's block to `out`, in list order.
///
/// Only errors writing to `out` are returned; source read failures are
/// reported on the console and counted in the summary.
pub fn write_blocks<W: Write>(
    files: &FileList,
    out: &mut W,
    decode: DecodePolicy,
    console: &Console,
) -> io::Result<CombineSummary> {
    let mut summary = CombineSummary::default();

    for record in files {
        console.adding(&record.display);

        let header = block_header(&record.display);
        out.write_all(header.as_bytes())?;
        summary.bytes_written += header.len() as u64;

        match read_source(&record.path, decode) {
            Ok(text) => {
                out.write_all(text.content.as_bytes())?;
                out.write_all(b"\n\n")?;
                summary.bytes_written += text.content.len() as u64 + 2;
                summary.files_written += 1;
                if text.lossy {
                    summary.files_lossy += 1;
                }
            }
            Err(e) => {
                console.read_failed(&record.display, &e);
                summary.files_failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Write the combined document to `destination`, replacing any previous content
pub fn combine_files(
    files: &FileList,
    destination: &Path,
    decode: DecodePolicy,
    console: &Console,
) -> Result<CombineSummary, AssetError> {
    let file = File::create(destination).map_err(|e| AssetError::output(destination, e))?;
    let mut out = BufWriter::new(file);

    let summary = write_blocks(files, &mut out, decode, console)
        .map_err(|e| AssetError::output(destination, e))?;
    out.flush().map_err(|e| AssetError::output(destination, e))?;

    Ok(summary)
}
