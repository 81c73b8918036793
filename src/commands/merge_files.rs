// src/commands/merge_files.rs
use std::io::{BufWriter, Write};

use crate::error::MergeError;
use crate::fs::FileSystem;
use crate::merge::{LineMerger, RowFormat, Side};

/// Open both files, then stream one row per line pair to `out`.
///
/// Both inputs are opened before anything is written. Returns the number of
/// rows written. Rows produced before a read error stay written.
pub fn merge_files<F: RowFormat>(
    fs: &dyn FileSystem,
    out: &mut dyn Write,
    path_a: &str,
    path_b: &str,
    format: F,
) -> Result<usize, MergeError> {
    let a = fs.open(path_a)?;
    let b = fs.open(path_b)?;

    let mut out = BufWriter::new(out);
    let mut merger = LineMerger::new(a, b, format);
    for row in merger.by_ref() {
        let row = row.map_err(|e| MergeError::Read {
            path: match e.side {
                Side::A => path_a,
                Side::B => path_b,
            }
            .to_string(),
            source: e.source,
        })?;
        writeln!(out, "{}", row).map_err(MergeError::Output)?;
    }
    out.flush().map_err(MergeError::Output)?;

    log::debug!("merged {} line pairs from {} and {}", merger.consumed(), path_a, path_b);
    Ok(merger.consumed())
}
