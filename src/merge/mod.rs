//! Line Merging
//!
//! Reads two line-aligned files in lockstep and turns every line pair into
//! one output row. The row rule is pluggable through [`RowFormat`]:
//! - [`LemmaRow`]: trimmed line A, then the last field of line B
//! - [`TagRow`]: first field of line A, then every field of line B but the first
//!
//! A blank line A always yields an empty row, so sentence breaks survive.

pub mod fields;
pub mod line_merger;
pub mod lines;
pub mod repr;
pub mod rows;

pub use line_merger::{LineMerger, LinePairs, ReadError, Side};
pub use rows::{LemmaRow, RowFormat, TagListStyle, TagRow};

/// Field delimiter of both inputs and of the output.
pub const FIELD_DELIMITER: char = '\t';
