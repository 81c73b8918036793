//! tagpaste - merge tokenised text with tagger output
//!
//! Two filters over a pair of line-aligned files:
//! - `paste`: word from file A, lemma (last field) from file B
//! - `paste2`: word (first field) from file A, tag fields from file B
//!
//! Blank lines in file A are kept as blank output lines.

pub mod cli;
pub mod commands;
pub mod error;
pub mod fs;
pub mod merge;

pub use error::MergeError;
