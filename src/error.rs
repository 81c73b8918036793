//! Merge Errors
//!
//! Every failure ends the command; nothing is retried or skipped.

use std::io;
use thiserror::Error;

use crate::fs::FsError;

#[derive(Error, Debug)]
pub enum MergeError {
    /// Bad command line, already rendered by clap (usage included).
    #[error("{0}")]
    Argument(String),

    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{0}")]
    Open(FsError),

    #[error("{path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("write error: {0}")]
    Output(#[source] io::Error),
}

impl MergeError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            MergeError::Argument(_) => 2,
            _ => 1,
        }
    }

    /// The text printed on stderr by the command called `name`.
    pub fn diagnostic(&self, name: &str) -> String {
        match self {
            MergeError::Argument(rendered) => rendered.clone(),
            other => format!("{}: {}\n", name, other),
        }
    }
}

impl From<FsError> for MergeError {
    fn from(err: FsError) -> Self {
        if err.is_not_found() {
            MergeError::NotFound { path: err.path().to_string() }
        } else {
            MergeError::Open(err)
        }
    }
}
