//! File System Types
//!
//! Core types and the trait the commands open their inputs through.

use std::io::{self, BufRead};
use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("EACCES: permission denied, {operation} '{path}'")]
    PermissionDenied { path: String, operation: String },

    #[error("{operation} '{path}': {source}")]
    Io {
        path: String,
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while performing `operation` on `path`.
    pub fn from_io(err: io::Error, path: &str, operation: &str) -> Self {
        let path = path.to_string();
        let operation = operation.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path, operation },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path, operation },
            _ => FsError::Io { path, operation, source: err },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            FsError::NotFound { path, .. }
            | FsError::IsDirectory { path, .. }
            | FsError::PermissionDenied { path, .. }
            | FsError::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

/// A forward-only reader over one opened file. Dropping it closes the file.
pub type LineSource<'a> = Box<dyn BufRead + 'a>;

/// File system trait
pub trait FileSystem {
    /// Open a file for sequential reading.
    fn open(&self, path: &str) -> Result<LineSource<'_>, FsError>;
}
