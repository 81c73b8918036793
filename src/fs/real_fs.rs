//! Host File System
//!
//! Thin wrapper over `std::fs` with buffered readers.

use std::fs::File;
use std::io::BufReader;

use super::types::*;

/// The real file system of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn open(&self, path: &str) -> Result<LineSource<'_>, FsError> {
        let file = File::open(path).map_err(|e| FsError::from_io(e, path, "open"))?;
        // Opening a directory succeeds on Unix; the first read would fail instead.
        let meta = file.metadata().map_err(|e| FsError::from_io(e, path, "stat"))?;
        if meta.is_dir() {
            return Err(FsError::IsDirectory {
                path: path.to_string(),
                operation: "open".to_string(),
            });
        }
        log::debug!("opened {}", path);
        Ok(Box::new(BufReader::new(file)))
    }
}
