//! In-Memory File System Implementation
//!
//! A pure in-memory file system for exercising the commands without
//! touching the disk.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::types::*;

#[derive(Debug, Clone)]
enum FsEntry {
    File { content: Vec<u8> },
    Directory,
}

/// In-memory file system.
#[derive(Debug)]
pub struct InMemoryFs {
    data: RwLock<HashMap<String, FsEntry>>,
}

impl InMemoryFs {
    /// Create a new empty in-memory filesystem.
    pub fn new() -> Self {
        let mut data = HashMap::new();
        data.insert("/".to_string(), FsEntry::Directory);
        Self { data: RwLock::new(data) }
    }

    /// Create with initial files.
    pub fn with_files<P, C>(files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: AsRef<str>,
        C: AsRef<[u8]>,
    {
        let fs = Self::new();
        for (path, content) in files {
            fs.write_file(path.as_ref(), content.as_ref());
        }
        fs
    }

    /// Write (or replace) a file, creating parent directories.
    pub fn write_file(&self, path: &str, content: &[u8]) {
        let normalized = normalize_path(path);
        let mut data = self.write();
        ensure_parent_dirs(&mut data, &normalized);
        data.insert(normalized, FsEntry::File { content: content.to_vec() });
    }

    pub fn mkdir(&self, path: &str) {
        let normalized = normalize_path(path);
        let mut data = self.write();
        ensure_parent_dirs(&mut data, &normalized);
        data.insert(normalized, FsEntry::Directory);
    }

    // A poisoned lock still holds a consistent map: every mutation is a single insert.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, FsEntry>> {
        self.data.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, FsEntry>> {
        self.data.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for InMemoryFs {
    fn open(&self, path: &str) -> Result<LineSource<'_>, FsError> {
        let data = self.read();
        match data.get(&normalize_path(path)) {
            Some(FsEntry::File { content }) => Ok(Box::new(Cursor::new(content.clone()))),
            Some(FsEntry::Directory) => Err(FsError::IsDirectory {
                path: path.to_string(),
                operation: "open".to_string(),
            }),
            None => Err(FsError::NotFound {
                path: path.to_string(),
                operation: "open".to_string(),
            }),
        }
    }
}

/// Normalize a path: make it absolute, drop `.` segments, resolve `..`.
fn normalize_path(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/').filter(|p| !p.is_empty() && *p != ".") {
        if part == ".." {
            resolved.pop();
        } else {
            resolved.push(part);
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

fn ensure_parent_dirs(data: &mut HashMap<String, FsEntry>, path: &str) {
    let mut current = String::new();
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    if let Some((_, parents)) = parts.split_last() {
        for part in parents {
            current = format!("{}/{}", current, part);
            data.entry(current.clone()).or_insert(FsEntry::Directory);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_all(fs: &InMemoryFs, path: &str) -> String {
        let mut buf = String::new();
        fs.open(path).ok().unwrap().read_to_string(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_write_and_open() {
        let fs = InMemoryFs::new();
        fs.write_file("/data/a.txt", b"hello\n");
        assert_eq!(read_all(&fs, "/data/a.txt"), "hello\n");
    }

    #[test]
    fn test_relative_and_dotted_paths() {
        let fs = InMemoryFs::with_files([("a.txt", "x")]);
        assert_eq!(read_all(&fs, "/a.txt"), "x");
        assert_eq!(read_all(&fs, "./sub/../a.txt"), "x");
    }

    #[test]
    fn test_open_missing() {
        let fs = InMemoryFs::new();
        let err = fs.open("/nope.txt").err().unwrap();
        assert!(err.is_not_found());
        assert_eq!(err.path(), "/nope.txt");
    }

    #[test]
    fn test_open_directory() {
        let fs = InMemoryFs::with_files([("/dir/a.txt", "x")]);
        let err = fs.open("/dir").err().unwrap();
        assert!(matches!(err, FsError::IsDirectory { .. }));
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let fs = InMemoryFs::new();
        fs.write_file("/a.txt", b"old");
        fs.write_file("/a.txt", b"new");
        assert_eq!(read_all(&fs, "/a.txt"), "new");
    }
}
