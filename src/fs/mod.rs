//! File System Module
//!
//! Where the merge commands get their input files from:
//! - RealFs: the host file system (used by the binaries)
//! - InMemoryFs: a map of paths to bytes (unit tests only)

pub mod types;
pub mod real_fs;
#[cfg(test)]
pub mod in_memory_fs;

pub use types::*;
pub use real_fs::RealFs;
#[cfg(test)]
pub use in_memory_fs::InMemoryFs;
