//! File System Module
//!
//! Provides the virtual file system behind the terminal:
//! - types: nodes, errors and the `FileSystem` trait
//! - path: path splitting and command-side resolution
//! - storage: key-value backends used for persistence
//! - virtual_fs: the persistent tree store

pub mod path;
pub mod storage;
pub mod types;
pub mod virtual_fs;

pub use storage::{KeyValueStore, MemoryStore, SledStore, StorageError};
pub use types::*;
pub use virtual_fs::{VirtualFs, DEFAULT_STORAGE_KEY, MAX_DEPTH};
