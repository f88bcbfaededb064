//! blogshell - a small simulated shell over a persistent virtual file system
//!
//! The library holds the file system store, the command interpreter and the
//! session state; rendering is left to the caller (see `main.rs`).

pub mod commands;
pub mod config;
pub mod fs;
pub mod logging;
pub mod seed;
pub mod session;
pub mod shell;

pub use commands::{CommandResult, UiSignals};
pub use fs::{FileSystem, FsError, Node, VirtualFs};
pub use session::{HistoryEntry, TerminalSession};
pub use shell::Shell;
