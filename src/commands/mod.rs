// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod echo;
pub mod grep;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod open_cmd;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod touch;
pub mod types;
pub mod whoami_cmd;

pub use registry::{create_builtin_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, UiSignals};
