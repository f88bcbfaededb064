//! Shell
//!
//! Main entry point for the terminal: ties together the file system, the
//! session state and the command registry. One line in, one result out.

use tracing::debug;

use crate::commands::{create_builtin_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::{FileSystem, VirtualFs};
use crate::session::TerminalSession;

pub struct Shell {
    fs: VirtualFs,
    session: TerminalSession,
    registry: CommandRegistry,
}

impl Shell {
    /// Create a shell over `fs` with every built-in command.
    pub fn new(fs: VirtualFs) -> Self {
        Self {
            fs,
            session: TerminalSession::new(),
            registry: create_builtin_registry(),
        }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFs {
        &mut self.fs
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TerminalSession {
        &mut self.session
    }

    /// Run one command line.
    ///
    /// The line is split on whitespace; the first word, lower-cased, picks
    /// the command. There is no quoting, piping or chaining.
    pub fn handle_command(&mut self, line: &str) -> CommandResult {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return CommandResult::empty();
        };
        let verb = first.to_lowercase();
        let args: Vec<String> = words.map(String::from).collect();

        let Some(cmd) = self.registry.get(&verb) else {
            return CommandResult::error(format!(
                "{}: command not found. Type 'help' for available commands.",
                verb
            ));
        };

        debug!(command = %verb, args = args.len(), "executing");
        let mut ctx = CommandContext {
            args,
            fs: &mut self.fs,
            ui: &mut self.session,
        };
        cmd.execute(&mut ctx)
    }

    /// Run a line typed at the prompt and record it in the history.
    ///
    /// Blank lines are ignored and return `None`.
    pub fn submit(&mut self, line: &str) -> Option<CommandResult> {
        if line.trim().is_empty() {
            return None;
        }
        let result = self.handle_command(line);
        self.session.add_history(line, &result.output, result.is_error);
        Some(result)
    }

    /// `user@terminal:<cwd>$`, with the root shown as `~`.
    pub fn prompt(&self) -> String {
        let cwd = self.fs.current_path();
        let shown = if cwd == "/" { "~" } else { cwd };
        format!("user@terminal:{}$", shown)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(VirtualFs::new())
    }
}
