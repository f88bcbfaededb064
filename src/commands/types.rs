// src/commands/types.rs
use crate::fs::path::resolve_path;
use crate::fs::FileSystem;

/// Result of one command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub output: String,
    pub is_error: bool,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self { output: output.into(), is_error: false }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn error(output: impl Into<String>) -> Self {
        Self { output: output.into(), is_error: true }
    }
}

/// Requests from commands to whatever renders the terminal.
pub trait UiSignals {
    fn clear_history(&mut self);
    fn open_markdown_panel(&mut self, content: &str, title: &str);
    fn open_profile_modal(&mut self);
}

/// Command execution context
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub fs: &'a mut dyn FileSystem,
    pub ui: &'a mut dyn UiSignals,
}

impl CommandContext<'_> {
    /// Resolve a path argument against the working directory.
    pub fn resolve(&self, arg: &str) -> String {
        resolve_path(self.fs.current_path(), arg)
    }
}

/// Command trait
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::fs::VirtualFs;

    /// Records the signals commands send.
    #[derive(Debug, Default)]
    pub struct RecordingUi {
        pub cleared: usize,
        pub panels: Vec<(String, String)>,
        pub profile_opened: usize,
    }

    impl UiSignals for RecordingUi {
        fn clear_history(&mut self) {
            self.cleared += 1;
        }

        fn open_markdown_panel(&mut self, content: &str, title: &str) {
            self.panels.push((content.to_string(), title.to_string()));
        }

        fn open_profile_modal(&mut self) {
            self.profile_opened += 1;
        }
    }

    /// Run `cmd` with `args` against `fs`.
    pub fn run(
        cmd: &dyn Command,
        fs: &mut VirtualFs,
        ui: &mut RecordingUi,
        args: &[&str],
    ) -> CommandResult {
        let mut ctx = CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            fs,
            ui,
        };
        cmd.execute(&mut ctx)
    }
}
