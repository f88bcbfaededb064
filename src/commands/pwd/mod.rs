// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        CommandResult::success(ctx.fs.current_path())
    }
}
