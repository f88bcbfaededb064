// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let Some(dir) = ctx.args.first().cloned() else {
            return CommandResult::error("mkdir: missing directory operand");
        };

        let path = ctx.resolve(&dir);
        match ctx.fs.create_directory(&path) {
            Ok(()) => CommandResult::empty(),
            Err(_) => CommandResult::error(format!("mkdir: cannot create directory '{}'", dir)),
        }
    }
}
