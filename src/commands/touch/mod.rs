// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let Some(file) = ctx.args.first().cloned() else {
            return CommandResult::error("touch: missing file operand");
        };

        let path = ctx.resolve(&file);
        match ctx.fs.create_file(&path, "") {
            Ok(()) => CommandResult::empty(),
            Err(_) => CommandResult::error(format!("touch: cannot create file '{}'", file)),
        }
    }
}
