//! cd - change the working directory
//!
//! With no argument goes back to `/`. The target must be an existing
//! directory; on failure the working directory is left alone.

use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let Some(arg) = ctx.args.first().cloned() else {
            ctx.fs.set_current_path("/");
            return CommandResult::empty();
        };

        let target = ctx.resolve(&arg);
        match ctx.fs.get_node(&target).map(|node| node.is_directory()) {
            None => CommandResult::error(format!("cd: {}: No such file or directory", arg)),
            Some(false) => CommandResult::error(format!("cd: {}: Not a directory", arg)),
            Some(true) => {
                ctx.fs.set_current_path(&target);
                CommandResult::empty()
            }
        }
    }
}
