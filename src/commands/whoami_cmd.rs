use crate::commands::{Command, CommandContext, CommandResult};

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        // The profile is rendered by the front end, not printed here.
        ctx.ui.open_profile_modal();
        CommandResult::empty()
    }
}
