use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        ctx.ui.clear_history();
        CommandResult::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{run, RecordingUi};
    use crate::fs::VirtualFs;

    #[test]
    fn test_clear_signals_history_reset() {
        let mut fs = VirtualFs::new();
        let mut ui = RecordingUi::default();
        let result = run(&ClearCommand, &mut fs, &mut ui, &[]);
        assert_eq!(result, CommandResult::empty());
        assert_eq!(ui.cleared, 1);
    }
}
