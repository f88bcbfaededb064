//! open - show a markdown file in the reading panel

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::path::file_name;

pub struct OpenCommand;

/// `clean-architecture.md` -> `clean architecture`
fn title_from_file_name(name: &str) -> String {
    name.strip_suffix(".md").unwrap_or(name).replace('-', " ")
}

impl Command for OpenCommand {
    fn name(&self) -> &'static str {
        "open"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let Some(file) = ctx.args.first().cloned() else {
            return CommandResult::error("open: missing file operand");
        };

        if !file.ends_with(".md") {
            return CommandResult::error(format!("open: {}: Not a markdown file", file));
        }

        let path = ctx.resolve(&file);
        let content = match ctx.fs.read_file(&path) {
            Ok(content) => content,
            Err(_) => {
                return CommandResult::error(format!("open: {}: No such file or directory", file))
            }
        };

        let name = file_name(&file);
        ctx.ui.open_markdown_panel(&content, &title_from_file_name(name));
        CommandResult::success(format!("Opening {}...", name))
    }
}
