// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::Node;

pub struct LsCommand;

const DIRECTORY_MARKER: &str = "📁";
const FILE_MARKER: &str = "📄";

fn format_entry(node: &Node) -> String {
    let marker = if node.is_directory() { DIRECTORY_MARKER } else { FILE_MARKER };
    format!("{} {}", marker, node.name)
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let arg = ctx.args.first().cloned();
        let target = match &arg {
            Some(path) => ctx.resolve(path),
            None => ctx.fs.current_path().to_string(),
        };

        match ctx.fs.list_directory(&target) {
            Ok(entries) => CommandResult::success(
                entries.into_iter().map(format_entry).collect::<Vec<_>>().join("\n"),
            ),
            Err(_) => CommandResult::error(format!(
                "ls: cannot access '{}': No such file or directory",
                arg.as_deref().unwrap_or(".")
            )),
        }
    }
}
