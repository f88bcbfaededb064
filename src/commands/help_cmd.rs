use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

const USAGE: &[(&str, &str)] = &[
    ("cd <path>", "Change directory"),
    ("pwd", "Print working directory"),
    ("ls [path]", "List directory contents"),
    ("touch <file>", "Create a new file"),
    ("mkdir <dir>", "Create a new directory"),
    ("echo <text>", "Output text (use > to redirect to file)"),
    ("cat <file>", "Display file contents"),
    ("grep <pattern> <file>", "Search for pattern in file"),
    ("rm <path>", "Remove file or directory"),
    ("clear", "Clear terminal history"),
    ("open <file>", "Open markdown file in panel"),
    ("whoami", "Display profile information"),
    ("help", "Show this help message"),
];

impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> CommandResult {
        let width = USAGE.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
        let lines: Vec<String> = USAGE
            .iter()
            .map(|(usage, about)| format!("  {:<width$}  {}", usage, about, width = width))
            .collect();
        CommandResult::success(format!("Available commands:\n{}", lines.join("\n")))
    }
}
