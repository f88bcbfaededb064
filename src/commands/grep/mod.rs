// src/commands/grep/mod.rs
use regex_lite::Regex;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct GrepCommand;

/// Matching is always case-insensitive.
fn build_regex(pattern: &str) -> Result<Regex, regex_lite::Error> {
    Regex::new(&format!("(?i){}", pattern))
}

fn matching_lines<'a>(re: &Regex, content: &'a str) -> Vec<&'a str> {
    content.split('\n').filter(|line| re.is_match(line)).collect()
}

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (pattern, file) = match ctx.args.as_slice() {
            [pattern, file, ..] => (pattern.clone(), file.clone()),
            _ => return CommandResult::error("grep: missing pattern or file operand"),
        };

        let path = ctx.resolve(&file);
        let content = match ctx.fs.read_file(&path) {
            Ok(content) => content,
            Err(_) => {
                return CommandResult::error(format!("grep: {}: No such file or directory", file))
            }
        };

        match build_regex(&pattern) {
            Ok(re) => CommandResult::success(matching_lines(&re, &content).join("\n")),
            Err(_) => CommandResult::error(format!("grep: invalid pattern '{}'", pattern)),
        }
    }
}
