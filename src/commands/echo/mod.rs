// src/commands/echo/mod.rs
use lazy_static::lazy_static;
use regex_lite::Regex;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

lazy_static! {
    /// `<content> > <file>`, split at the first `>`.
    static ref REDIRECT: Regex = Regex::new(r"^(.+?)\s*>\s*(.+)$").unwrap();
}

/// Split `text` into `(content, file)` when it ends in a redirection.
fn parse_redirect(text: &str) -> Option<(String, String)> {
    let caps = REDIRECT.captures(text)?;
    Some((caps[1].trim().to_string(), caps[2].trim().to_string()))
}

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let text = ctx.args.join(" ");

        let Some((content, file)) = parse_redirect(&text) else {
            return CommandResult::success(text);
        };

        let path = ctx.resolve(&file);
        if ctx.fs.get_node(&path).is_some() {
            if ctx.fs.write_file(&path, &content).is_err() {
                return CommandResult::error(format!("echo: cannot write to '{}'", file));
            }
        } else if ctx.fs.create_file(&path, &content).is_err() {
            return CommandResult::error(format!("echo: cannot create file '{}'", file));
        }

        CommandResult::empty()
    }
}
