// src/commands/rm/mod.rs
use tracing::debug;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let Some(target) = ctx.args.first().cloned() else {
            return CommandResult::error("rm: missing file operand");
        };

        let path = ctx.resolve(&target);
        match ctx.fs.delete_node(&path) {
            Ok(()) => CommandResult::empty(),
            Err(e) => {
                debug!(error = %e, "rm refused");
                CommandResult::error(format!("rm: cannot remove '{}'", target))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{run, RecordingUi};
    use crate::fs::{FileSystem, VirtualFs};

    fn rm(fs: &mut VirtualFs, args: &[&str]) -> CommandResult {
        run(&RmCommand, fs, &mut RecordingUi::default(), args)
    }

    #[test]
    fn test_rm_file() {
        let mut fs = VirtualFs::new();
        fs.create_file("/a.txt", "").unwrap();
        assert_eq!(rm(&mut fs, &["a.txt"]), CommandResult::empty());
        assert!(fs.get_node("/a.txt").is_none());
    }

    #[test]
    fn test_rm_directory_recursively() {
        let mut fs = VirtualFs::new();
        fs.create_directory("/blog/old").unwrap();
        fs.create_file("/blog/old/x.md", "").unwrap();
        fs.set_current_path("/blog");
        assert_eq!(rm(&mut fs, &["old"]), CommandResult::empty());
        assert!(fs.get_node("/blog/old").is_none());
    }

    #[test]
    fn test_rm_blog_refused() {
        let mut fs = VirtualFs::new();
        assert_eq!(rm(&mut fs, &["blog"]), CommandResult::error("rm: cannot remove 'blog'"));
        assert_eq!(rm(&mut fs, &["/blog"]), CommandResult::error("rm: cannot remove '/blog'"));
        fs.set_current_path("/blog");
        assert_eq!(rm(&mut fs, &["."]), CommandResult::error("rm: cannot remove '.'"));
        assert!(fs.get_node("/blog").is_some());
    }

    #[test]
    fn test_rm_missing() {
        let mut fs = VirtualFs::new();
        assert_eq!(rm(&mut fs, &["ghost"]), CommandResult::error("rm: cannot remove 'ghost'"));
    }

    #[test]
    fn test_rm_missing_operand() {
        let mut fs = VirtualFs::new();
        assert_eq!(rm(&mut fs, &[]), CommandResult::error("rm: missing file operand"));
    }
}
