// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let Some(file) = ctx.args.first().cloned() else {
            return CommandResult::error("cat: missing file operand");
        };

        let path = ctx.resolve(&file);
        match ctx.fs.read_file(&path) {
            Ok(content) => CommandResult::success(content),
            Err(_) => CommandResult::error(format!("cat: {}: No such file or directory", file)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{run, RecordingUi};
    use crate::fs::{FileSystem, VirtualFs};

    fn cat(fs: &mut VirtualFs, args: &[&str]) -> CommandResult {
        run(&CatCommand, fs, &mut RecordingUi::default(), args)
    }

    #[test]
    fn test_cat_file() {
        let mut fs = VirtualFs::new();
        fs.create_file("/blog/post.md", "# Title\nbody").unwrap();
        assert_eq!(cat(&mut fs, &["/blog/post.md"]).output, "# Title\nbody");
        fs.set_current_path("/blog");
        assert_eq!(cat(&mut fs, &["post.md"]).output, "# Title\nbody");
    }

    #[test]
    fn test_cat_empty_file() {
        let mut fs = VirtualFs::new();
        fs.create_file("/e.txt", "").unwrap();
        assert_eq!(cat(&mut fs, &["e.txt"]), CommandResult::empty());
    }

    #[test]
    fn test_cat_file_not_found() {
        let mut fs = VirtualFs::new();
        let result = cat(&mut fs, &["nonexistent.txt"]);
        assert_eq!(
            result,
            CommandResult::error("cat: nonexistent.txt: No such file or directory")
        );
    }

    #[test]
    fn test_cat_directory() {
        let mut fs = VirtualFs::new();
        assert!(cat(&mut fs, &["blog"]).is_error);
    }

    #[test]
    fn test_cat_missing_operand() {
        let mut fs = VirtualFs::new();
        assert_eq!(cat(&mut fs, &[]), CommandResult::error("cat: missing file operand"));
    }
}
