//! Seed content for the `blog` directory.

use tracing::{debug, info};

use crate::fs::{FileSystem, PROTECTED_DIR};

/// A post to place under `/blog` if it is not there yet.
#[derive(Debug, Clone, Copy)]
pub struct SeedPost<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

/// Posts bundled into the binary.
pub const DEFAULT_POSTS: &[SeedPost<'static>] = &[
    SeedPost {
        name: "welcome.md",
        content: include_str!("../content/blog/welcome.md"),
    },
    SeedPost {
        name: "clean-architecture.md",
        content: include_str!("../content/blog/clean-architecture.md"),
    },
    SeedPost {
        name: "typescript-tips.md",
        content: include_str!("../content/blog/typescript-tips.md"),
    },
];

/// Profile text shown by `whoami`.
pub const PROFILE: &str = include_str!("../content/profile.md");

/// Create every missing post under `/blog`. Existing files are left as they
/// are. Returns how many posts were created.
pub fn seed_blog_posts(fs: &mut dyn FileSystem, posts: &[SeedPost<'_>]) -> usize {
    let blog = format!("/{}", PROTECTED_DIR);
    if !fs.get_node(&blog).map_or(false, |node| node.is_directory()) {
        debug!("no blog directory, skipping seed");
        return 0;
    }

    let mut created = 0;
    for post in posts {
        let path = format!("{}/{}", blog, post.name);
        if fs.get_node(&path).is_some() {
            continue;
        }
        if fs.create_file(&path, post.content).is_ok() {
            created += 1;
        }
    }
    if created > 0 {
        info!(created, "seeded blog posts");
    }
    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFs;

    const POSTS: &[SeedPost<'static>] = &[
        SeedPost { name: "welcome.md", content: "# Welcome" },
        SeedPost { name: "clean-architecture.md", content: "# Layers" },
    ];

    #[test]
    fn test_seed_creates_missing_posts() {
        let mut fs = VirtualFs::new();
        assert_eq!(seed_blog_posts(&mut fs, POSTS), 2);
        assert_eq!(fs.read_file("/blog/welcome.md").unwrap(), "# Welcome");
        assert_eq!(fs.read_file("/blog/clean-architecture.md").unwrap(), "# Layers");
    }

    #[test]
    fn test_seed_is_idempotent_and_keeps_edits() {
        let mut fs = VirtualFs::new();
        seed_blog_posts(&mut fs, POSTS);
        fs.write_file("/blog/welcome.md", "edited").unwrap();
        fs.delete_node("/blog/clean-architecture.md").unwrap();

        assert_eq!(seed_blog_posts(&mut fs, POSTS), 1);
        assert_eq!(fs.read_file("/blog/welcome.md").unwrap(), "edited");
        assert_eq!(fs.read_file("/blog/clean-architecture.md").unwrap(), "# Layers");
    }

    #[test]
    fn test_seed_ignores_cwd() {
        let mut fs = VirtualFs::new();
        fs.set_current_path("/elsewhere");
        assert_eq!(seed_blog_posts(&mut fs, POSTS), 2);
        assert!(fs.get_node("/blog/welcome.md").is_some());
    }

    #[test]
    fn test_bundled_posts() {
        let mut fs = VirtualFs::new();
        assert_eq!(seed_blog_posts(&mut fs, DEFAULT_POSTS), DEFAULT_POSTS.len());
        assert_eq!(DEFAULT_POSTS.len(), 3);
        assert!(fs.read_file("/blog/welcome.md").unwrap().starts_with("# Welcome"));
        assert!(fs
            .read_file("/blog/clean-architecture.md")
            .unwrap()
            .starts_with("# Clean Architecture"));
        assert!(fs.read_file("/blog/typescript-tips.md").unwrap().starts_with("# TypeScript"));
        assert!(PROFILE.starts_with("# whoami"));
    }
}
