//! File System Types
//!
//! Core types and traits for the virtual file system.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the directory under root that can never be removed.
pub const PROTECTED_DIR: &str = "blog";

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EEXIST: file already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },

    #[error("EPERM: operation not permitted on protected path, {operation} '{path}'")]
    Protected { path: String, operation: String },

    #[error("EINVAL: invalid argument, {operation} '{path}'")]
    InvalidArgument { path: String, operation: String },

    #[error("ENAMETOOLONG: path nested too deeply, {operation} '{path}'")]
    TooDeep { path: String, operation: String },
}

impl FsError {
    pub(crate) fn not_found(path: &str, operation: &str) -> Self {
        FsError::NotFound { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn already_exists(path: &str, operation: &str) -> Self {
        FsError::AlreadyExists { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn is_directory(path: &str, operation: &str) -> Self {
        FsError::IsDirectory { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn not_directory(path: &str, operation: &str) -> Self {
        FsError::NotDirectory { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn protected(path: &str, operation: &str) -> Self {
        FsError::Protected { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn invalid_argument(path: &str, operation: &str) -> Self {
        FsError::InvalidArgument { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn too_deep(path: &str, operation: &str) -> Self {
        FsError::TooDeep { path: path.to_string(), operation: operation.to_string() }
    }
}

/// Payload of a node: file content or directory children.
///
/// Serialized with a `type` tag of `"file"` or `"directory"`, so a node
/// reads back as `{"name", "type", "content" | "children", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File {
        #[serde(default)]
        content: String,
    },
    Directory {
        #[serde(default)]
        children: IndexMap<String, Node>,
    },
}

/// A file system entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Node {
    /// Create a file node stamped with `now`.
    pub fn file(name: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::File { content: content.into() },
            created_at: now,
            modified_at: now,
        }
    }

    /// Create an empty directory node stamped with `now`.
    pub fn directory(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Node {
            name: name.into(),
            kind: NodeKind::Directory { children: IndexMap::new() },
            created_at: now,
            modified_at: now,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Directory children, `None` for files.
    pub fn children(&self) -> Option<&IndexMap<String, Node>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut IndexMap<String, Node>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }
}

/// Whole persisted state: the tree and the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemState {
    pub root: Node,
    #[serde(default)]
    pub current_path: String,
}

impl FileSystemState {
    /// Root directory holding an empty `blog` directory, cwd at `/`.
    pub fn default_tree() -> Self {
        let now = Utc::now();
        let mut root = Node::directory("root", now);
        if let Some(children) = root.children_mut() {
            children.insert(PROTECTED_DIR.to_string(), Node::directory(PROTECTED_DIR, now));
        }
        FileSystemState { root, current_path: "/".to_string() }
    }
}

impl Default for FileSystemState {
    fn default() -> Self {
        Self::default_tree()
    }
}

/// Abstract filesystem interface used by the command layer.
///
/// Relative paths are resolved against [`FileSystem::current_path`] by
/// plain concatenation; `.` and `..` are not interpreted at this level.
pub trait FileSystem {
    /// Current working directory, always absolute.
    fn current_path(&self) -> &str;

    /// Look up a node. An empty path or `/` yields the root.
    fn get_node(&self, path: &str) -> Option<&Node>;

    /// Replace the working directory verbatim (no existence check).
    fn set_current_path(&mut self, path: &str);

    /// Create a file under an existing directory.
    fn create_file(&mut self, path: &str, content: &str) -> Result<(), FsError>;

    /// Create an empty directory under an existing directory.
    fn create_directory(&mut self, path: &str) -> Result<(), FsError>;

    /// Remove a file or a whole directory subtree.
    fn delete_node(&mut self, path: &str) -> Result<(), FsError>;

    /// Replace the content of an existing file.
    fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError>;

    /// Read the content of a file.
    fn read_file(&self, path: &str) -> Result<String, FsError>;

    /// Directory entries, directories first, then by name.
    fn list_directory(&self, path: &str) -> Result<Vec<&Node>, FsError>;

    /// Drop everything and go back to the default tree.
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tree_has_blog() {
        let state = FileSystemState::default_tree();
        assert_eq!(state.root.name, "root");
        assert_eq!(state.current_path, "/");
        let blog = state.root.children().unwrap().get("blog").unwrap();
        assert!(blog.is_directory());
        assert!(blog.children().unwrap().is_empty());
    }

    #[test]
    fn test_node_serialized_shape() {
        let now = Utc::now();
        let file = Node::file("a.txt", "hi", now);
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["type"], "file");
        assert_eq!(value["content"], "hi");
        assert!(value["createdAt"].is_string());
        assert!(value.get("children").is_none());

        let dir = Node::directory("d", now);
        let value = serde_json::to_value(&dir).unwrap();
        assert_eq!(value["type"], "directory");
        assert!(value["children"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_missing_payload_fields_default() {
        let raw = r#"{
            "root": {
                "name": "root", "type": "directory",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "modifiedAt": "2024-01-01T00:00:00.000Z"
            }
        }"#;
        let state: FileSystemState = serde_json::from_str(raw).unwrap();
        assert!(state.root.children().unwrap().is_empty());
        assert_eq!(state.current_path, "");

        let raw = r#"{"name": "f", "type": "file",
            "createdAt": "2024-01-01T00:00:00Z", "modifiedAt": "2024-01-01T00:00:00Z"}"#;
        let node: Node = serde_json::from_str(raw).unwrap();
        assert_eq!(node.content(), Some(""));
    }

    #[test]
    fn test_fs_error_display() {
        let err = FsError::not_found("/x", "open");
        assert_eq!(err.to_string(), "ENOENT: no such file or directory, open '/x'");
    }
}
