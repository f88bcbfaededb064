//! Persistent Virtual File System
//!
//! A single in-memory tree rooted at `root`, written through to a
//! [`KeyValueStore`] after every mutation. Storage failures are logged and
//! the tree keeps working from memory.

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use super::path::absolute_segments;
use super::storage::{KeyValueStore, MemoryStore};
use super::types::*;

/// Key the whole state is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "terminal-filesystem";

/// Deepest level a node may sit at below the root. Each level nests two
/// JSON objects, and the stored state must stay under serde_json's
/// recursion limit of 128 to read back.
pub const MAX_DEPTH: usize = 48;

/// The file system store.
pub struct VirtualFs {
    state: FileSystemState,
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl VirtualFs {
    /// Fresh default tree backed by a [`MemoryStore`].
    pub fn new() -> Self {
        Self::open(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY)
    }

    /// Revive the state stored under `key`, or start from the default tree.
    pub fn open(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = load_state(store.as_ref(), &key);
        Self { state, store, key }
    }

    pub fn state(&self) -> &FileSystemState {
        &self.state
    }

    /// Give the backing store back, e.g. to reopen it.
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                error!(key = %self.key, error = %e, "failed to serialize file system");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &json) {
            error!(key = %self.key, error = %e, "failed to save file system");
        }
    }

    fn insert_node(
        &mut self,
        path: &str,
        operation: &str,
        make: impl FnOnce(String, DateTime<Utc>) -> Node,
    ) -> Result<(), FsError> {
        let mut parts = absolute_segments(&self.state.current_path, path);
        let name = parts
            .pop()
            .ok_or_else(|| FsError::invalid_argument(path, operation))?;
        if parts.len() >= MAX_DEPTH {
            return Err(FsError::too_deep(path, operation));
        }

        let parent = lookup(&self.state.root, &parts)
            .ok_or_else(|| FsError::not_found(path, operation))?;
        let siblings = parent
            .children()
            .ok_or_else(|| FsError::not_directory(path, operation))?;
        if siblings.contains_key(&name) {
            return Err(FsError::already_exists(path, operation));
        }

        let now = Utc::now();
        if let Some(children) = stamp_path(&mut self.state.root, &parts, now).and_then(Node::children_mut) {
            children.insert(name.clone(), make(name, now));
        }
        debug!(path, operation, "node created");
        self.persist();
        Ok(())
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tree helpers
// ============================================================================

fn load_state(store: &dyn KeyValueStore, key: &str) -> FileSystemState {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str::<FileSystemState>(&raw) {
            Ok(mut state) => {
                if state.current_path.is_empty() {
                    state.current_path = "/".to_string();
                }
                debug!(key, "file system restored");
                state
            }
            Err(e) => {
                warn!(key, error = %e, "failed to parse stored file system, using default");
                FileSystemState::default_tree()
            }
        },
        Ok(None) => FileSystemState::default_tree(),
        Err(e) => {
            warn!(key, error = %e, "failed to load file system, using default");
            FileSystemState::default_tree()
        }
    }
}

fn lookup<'a>(root: &'a Node, parts: &[String]) -> Option<&'a Node> {
    let mut current = root;
    for part in parts {
        current = current.children()?.get(part)?;
    }
    Some(current)
}

/// Walk `parts` from `root`, setting `modified_at` on every node passed,
/// and return the last one. Callers check the path resolves first.
fn stamp_path<'a>(root: &'a mut Node, parts: &[String], now: DateTime<Utc>) -> Option<&'a mut Node> {
    let mut current = root;
    current.modified_at = now;
    for part in parts {
        current = current.children_mut()?.get_mut(part)?;
        current.modified_at = now;
    }
    Some(current)
}

// ============================================================================
// FileSystem trait implementation
// ============================================================================

impl FileSystem for VirtualFs {
    fn current_path(&self) -> &str {
        &self.state.current_path
    }

    fn get_node(&self, path: &str) -> Option<&Node> {
        let parts = absolute_segments(&self.state.current_path, path);
        lookup(&self.state.root, &parts)
    }

    fn set_current_path(&mut self, path: &str) {
        self.state.current_path = path.to_string();
        self.persist();
    }

    fn create_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        self.insert_node(path, "touch", |name, now| Node::file(name, content, now))
    }

    fn create_directory(&mut self, path: &str) -> Result<(), FsError> {
        self.insert_node(path, "mkdir", |name, now| Node::directory(name, now))
    }

    fn delete_node(&mut self, path: &str) -> Result<(), FsError> {
        let mut parts = absolute_segments(&self.state.current_path, path);
        let name = parts
            .pop()
            .ok_or_else(|| FsError::invalid_argument(path, "rm"))?;
        if parts.is_empty() && name == PROTECTED_DIR {
            return Err(FsError::protected(path, "rm"));
        }

        let exists = lookup(&self.state.root, &parts)
            .and_then(Node::children)
            .map_or(false, |children| children.contains_key(&name));
        if !exists {
            return Err(FsError::not_found(path, "rm"));
        }

        let now = Utc::now();
        if let Some(children) = stamp_path(&mut self.state.root, &parts, now).and_then(Node::children_mut) {
            children.shift_remove(&name);
        }
        debug!(path, "node removed");
        self.persist();
        Ok(())
    }

    fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let parts = absolute_segments(&self.state.current_path, path);
        if parts.is_empty() {
            return Err(FsError::invalid_argument(path, "write"));
        }
        match lookup(&self.state.root, &parts) {
            None => return Err(FsError::not_found(path, "write")),
            Some(node) if !node.is_file() => return Err(FsError::is_directory(path, "write")),
            Some(_) => {}
        }

        let now = Utc::now();
        if let Some(NodeKind::File { content: current }) =
            stamp_path(&mut self.state.root, &parts, now).map(|node| &mut node.kind)
        {
            *current = content.to_string();
        }
        debug!(path, bytes = content.len(), "file written");
        self.persist();
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String, FsError> {
        match self.get_node(path) {
            Some(node) => node
                .content()
                .map(String::from)
                .ok_or_else(|| FsError::is_directory(path, "read")),
            None => Err(FsError::not_found(path, "open")),
        }
    }

    fn list_directory(&self, path: &str) -> Result<Vec<&Node>, FsError> {
        let node = self
            .get_node(path)
            .ok_or_else(|| FsError::not_found(path, "scandir"))?;
        let children = node
            .children()
            .ok_or_else(|| FsError::not_directory(path, "scandir"))?;

        let mut entries: Vec<&Node> = children.values().collect();
        entries.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(entries)
    }

    fn reset(&mut self) {
        self.state = FileSystemState::default_tree();
        debug!("file system reset");
        self.persist();
    }
}

// ============================================================================
// Tests
// ============================================================================
