//! Path helpers
//!
//! Two layers of path handling live here:
//! - [`absolute_segments`] is what the store does: prefix relative paths
//!   with the working directory and split on `/`.
//! - [`resolve_path`] is what commands do before calling the store: it
//!   understands `.`, `..` and leading `../` chains.

/// Split a path on `/`, dropping empty segments.
pub fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Segments of `path` from the root, treating non-`/` paths as relative to `cwd`.
pub fn absolute_segments(cwd: &str, path: &str) -> Vec<String> {
    if path.starts_with('/') {
        split_segments(path)
    } else {
        split_segments(&format!("{}/{}", cwd, path))
    }
}

/// Join segments into an absolute path (`/` for none).
pub fn join_segments(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Resolve a command argument against the working directory.
pub fn resolve_path(cwd: &str, target: &str) -> String {
    if target.starts_with('/') {
        return target.to_string();
    }

    if target == "." {
        return cwd.to_string();
    }

    if target == ".." {
        let mut parts = split_segments(cwd);
        parts.pop();
        return join_segments(&parts);
    }

    if target.starts_with("../") {
        let mut parts = split_segments(cwd);
        for part in target.split('/').filter(|p| !p.is_empty() && *p != ".") {
            if part == ".." {
                parts.pop();
            } else {
                parts.push(part.to_string());
            }
        }
        return join_segments(&parts);
    }

    if cwd == "/" {
        format!("/{}", target)
    } else {
        format!("{}/{}", cwd, target)
    }
}

/// Last segment of a path, or the path itself when it has none.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').find(|p| !p.is_empty()).unwrap_or(path)
}
