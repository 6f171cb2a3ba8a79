//! Path resolution.
//!
//! Pure functions turning a raw user-supplied path plus a current working
//! directory into an absolute path. The rules are deliberately simple:
//! `..` and `.` are only special when they are the whole path, never as
//! embedded segments (`a/../b` is passed through untouched). See the
//! crate-level docs for this known limitation.

/// Resolve a raw path against the current working directory.
///
/// - empty or `.` resolves to `cwd`
/// - `..` pops the last segment of `cwd` (never escaping `/`)
/// - a leading `/` means the path is already absolute and is used as-is
/// - anything else is joined onto `cwd`
pub fn resolve(raw: &str, cwd: &str) -> String {
    if raw.is_empty() || raw == "." {
        return cwd.to_string();
    }
    if raw == ".." {
        return parent_path(cwd);
    }
    if raw.starts_with('/') {
        return raw.to_string();
    }
    if cwd == "/" {
        format!("/{}", raw)
    } else {
        format!("{}/{}", cwd, raw)
    }
}

/// Parent of an absolute path; the root is its own parent.
pub fn parent_path(path: &str) -> String {
    let mut parts = segments(path);
    parts.pop();
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Last segment of a path, or `/` for the root.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("/")
}

/// Split a path into non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
