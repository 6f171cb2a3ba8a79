//! Persistent In-Memory File System
//!
//! A purely functional tree: `read` and `list` borrow the receiver,
//! `mkdir` returns a brand-new [`VirtualFs`]. The new tree only rebuilds
//! the spine from the root down to the mutated directory; every sibling
//! subtree is the same `Arc` allocation as in the prior version.

use std::sync::Arc;

use indexmap::IndexMap;

use super::path;
use super::types::{DirEntry, FsError, LayoutEntry, Node};

/// Immutable in-memory virtual file system.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    root: Arc<Node>,
}

impl VirtualFs {
    /// Create a filesystem containing only the root directory.
    pub fn new() -> Self {
        Self {
            root: Arc::new(Node::empty_dir()),
        }
    }

    /// Create a filesystem from an ordered layout of files and directories.
    ///
    /// Missing parent directories are created implicitly. Entry order is
    /// preserved, so the order of this slice is the order `list` reports.
    pub fn with_layout<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, LayoutEntry)>,
    {
        let mut fs = Self::new();
        for (p, entry) in entries {
            let node = match entry {
                LayoutEntry::File(content) => Node::file(content),
                LayoutEntry::Directory => Node::empty_dir(),
            };
            fs = fs.put(p, node);
        }
        fs
    }

    /// Read the contents of a file.
    ///
    /// Directories are not readable; both a missing path and a directory
    /// yield `NotFound`.
    pub fn read(&self, p: &str) -> Result<String, FsError> {
        match self.node_at(p) {
            Some(Node::File { content }) => Ok(content.clone()),
            _ => Err(FsError::NotFound {
                path: p.to_string(),
                operation: "open".to_string(),
            }),
        }
    }

    /// List a directory's entries in stored insertion order.
    pub fn list(&self, p: &str) -> Result<Vec<DirEntry>, FsError> {
        match self.node_at(p) {
            Some(Node::Directory { children }) => Ok(children
                .iter()
                .map(|(name, node)| DirEntry {
                    name: name.clone(),
                    kind: node.kind(),
                })
                .collect()),
            _ => Err(FsError::NotFound {
                path: p.to_string(),
                operation: "scandir".to_string(),
            }),
        }
    }

    /// Create a directory, returning the new filesystem.
    ///
    /// The parent must already exist as a directory (no `-p`). Fails with
    /// `AlreadyExists` when any node, file or directory, occupies the
    /// full path.
    pub fn mkdir(&self, p: &str) -> Result<VirtualFs, FsError> {
        let segs = path::segments(p);
        if segs.is_empty() {
            // mkdir of the root itself
            return Err(FsError::AlreadyExists {
                path: "/".to_string(),
            });
        }
        let root = Self::insert_dir(&self.root, &segs, p)?;
        Ok(VirtualFs {
            root: Arc::new(root),
        })
    }

    /// Check if a path exists.
    pub fn exists(&self, p: &str) -> bool {
        self.node_at(p).is_some()
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, p: &str) -> bool {
        matches!(self.node_at(p), Some(Node::Directory { .. }))
    }

    /// Walk the tree along the path's segments.
    fn node_at(&self, p: &str) -> Option<&Node> {
        let mut current: &Node = &self.root;
        for seg in path::segments(p) {
            match current {
                Node::Directory { children } => current = children.get(seg)?.as_ref(),
                Node::File { .. } => return None,
            }
        }
        Some(current)
    }

    fn insert_dir(current: &Node, segs: &[&str], full: &str) -> Result<Node, FsError> {
        let children = match current {
            Node::Directory { children } => children,
            Node::File { .. } => {
                return Err(FsError::NotFound {
                    path: full.to_string(),
                    operation: "mkdir".to_string(),
                });
            }
        };
        match segs {
            [] => Err(FsError::AlreadyExists {
                path: full.to_string(),
            }),
            [leaf] => {
                if children.contains_key(*leaf) {
                    return Err(FsError::AlreadyExists {
                        path: full.to_string(),
                    });
                }
                let mut children = children.clone();
                children.insert((*leaf).to_string(), Arc::new(Node::empty_dir()));
                Ok(Node::Directory { children })
            }
            [head, rest @ ..] => {
                let child = children.get(*head).ok_or_else(|| FsError::NotFound {
                    path: full.to_string(),
                    operation: "mkdir".to_string(),
                })?;
                let rebuilt = Self::insert_dir(child, rest, full)?;
                let mut children = children.clone();
                children.insert((*head).to_string(), Arc::new(rebuilt));
                Ok(Node::Directory { children })
            }
        }
    }

    /// Lenient insert used by `with_layout`: creates missing parents and
    /// overwrites whatever sits at the leaf, keeping its position.
    fn put(&self, p: &str, node: Node) -> Self {
        let segs = path::segments(p);
        if segs.is_empty() {
            return self.clone();
        }
        VirtualFs {
            root: Arc::new(Self::put_at(&self.root, &segs, node)),
        }
    }

    fn put_at(current: &Node, segs: &[&str], node: Node) -> Node {
        let mut children = match current {
            Node::Directory { children } => children.clone(),
            // A file in the way of a layout path becomes a directory.
            Node::File { .. } => IndexMap::new(),
        };
        match segs {
            [] => {}
            [leaf] => {
                children.insert((*leaf).to_string(), Arc::new(node));
            }
            [head, rest @ ..] => {
                let child = children
                    .get(*head)
                    .map(Arc::clone)
                    .unwrap_or_else(|| Arc::new(Node::empty_dir()));
                let rebuilt = Self::put_at(&child, rest, node);
                children.insert((*head).to_string(), Arc::new(rebuilt));
            }
        }
        Node::Directory { children }
    }

    #[cfg(test)]
    fn child_arc(&self, p: &str) -> Option<Arc<Node>> {
        let parent = path::parent_path(p);
        let name = path::basename(p);
        match self.node_at(&parent)? {
            Node::Directory { children } => children.get(name).map(Arc::clone),
            Node::File { .. } => None,
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::types::NodeKind;

    fn sample_fs() -> VirtualFs {
        VirtualFs::with_layout([
            ("/README.txt", LayoutEntry::from("read me")),
            ("/notes/a.txt", LayoutEntry::from("alpha")),
            ("/notes/b.txt", LayoutEntry::from("beta")),
            ("/empty", LayoutEntry::Directory),
        ])
    }

    #[test]
    fn test_read_file() {
        let fs = sample_fs();
        assert_eq!(fs.read("/README.txt").unwrap(), "read me");
        assert_eq!(fs.read("/notes/a.txt").unwrap(), "alpha");
    }

    #[test]
    fn test_read_missing_or_directory() {
        let fs = sample_fs();
        assert!(matches!(
            fs.read("/nope.txt"),
            Err(FsError::NotFound { .. })
        ));
        // Directories are not readable.
        assert!(matches!(fs.read("/notes"), Err(FsError::NotFound { .. })));
    }

    #[test]
    fn test_list_insertion_order() {
        let fs = sample_fs();
        let names: Vec<String> = fs
            .list("/")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["README.txt", "notes", "empty"]);
    }

    #[test]
    fn test_list_kinds() {
        let fs = sample_fs();
        let entries = fs.list("/").unwrap();
        assert_eq!(entries[0].kind, NodeKind::File);
        assert_eq!(entries[1].kind, NodeKind::Directory);
    }

    #[test]
    fn test_list_on_file_or_missing() {
        let fs = sample_fs();
        assert!(matches!(
            fs.list("/README.txt"),
            Err(FsError::NotFound { .. })
        ));
        assert!(matches!(fs.list("/ghost"), Err(FsError::NotFound { .. })));
    }

    #[test]
    fn test_mkdir_round_trip() {
        let fs = sample_fs();
        let next = fs.mkdir("/notes/drafts").unwrap();
        let names: Vec<String> = next
            .list("/notes")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "drafts"]);
    }

    #[test]
    fn test_mkdir_already_exists() {
        let fs = sample_fs();
        assert!(matches!(
            fs.mkdir("/notes"),
            Err(FsError::AlreadyExists { .. })
        ));
        // A file occupying the path counts too.
        assert!(matches!(
            fs.mkdir("/README.txt"),
            Err(FsError::AlreadyExists { .. })
        ));
        assert!(matches!(fs.mkdir("/"), Err(FsError::AlreadyExists { .. })));
    }

    #[test]
    fn test_mkdir_parent_must_exist() {
        let fs = sample_fs();
        assert!(matches!(
            fs.mkdir("/missing/child"),
            Err(FsError::NotFound { .. })
        ));
        // A file is not a valid parent either.
        assert!(matches!(
            fs.mkdir("/README.txt/child"),
            Err(FsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_mkdir_leaves_old_tree_unchanged() {
        let fs = sample_fs();
        let before: Vec<String> = fs.list("/").unwrap().into_iter().map(|e| e.name).collect();

        let next = fs.mkdir("/newdir").unwrap();

        let after: Vec<String> = fs.list("/").unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(before, after);
        assert!(!fs.exists("/newdir"));
        assert!(next.exists("/newdir"));
        assert_eq!(fs.read("/README.txt").unwrap(), "read me");
    }

    #[test]
    fn test_mkdir_shares_sibling_subtrees() {
        let fs = sample_fs();
        let next = fs.mkdir("/empty/inner").unwrap();

        // /notes was not on the mutated path: same allocation in both trees.
        let old_notes = fs.child_arc("/notes").unwrap();
        let new_notes = next.child_arc("/notes").unwrap();
        assert!(Arc::ptr_eq(&old_notes, &new_notes));

        // /empty was rebuilt.
        let old_empty = fs.child_arc("/empty").unwrap();
        let new_empty = next.child_arc("/empty").unwrap();
        assert!(!Arc::ptr_eq(&old_empty, &new_empty));
    }

    #[test]
    fn test_empty_fs() {
        let fs = VirtualFs::new();
        assert!(fs.is_directory("/"));
        assert!(fs.list("/").unwrap().is_empty());
    }

    #[test]
    fn test_layout_overwrite_keeps_position() {
        let fs = VirtualFs::with_layout([
            ("/a", LayoutEntry::from("one")),
            ("/b", LayoutEntry::from("two")),
            ("/a", LayoutEntry::from("three")),
        ]);
        let names: Vec<String> = fs.list("/").unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(fs.read("/a").unwrap(), "three");
    }
}
