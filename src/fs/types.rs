//! File System Types
//!
//! Core types for the virtual file system.

use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EEXIST: file already exists, mkdir '{path}'")]
    AlreadyExists { path: String },
}

/// A single entry in the filesystem tree: a directory or a file.
///
/// Directory children keep insertion order, which is the order `list`
/// reports and the order renderers display.
#[derive(Debug, Clone)]
pub enum Node {
    Directory {
        children: IndexMap<String, Arc<Node>>,
    },
    File {
        content: String,
    },
}

impl Node {
    /// Create an empty directory node.
    pub fn empty_dir() -> Self {
        Node::Directory {
            children: IndexMap::new(),
        }
    }

    /// Create a file node with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    /// Check if the node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Check if the node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }
}

/// Node variant tag, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// Directory entry returned by `list`, in stored insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}

/// Initial layout entry: a file with fixed content, or an empty directory.
#[derive(Debug, Clone)]
pub enum LayoutEntry {
    File(String),
    Directory,
}

impl From<&str> for LayoutEntry {
    fn from(content: &str) -> Self {
        LayoutEntry::File(content.to_string())
    }
}

impl From<String> for LayoutEntry {
    fn from(content: String) -> Self {
        LayoutEntry::File(content)
    }
}
