//! Virtual File System Module
//!
//! An immutable, tree-structured in-memory filesystem. Mutations never
//! touch an existing tree; they return a new one that shares every
//! unchanged subtree with its predecessor.

pub mod path;
pub mod types;
pub mod vfs;

pub use types::*;
pub use vfs::VirtualFs;
