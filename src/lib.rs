//! termcraft - an in-memory virtual filesystem with a shell-like command engine
//!
//! The crate models a tiny learning terminal: a persistent, immutable
//! filesystem tree ([`VirtualFs`]) operated on by six commands (`ls`,
//! `cat`, `mkdir`, `cd`, `clear`, `help`) through a [`Terminal`]. Every
//! command produces an [`Output`] value; rendering those values is the
//! caller's business.
//!
//! # Known limitation
//!
//! `..` and `.` are only treated specially when they are the *entire*
//! path argument. Embedded segments are not collapsed: `cd a/../b` looks
//! up the literal path `a/../b` and fails. Renderers and scripts relying
//! on this behavior exist, so it is kept as-is.

pub mod commands;
pub mod fs;
pub mod session;
pub mod terminal;

pub use commands::{parse_line, Command, CommandRegistry, ErrorKind, Output};
pub use fs::{DirEntry, FsError, LayoutEntry, Node, NodeKind, VirtualFs};
pub use session::{HistoryEntry, Session};
pub use terminal::{seed_filesystem, Terminal, TerminalOptions};
