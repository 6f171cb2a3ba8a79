//! Command Layer
//!
//! Each shell command is a small object implementing [`Command`], looked up
//! by name in a [`CommandRegistry`]. Commands query and mutate the
//! [`Session`](crate::session::Session) they are handed and report back
//! through the [`Output`] discriminated type, which is the only contract
//! between this crate and any renderer.

mod cat;
mod cd;
mod clear_cmd;
mod help_cmd;
mod ls;
mod mkdir;
mod output;
mod registry;

pub use cat::CatCommand;
pub use cd::CdCommand;
pub use clear_cmd::ClearCommand;
pub use help_cmd::HelpCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use output::{ErrorKind, Output};
pub use registry::{default_registry, CommandRegistry};

use crate::session::Session;

/// A shell command.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Execute against the session. Returns `None` when the command
    /// produced nothing worth recording (only `clear` does).
    fn execute(&self, args: &[String], session: &mut Session) -> Option<Output>;
}

/// Split an input line into a command name and its arguments.
///
/// Tokens are separated by runs of whitespace. A blank or whitespace-only
/// line is a no-op and parses to `None`.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace().map(String::from);
    let name = tokens.next()?;
    Some((name, tokens.collect()))
}
