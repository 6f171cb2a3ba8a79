//! Terminal Environment
//!
//! Main entry point. Ties together the command registry and the session,
//! and seeds the default filesystem layout.

use crate::commands::{default_registry, parse_line, CommandRegistry, ErrorKind, Output};
use crate::fs::{LayoutEntry, VirtualFs};
use crate::session::Session;

/// Options for creating a terminal.
#[derive(Default)]
pub struct TerminalOptions {
    /// Working directory at startup (defaults to `/`)
    pub cwd: Option<String>,
    /// Filesystem instance (defaults to the seeded layout)
    pub fs: Option<VirtualFs>,
}

/// The terminal environment: a command registry plus one session.
pub struct Terminal {
    registry: CommandRegistry,
    session: Session,
}

impl Terminal {
    pub fn new(options: TerminalOptions) -> Self {
        let fs = options.fs.unwrap_or_else(seed_filesystem);
        let cwd = options.cwd.unwrap_or_else(|| "/".to_string());
        Self {
            registry: default_registry(),
            session: Session::new(fs, cwd),
        }
    }

    /// Execute one input line.
    ///
    /// Blank lines are no-ops. Every non-blank line except `clear` appends
    /// a history record; failed commands leave the filesystem and working
    /// directory exactly as they were.
    pub fn execute_line(&mut self, line: &str) -> Option<Output> {
        let (name, args) = parse_line(line)?;
        let prompt = self.session.cwd().to_string();

        let output = match self.registry.get(&name) {
            Some(cmd) => cmd.execute(&args, &mut self.session),
            None => Some(Output::error(
                name.clone(),
                ErrorKind::CommandNotFound,
                format!(
                    "Command not found: {}. Type 'help' for available commands.",
                    name
                ),
            )),
        };

        if let Some(output) = &output {
            self.session
                .record(line.trim().to_string(), prompt, output.clone());
        }
        output
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current working directory, for prompt display.
    pub fn cwd(&self) -> &str {
        self.session.cwd()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(TerminalOptions::default())
    }
}

/// Build the default seeded filesystem: three starter files and an empty
/// `home/projects` hierarchy.
pub fn seed_filesystem() -> VirtualFs {
    VirtualFs::with_layout([
        (
            "/README.txt",
            LayoutEntry::from(
                "Welcome to TermaCraft!\n\nThis is a fun terminal for learning basic commands.\n\n\
                 Try these commands:\n- ls (list files)\n- cat README.txt (read this file)\n\
                 - mkdir myfolder (create a folder)\n- cd myfolder (change directory)",
            ),
        ),
        ("/hello.txt", LayoutEntry::from("Hello, young programmer!")),
        (
            "/story.txt",
            LayoutEntry::from(
                "Once upon a time, in a land of code...\n\n\
                 There was a terminal that made learning fun!\n\nThe End.",
            ),
        ),
        ("/home", LayoutEntry::Directory),
        ("/home/projects", LayoutEntry::Directory),
    ])
}
