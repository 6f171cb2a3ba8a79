//! Session State
//!
//! One interactive caller owns one [`Session`]: the current filesystem
//! snapshot, the working directory, and the transcript of executed
//! commands. Mutation is by replacement; the filesystem value swapped out
//! by `mkdir` stays valid for anyone still holding it.

use serde::Serialize;

use crate::commands::Output;
use crate::fs::VirtualFs;

/// One executed command and its outcome, as shown in a transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// The input line as typed (trimmed).
    pub input: String,
    /// Working directory at the time, for prompt display.
    pub prompt: String,
    pub output: Output,
}

/// Process-local interpreter state.
pub struct Session {
    fs: VirtualFs,
    cwd: String,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new(fs: VirtualFs, cwd: impl Into<String>) -> Self {
        Self {
            fs,
            cwd: cwd.into(),
            history: Vec::new(),
        }
    }

    /// Current filesystem snapshot.
    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Current working directory, for prompt display.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Executed commands in chronological order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Swap in the filesystem produced by a mutating command.
    pub fn replace_fs(&mut self, fs: VirtualFs) {
        self.fs = fs;
    }

    pub fn set_cwd(&mut self, cwd: String) {
        self.cwd = cwd;
    }

    /// Drop the whole transcript (the `clear` command).
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub(crate) fn record(&mut self, input: String, prompt: String, output: Output) {
        self.history.push(HistoryEntry {
            input,
            prompt,
            output,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_append_only_and_ordered() {
        let mut session = Session::new(VirtualFs::new(), "/");
        session.record("help".to_string(), "/".to_string(), Output::text("a"));
        session.record("ls".to_string(), "/".to_string(), Output::Empty);

        let inputs: Vec<&str> = session.history().iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["help", "ls"]);
    }

    #[test]
    fn test_clear_history() {
        let mut session = Session::new(VirtualFs::new(), "/");
        session.record("help".to_string(), "/".to_string(), Output::text("a"));
        session.clear_history();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_replace_fs_swaps_snapshot() {
        let fs = VirtualFs::new();
        let mut session = Session::new(fs.clone(), "/");
        let next = fs.mkdir("/newdir").unwrap();
        session.replace_fs(next);
        assert!(session.fs().exists("/newdir"));
        // The old snapshot is untouched.
        assert!(!fs.exists("/newdir"));
    }
}
