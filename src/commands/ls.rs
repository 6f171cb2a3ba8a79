use super::{Command, ErrorKind, Output};
use crate::fs::path;
use crate::session::Session;

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, args: &[String], session: &mut Session) -> Option<Output> {
        // Default is the working directory itself, not ".".
        let raw = args.first().map(String::as_str).unwrap_or("");
        let shown = if raw.is_empty() { session.cwd() } else { raw }.to_string();
        let target = path::resolve(raw, session.cwd());

        match session.fs().list(&target) {
            Ok(entries) => Some(Output::Ls {
                entries: entries.into_iter().map(|e| e.name).collect(),
            }),
            Err(_) => Some(Output::error(
                "ls",
                ErrorKind::NotFound,
                format!("ls: cannot access '{}': No such file or directory", shown),
            )),
        }
    }
}
