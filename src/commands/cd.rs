use super::{Command, ErrorKind, Output};
use crate::fs::path;
use crate::session::Session;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, args: &[String], session: &mut Session) -> Option<Output> {
        let target = args.first().map(String::as_str).unwrap_or("/");
        let resolved = path::resolve(target, session.cwd());

        // Existence check doubles as a directory check: list fails on files.
        if session.fs().list(&resolved).is_ok() {
            session.set_cwd(resolved);
            Some(Output::Empty)
        } else {
            Some(Output::error(
                "cd",
                ErrorKind::NotFound,
                format!("cd: {}: No such file or directory", target),
            ))
        }
    }
}
