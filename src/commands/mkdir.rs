use super::{Command, ErrorKind, Output};
use crate::fs::{path, FsError};
use crate::session::Session;

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, args: &[String], session: &mut Session) -> Option<Output> {
        let dir_name = args.join(" ");
        if dir_name.is_empty() {
            return Some(Output::error(
                "mkdir",
                ErrorKind::MissingOperand,
                "mkdir: missing operand",
            ));
        }

        let target = path::resolve(&dir_name, session.cwd());
        match session.fs().mkdir(&target) {
            Ok(next) => {
                session.replace_fs(next);
                Some(Output::Empty)
            }
            Err(err) => {
                let code = match err {
                    FsError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
                    FsError::NotFound { .. } => ErrorKind::NotFound,
                };
                // One user-facing phrasing for both faults; the code keeps
                // them apart.
                Some(Output::error(
                    "mkdir",
                    code,
                    format!("mkdir: cannot create directory '{}': File exists", dir_name),
                ))
            }
        }
    }
}
