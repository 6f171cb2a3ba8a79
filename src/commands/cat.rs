use super::{Command, ErrorKind, Output};
use crate::fs::path;
use crate::session::Session;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, args: &[String], session: &mut Session) -> Option<Output> {
        // Rejoin so filenames containing spaces survive tokenization.
        let file_name = args.join(" ");
        if file_name.is_empty() {
            return Some(Output::error(
                "cat",
                ErrorKind::MissingOperand,
                "cat: missing file operand",
            ));
        }

        let target = path::resolve(&file_name, session.cwd());
        match session.fs().read(&target) {
            Ok(content) => Some(Output::Cat { content }),
            Err(_) => Some(Output::error(
                "cat",
                ErrorKind::NotFound,
                format!("cat: {}: No such file or directory", file_name),
            )),
        }
    }
}
