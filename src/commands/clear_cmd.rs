use super::{Command, Output};
use crate::session::Session;

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _args: &[String], session: &mut Session) -> Option<Output> {
        session.clear_history();
        // Nothing to record: the transcript is gone.
        None
    }
}
