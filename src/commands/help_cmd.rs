use super::{Command, Output};
use crate::session::Session;

pub struct HelpCommand;

const HELP_TEXT: &str = "Available commands:\n\
  ls [dir]       - list files and directories\n\
  cat <file>     - display file contents\n\
  mkdir <dir>    - create a new directory\n\
  cd <dir>       - change directory\n\
  clear          - clear the terminal\n\
  help           - show this help message";

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _args: &[String], _session: &mut Session) -> Option<Output> {
        Some(Output::text(HELP_TEXT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFs;

    #[test]
    fn test_help_lists_all_commands() {
        let mut session = Session::new(VirtualFs::new(), "/");
        let output = HelpCommand.execute(&[], &mut session).unwrap();
        let Output::Text { content } = output else {
            panic!("help must produce text");
        };
        for name in ["ls", "cat", "mkdir", "cd", "clear", "help"] {
            assert!(content.contains(name), "help is missing: {}", name);
        }
    }

    #[test]
    fn test_help_touches_nothing() {
        let mut session = Session::new(VirtualFs::new(), "/");
        session.set_cwd("/".to_string());
        HelpCommand.execute(&[], &mut session);
        assert_eq!(session.cwd(), "/");
        assert!(session.history().is_empty());
    }
}
