use std::collections::HashMap;

use super::{CatCommand, CdCommand, ClearCommand, Command, HelpCommand, LsCommand, MkdirCommand};

/// Name-indexed set of commands.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding the six built-in commands.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(HelpCommand));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = default_registry();
        for name in ["ls", "cat", "mkdir", "cd", "clear", "help"] {
            assert!(registry.contains(name), "missing command: {}", name);
        }
        assert!(!registry.contains("rm"));
        assert_eq!(registry.names().len(), 6);
    }

    #[test]
    fn test_get_returns_named_command() {
        let registry = default_registry();
        assert_eq!(registry.get("ls").map(|c| c.name()), Some("ls"));
        assert!(registry.get("foo").is_none());
    }
}
