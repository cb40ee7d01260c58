use std::collections::HashMap;

use crate::cli::context::CliContext;
use crate::errors::CommandResult;

pub type CommandHandler = fn(&mut CliContext, &[&str]) -> CommandResult;

/// One top-level command. Subcommands are dispatched by the handler itself.
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Commands keyed by name, listed in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = CommandEntry>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut CliContext, _: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn duplicate_registration_keeps_first_position() {
        let registry = CommandRegistry::with_entries([
            CommandEntry::new("stats", "first", "stats", noop),
            CommandEntry::new("help", "help", "help", noop),
            CommandEntry::new("stats", "second", "stats", noop),
        ]);
        let names: Vec<_> = registry.list().iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["stats", "help"]);
        assert_eq!(registry.get("stats").map(|e| e.description), Some("second"));
        assert!(registry.handler("missing").is_none());
    }
}
