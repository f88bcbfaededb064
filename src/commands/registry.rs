// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

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
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
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

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::echo::EchoCommand;
use super::grep::GrepCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::open_cmd::OpenCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register every terminal command
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(GrepCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(OpenCommand));
    registry.register(Box::new(WhoamiCommand));
}

/// Registry holding every terminal command
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}
