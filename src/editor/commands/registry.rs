//! # Command Registry
//!
//! Checks `is_relevant()` on every registered command and executes the first
//! match. Keys no command claims fall through to the focused editor.

use anyhow::Result;
use crossterm::event::KeyEvent;
use std::sync::Arc;

use super::app::{
    ClosePaneCommand, CopyLineCommand, FocusNextCommand, NewScratchCommand, PasteCommand,
    QuitCommand, SaveCommand,
};
use super::{Command, CommandContext, CommandEvent};

type CommandArc = Arc<dyn Command>;

pub struct CommandRegistry {
    commands: Vec<CommandArc>,
}

impl CommandRegistry {
    /// Registry with the default application commands
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_default_commands();
        registry
    }

    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    fn register_default_commands(&mut self) {
        self.add_command(Arc::new(QuitCommand));
        self.add_command(Arc::new(SaveCommand));
        self.add_command(Arc::new(ClosePaneCommand));
        self.add_command(Arc::new(FocusNextCommand));
        self.add_command(Arc::new(NewScratchCommand));
        self.add_command(Arc::new(CopyLineCommand));
        self.add_command(Arc::new(PasteCommand));
    }

    pub fn add_command(&mut self, command: CommandArc) {
        self.commands.push(command);
    }

    /// Events from the first relevant command, empty when none matches
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        match self
            .commands
            .iter()
            .find(|command| command.is_relevant(context, &event))
        {
            Some(command) => {
                tracing::debug!("command {} handles {:?}", command.name(), event);
                command.execute(event, context)
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn get_all_commands(&self) -> &[CommandArc] {
        &self.commands
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
