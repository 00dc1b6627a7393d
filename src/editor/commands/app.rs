//! # Application Commands
//!
//! Control-key chords handled above the panes: quit, save, pane management
//! and clipboard access.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::editor::events::EditorKey;

fn is_control_chord(event: &KeyEvent, ch: char) -> bool {
    event.code == KeyCode::Char(ch) && event.modifiers.contains(KeyModifiers::CONTROL)
}

/// Quit the application (Ctrl+Q)
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_control_chord(event, 'q')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}

/// Write the focused buffer to disk (Ctrl+S)
pub struct SaveCommand;

impl Command for SaveCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.has_focused_editor() && is_control_chord(event, 's')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::SaveRequested])
    }

    fn name(&self) -> &'static str {
        "Save"
    }
}

/// Close the focused pane (Ctrl+W)
pub struct ClosePaneCommand;

impl Command for ClosePaneCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.has_focused_editor() && is_control_chord(event, 'w')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ClosePaneRequested])
    }

    fn name(&self) -> &'static str {
        "ClosePane"
    }
}

/// Move focus to the next editor pane (Ctrl+N)
pub struct FocusNextCommand;

impl Command for FocusNextCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.editor_count > 1 && is_control_chord(event, 'n')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusNextRequested])
    }

    fn name(&self) -> &'static str {
        "FocusNext"
    }
}

/// Open an empty scratch pane (Ctrl+T)
pub struct NewScratchCommand;

impl Command for NewScratchCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_control_chord(event, 't')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::NewScratchRequested])
    }

    fn name(&self) -> &'static str {
        "NewScratch"
    }
}

/// Copy the line under the cursor to the clipboard (Ctrl+C)
pub struct CopyLineCommand;

impl Command for CopyLineCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.has_focused_editor() && is_control_chord(event, 'c')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CopyLineRequested])
    }

    fn name(&self) -> &'static str {
        "CopyLine"
    }
}

/// Paste the clipboard into the focused editor (Ctrl+V)
pub struct PasteCommand;

impl Command for PasteCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.has_focused_editor() && is_control_chord(event, 'v')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::EditorKeyRequested(EditorKey::Paste)])
    }

    fn name(&self) -> &'static str {
        "Paste"
    }
}
