//! # Command Pattern Infrastructure
//!
//! Application-level commands bound to key chords. Commands look at a
//! read-only [`CommandContext`] and return [`CommandEvent`]s; the controller
//! decides how to apply them.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::editor::events::{EditorKey, PaneId};
use crate::editor::view_models::PaneLayout;

/// What a command asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    QuitRequested,
    SaveRequested,
    ClosePaneRequested,
    FocusNextRequested,
    NewScratchRequested,
    CopyLineRequested,
    /// Hand a logical key to the focused editor
    EditorKeyRequested(EditorKey),
}

/// Snapshot of the layout taken before command lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    pub focused_pane: Option<PaneId>,
    pub editor_count: usize,
    pub terminal_size: (u16, u16),
}

impl CommandContext {
    pub fn from_layout(layout: &PaneLayout) -> Self {
        Self {
            focused_pane: layout.focused(),
            editor_count: layout.editor_ids().len(),
            terminal_size: layout.terminal_size(),
        }
    }

    /// Whether an editor pane currently has focus
    pub fn has_focused_editor(&self) -> bool {
        self.focused_pane.is_some()
    }
}

/// A key-bound application command
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the current context
    ///
    /// At most one registered command should answer true for any input.
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing what should happen
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Command name for debugging and logging
    fn name(&self) -> &'static str;
}
