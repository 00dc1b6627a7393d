//! # Status Line Model
//!
//! State shown by the status pane: what the focused editor is looking at,
//! plus an application-wide message slot.

use crate::editor::events::{InputMode, LogicalPosition};

/// Snapshot of the focused editor taken right before the status pane draws
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusSummary {
    pub name: String,
    pub modified: bool,
    pub input_mode: InputMode,
    pub cursor: LogicalPosition,
    pub line_count: usize,
    /// The editor's own transient message
    pub message: Option<String>,
}

/// Status line model containing all status bar display state
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    /// Temporary status message to display
    status_message: Option<String>,

    /// What the focused editor looks like, `None` when no editor is open
    focus: Option<FocusSummary>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary status message
    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_focus(&mut self, focus: Option<FocusSummary>) {
        self.focus = focus;
    }

    pub fn focus(&self) -> Option<&FocusSummary> {
        self.focus.as_ref()
    }

    /// Render to exactly `width` chars: message or name on the left,
    /// mode and 1-based position on the right
    pub fn render(&self, width: usize) -> String {
        let (left, right) = match &self.focus {
            Some(focus) => {
                let dirty = if focus.modified { " [+]" } else { "" };
                let left = match self.status_message.as_ref().or(focus.message.as_ref()) {
                    Some(message) => message.clone(),
                    None => format!("{}{}", focus.name, dirty),
                };
                let right = format!(
                    "{}  {}:{}  {}L",
                    focus.input_mode.label(),
                    focus.cursor.line + 1,
                    focus.cursor.column + 1,
                    focus.line_count
                );
                (left, right)
            }
            None => (
                self.status_message.clone().unwrap_or_default(),
                String::new(),
            ),
        };

        let right_len = right.chars().count();
        let left_room = width.saturating_sub(right_len + 1);
        let mut line: String = left.chars().take(left_room).collect();
        let used = line.chars().count();
        if right_len < width {
            line.extend(std::iter::repeat(' ').take(width - used - right_len));
            line.push_str(&right);
        } else {
            line = right.chars().take(width).collect();
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> FocusSummary {
        FocusSummary {
            name: "main.rs".to_string(),
            modified: true,
            input_mode: InputMode::Insert,
            cursor: LogicalPosition::new(4, 2),
            line_count: 10,
            message: None,
        }
    }

    #[test]
    fn status_line_should_show_name_and_position() {
        let mut status = StatusLine::new();
        status.set_focus(Some(summary()));

        let rendered = status.render(40);

        assert_eq!(rendered.chars().count(), 40);
        assert!(rendered.starts_with("main.rs [+]"));
        assert!(rendered.ends_with("INS  5:3  10L"));
    }

    #[test]
    fn status_message_should_replace_name() {
        let mut status = StatusLine::new();
        status.set_focus(Some(summary()));
        status.set_status_message("Saved main.rs");

        assert!(status.render(40).starts_with("Saved main.rs"));

        status.clear_status_message();
        assert!(status.render(40).starts_with("main.rs"));
    }

    #[test]
    fn editor_message_should_show_when_no_status_message() {
        let mut status = StatusLine::new();
        status.set_focus(Some(FocusSummary {
            message: Some("Paste failed".to_string()),
            ..summary()
        }));
        assert!(status.render(40).starts_with("Paste failed"));

        status.set_status_message("Ctrl+Q quit");
        assert!(status.render(40).starts_with("Ctrl+Q quit"));
    }

    #[test]
    fn status_line_should_fit_narrow_widths() {
        let mut status = StatusLine::new();
        status.set_focus(Some(summary()));

        assert_eq!(status.render(5).chars().count(), 5);
        assert_eq!(status.render(0), "");
    }

    #[test]
    fn status_line_without_focus_should_show_message_only() {
        let mut status = StatusLine::new();
        status.set_status_message("no file");
        assert_eq!(status.render(10), "no file   ");
    }
}
