//! # Editor Keys
//!
//! Logical keys understood by an editor pane. Raw crossterm events are
//! mapped here; anything that does not map is ignored by the caller.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Backspace,
    Delete,
    Tab,
    Char(char),
    Paste,
    ToggleInsert,
}

impl EditorKey {
    /// Map a terminal key event to a logical key
    ///
    /// Release events, control and alt chords, and keys with no editing
    /// meaning map to `None`. [`EditorKey::Paste`] is produced by the paste
    /// command, never by this mapping.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let control = event.modifiers.contains(KeyModifiers::CONTROL)
            || event.modifiers.contains(KeyModifiers::ALT);

        let key = match event.code {
            KeyCode::Up => EditorKey::Up,
            KeyCode::Down => EditorKey::Down,
            KeyCode::Left => EditorKey::Left,
            KeyCode::Right => EditorKey::Right,
            KeyCode::Home => EditorKey::Home,
            KeyCode::End => EditorKey::End,
            KeyCode::PageUp => EditorKey::PageUp,
            KeyCode::PageDown => EditorKey::PageDown,
            KeyCode::Enter => EditorKey::Enter,
            KeyCode::Backspace => EditorKey::Backspace,
            KeyCode::Delete => EditorKey::Delete,
            KeyCode::Tab => EditorKey::Tab,
            KeyCode::Insert => EditorKey::ToggleInsert,
            KeyCode::Char(ch) if !control && !ch.is_control() => EditorKey::Char(ch),
            _ => return None,
        };
        Some(key)
    }

    /// Keys that only move the cursor or scroll
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            EditorKey::Up
                | EditorKey::Down
                | EditorKey::Left
                | EditorKey::Right
                | EditorKey::Home
                | EditorKey::End
                | EditorKey::PageUp
                | EditorKey::PageDown
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_chars_should_map_to_char_keys() {
        assert_eq!(
            EditorKey::from_key_event(&key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(EditorKey::Char('a'))
        );
        assert_eq!(
            EditorKey::from_key_event(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(EditorKey::Char('G'))
        );
        assert_eq!(
            EditorKey::from_key_event(&key(KeyCode::Char('あ'), KeyModifiers::NONE)),
            Some(EditorKey::Char('あ'))
        );
    }

    #[test]
    fn control_chords_should_be_left_to_app_commands() {
        assert_eq!(
            EditorKey::from_key_event(&key(KeyCode::Char('v'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            EditorKey::from_key_event(&key(KeyCode::Char('s'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn unbound_keys_should_be_ignored() {
        assert_eq!(
            EditorKey::from_key_event(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            EditorKey::from_key_event(&key(KeyCode::F(5), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            EditorKey::from_key_event(&key(KeyCode::Esc, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn release_events_should_be_ignored() {
        let mut event = key(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(EditorKey::from_key_event(&event), None);
    }

    #[test]
    fn navigation_keys_should_be_classified() {
        assert!(EditorKey::PageDown.is_navigation());
        assert!(!EditorKey::Enter.is_navigation());
        assert!(!EditorKey::Char('x').is_navigation());
    }
}
