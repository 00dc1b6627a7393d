//! # Mock I/O
//!
//! Scripted input and recording output for driving the application without
//! a terminal.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::{anyhow, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Event stream that replays a fixed script
///
/// `poll` always reports an event so a run loop never idles; reading past
/// the end of the script fails, which ends the loop with an error.
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Queue a plain key press
    pub fn push_key(&mut self, code: KeyCode) {
        self.push_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Queue a Ctrl+`ch` chord
    pub fn push_ctrl(&mut self, ch: char) {
        self.push_event(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )));
    }

    /// Queue one key press per char of `text`
    pub fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.push_key(KeyCode::Char(ch));
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(true)
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow!("event script exhausted"))
    }
}

/// One recorded render call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(String),
    Flush,
}

#[derive(Debug, Default)]
struct RenderState {
    commands: Vec<RenderCommand>,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

/// Shared view of everything a [`MockRenderStream`] recorded
///
/// Stays readable after the stream itself has been moved into a controller.
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    state: Arc<Mutex<RenderState>>,
}

impl RenderLog {
    fn lock(&self) -> MutexGuard<'_, RenderState> {
        // A test that panicked mid-record still leaves readable data
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.lock().commands.push(command);
    }

    pub fn commands(&self) -> Vec<RenderCommand> {
        self.lock().commands.clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().commands.contains(command)
    }

    /// All text written, concatenated
    pub fn written_text(&self) -> String {
        self.lock()
            .commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Last cursor position set
    pub fn last_cursor(&self) -> Option<(u16, u16)> {
        self.lock().commands.iter().rev().find_map(|command| match command {
            RenderCommand::MoveCursor(x, y) => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn cursor_visible(&self) -> bool {
        self.lock().cursor_visible
    }

    pub fn raw_mode(&self) -> bool {
        self.lock().raw_mode
    }

    pub fn alternate_screen(&self) -> bool {
        self.lock().alternate_screen
    }

    pub fn clear(&self) {
        self.lock().commands.clear();
    }
}

/// Render stream that records every call
#[derive(Debug)]
pub struct MockRenderStream {
    log: RenderLog,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(terminal_size: TerminalSize) -> Self {
        let log = RenderLog::default();
        log.lock().cursor_visible = true;
        Self { log, terminal_size }
    }

    /// Handle onto the recording
    pub fn log(&self) -> RenderLog {
        self.log.clone()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.log
            .record(RenderCommand::Write(String::from_utf8_lossy(buf).into_owned()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.log.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.log.record(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.log.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.log.record(RenderCommand::HideCursor);
        self.log.lock().cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.log.record(RenderCommand::ShowCursor);
        self.log.lock().cursor_visible = true;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.log.record(RenderCommand::EnterAlternateScreen);
        self.log.lock().alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.log.record(RenderCommand::LeaveAlternateScreen);
        self.log.lock().alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.log.record(RenderCommand::EnableRawMode);
        self.log.lock().raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.log.record(RenderCommand::DisableRawMode);
        self.log.lock().raw_mode = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_event_stream_should_replay_script_in_order() {
        let mut stream = MockEventStream::empty();
        stream.push_text("ab");
        stream.push_ctrl('q');

        assert!(stream.poll(Duration::ZERO).unwrap());
        match stream.read().unwrap() {
            Event::Key(key) => assert_eq!(key.code, KeyCode::Char('a')),
            other => panic!("expected key event, got {other:?}"),
        }
        assert_eq!(stream.remaining(), 2);
        stream.read().unwrap();
        stream.read().unwrap();

        assert_eq!(stream.remaining(), 0);
        assert!(stream.read().is_err());
    }

    #[test]
    fn mock_render_stream_should_record_commands() {
        let mut stream = MockRenderStream::new();
        let log = stream.log();

        stream.clear_screen().unwrap();
        stream.move_cursor(10, 20).unwrap();
        stream.hide_cursor().unwrap();
        stream.write_all(b"Hello").unwrap();
        stream.flush().unwrap();
        drop(stream);

        assert_eq!(
            log.commands(),
            vec![
                RenderCommand::ClearScreen,
                RenderCommand::MoveCursor(10, 20),
                RenderCommand::HideCursor,
                RenderCommand::Write("Hello".to_string()),
                RenderCommand::Flush,
            ]
        );
        assert_eq!(log.written_text(), "Hello");
        assert_eq!(log.last_cursor(), Some((10, 20)));
        assert!(!log.cursor_visible());
    }

    #[test]
    fn mock_render_stream_should_track_terminal_modes() {
        let mut stream = MockRenderStream::with_size((120, 40));
        let log = stream.log();
        assert_eq!(stream.get_size().unwrap(), (120, 40));

        stream.enable_raw_mode().unwrap();
        stream.enter_alternate_screen().unwrap();
        assert!(log.raw_mode() && log.alternate_screen());

        stream.leave_alternate_screen().unwrap();
        stream.disable_raw_mode().unwrap();
        assert!(!log.raw_mode() && !log.alternate_screen());
    }
}
