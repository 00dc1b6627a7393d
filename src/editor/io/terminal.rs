//! # Terminal I/O
//!
//! crossterm-backed event and render streams. All direct crossterm terminal
//! calls live here.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::Duration;

/// Events read from the real terminal
#[derive(Debug, Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Output to the real terminal
///
/// Text is queued and only reaches the terminal on `flush`, so a frame is
/// painted in one write.
pub struct TerminalRenderStream<W: Write> {
    writer: W,
}

impl TerminalRenderStream<io::Stdout> {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match std::str::from_utf8(buf) {
            Ok(text) => {
                queue!(self.writer, Print(text))?;
                Ok(buf.len())
            }
            Err(_) => self.writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn clear_screen(&mut self) -> Result<()> {
        Ok(queue!(self.writer, Clear(ClearType::All))?)
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        Ok(queue!(self.writer, cursor::MoveTo(x, y))?)
    }

    fn hide_cursor(&mut self) -> Result<()> {
        Ok(queue!(self.writer, cursor::Hide)?)
    }

    fn show_cursor(&mut self) -> Result<()> {
        Ok(queue!(self.writer, cursor::Show)?)
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        Ok(execute!(self.writer, EnterAlternateScreen)?)
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        Ok(execute!(self.writer, LeaveAlternateScreen)?)
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::enable_raw_mode()?)
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        Ok(terminal::disable_raw_mode()?)
    }
}
