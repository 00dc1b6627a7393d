//! # I/O Abstraction Layer
//!
//! Trait seams between the editor and the terminal so the application loop
//! runs the same against a real terminal and against scripted tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream    ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand, RenderLog};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Terminal size as (width, height)
pub type TerminalSize = (u16, u16);

/// Source of input events
pub trait EventStream: Send {
    /// Whether an event is ready within `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Next event; call only after `poll` returned true
    fn read(&mut self) -> Result<Event>;
}

/// Sink for terminal output and terminal mode changes
pub trait RenderStream: Write + Send {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move the cursor to (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}
