//! # Views Module
//!
//! Rendering of laid-out frames onto the terminal.

pub mod ansi_escape_codes;
pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
