//! # Models Module
//!
//! Plain data owned by panes: document text and status line state.

pub mod status_line;
pub mod text_buffer;

pub use status_line::{FocusSummary, StatusLine};
pub use text_buffer::{EditError, TextBuffer};
