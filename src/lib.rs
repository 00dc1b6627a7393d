//! # paned - Terminal Text Editor with Anchored Panes
//!
//! A small editor whose screen is split into panes that dock against the
//! terminal edges. Each pane edits its own buffer; a rule file drives
//! regex-based syntax highlighting.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Frame     ┌──────────────┐    Mutate    ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │─────────────►│ Models  │
//! │             │              │              │              │         │
//! │ - Terminal  │              │ - PaneLayout │              │ - Text  │
//! │ - Borders   │              │ - Editor     │              │ - Status│
//! │ - Cursor    │              │   State      │              │         │
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ Commands, logical keys
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │ - Key chords │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod editor;

// Re-export main types for easy access
pub use editor::{AppController, EditorState, Highlighter, Pane, PaneLayout, TextBuffer};
