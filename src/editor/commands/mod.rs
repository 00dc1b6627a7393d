//! # Commands
//!
//! Key chords handled at application level, before keys reach a pane.

pub mod app;
pub mod command;
pub mod registry;

pub use command::{Command, CommandContext, CommandEvent};
pub use registry::CommandRegistry;
