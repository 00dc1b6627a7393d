//! # Editor
//!
//! Editing core: buffers and highlighting at the bottom, panes and their
//! layout in the middle, the terminal renderer and application loop on top.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod geometry;
pub mod highlight;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

pub use controllers::AppController;
pub use highlight::Highlighter;
pub use models::TextBuffer;
pub use view_models::{EditorState, Pane, PaneLayout};
