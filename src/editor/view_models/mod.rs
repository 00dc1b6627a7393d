//! # View Models
//!
//! Per-pane editing state and the layout engine that arranges panes.

pub mod editor_state;
pub mod pane;
pub mod pane_layout;

pub use editor_state::EditorState;
pub use pane::{Pane, PaneKind};
pub use pane_layout::{Frame, PaneFrame, PaneLayout};
