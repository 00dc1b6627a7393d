//! # Events Module
//!
//! Shared positional types, logical editor keys and the view events that
//! drive redraws.

pub mod editor_keys;
pub mod types;
pub mod view_events;

pub use editor_keys::EditorKey;
pub use types::{Anchors, InputMode, LogicalPosition, PaneId};
pub use view_events::ViewEvent;
