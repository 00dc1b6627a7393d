//! # Services Module
//!
//! Collaborators injected into the editing core: indentation rules,
//! clipboard access and document persistence.

pub mod clipboard;
pub mod indentation;
pub mod persistence;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use indentation::Indentation;
pub use persistence::{DiskPersistence, MemoryPersistence, Persistence};

/// Collaborator handles passed into a controller for one key event
pub struct EditorServices<'a> {
    pub indentation: &'a Indentation,
    pub clipboard: &'a mut dyn Clipboard,
}

impl<'a> EditorServices<'a> {
    pub fn new(indentation: &'a Indentation, clipboard: &'a mut dyn Clipboard) -> Self {
        Self {
            indentation,
            clipboard,
        }
    }
}
