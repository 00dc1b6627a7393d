//! # Clipboard Service
//!
//! Narrow clipboard interface used by paste and line copy. Only an
//! in-process implementation ships; OS clipboards plug in behind the trait.

use anyhow::Result;

/// Source and sink of clipboard text
pub trait Clipboard: Send {
    /// Current clipboard text, possibly empty
    fn read(&mut self) -> Result<String>;

    /// Replace the clipboard text
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Clipboard kept in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Result<String> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.contents = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_should_start_empty() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.read().unwrap(), "");
    }

    #[test]
    fn memory_clipboard_should_return_last_write() {
        let mut clipboard = MemoryClipboard::with_contents("first");
        clipboard.write("second").unwrap();
        assert_eq!(clipboard.read().unwrap(), "second");
    }
}
