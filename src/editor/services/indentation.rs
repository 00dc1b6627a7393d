//! # Indentation Service
//!
//! Answers "what do I insert for Tab here" and expands hard tabs in pasted
//! text, driven by the configured tab width, indent size and tab policy.

/// Indentation settings handed to each editor controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation {
    tab_width: usize,
    indent_size: usize,
    use_tabs: bool,
}

impl Indentation {
    /// Zero widths are bumped to one so stops always advance
    pub fn new(tab_width: usize, indent_size: usize, use_tabs: bool) -> Self {
        Self {
            tab_width: tab_width.max(1),
            indent_size: indent_size.max(1),
            use_tabs,
        }
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    pub fn use_tabs(&self) -> bool {
        self.use_tabs
    }

    /// Text that moves `column` to the next indent stop
    pub fn indentation_for(&self, column: usize) -> String {
        if self.use_tabs {
            return "\t".to_string();
        }
        let width = self.indent_size - column % self.indent_size;
        " ".repeat(width)
    }

    /// Replace hard tabs with spaces up to the next tab stop, counting
    /// columns from `start_column` and restarting at zero after each newline
    pub fn expand_tabs(&self, text: &str, start_column: usize) -> String {
        let mut expanded = String::with_capacity(text.len());
        let mut column = start_column;
        for ch in text.chars() {
            match ch {
                '\t' => {
                    let width = self.tab_width - column % self.tab_width;
                    expanded.extend(std::iter::repeat(' ').take(width));
                    column += width;
                }
                '\n' => {
                    expanded.push(ch);
                    column = 0;
                }
                _ => {
                    expanded.push(ch);
                    column += 1;
                }
            }
        }
        expanded
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::new(4, 4, false)
    }
}
