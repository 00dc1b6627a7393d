//! # Text Buffer
//!
//! Line array for one open document. Every column in this module counts
//! `char`s, not bytes; conversions happen at the edges of each operation.
//!
//! The buffer never holds zero lines and never holds a line terminator.

use thiserror::Error;

/// Errors raised by position-based buffer operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("position (row {row}, column {column}) is out of range")]
    OutOfBounds { row: usize, column: usize },
}

/// Byte offset of `column` inside `line`, or `line.len()` past the end
pub fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

/// Number of chars in a line
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Content of one document
#[derive(Debug, Clone, PartialEq)]
pub struct TextBuffer {
    name: String,
    lines: Vec<String>,
    modified: bool,
}

impl TextBuffer {
    /// Create an empty buffer holding a single empty line
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: vec![String::new()],
            modified: false,
        }
    }

    /// Create a buffer from already-split lines
    pub fn from_lines(name: impl Into<String>, mut lines: Vec<String>) -> Self {
        if lines.is_empty() {
            lines.push(String::new());
        }
        for line in &mut lines {
            line.retain(|ch| ch != '\n' && ch != '\r');
        }
        Self {
            name: name.into(),
            lines,
            modified: false,
        }
    }

    /// Create a buffer from decoded file contents, splitting on `\n` / `\r\n`
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let lines = text.lines().map(str::to_string).collect();
        Self::from_lines(name, lines)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// File name component used to pick a highlight ruleset
    pub fn file_name(&self) -> &str {
        std::path::Path::new(&self.name)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.name)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Length of a line in chars, zero for rows past the end
    pub fn line_length(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |line| char_len(line))
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Whole content joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Pad with empty lines until `row` is a valid index
    pub fn ensure_line(&mut self, row: usize) {
        if self.lines.len() <= row {
            self.lines.resize_with(row + 1, String::new);
            self.modified = true;
        }
    }

    /// Pad `lines[row]` with spaces until it is at least `column` chars long
    pub fn ensure_column(&mut self, row: usize, column: usize) {
        self.ensure_line(row);
        let length = char_len(&self.lines[row]);
        if length < column {
            self.lines[row].extend(std::iter::repeat(' ').take(column - length));
            self.modified = true;
        }
    }

    /// Write `text` at a position, splicing it in or overwriting in place
    ///
    /// `text` must not contain line terminators; callers split lines first.
    pub fn write_text(&mut self, text: &str, column: usize, row: usize, insert_mode: bool) {
        debug_assert!(
            !text.contains(['\n', '\r']),
            "write_text does not interpret line breaks"
        );
        self.ensure_column(row, column);

        let line = &mut self.lines[row];
        let start = byte_offset(line, column);
        if insert_mode {
            line.insert_str(start, text);
        } else {
            let end = byte_offset(line, column + char_len(text));
            line.replace_range(start..end, text);
        }

        self.modified = true;
        self.check_invariants();
    }

    /// Remove the char at `column` on `row`, returning it
    pub fn delete_char(&mut self, column: usize, row: usize) -> Result<char, EditError> {
        let out_of_bounds = EditError::OutOfBounds { row, column };
        let line = self.lines.get_mut(row).ok_or(out_of_bounds.clone())?;
        let (offset, _) = line.char_indices().nth(column).ok_or(out_of_bounds)?;
        let removed = line.remove(offset);

        self.modified = true;
        self.check_invariants();
        Ok(removed)
    }

    /// Split `row` at `column`; the suffix becomes line `row + 1`
    pub fn split_line(&mut self, row: usize, column: usize) -> Result<(), EditError> {
        let line = self
            .lines
            .get_mut(row)
            .ok_or(EditError::OutOfBounds { row, column })?;
        if column > char_len(line) {
            return Err(EditError::OutOfBounds { row, column });
        }

        let suffix = line.split_off(byte_offset(line, column));
        self.lines.insert(row + 1, suffix);

        self.modified = true;
        self.check_invariants();
        Ok(())
    }

    /// Append line `row + 1` onto `row`; no-op when `row` is the last line
    pub fn join_line(&mut self, row: usize) -> Result<(), EditError> {
        if row >= self.lines.len() {
            return Err(EditError::OutOfBounds { row, column: 0 });
        }
        if row + 1 == self.lines.len() {
            return Ok(());
        }

        let next = self.lines.remove(row + 1);
        self.lines[row].push_str(&next);

        self.modified = true;
        self.check_invariants();
        Ok(())
    }

    /// Insert a whole new line before `row` (`row == line_count()` appends)
    pub fn insert_line(&mut self, row: usize, text: &str) -> Result<(), EditError> {
        if row > self.lines.len() {
            return Err(EditError::OutOfBounds { row, column: 0 });
        }
        self.lines.insert(row, text.to_string());

        self.modified = true;
        self.check_invariants();
        Ok(())
    }

    /// Clamp a position to a valid cursor location
    pub fn clamp_position(&self, row: usize, column: usize) -> (usize, usize) {
        let row = row.min(self.lines.len().saturating_sub(1));
        (row, column.min(self.line_length(row)))
    }

    fn check_invariants(&mut self) {
        debug_assert!(!self.lines.is_empty(), "text buffer lost its last line");
        if self.lines.is_empty() {
            tracing::error!("text buffer '{}' had zero lines, restoring one", self.name);
            self.lines.push(String::new());
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("[scratch]")
    }
}
