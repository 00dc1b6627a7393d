//! # Editor State
//!
//! Cursor and viewport controller for one editor pane. Owns the pane's
//! [`TextBuffer`] and turns logical keys into buffer mutations, cursor moves
//! and scroll corrections.
//!
//! Every key runs to completion in three steps:
//! 1. mutate the buffer and/or the cursor
//! 2. correct the scroll offset so the cursor is visible
//! 3. report what went stale as [`ViewEvent`]s
//!
//! Columns are char indices into the line and already absolute: horizontal
//! scroll only affects where the cursor lands on screen. On screen, columns
//! are counted in terminal cells, so a wide char takes two.

use crate::editor::events::{EditorKey, InputMode, LogicalPosition, ViewEvent};
use crate::editor::geometry::{Dimensions, Position};
use crate::editor::highlight::{clip_spans, find_spans, render_spans, Highlighter};
use crate::editor::models::text_buffer::char_len;
use crate::editor::models::{EditError, FocusSummary, TextBuffer};
use crate::editor::services::{EditorServices, Indentation};
use crate::editor::views::ansi_escape_codes as ansi;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

/// Marker drawn on viewport rows past the end of the buffer
const EMPTY_ROW_MARKER: &str = "~";

/// Terminal cells one char is painted in; tabs paint as a single space
fn cell_width(ch: char) -> usize {
    if ch == '\t' {
        1
    } else {
        ch.width().unwrap_or(0)
    }
}

/// State of a single editor pane
#[derive(Debug, Clone)]
pub struct EditorState {
    buffer: TextBuffer,
    cursor: LogicalPosition,
    scroll_offset: Position, // (vertical, horizontal)
    viewport: Dimensions,
    input_mode: InputMode,
    message: Option<String>,
    /// Where the buffer is saved, `None` for scratch buffers
    path: Option<PathBuf>,
}

impl EditorState {
    pub fn new(buffer: TextBuffer, input_mode: InputMode) -> Self {
        Self {
            buffer,
            cursor: LogicalPosition::zero(),
            scroll_offset: Position::origin(),
            viewport: Dimensions::zero(),
            input_mode,
            message: None,
            path: None,
        }
    }

    /// Attach the file the buffer is loaded from and saved to
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Direct buffer access for whole-document operations (load, save)
    ///
    /// Callers that shrink the buffer should follow up with
    /// [`EditorState::set_cursor`] so the cursor stays inside it.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn cursor(&self) -> LogicalPosition {
        self.cursor
    }

    /// Move the cursor, clamped into the buffer
    pub fn set_cursor(&mut self, position: LogicalPosition) {
        let (line, column) = self.buffer.clamp_position(position.line, position.column);
        self.cursor = LogicalPosition::new(line, column);
        self.correct_scroll();
    }

    pub fn scroll_offset(&self) -> Position {
        self.scroll_offset
    }

    pub fn viewport(&self) -> Dimensions {
        self.viewport
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, input_mode: InputMode) {
        self.input_mode = input_mode;
    }

    /// Transient message shown in place of the pane title
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Text of the line under the cursor
    pub fn current_line(&self) -> &str {
        self.buffer.line(self.cursor.line).unwrap_or_default()
    }

    /// Snapshot for the status pane
    pub fn summary(&self) -> FocusSummary {
        FocusSummary {
            name: self.buffer.name().to_string(),
            modified: self.buffer.is_modified(),
            input_mode: self.input_mode,
            cursor: self.cursor,
            line_count: self.buffer.line_count(),
            message: self.message.clone(),
        }
    }

    /// Change the content area size, then re-run scroll correction
    pub fn resize(&mut self, viewport: Dimensions) {
        self.viewport = viewport;
        self.correct_scroll();
    }

    fn visible_height(&self) -> usize {
        self.viewport.height.max(1)
    }

    /// Handle one logical key
    ///
    /// Navigation keys never touch the buffer; editing keys always leave the
    /// cursor inside the buffer. A clipboard failure during paste becomes the
    /// pane message instead of an error.
    pub fn handle_key(
        &mut self,
        key: EditorKey,
        services: &mut EditorServices<'_>,
    ) -> Result<Vec<ViewEvent>, EditError> {
        // Whole-document replacements may have left the cursor behind
        let (line, column) = self.buffer.clamp_position(self.cursor.line, self.cursor.column);
        self.cursor = LogicalPosition::new(line, column);
        // Messages last until the next key
        let had_message = self.message.take().is_some();

        let old_scroll = self.scroll_offset;
        let mut events = Vec::new();

        match key {
            EditorKey::Up
            | EditorKey::Down
            | EditorKey::Left
            | EditorKey::Right
            | EditorKey::Home
            | EditorKey::End
            | EditorKey::PageUp
            | EditorKey::PageDown => {
                self.navigate(key);
                events.push(ViewEvent::ActiveCursorUpdateRequired);
            }
            EditorKey::Enter => self.split_at_cursor()?,
            EditorKey::Backspace => self.delete_backward()?,
            EditorKey::Delete => self.delete_forward()?,
            EditorKey::Tab => self.insert_indentation(services.indentation),
            EditorKey::Char(ch) => self.insert_char(ch),
            EditorKey::Paste => match services.clipboard.read() {
                Ok(text) => self.insert_text(&text, services.indentation)?,
                Err(error) => {
                    tracing::warn!("clipboard read failed: {:#}", error);
                    self.set_message(format!("Paste failed: {error}"));
                }
            },
            EditorKey::ToggleInsert => {
                self.input_mode = self.input_mode.toggled();
                tracing::debug!("input mode is now {}", self.input_mode.label());
            }
        }
        if !key.is_navigation() || had_message {
            events.push(ViewEvent::CurrentPaneRedrawRequired);
        }

        self.correct_scroll();
        if self.scroll_offset.row != old_scroll.row {
            events.push(ViewEvent::CurrentPaneScrollChanged {
                old_offset: old_scroll.row,
                new_offset: self.scroll_offset.row,
            });
        }
        if self.scroll_offset.col != old_scroll.col
            && !events.contains(&ViewEvent::CurrentPaneRedrawRequired)
        {
            events.push(ViewEvent::CurrentPaneRedrawRequired);
        }
        events.push(ViewEvent::StatusBarUpdateRequired);

        Ok(events)
    }

    fn navigate(&mut self, key: EditorKey) {
        let line_length = self.buffer.line_length(self.cursor.line);
        match key {
            EditorKey::Up => self.move_vertically(-1),
            EditorKey::Down => self.move_vertically(1),
            EditorKey::Left if self.cursor.column > 0 => self.cursor.column -= 1,
            EditorKey::Right if self.cursor.column < line_length => self.cursor.column += 1,
            EditorKey::Home => self.cursor.column = 0,
            EditorKey::End => self.cursor.column = line_length,
            EditorKey::PageUp => self.page(-1),
            EditorKey::PageDown => self.page(1),
            _ => {}
        }
    }

    /// Move by `delta` rows, clamped to the buffer
    ///
    /// The column is clamped to the destination line and that clamped value
    /// is what later moves start from.
    fn move_vertically(&mut self, delta: isize) {
        let last_line = self.buffer.line_count() - 1;
        let line = self
            .cursor
            .line
            .saturating_add_signed(delta)
            .min(last_line);
        let column = self.cursor.column.min(self.buffer.line_length(line));
        self.cursor = LogicalPosition::new(line, column);
    }

    /// Step by 90% of the viewport and recenter the viewport on the cursor
    fn page(&mut self, direction: isize) {
        let height = self.visible_height();
        let step = (height * 9 / 10).max(1) as isize;
        self.move_vertically(step * direction);

        let max_scroll = self.buffer.line_count().saturating_sub(height);
        self.scroll_offset.row = self.cursor.line.saturating_sub(height / 2).min(max_scroll);
    }

    fn split_at_cursor(&mut self) -> Result<(), EditError> {
        self.buffer.split_line(self.cursor.line, self.cursor.column)?;
        self.cursor = LogicalPosition::new(self.cursor.line + 1, 0);
        Ok(())
    }

    fn delete_backward(&mut self) -> Result<(), EditError> {
        let LogicalPosition { line, column } = self.cursor;
        if column > 0 {
            self.buffer.delete_char(column - 1, line)?;
            self.cursor.column -= 1;
        } else if line > 0 {
            let previous_length = self.buffer.line_length(line - 1);
            self.buffer.join_line(line - 1)?;
            self.cursor = LogicalPosition::new(line - 1, previous_length);
        }
        Ok(())
    }

    fn delete_forward(&mut self) -> Result<(), EditError> {
        let LogicalPosition { line, column } = self.cursor;
        if column < self.buffer.line_length(line) {
            self.buffer.delete_char(column, line)?;
        } else if line + 1 < self.buffer.line_count() {
            self.buffer.join_line(line)?;
        }
        Ok(())
    }

    fn insert_indentation(&mut self, indentation: &Indentation) {
        let text = indentation.indentation_for(self.cursor.column);
        self.write_at_cursor(&text);
    }

    fn insert_char(&mut self, ch: char) {
        let mut encoded = [0u8; 4];
        self.write_at_cursor(ch.encode_utf8(&mut encoded));
    }

    /// Write single-line text at the cursor in the current mode and step past it
    fn write_at_cursor(&mut self, text: &str) {
        self.buffer.write_text(
            text,
            self.cursor.column,
            self.cursor.line,
            self.input_mode.is_insert(),
        );
        self.cursor.column += char_len(text);
    }

    /// Insert possibly multi-line text at the cursor
    ///
    /// Tabs are expanded first. A single line behaves like typed input. More
    /// lines split the current line: the first payload line joins the prefix,
    /// the last one is prepended to the suffix, and the cursor ends right
    /// after the last payload line's text.
    pub fn insert_text(&mut self, text: &str, indentation: &Indentation) -> Result<(), EditError> {
        if text.is_empty() {
            return Ok(());
        }

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let expanded = indentation.expand_tabs(&normalized, self.cursor.column);
        let payload: Vec<&str> = expanded.split('\n').collect();

        if let [single] = payload.as_slice() {
            self.write_at_cursor(single);
            return Ok(());
        }

        let LogicalPosition { line, column } = self.cursor;
        self.buffer.split_line(line, column)?;
        self.buffer.write_text(payload[0], column, line, true);

        let interior = &payload[1..payload.len() - 1];
        for (offset, text) in interior.iter().enumerate() {
            self.buffer.insert_line(line + 1 + offset, text)?;
        }

        let last_line = line + payload.len() - 1;
        let last = payload[payload.len() - 1];
        self.buffer.write_text(last, 0, last_line, true);
        self.cursor = LogicalPosition::new(last_line, char_len(last));

        tracing::debug!(
            "inserted {} lines into {} at {}:{}",
            payload.len(),
            self.buffer.name(),
            line,
            column
        );
        Ok(())
    }

    /// Restore `scroll <= cursor < scroll + height` on both axes
    ///
    /// Returns whether the vertical offset moved.
    pub fn correct_scroll(&mut self) -> bool {
        let height = self.visible_height();
        let old_row = self.scroll_offset.row;

        let max_scroll = self.buffer.line_count().saturating_sub(height);
        if self.cursor.line > self.scroll_offset.row + height - 1 {
            self.scroll_offset.row = (self.cursor.line + 1 - height).min(max_scroll);
        }
        if self.cursor.line < self.scroll_offset.row {
            self.scroll_offset.row = self.cursor.line;
        }

        if self.viewport.width > 0 {
            let width = self.viewport.width;
            if self.cursor.column < self.scroll_offset.col {
                self.scroll_offset.col = self.cursor.column;
            } else if self.cells_before_cursor() + self.cursor_cells() > width {
                self.scroll_offset.col = self.leftmost_scroll_col(width);
            }
        }

        self.scroll_offset.row != old_row
    }

    /// Cell widths of the cursor line's chars, padded with single cells past
    /// the end of the line
    fn cursor_line_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.current_line()
            .chars()
            .map(cell_width)
            .chain(std::iter::repeat(1))
    }

    /// Cells between the horizontal scroll offset and the cursor
    fn cells_before_cursor(&self) -> usize {
        let from = self.scroll_offset.col;
        self.cursor_line_cells()
            .skip(from)
            .take(self.cursor.column.saturating_sub(from))
            .sum()
    }

    /// Cells the cursor covers: the char under it, or one past the end
    fn cursor_cells(&self) -> usize {
        self.cursor_line_cells()
            .nth(self.cursor.column)
            .unwrap_or(1)
            .max(1)
    }

    /// Smallest horizontal offset that still shows the cursor's cells
    /// within `width`
    fn leftmost_scroll_col(&self, width: usize) -> usize {
        let widths: Vec<usize> = self.cursor_line_cells().take(self.cursor.column).collect();
        let mut start = self.cursor.column;
        let mut used = self.cursor_cells();
        for cells in widths.iter().rev() {
            if used + cells > width {
                break;
            }
            used += cells;
            start -= 1;
        }
        start
    }

    /// Cursor relative to the top-left of the content area, in cells, `None`
    /// when it is scrolled out of view
    pub fn cursor_in_viewport(&self) -> Option<Position> {
        let row = self.cursor.line.checked_sub(self.scroll_offset.row)?;
        if self.cursor.column < self.scroll_offset.col {
            return None;
        }
        let col = self.cells_before_cursor();
        (row < self.viewport.height && col < self.viewport.width.max(1))
            .then_some(Position::new(row, col))
    }

    /// Lines to paint in the content area, one per viewport row
    ///
    /// Scroll is corrected first. Each visible line is cut to the horizontal
    /// window and colored by the ruleset matching the buffer's file name.
    /// Rows past the end of the buffer show a dim marker.
    pub fn redraw(&mut self, highlighter: &Highlighter) -> Result<Vec<String>, EditError> {
        if self.cursor.line >= self.buffer.line_count() {
            return Err(EditError::OutOfBounds {
                row: self.cursor.line,
                column: self.cursor.column,
            });
        }
        self.correct_scroll();

        let ruleset = highlighter.ruleset_for(self.buffer.file_name());
        let from = self.scroll_offset.col;

        let mut rendered = Vec::with_capacity(self.viewport.height);
        for row in self.scroll_offset.row..self.scroll_offset.row + self.viewport.height {
            let Some(line) = self.buffer.line(row) else {
                rendered.push(format!("{}{}{}", ansi::FG_DIM_TEXT, EMPTY_ROW_MARKER, ansi::RESET));
                continue;
            };

            // As many chars as fit in the width; a wide char never straddles the edge
            let mut used = 0;
            let window: String = line
                .chars()
                .skip(from)
                .map(|ch| if ch == '\t' { ' ' } else { ch })
                .take_while(|&ch| {
                    used += cell_width(ch);
                    used <= self.viewport.width
                })
                .collect();
            let to = from + char_len(&window);

            let text = match ruleset {
                Some(ruleset) => {
                    let spans = find_spans(line, ruleset);
                    render_spans(&window, &clip_spans(&spans, from, to))
                }
                None => window,
            };
            rendered.push(text);
        }
        Ok(rendered)
    }
}
