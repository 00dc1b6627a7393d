//! # Terminal Renderer
//!
//! Paints a [`Frame`] onto a [`RenderStream`]: pane borders and titles,
//! pre-colored content lines, and the terminal cursor.
//!
//! Content lines already carry highlight markup, so widths are measured on
//! the visible text only, with wide chars counted by `unicode-width`.

use anyhow::Result;
use unicode_width::UnicodeWidthChar;

use super::ansi_escape_codes as ansi;
use crate::editor::geometry::Rect;
use crate::editor::io::RenderStream;
use crate::editor::view_models::{Frame, PaneFrame};

/// Trait for rendering frames
pub trait ViewRenderer {
    /// Prepare the terminal for drawing
    fn initialize(&mut self) -> Result<()>;

    /// Repaint every pane and place the cursor
    fn render_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Only move or hide the cursor
    fn render_cursor(&mut self, cursor: Option<(u16, u16)>) -> Result<()>;

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()>;
}

/// Visible width of `text`, skipping ANSI escape sequences
pub fn visual_length(text: &str) -> usize {
    let mut length = 0;
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = ch != 'm';
        } else {
            length += ch.width().unwrap_or(0);
        }
    }

    length
}

/// Cut or pad `text` to exactly `width` visible cells
///
/// Escape sequences are kept; a wide char that would straddle the edge is
/// replaced by padding. Colored text is closed with a reset.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(text.len() + width);
    let mut used = 0;
    let mut in_escape = false;
    let mut styled = false;

    for ch in text.chars() {
        if ch == '\x1b' {
            in_escape = true;
            styled = true;
            fitted.push(ch);
        } else if in_escape {
            in_escape = ch != 'm';
            fitted.push(ch);
        } else {
            let cells = ch.width().unwrap_or(0);
            if used + cells > width {
                break;
            }
            used += cells;
            fitted.push(ch);
        }
    }

    if styled {
        fitted.push_str(ansi::RESET);
    }
    fitted.extend(std::iter::repeat(' ').take(width - used));
    fitted
}

/// Frame renderer over any [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Take ownership of the stream and read the terminal size from it
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn write_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.render_stream.move_cursor(x, y)?;
        self.render_stream.write_all(text.as_bytes())?;
        Ok(())
    }

    fn render_border(&mut self, rect: Rect, title: Option<&str>, focused: bool) -> Result<()> {
        if rect.width < 2 || rect.height < 2 {
            return Ok(());
        }
        let color = if focused {
            ansi::FG_BORDER_FOCUSED
        } else {
            ansi::FG_DIM_TEXT
        };
        let inner = rect.width as usize - 2;

        let label = title
            .map(|title| format!(" {title} "))
            .map(|label| fit_to_width(&label, visual_length(&label).min(inner)))
            .unwrap_or_default();
        let fill = inner - visual_length(&label);
        let weight = if focused { ansi::BOLD } else { "" };
        let top = format!(
            "{color}┌{weight}{label}{reset}{color}{line}┐{reset}",
            line = "─".repeat(fill),
            reset = ansi::RESET,
        );
        self.write_at(rect.x, rect.y, &top)?;

        for row in rect.y + 1..rect.bottom() - 1 {
            let side = format!("{color}│{}", ansi::RESET);
            self.write_at(rect.x, row, &side)?;
            self.write_at(rect.right() - 1, row, &side)?;
        }

        let bottom = format!("{color}└{}┘{}", "─".repeat(inner), ansi::RESET);
        self.write_at(rect.x, rect.bottom() - 1, &bottom)
    }

    fn render_pane(&mut self, pane: &PaneFrame) -> Result<()> {
        if pane.rect.is_empty() {
            return Ok(());
        }

        let border = u16::from(pane.bordered);
        if pane.bordered {
            self.render_border(pane.rect, pane.title.as_deref(), pane.focused)?;
        }

        let content = pane.rect.inset(border);
        for row in 0..content.height {
            let line = pane.lines.get(row as usize).map_or("", String::as_str);
            let mut text = fit_to_width(line, content.width as usize);
            // Borderless panes without a title bar are the status line
            if !pane.bordered && pane.title.is_none() {
                text = format!("{}{}{}", ansi::REVERSE, text, ansi::RESET);
            }
            self.write_at(content.x, content.y + row, &text)?;
        }
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.clear_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_frame(&mut self, frame: &Frame) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        for pane in &frame.panes {
            self.render_pane(pane)?;
        }

        self.render_cursor(frame.cursor)
    }

    fn render_cursor(&mut self, cursor: Option<(u16, u16)>) -> Result<()> {
        match cursor {
            Some((x, y)) => {
                self.render_stream.move_cursor(x, y)?;
                self.render_stream.show_cursor()?;
            }
            None => self.render_stream.hide_cursor()?,
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.flush()?;
        Ok(())
    }
}
