//! # Pane Layout
//!
//! Owns every pane, computes their rectangles, tracks focus and places the
//! terminal cursor.
//!
//! PaneLayout is a layout manager only. Editing logic lives in
//! [`EditorState`]; this module decides where panes go and forwards keys to
//! the focused one.
//!
//! LAYOUT ALGORITHM:
//! Greedy packing in insertion order over a shrinking "remaining" rectangle:
//! 1. Vertical docks (top xor bottom) cut a strip off the top or bottom,
//!    `fixed_height` tall or half of what is left.
//! 2. Panes spanning top and bottom take the remaining rows.
//! 3. Horizontal docks (left xor right) cut a column off the left or right,
//!    `fixed_width` wide or half of what is left.
//! 4. Panes spanning left and right take the remaining columns; panes with
//!    no anchor on an axis take that axis in full.
//! 5. Panes with no anchors at all get whatever is left.
//!
//! Requested sizes are clamped to the space left, so nothing goes negative.

use crate::editor::events::{Anchors, EditorKey, PaneId, ViewEvent};
use crate::editor::geometry::Rect;
use crate::editor::highlight::Highlighter;
use crate::editor::models::EditError;
use crate::editor::services::EditorServices;
use crate::editor::views::ansi_escape_codes as ansi;

use super::editor_state::EditorState;
use super::pane::{Pane, PaneKind};

/// Everything the renderer needs for one pane
#[derive(Debug, Clone, PartialEq)]
pub struct PaneFrame {
    pub id: PaneId,
    pub rect: Rect,
    pub bordered: bool,
    pub focused: bool,
    pub title: Option<String>,
    pub lines: Vec<String>,
}

/// One full screen: every pane plus where the terminal cursor goes
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub panes: Vec<PaneFrame>,
    /// Absolute `(x, y)` of the terminal cursor, `None` to hide it
    pub cursor: Option<(u16, u16)>,
}

/// Ordered pane collection with focus
#[derive(Debug)]
pub struct PaneLayout {
    panes: Vec<Pane>,
    focused: Option<PaneId>,
    next_id: u32,
    terminal_size: (u16, u16),
}

impl PaneLayout {
    pub fn new(terminal_size: (u16, u16)) -> Self {
        Self {
            panes: Vec::new(),
            focused: None,
            next_id: 1,
            terminal_size,
        }
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|pane| pane.id == id)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|pane| pane.id == id)
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Ids of the editor panes in insertion order
    pub fn editor_ids(&self) -> Vec<PaneId> {
        self.panes
            .iter()
            .filter(|pane| pane.is_editor())
            .map(Pane::id)
            .collect()
    }

    pub fn focused(&self) -> Option<PaneId> {
        self.focused
    }

    pub fn focused_editor(&self) -> Option<&EditorState> {
        self.pane(self.focused?)?.as_editor()
    }

    pub fn focused_editor_mut(&mut self) -> Option<&mut EditorState> {
        let focused = self.focused?;
        self.pane_mut(focused)?.as_editor_mut()
    }

    /// Append a pane and re-run layout
    ///
    /// The first editor pane added receives focus.
    pub fn add_pane(&mut self, mut pane: Pane) -> PaneId {
        let id = PaneId(self.next_id);
        self.next_id += 1;
        pane.id = id;

        tracing::debug!("adding {} with anchors {:?}", id, pane.anchors());
        let focusable = pane.is_editor();
        self.panes.push(pane);
        if self.focused.is_none() && focusable {
            self.focused = Some(id);
        }

        self.recompute();
        id
    }

    /// Remove a pane and re-run layout
    ///
    /// When the focused pane goes away focus moves to the editor that took
    /// its place, or else to the closest editor before it.
    pub fn remove_pane(&mut self, id: PaneId) -> Option<Pane> {
        let index = self.panes.iter().position(|pane| pane.id == id)?;
        let removed = self.panes.remove(index);
        tracing::debug!("removed {}", id);

        if self.focused == Some(id) {
            let after = self.panes[index..].iter().find(|pane| pane.is_editor());
            let before = self.panes[..index].iter().rev().find(|pane| pane.is_editor());
            self.focused = after.or(before).map(Pane::id);
        }

        self.recompute();
        Some(removed)
    }

    /// Focus a pane; unknown ids and non-editor panes are ignored
    pub fn focus(&mut self, id: PaneId) -> Vec<ViewEvent> {
        let focusable = self.pane(id).is_some_and(Pane::is_editor);
        if !focusable || self.focused == Some(id) {
            return Vec::new();
        }
        self.focused = Some(id);
        vec![
            ViewEvent::FocusSwitched,
            ViewEvent::StatusBarUpdateRequired,
            ViewEvent::ActiveCursorUpdateRequired,
        ]
    }

    /// Cycle focus to the next editor pane by insertion order
    pub fn focus_next(&mut self) -> Vec<ViewEvent> {
        let editors = self.editor_ids();
        if editors.len() < 2 {
            return Vec::new();
        }
        let next = match self
            .focused
            .and_then(|focused| editors.iter().position(|&id| id == focused))
        {
            Some(index) => editors[(index + 1) % editors.len()],
            None => editors[0],
        };
        self.focus(next)
    }

    /// New terminal size; re-runs layout
    pub fn resize(&mut self, width: u16, height: u16) -> Vec<ViewEvent> {
        self.terminal_size = (width, height);
        self.recompute();
        vec![ViewEvent::FullRedrawRequired]
    }

    /// Forward a key to the focused pane
    ///
    /// Without a focused editor the key is dropped before dispatch.
    pub fn handle_key(
        &mut self,
        key: EditorKey,
        services: &mut EditorServices<'_>,
    ) -> Result<Vec<ViewEvent>, EditError> {
        let Some(focused) = self.focused else {
            tracing::debug!("no focused pane, dropping {:?}", key);
            return Ok(Vec::new());
        };
        let Some(pane) = self.pane_mut(focused) else {
            return Ok(Vec::new());
        };

        match pane.kind_mut() {
            PaneKind::Editor(state) => state.handle_key(key, services),
            PaneKind::Status(_) => {
                tracing::debug!("{} does not accept keys", focused);
                Ok(Vec::new())
            }
        }
    }

    /// Recompute every pane rectangle and push content sizes into editors
    pub fn recompute(&mut self) {
        let (width, height) = self.terminal_size;
        let mut remaining = Rect::new(0, 0, width, height);
        let mut placed = vec![false; self.panes.len()];

        // Vertical docks: strips off the top or bottom
        for (index, pane) in self.panes.iter_mut().enumerate() {
            let anchors = pane.anchors();
            if !anchors.is_docked_vertically() {
                continue;
            }
            let strip_height = pane
                .fixed_height()
                .unwrap_or(remaining.height / 2)
                .min(remaining.height);
            let (x, strip_width) = horizontal_extent(pane, remaining);

            let y = if anchors.contains(Anchors::TOP) {
                let y = remaining.y;
                remaining.y += strip_height;
                y
            } else {
                remaining.bottom() - strip_height
            };
            remaining.height -= strip_height;

            pane.rect = Rect::new(x, y, strip_width, strip_height);
            placed[index] = true;
        }

        // Rows left after vertical docks, shared by every other pane
        let rows = remaining;

        // Horizontal docks: columns off the left or right
        for (index, pane) in self.panes.iter_mut().enumerate() {
            let anchors = pane.anchors();
            if placed[index] || !anchors.is_docked_horizontally() {
                continue;
            }
            let column_width = pane
                .fixed_width()
                .unwrap_or(remaining.width / 2)
                .min(remaining.width);
            let (y, column_height) = vertical_extent(pane, rows);

            let x = if anchors.contains(Anchors::LEFT) {
                let x = remaining.x;
                remaining.x += column_width;
                x
            } else {
                remaining.right() - column_width
            };
            remaining.width -= column_width;

            pane.rect = Rect::new(x, y, column_width, column_height);
            placed[index] = true;
        }

        // Spanning and floating panes fill what is left
        for (index, pane) in self.panes.iter_mut().enumerate() {
            if placed[index] {
                continue;
            }
            let (x, fill_width) = horizontal_extent(pane, remaining);
            let (y, fill_height) = vertical_extent(pane, remaining);
            pane.rect = Rect::new(x, y, fill_width, fill_height);
        }

        for pane in &mut self.panes {
            let content = pane.content_rect().dimensions();
            if let PaneKind::Editor(state) = pane.kind_mut() {
                state.resize(content);
            }
        }

        tracing::debug!(
            "layout for {}x{}: {:?}",
            width,
            height,
            self.panes
                .iter()
                .map(|pane| (pane.id(), pane.rect()))
                .collect::<Vec<_>>()
        );
    }

    /// Redraw every pane and place the terminal cursor
    ///
    /// A pane whose redraw fails shows the error instead of its content; the
    /// other panes are unaffected.
    pub fn render(&mut self, highlighter: &Highlighter) -> Frame {
        let summary = self.focused_editor().map(EditorState::summary);
        let focused = self.focused;

        let panes = self
            .panes
            .iter_mut()
            .map(|pane| {
                let id = pane.id();
                let rect = pane.rect();
                let content = pane.content_rect();
                let title = pane.title();
                let lines = match pane.kind_mut() {
                    PaneKind::Editor(state) => match state.redraw(highlighter) {
                        Ok(lines) => lines,
                        Err(error) => {
                            tracing::error!("redraw of {} failed: {}", id, error);
                            vec![format!("{}redraw failed: {}{}", ansi::FG_ERROR, error, ansi::RESET)]
                        }
                    },
                    PaneKind::Status(status) => {
                        status.set_focus(summary.clone());
                        vec![status.render(content.width as usize)]
                    }
                };
                PaneFrame {
                    id,
                    rect,
                    bordered: pane.is_bordered(),
                    focused: focused == Some(id),
                    title,
                    lines,
                }
            })
            .collect();

        Frame {
            panes,
            cursor: self.cursor_position(),
        }
    }

    /// Absolute terminal cursor for the focused editor, `None` when it is
    /// scrolled out of view or the pane has no room
    pub fn cursor_position(&self) -> Option<(u16, u16)> {
        let pane = self.pane(self.focused?)?;
        let state = pane.as_editor()?;
        let content = pane.content_rect();
        if content.is_empty() {
            return None;
        }

        let position = state.cursor_in_viewport()?;
        let row = u16::try_from(position.row).ok()?;
        let col = u16::try_from(position.col).ok()?;
        if row >= content.height || col >= content.width {
            return None;
        }

        let border = pane.border_width();
        Some((pane.rect().x + border + col, pane.rect().y + border + row))
    }
}

/// Columns a pane gets inside `area`: docked panes keep their fixed width
/// against their edge, everything else takes the full width
fn horizontal_extent(pane: &Pane, area: Rect) -> (u16, u16) {
    let anchors = pane.anchors();
    let requested = pane.fixed_width().map_or(area.width, |w| w.min(area.width));
    if anchors.is_docked_horizontally() {
        if anchors.contains(Anchors::LEFT) {
            (area.x, requested)
        } else {
            (area.right() - requested, requested)
        }
    } else if anchors.spans_horizontally() {
        (area.x, requested)
    } else {
        (area.x, area.width)
    }
}

/// Rows a pane gets inside `area`, mirroring [`horizontal_extent`]
fn vertical_extent(pane: &Pane, area: Rect) -> (u16, u16) {
    let anchors = pane.anchors();
    let requested = pane.fixed_height().map_or(area.height, |h| h.min(area.height));
    if anchors.is_docked_vertically() {
        if anchors.contains(Anchors::TOP) {
            (area.y, requested)
        } else {
            (area.bottom() - requested, requested)
        }
    } else if anchors.spans_vertically() {
        (area.y, requested)
    } else {
        (area.y, area.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::events::{InputMode, LogicalPosition};
    use crate::editor::models::TextBuffer;
    use crate::editor::services::{Indentation, MemoryClipboard};

    fn editor(name: &str, anchors: Anchors) -> Pane {
        let state = EditorState::new(TextBuffer::new(name), InputMode::Insert);
        Pane::editor(state, anchors)
    }

    fn status() -> Pane {
        Pane::status(Anchors::BOTTOM | Anchors::LEFT | Anchors::RIGHT)
    }

    fn press(layout: &mut PaneLayout, key: EditorKey) -> Vec<ViewEvent> {
        let indentation = Indentation::default();
        let mut clipboard = MemoryClipboard::new();
        let mut services = EditorServices::new(&indentation, &mut clipboard);
        layout.handle_key(key, &mut services).unwrap()
    }

    fn assert_tiles(layout: &PaneLayout) {
        let (width, height) = layout.terminal_size();
        let rects: Vec<Rect> = layout.panes().iter().map(Pane::rect).collect();

        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
            assert!(a.right() <= width && a.bottom() <= height);
        }
        let covered: usize = rects.iter().map(|rect| rect.area()).sum();
        assert_eq!(covered, width as usize * height as usize);
    }

    #[test]
    fn fill_pane_should_take_space_left_by_left_dock() {
        let mut layout = PaneLayout::new((100, 40));
        let sidebar = layout.add_pane(
            editor("tree", Anchors::TOP | Anchors::BOTTOM | Anchors::LEFT).with_fixed_width(30),
        );
        let main = layout.add_pane(editor("main.rs", Anchors::ALL));

        assert_eq!(layout.pane(sidebar).unwrap().rect(), Rect::new(0, 0, 30, 40));
        let rect = layout.pane(main).unwrap().rect();
        assert_eq!((rect.x, rect.width), (30, 70));
        assert_eq!((rect.y, rect.height), (0, 40));
        assert_tiles(&layout);
    }

    #[test]
    fn status_and_stacked_top_docks_should_tile_terminal() {
        let mut layout = PaneLayout::new((80, 25));
        let status = layout.add_pane(status());
        let main = layout.add_pane(editor("main.rs", Anchors::ALL));
        let first = layout.add_pane(editor("a.rs", Anchors::TOP | Anchors::LEFT | Anchors::RIGHT));
        let second = layout.add_pane(editor("b.rs", Anchors::TOP | Anchors::LEFT | Anchors::RIGHT));

        assert_eq!(layout.pane(status).unwrap().rect(), Rect::new(0, 24, 80, 1));
        assert_eq!(layout.pane(first).unwrap().rect(), Rect::new(0, 0, 80, 12));
        assert_eq!(layout.pane(second).unwrap().rect(), Rect::new(0, 12, 80, 6));
        assert_eq!(layout.pane(main).unwrap().rect(), Rect::new(0, 18, 80, 6));
        assert_tiles(&layout);
    }

    #[test]
    fn right_dock_should_be_placed_against_right_edge() {
        let mut layout = PaneLayout::new((100, 30));
        let main = layout.add_pane(editor("main.rs", Anchors::ALL));
        let right = layout.add_pane(
            editor("side", Anchors::TOP | Anchors::BOTTOM | Anchors::RIGHT).with_fixed_width(20),
        );

        assert_eq!(layout.pane(right).unwrap().rect(), Rect::new(80, 0, 20, 30));
        assert_eq!(layout.pane(main).unwrap().rect(), Rect::new(0, 0, 80, 30));
        assert_tiles(&layout);
    }

    #[test]
    fn vertical_and_horizontal_docks_should_combine() {
        let mut layout = PaneLayout::new((120, 40));
        layout.add_pane(status());
        layout.add_pane(editor("tree", Anchors::TOP | Anchors::BOTTOM | Anchors::LEFT).with_fixed_width(25));
        layout.add_pane(editor("log", Anchors::TOP | Anchors::LEFT | Anchors::RIGHT).with_fixed_height(10));
        let main = layout.add_pane(editor("main.rs", Anchors::ALL));

        assert_eq!(layout.pane(main).unwrap().rect(), Rect::new(25, 10, 95, 29));
        assert_tiles(&layout);
    }

    #[test]
    fn oversized_requests_should_be_clamped() {
        let mut layout = PaneLayout::new((50, 10));
        let big = layout.add_pane(
            editor("big", Anchors::TOP | Anchors::LEFT | Anchors::RIGHT).with_fixed_height(500),
        );
        let main = layout.add_pane(editor("main.rs", Anchors::ALL));

        assert_eq!(layout.pane(big).unwrap().rect(), Rect::new(0, 0, 50, 10));
        let rect = layout.pane(main).unwrap().rect();
        assert_eq!(rect.height, 0);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn floating_pane_should_take_leftover_rectangle() {
        let mut layout = PaneLayout::new((60, 20));
        layout.add_pane(editor("top", Anchors::TOP).with_fixed_height(5));
        let floating = layout.add_pane(editor("float", Anchors::NONE));

        assert_eq!(layout.pane(floating).unwrap().rect(), Rect::new(0, 5, 60, 15));
    }

    #[test]
    fn fixed_size_should_cap_spanning_pane() {
        let mut layout = PaneLayout::new((60, 20));
        let pane = layout.add_pane(editor("main", Anchors::ALL).with_fixed_height(8).with_fixed_width(30));
        assert_eq!(layout.pane(pane).unwrap().rect(), Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn resize_should_recompute_and_resize_viewports() {
        let mut layout = PaneLayout::new((80, 24));
        let main = layout.add_pane(editor("main", Anchors::ALL).with_border(true));

        let events = layout.resize(100, 30);

        assert_eq!(events, vec![ViewEvent::FullRedrawRequired]);
        let pane = layout.pane(main).unwrap();
        assert_eq!(pane.rect(), Rect::new(0, 0, 100, 30));
        assert_eq!(pane.as_editor().unwrap().viewport().width, 98);
        assert_eq!(pane.as_editor().unwrap().viewport().height, 28);
    }

    #[test]
    fn removing_dock_should_give_space_back() {
        let mut layout = PaneLayout::new((100, 40));
        let sidebar = layout.add_pane(
            editor("tree", Anchors::TOP | Anchors::BOTTOM | Anchors::LEFT).with_fixed_width(30),
        );
        let main = layout.add_pane(editor("main", Anchors::ALL));

        layout.remove_pane(sidebar);

        assert_eq!(layout.pane(main).unwrap().rect(), Rect::new(0, 0, 100, 40));
        assert!(layout.remove_pane(sidebar).is_none());
    }

    #[test]
    fn first_editor_should_receive_focus() {
        let mut layout = PaneLayout::new((80, 24));
        layout.add_pane(status());
        assert_eq!(layout.focused(), None);

        let main = layout.add_pane(editor("main", Anchors::ALL));
        layout.add_pane(editor("other", Anchors::TOP));

        assert_eq!(layout.focused(), Some(main));
    }

    #[test]
    fn focus_should_ignore_unknown_and_status_panes() {
        let mut layout = PaneLayout::new((80, 24));
        let status = layout.add_pane(status());
        let main = layout.add_pane(editor("main", Anchors::ALL));

        assert!(layout.focus(PaneId(999)).is_empty());
        assert!(layout.focus(status).is_empty());
        assert_eq!(layout.focused(), Some(main));
    }

    #[test]
    fn focus_next_should_cycle_editors_only() {
        let mut layout = PaneLayout::new((80, 24));
        layout.add_pane(status());
        let a = layout.add_pane(editor("a", Anchors::ALL));
        let b = layout.add_pane(editor("b", Anchors::TOP));
        let c = layout.add_pane(editor("c", Anchors::TOP));

        assert!(layout.focus_next().contains(&ViewEvent::FocusSwitched));
        assert_eq!(layout.focused(), Some(b));
        layout.focus_next();
        assert_eq!(layout.focused(), Some(c));
        layout.focus_next();
        assert_eq!(layout.focused(), Some(a));
    }

    #[test]
    fn focus_next_with_single_editor_should_do_nothing() {
        let mut layout = PaneLayout::new((80, 24));
        assert!(layout.focus_next().is_empty());

        let only = layout.add_pane(editor("only", Anchors::ALL));
        layout.add_pane(status());
        assert!(layout.focus_next().is_empty());
        assert_eq!(layout.focused(), Some(only));
    }

    #[test]
    fn removing_focused_pane_should_focus_nearest_editor() {
        let mut layout = PaneLayout::new((80, 24));
        let a = layout.add_pane(editor("a", Anchors::ALL));
        let b = layout.add_pane(editor("b", Anchors::TOP));
        let status = layout.add_pane(status());
        let c = layout.add_pane(editor("c", Anchors::TOP));

        layout.focus(b);
        layout.remove_pane(b);
        assert_eq!(layout.focused(), Some(c));

        layout.remove_pane(c);
        assert_eq!(layout.focused(), Some(a));

        layout.remove_pane(a);
        assert_eq!(layout.focused(), None);
        assert!(layout.pane(status).is_some());
    }

    #[test]
    fn keys_should_reach_focused_editor_only() {
        let mut layout = PaneLayout::new((80, 24));
        let a = layout.add_pane(editor("a", Anchors::ALL));
        let b = layout.add_pane(editor("b", Anchors::TOP));

        layout.focus(b);
        press(&mut layout, EditorKey::Char('x'));

        assert_eq!(layout.pane(a).unwrap().as_editor().unwrap().buffer().lines(), [""]);
        assert_eq!(layout.pane(b).unwrap().as_editor().unwrap().buffer().lines(), ["x"]);
    }

    #[test]
    fn keys_without_focus_should_be_dropped() {
        let mut layout = PaneLayout::new((80, 24));
        layout.add_pane(status());
        assert!(press(&mut layout, EditorKey::Char('x')).is_empty());
    }

    #[test]
    fn cursor_should_be_translated_by_rect_and_border() {
        let mut layout = PaneLayout::new((100, 40));
        layout.add_pane(editor("tree", Anchors::TOP | Anchors::BOTTOM | Anchors::LEFT).with_fixed_width(30));
        let main = layout.add_pane(editor("main", Anchors::ALL).with_border(true));
        layout.focus(main);

        press(&mut layout, EditorKey::Char('a'));
        press(&mut layout, EditorKey::Char('b'));
        press(&mut layout, EditorKey::Enter);
        press(&mut layout, EditorKey::Char('c'));

        assert_eq!(layout.cursor_position(), Some((30 + 1 + 1, 1 + 1)));
    }

    #[test]
    fn cursor_should_land_after_wide_chars() {
        let mut layout = PaneLayout::new((20, 5));
        let main = layout.add_pane(editor("main", Anchors::ALL));
        for ch in "日本語日本語".chars() {
            press(&mut layout, EditorKey::Char(ch));
        }
        press(&mut layout, EditorKey::Home);
        press(&mut layout, EditorKey::End);

        assert_eq!(layout.pane(main).unwrap().as_editor().unwrap().cursor().column, 6);
        assert_eq!(layout.cursor_position(), Some((12, 0)));
    }

    #[test]
    fn cursor_should_be_hidden_when_scrolled_out_of_view() {
        let mut layout = PaneLayout::new((40, 10));
        let main = layout.add_pane(editor("main", Anchors::ALL));
        let state = layout.pane_mut(main).unwrap().as_editor_mut().unwrap();
        let lines = (0..50).map(|n| n.to_string()).collect();
        *state.buffer_mut() = TextBuffer::from_lines("main", lines);
        state.set_cursor(LogicalPosition::new(40, 0));
        assert_eq!(layout.cursor_position(), Some((0, 9)));

        layout.resize(40, 0);
        assert_eq!(layout.cursor_position(), None);
    }

    #[test]
    fn render_should_isolate_failing_pane() {
        let mut layout = PaneLayout::new((80, 24));
        layout.add_pane(status());
        let broken = layout.add_pane(editor("broken", Anchors::TOP).with_fixed_height(5));
        let healthy = layout.add_pane(editor("healthy", Anchors::ALL));

        let state = layout.pane_mut(broken).unwrap().as_editor_mut().unwrap();
        *state.buffer_mut() = TextBuffer::from_lines("broken", vec!["a".into(), "b".into()]);
        state.set_cursor(LogicalPosition::new(1, 0));
        state.buffer_mut().join_line(0).unwrap();

        let frame = layout.render(&Highlighter::new());

        let broken_frame = frame.panes.iter().find(|pane| pane.id == broken).unwrap();
        assert!(broken_frame.lines[0].contains("redraw failed"));
        let healthy_frame = frame.panes.iter().find(|pane| pane.id == healthy).unwrap();
        assert_eq!(healthy_frame.lines.len(), 18);
        assert_eq!(healthy_frame.lines[0], "");
    }

    #[test]
    fn render_should_feed_focused_editor_into_status_pane() {
        let mut layout = PaneLayout::new((40, 10));
        let status = layout.add_pane(status());
        layout.add_pane(editor("main.rs", Anchors::ALL));
        press(&mut layout, EditorKey::Char('x'));

        let frame = layout.render(&Highlighter::new());

        let status_frame = frame.panes.iter().find(|pane| pane.id == status).unwrap();
        assert_eq!(status_frame.lines.len(), 1);
        assert!(status_frame.lines[0].starts_with("main.rs [+]"));
        assert!(status_frame.lines[0].contains("1:2"));
        assert!(frame.panes.iter().any(|pane| pane.focused));
    }
}
