//! # Pane
//!
//! One laid-out region of the screen. The layout engine owns the geometry
//! fields; the [`PaneKind`] carries whatever the pane displays.

use crate::editor::events::{Anchors, PaneId};
use crate::editor::geometry::Rect;
use crate::editor::models::StatusLine;

use super::editor_state::EditorState;

/// What a pane shows
#[derive(Debug, Clone)]
pub enum PaneKind {
    /// A document with its own cursor and viewport
    Editor(EditorState),
    /// The application status bar; never focused, never edited
    Status(StatusLine),
}

/// A pane plus its layout constraints
#[derive(Debug, Clone)]
pub struct Pane {
    pub(super) id: PaneId,
    anchors: Anchors,
    fixed_width: Option<u16>,
    fixed_height: Option<u16>,
    bordered: bool,
    pub(super) rect: Rect,
    kind: PaneKind,
}

impl Pane {
    /// New unplaced pane; the layout engine assigns its id on insertion
    pub fn new(kind: PaneKind, anchors: Anchors) -> Self {
        Self {
            id: PaneId(0),
            anchors,
            fixed_width: None,
            fixed_height: None,
            bordered: false,
            rect: Rect::default(),
            kind,
        }
    }

    pub fn editor(state: EditorState, anchors: Anchors) -> Self {
        Self::new(PaneKind::Editor(state), anchors)
    }

    pub fn status(anchors: Anchors) -> Self {
        Self::new(PaneKind::Status(StatusLine::new()), anchors).with_fixed_height(1)
    }

    pub fn with_fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn with_fixed_height(mut self, height: u16) -> Self {
        self.fixed_height = Some(height);
        self
    }

    pub fn with_border(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn anchors(&self) -> Anchors {
        self.anchors
    }

    pub fn set_anchors(&mut self, anchors: Anchors) {
        self.anchors = anchors;
    }

    pub fn fixed_width(&self) -> Option<u16> {
        self.fixed_width
    }

    pub fn fixed_height(&self) -> Option<u16> {
        self.fixed_height
    }

    pub fn is_bordered(&self) -> bool {
        self.bordered
    }

    /// Cells taken by the border on each side
    pub fn border_width(&self) -> u16 {
        u16::from(self.bordered)
    }

    /// Last computed screen rectangle, border included
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rectangle left for content once the border is drawn
    pub fn content_rect(&self) -> Rect {
        self.rect.inset(self.border_width())
    }

    pub fn kind(&self) -> &PaneKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut PaneKind {
        &mut self.kind
    }

    pub fn is_editor(&self) -> bool {
        matches!(self.kind, PaneKind::Editor(_))
    }

    pub fn as_editor(&self) -> Option<&EditorState> {
        match &self.kind {
            PaneKind::Editor(state) => Some(state),
            PaneKind::Status(_) => None,
        }
    }

    pub fn as_editor_mut(&mut self) -> Option<&mut EditorState> {
        match &mut self.kind {
            PaneKind::Editor(state) => Some(state),
            PaneKind::Status(_) => None,
        }
    }

    pub fn as_status(&self) -> Option<&StatusLine> {
        match &self.kind {
            PaneKind::Status(status) => Some(status),
            PaneKind::Editor(_) => None,
        }
    }

    pub fn as_status_mut(&mut self) -> Option<&mut StatusLine> {
        match &mut self.kind {
            PaneKind::Status(status) => Some(status),
            PaneKind::Editor(_) => None,
        }
    }

    /// Text for the top border: the pane message if any, else the document
    /// name with a dirty marker
    pub fn title(&self) -> Option<String> {
        match &self.kind {
            PaneKind::Editor(state) => Some(match state.message() {
                Some(message) => message.to_string(),
                None => {
                    let dirty = if state.buffer().is_modified() { " [+]" } else { "" };
                    format!("{}{}", state.buffer().name(), dirty)
                }
            }),
            PaneKind::Status(_) => None,
        }
    }
}
