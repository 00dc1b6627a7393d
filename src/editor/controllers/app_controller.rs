//! # Application Controller
//!
//! Owns the pane layout, the highlighter, the collaborators and the
//! renderer, and runs the event loop. Key chords bound in the command
//! registry are handled here; every other key goes to the focused pane.

use crate::config::EditorConfig;
use crate::editor::{
    commands::{CommandContext, CommandEvent, CommandRegistry},
    events::{Anchors, EditorKey, PaneId, ViewEvent},
    highlight::{Highlighter, BUILTIN_RULES},
    io::{EventStream, RenderStream},
    models::TextBuffer,
    services::{Clipboard, DiskPersistence, EditorServices, Indentation, MemoryClipboard, Persistence},
    view_models::{EditorState, Pane, PaneLayout},
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name shown for buffers that have no file behind them
pub const SCRATCH_BUFFER_NAME: &str = "[scratch]";

/// Hint shown in the status pane until the first key
const STARTUP_HINT: &str = "^S save  ^W close  ^T new  ^N next  ^Q quit";

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream, P: Persistence = DiskPersistence> {
    layout: PaneLayout,
    highlighter: Highlighter,
    indentation: Indentation,
    clipboard: Box<dyn Clipboard>,
    persistence: P,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    config: EditorConfig,
    status_pane: PaneId,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS, DiskPersistence> {
    /// Controller over real files with an in-process clipboard
    pub fn with_io_streams(config: EditorConfig, event_stream: ES, render_stream: RS) -> Result<Self> {
        Self::with_services(
            config,
            event_stream,
            render_stream,
            DiskPersistence::new(),
            Box::new(MemoryClipboard::new()),
        )
    }
}

impl<ES: EventStream, RS: RenderStream, P: Persistence> AppController<ES, RS, P> {
    /// Create a controller with every collaborator injected
    pub fn with_services(
        config: EditorConfig,
        event_stream: ES,
        render_stream: RS,
        persistence: P,
        clipboard: Box<dyn Clipboard>,
    ) -> Result<Self> {
        // Pass RenderStream ownership to the view layer
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let mut layout = PaneLayout::new(view_renderer.terminal_size());
        let status_pane = layout.add_pane(Pane::status(Anchors::BOTTOM | Anchors::LEFT | Anchors::RIGHT));
        if let Some(status) = layout.pane_mut(status_pane).and_then(Pane::as_status_mut) {
            status.set_status_message(STARTUP_HINT);
        }

        let highlighter = Self::load_highlighter(config.rules_path.as_deref());

        Ok(Self {
            layout,
            highlighter,
            indentation: config.indentation(),
            clipboard,
            persistence,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            config,
            status_pane,
            should_quit: false,
        })
    }

    /// User rules first so they win the lookup, then the built-in rules
    fn load_highlighter(rules_path: Option<&Path>) -> Highlighter {
        let mut highlighter = Highlighter::new();
        match rules_path {
            Some(path) if path.exists() => {
                if let Err(error) = highlighter.load_file(path) {
                    tracing::warn!("skipping user highlight rules: {:#}", error);
                }
            }
            Some(path) => tracing::debug!("no highlight rules at {}", path.display()),
            None => {}
        }
        highlighter.load_str("<builtin>", BUILTIN_RULES);
        tracing::debug!("loaded {} highlight rulesets", highlighter.rulesets().len());
        highlighter
    }

    pub fn layout(&self) -> &PaneLayout {
        &self.layout
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Where a new editor goes: the fill slot if it is free, else docked
    fn anchors_for_new_editor(&self) -> Anchors {
        if !self.has_fill_editor() {
            Anchors::ALL
        } else if self.config.vertical {
            Anchors::TOP | Anchors::BOTTOM | Anchors::LEFT
        } else {
            Anchors::TOP | Anchors::LEFT | Anchors::RIGHT
        }
    }

    fn has_fill_editor(&self) -> bool {
        self.layout
            .panes()
            .iter()
            .any(|pane| pane.is_editor() && pane.anchors() == Anchors::ALL)
    }

    fn add_editor(&mut self, state: EditorState) -> PaneId {
        let pane = Pane::editor(state, self.anchors_for_new_editor()).with_border(self.config.border);
        let id = self.layout.add_pane(pane);
        self.layout.focus(id);
        id
    }

    /// Open `path` in a new pane and focus it
    ///
    /// A file that cannot be read opens as an empty buffer under the same
    /// name, with the error as the pane message.
    pub async fn open_file(&mut self, path: &Path) -> PaneId {
        let name = path.display().to_string();
        let (buffer, message) = match self.persistence.read_file(path).await {
            Ok(lines) => {
                tracing::info!("opened {} ({} lines)", name, lines.len());
                (TextBuffer::from_lines(name, lines), None)
            }
            Err(error) => {
                tracing::warn!("could not open {}: {:#}", name, error);
                let message = format!("New file: {error:#}");
                (TextBuffer::new(name), Some(message))
            }
        };

        let mut state = EditorState::new(buffer, self.config.input_mode()).with_path(path);
        if let Some(message) = message {
            state.set_message(message);
        }
        self.add_editor(state)
    }

    /// Open every file, or one scratch pane when there are none
    pub async fn open_files(&mut self, paths: &[PathBuf]) {
        if paths.is_empty() {
            self.new_scratch();
            return;
        }
        for path in paths {
            self.open_file(path).await;
        }
        if let Some(&first) = self.layout.editor_ids().first() {
            self.layout.focus(first);
        }
    }

    /// Add an empty unnamed editor and focus it
    pub fn new_scratch(&mut self) -> PaneId {
        let buffer = TextBuffer::new(SCRATCH_BUFFER_NAME);
        let state = EditorState::new(buffer, self.config.input_mode());
        self.add_editor(state)
    }

    /// Write the focused buffer to its file
    ///
    /// Failures are returned after being recorded as the pane message;
    /// scratch buffers only get a message.
    pub async fn save_focused(&mut self) -> Result<()> {
        let Some(editor) = self.layout.focused_editor_mut() else {
            return Ok(());
        };
        let Some(path) = editor.path().map(Path::to_path_buf) else {
            editor.set_message("Scratch buffer has no file name");
            return Ok(());
        };

        let result = self
            .persistence
            .write_file(&path, editor.buffer().lines())
            .await;
        match result {
            Ok(()) => {
                let line_count = editor.buffer().line_count();
                editor.buffer_mut().mark_saved();
                editor.set_message(format!("Wrote {} lines to {}", line_count, path.display()));
                tracing::info!("saved {} ({} lines)", path.display(), line_count);
                Ok(())
            }
            Err(error) => {
                editor.set_message(format!("Save failed: {error:#}"));
                Err(error)
            }
        }
    }

    /// Close the focused pane
    ///
    /// When the fill pane goes away the newest remaining editor takes its
    /// place. Closing the last editor quits.
    pub fn close_focused(&mut self) -> Vec<ViewEvent> {
        let Some(focused) = self.layout.focused() else {
            return Vec::new();
        };
        let Some(removed) = self.layout.remove_pane(focused) else {
            return Vec::new();
        };
        if removed
            .as_editor()
            .is_some_and(|state| state.buffer().is_modified())
        {
            tracing::warn!("closed {} with unsaved changes", focused);
        }

        let editors = self.layout.editor_ids();
        let Some(&newest) = editors.last() else {
            tracing::info!("last editor closed");
            self.should_quit = true;
            return Vec::new();
        };
        if !self.has_fill_editor() {
            if let Some(pane) = self.layout.pane_mut(newest) {
                pane.set_anchors(Anchors::ALL);
            }
            self.layout.recompute();
            tracing::debug!("promoted {} to fill", newest);
        }

        vec![ViewEvent::FullRedrawRequired]
    }

    /// Put the line under the cursor on the clipboard
    fn copy_line(&mut self) -> Vec<ViewEvent> {
        let Some(editor) = self.layout.focused_editor_mut() else {
            return Vec::new();
        };
        match self.clipboard.write(editor.current_line()) {
            Ok(()) => editor.set_message("Copied line"),
            Err(error) => {
                tracing::warn!("clipboard write failed: {:#}", error);
                editor.set_message(format!("Copy failed: {error}"));
            }
        }
        vec![
            ViewEvent::CurrentPaneRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]
    }

    /// Send a logical key to the focused pane
    fn dispatch_editor_key(&mut self, key: EditorKey) -> Vec<ViewEvent> {
        let mut services = EditorServices::new(&self.indentation, &mut *self.clipboard);
        match self.layout.handle_key(key, &mut services) {
            Ok(events) => events,
            Err(error) => {
                tracing::error!("{:?} failed: {}", key, error);
                if let Some(editor) = self.layout.focused_editor_mut() {
                    editor.set_message(format!("Edit failed: {error}"));
                }
                vec![ViewEvent::CurrentPaneRedrawRequired]
            }
        }
    }

    async fn apply_command(&mut self, event: CommandEvent) -> Vec<ViewEvent> {
        tracing::debug!("applying {:?}", event);
        match event {
            CommandEvent::QuitRequested => {
                self.should_quit = true;
                Vec::new()
            }
            CommandEvent::SaveRequested => {
                if let Err(error) = self.save_focused().await {
                    tracing::error!("save failed: {:#}", error);
                }
                vec![
                    ViewEvent::CurrentPaneRedrawRequired,
                    ViewEvent::StatusBarUpdateRequired,
                ]
            }
            CommandEvent::ClosePaneRequested => self.close_focused(),
            CommandEvent::FocusNextRequested => self.layout.focus_next(),
            CommandEvent::NewScratchRequested => {
                self.new_scratch();
                vec![ViewEvent::FullRedrawRequired]
            }
            CommandEvent::CopyLineRequested => self.copy_line(),
            CommandEvent::EditorKeyRequested(key) => self.dispatch_editor_key(key),
        }
    }

    /// Handle one key press: registry first, focused pane otherwise
    pub async fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<Vec<ViewEvent>> {
        tracing::debug!("received key event: {:?}", key_event);
        if key_event.kind == KeyEventKind::Release {
            return Ok(Vec::new());
        }

        let mut events = Vec::new();
        if let Some(status) = self.layout.pane_mut(self.status_pane).and_then(Pane::as_status_mut) {
            if status.status_message().is_some() {
                status.clear_status_message();
                events.push(ViewEvent::StatusBarUpdateRequired);
            }
        }

        let context = CommandContext::from_layout(&self.layout);
        let command_events = self.command_registry.process_event(key_event, &context)?;
        if command_events.is_empty() {
            match EditorKey::from_key_event(&key_event) {
                Some(key) => events.extend(self.dispatch_editor_key(key)),
                None => tracing::debug!("no binding for {:?}", key_event),
            }
        }
        for command_event in command_events {
            events.extend(self.apply_command(command_event).await);
        }

        Ok(events)
    }

    /// New terminal size for both the layout and the renderer
    pub fn handle_resize(&mut self, width: u16, height: u16) -> Vec<ViewEvent> {
        tracing::debug!("terminal resized to {}x{}", width, height);
        self.view_renderer.update_size(width, height);
        self.layout.resize(width, height)
    }

    /// Repaint as much as `events` say is stale
    fn render(&mut self, events: &[ViewEvent]) -> Result<()> {
        if events.iter().any(ViewEvent::requires_repaint) {
            let frame = self.layout.render(&self.highlighter);
            self.view_renderer.render_frame(&frame)
        } else if !events.is_empty() {
            self.view_renderer
                .render_cursor(self.layout.cursor_position())
        } else {
            Ok(())
        }
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        // Initialize view renderer (handles all terminal setup)
        self.view_renderer.initialize()?;

        let result = self.event_loop().await;

        // Restore the terminal even when the loop failed
        if let Err(error) = self.view_renderer.cleanup() {
            tracing::error!("terminal cleanup failed: {:#}", error);
        }
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.render(&[ViewEvent::FullRedrawRequired])?;

        while !self.should_quit {
            if !self.event_stream.poll(Duration::from_millis(100))? {
                continue;
            }
            let events = match self.event_stream.read()? {
                Event::Key(key_event) => self.handle_key_event(key_event).await?,
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => Vec::new(),
            };
            if !self.should_quit {
                self.render(&events)?;
            }
        }

        tracing::info!("event loop finished");
        Ok(())
    }
}
