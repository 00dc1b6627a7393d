use paned::editor::{
    events::{Anchors, InputMode},
    geometry::Rect,
    highlight::Highlighter,
    models::TextBuffer,
    view_models::{EditorState, Pane, PaneLayout},
    views::ansi_escape_codes as ansi,
};

fn editor_pane(name: &str, lines: &[&str], anchors: Anchors) -> Pane {
    let buffer = TextBuffer::from_lines(name, lines.iter().map(|l| l.to_string()).collect());
    Pane::editor(EditorState::new(buffer, InputMode::Insert), anchors)
}

fn rect_of(layout: &PaneLayout, index: usize) -> Rect {
    layout.panes()[index].rect()
}

/// A 30 column sidebar leaves 70 columns for the fill pane
#[test]
fn test_sidebar_and_fill_pane() {
    let mut layout = PaneLayout::new((100, 40));
    layout.add_pane(
        editor_pane("tree.txt", &[""], Anchors::TOP | Anchors::BOTTOM | Anchors::LEFT)
            .with_fixed_width(30),
    );
    layout.add_pane(editor_pane("main.rs", &[""], Anchors::ALL));

    assert_eq!(rect_of(&layout, 0), Rect::new(0, 0, 30, 40));
    assert_eq!(rect_of(&layout, 1), Rect::new(30, 0, 70, 40));
}

/// Status bar, two stacked headers, a sidebar and a fill pane tile the
/// screen before and after a resize
#[test]
fn test_full_screen_tiling_survives_resize() {
    let mut layout = PaneLayout::new((120, 40));
    layout.add_pane(Pane::status(Anchors::BOTTOM | Anchors::LEFT | Anchors::RIGHT));
    layout.add_pane(
        editor_pane("a.md", &[""], Anchors::TOP | Anchors::LEFT | Anchors::RIGHT)
            .with_fixed_height(5),
    );
    layout.add_pane(
        editor_pane("b.md", &[""], Anchors::TOP | Anchors::LEFT | Anchors::RIGHT)
            .with_fixed_height(5),
    );
    layout.add_pane(
        editor_pane("c.md", &[""], Anchors::TOP | Anchors::BOTTOM | Anchors::LEFT)
            .with_fixed_width(20),
    );
    layout.add_pane(editor_pane("d.md", &[""], Anchors::ALL));

    for (width, height) in [(120, 40), (60, 20), (200, 60)] {
        layout.resize(width, height);

        let rects: Vec<Rect> = layout.panes().iter().map(Pane::rect).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
        let covered: usize = rects.iter().map(|rect| rect.area()).sum();
        assert_eq!(covered, width as usize * height as usize);
        assert_eq!(rect_of(&layout, 0), Rect::new(0, height - 1, width, 1));
        assert_eq!(rect_of(&layout, 4), Rect::new(20, 10, width - 20, height - 11));
    }
}

/// Rendering a bordered pane places the cursor inside the border and
/// highlights its content
#[test]
fn test_render_bordered_highlighted_pane() {
    let mut highlighter = Highlighter::new();
    highlighter.load_str("test", "syntax rust \"\\.rs$\"\ncolor red \"\\<fn\\>\"\n");
    let mut layout = PaneLayout::new((40, 10));
    let id = layout.add_pane(
        editor_pane("main.rs", &["fn main() {}"], Anchors::ALL).with_border(true),
    );

    let frame = layout.render(&highlighter);

    assert_eq!(frame.panes.len(), 1);
    let pane = &frame.panes[0];
    assert_eq!(pane.id, id);
    assert!(pane.focused);
    assert_eq!(pane.title.as_deref(), Some("main.rs"));
    assert!(pane.lines[0].starts_with(&format!("{}fn", ansi::FG_RED)));
    assert_eq!(pane.lines.len(), 8);
    assert_eq!(frame.cursor, Some((1, 1)));
}
