use paned::editor::highlight::{find_spans, parse_rules, Highlighter};
use std::io::Write;

/// The longer of two overlapping matches wins
#[test]
fn test_longest_match_wins_overlap() {
    let rulesets = parse_rules(
        "overlap.rules",
        "syntax demo \"\\.demo$\"\ncolor red \"abc\"\ncolor blue \"abcdef\"\n",
    );

    let spans = find_spans("abcdef", &rulesets[0]);

    assert_eq!(spans.len(), 1);
    assert_eq!((spans[0].start, spans[0].end), (0, 6));
    assert_eq!(spans[0].color.tag(), "blue");
}

/// User rules from a file take precedence over the built-in ones
#[test]
fn test_user_rule_file_overrides_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "syntax myrust \"\\.rs$\"\ncolor magenta \"\\<fn\\>\"").unwrap();

    let mut highlighter = Highlighter::new();
    highlighter.load_file(file.path()).unwrap();
    highlighter.load_str("<builtin>", paned::editor::highlight::BUILTIN_RULES);

    assert_eq!(highlighter.ruleset_for("lib.rs").unwrap().name(), "myrust");
    let spans = highlighter.spans_for("lib.rs", "fn x");
    assert_eq!(spans[0].color.tag(), "magenta");
}

/// Spans are sorted, disjoint, and stable across runs on builtin rules
#[test]
fn test_builtin_rust_spans_are_disjoint_and_deterministic() {
    let highlighter = Highlighter::with_builtin_rules();
    let line = r#"pub fn parse(input: &str) -> Result<u32, String> { let n = 42; // done"#;

    let spans = highlighter.spans_for("parse.rs", line);
    assert!(!spans.is_empty());
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    assert_eq!(spans, highlighter.spans_for("parse.rs", line));
}

/// Files without a matching ruleset come back untouched
#[test]
fn test_unknown_file_type_is_unmodified() {
    let highlighter = Highlighter::with_builtin_rules();
    assert_eq!(highlighter.highlight_line("photo.xyz", "fn main"), "fn main");
}

/// A missing rule file is an error for the caller to report
#[test]
fn test_missing_rule_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut highlighter = Highlighter::new();
    assert!(highlighter.load_file(&dir.path().join("none.rules")).is_err());
}
