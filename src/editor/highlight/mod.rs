//! # Syntax Highlighting
//!
//! Rule files → rulesets → per-line spans → colored text. The
//! [`Highlighter`] owns every loaded ruleset and picks one per file name.

pub mod colors;
pub mod dialect;
pub mod matcher;
pub mod rules;

pub use colors::HighlightColor;
pub use matcher::{clip_spans, find_spans, render_spans, HighlightSpan};
pub use rules::{parse_rules, HighlightRule, HighlightRuleSet};

use anyhow::{Context, Result};
use std::path::Path;

/// Rules shipped with the binary, loaded after user rules
pub const BUILTIN_RULES: &str = include_str!("../../../rules/default.rules");

/// All loaded rulesets in lookup order
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    rulesets: Vec<HighlightRuleSet>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighter holding only the built-in rules
    pub fn with_builtin_rules() -> Self {
        let mut highlighter = Self::new();
        highlighter.load_str("<builtin>", BUILTIN_RULES);
        highlighter
    }

    /// Append the rulesets found in `text`
    pub fn load_str(&mut self, source: &str, text: &str) {
        self.rulesets.extend(parse_rules(source, text));
    }

    /// Append the rulesets of a rule file
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read highlight rules {}", path.display()))?;
        self.load_str(&path.display().to_string(), &text);
        Ok(())
    }

    pub fn rulesets(&self) -> &[HighlightRuleSet] {
        &self.rulesets
    }

    /// Ruleset for a file name: selector match first, extension second
    pub fn ruleset_for(&self, file_name: &str) -> Option<&HighlightRuleSet> {
        if let Some(ruleset) = self
            .rulesets
            .iter()
            .find(|ruleset| ruleset.matches_file_name(file_name))
        {
            return Some(ruleset);
        }

        let extension = Path::new(file_name).extension()?.to_str()?;
        self.rulesets
            .iter()
            .find(|ruleset| ruleset.matches_extension(extension))
    }

    /// Spans for one line of a file, empty when no ruleset applies
    pub fn spans_for(&self, file_name: &str, line: &str) -> Vec<HighlightSpan> {
        self.ruleset_for(file_name)
            .map(|ruleset| find_spans(line, ruleset))
            .unwrap_or_default()
    }

    /// Colored version of one line of a file
    pub fn highlight_line(&self, file_name: &str, line: &str) -> String {
        render_spans(line, &self.spans_for(file_name, line))
    }
}
