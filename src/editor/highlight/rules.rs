//! # Highlight Rule Files
//!
//! Parses rule-file text into ordered rulesets:
//!
//! ```text
//! # comment
//! syntax rust "\.rs$"
//! color brightblue "\<(fn|let|mut)\>"
//! icolor green "\<(true|false)\>" "\<none\>"
//! ```
//!
//! A quoted string runs until a `"` that is followed by whitespace or the
//! end of the line, so patterns may contain bare quotes. Malformed lines are
//! logged and skipped; one bad rule never stops the rest of the file from
//! loading.

use super::colors::HighlightColor;
use super::dialect::{compile_or_fallback, compile_pattern, PatternError};
use regex::Regex;

/// One `(pattern, color)` pair with its compiled form
#[derive(Debug, Clone)]
pub struct HighlightRule {
    pattern: String,
    color: HighlightColor,
    regex: Regex,
    fallback: Option<PatternError>,
}

impl HighlightRule {
    /// Compile a rule; unconvertible patterns fall back to bare words
    pub fn new(pattern: &str, color: HighlightColor, case_insensitive: bool) -> Self {
        let (regex, fallback) = compile_or_fallback(pattern, case_insensitive);
        Self {
            pattern: pattern.to_string(),
            color,
            regex,
            fallback,
        }
    }

    /// Pattern text as written in the rule file
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn color(&self) -> &HighlightColor {
        &self.color
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// False when the rule runs on the bare-word fallback
    pub fn is_converted(&self) -> bool {
        self.fallback.is_none()
    }

    /// Why the pattern could not be used
    pub fn fallback_error(&self) -> Option<&PatternError> {
        self.fallback.as_ref()
    }
}

/// Rules associated with one file-name selector
#[derive(Debug, Clone)]
pub struct HighlightRuleSet {
    name: String,
    file_pattern: String,
    file_regex: Option<Regex>,
    rules: Vec<HighlightRule>,
}

impl HighlightRuleSet {
    pub fn new(name: impl Into<String>, file_pattern: impl Into<String>) -> Self {
        let name = name.into();
        let file_pattern = file_pattern.into();
        let file_regex = match compile_pattern(&file_pattern, false) {
            Ok(regex) => Some(regex),
            Err(error) => {
                tracing::warn!(
                    "syntax '{}' file pattern unusable, only name lookup applies: {}",
                    name,
                    error
                );
                None
            }
        };
        Self {
            name,
            file_pattern,
            file_regex,
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_pattern(&self) -> &str {
        &self.file_pattern
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    pub fn push_rule(&mut self, rule: HighlightRule) {
        self.rules.push(rule);
    }

    /// Whether the selector names this file exactly or its pattern matches
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        self.file_pattern == file_name
            || self
                .file_regex
                .as_ref()
                .is_some_and(|regex| regex.is_match(file_name))
    }

    /// Whether the ruleset claims files with this extension
    pub fn matches_extension(&self, extension: &str) -> bool {
        if self.name.eq_ignore_ascii_case(extension) {
            return true;
        }
        let probe = format!(".{}", extension.to_ascii_lowercase());
        self.file_regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(&probe))
    }
}

/// Split the quoted strings off a directive's argument list
fn parse_quoted(mut rest: &str) -> Result<Vec<String>, String> {
    let mut strings = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return Ok(strings);
        }
        let Some(body) = rest.strip_prefix('"') else {
            return Err(format!("expected a quoted string at '{rest}'"));
        };

        let mut end = None;
        for (index, ch) in body.char_indices() {
            if ch != '"' {
                continue;
            }
            let after = &body[index + 1..];
            if after.is_empty() || after.starts_with(char::is_whitespace) {
                end = Some(index);
                break;
            }
        }
        let Some(end) = end else {
            return Err(format!("unterminated string at '{rest}'"));
        };

        strings.push(body[..end].to_string());
        rest = &body[end + 1..];
    }
}

/// Split off the first whitespace-delimited word
fn next_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(index) => (&text[..index], &text[index..]),
        None => (text, ""),
    }
}

/// Strip one pair of surrounding quotes from a syntax name
fn unquote(word: &str) -> &str {
    word.strip_prefix('"')
        .and_then(|w| w.strip_suffix('"'))
        .unwrap_or(word)
}

/// Parse rule-file text into rulesets in file order
pub fn parse_rules(source: &str, text: &str) -> Vec<HighlightRuleSet> {
    let mut rulesets: Vec<HighlightRuleSet> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (directive, rest) = next_word(line);
        match directive {
            "syntax" => {
                let (name, rest) = next_word(rest);
                if name.is_empty() {
                    tracing::warn!("{}:{}: syntax without a name", source, line_number);
                    continue;
                }
                let patterns = match parse_quoted(rest) {
                    Ok(patterns) => patterns,
                    Err(error) => {
                        tracing::warn!("{}:{}: {}", source, line_number, error);
                        continue;
                    }
                };
                let file_pattern = match patterns.as_slice() {
                    [] => unquote(name).to_string(),
                    [single] => single.clone(),
                    many => many
                        .iter()
                        .map(|p| format!("(?:{p})"))
                        .collect::<Vec<_>>()
                        .join("|"),
                };
                rulesets.push(HighlightRuleSet::new(unquote(name), file_pattern));
            }
            "color" | "icolor" => {
                let Some(ruleset) = rulesets.last_mut() else {
                    tracing::warn!("{}:{}: color before any syntax", source, line_number);
                    continue;
                };
                let (tag, rest) = next_word(rest);
                let color = match HighlightColor::parse(tag) {
                    Ok(color) => color,
                    Err(error) => {
                        tracing::warn!("{}:{}: {}", source, line_number, error);
                        continue;
                    }
                };
                let patterns = match parse_quoted(rest) {
                    Ok(patterns) if !patterns.is_empty() => patterns,
                    Ok(_) => {
                        tracing::warn!("{}:{}: color without a pattern", source, line_number);
                        continue;
                    }
                    Err(error) => {
                        tracing::warn!("{}:{}: {}", source, line_number, error);
                        continue;
                    }
                };
                let case_insensitive = directive == "icolor";
                for pattern in patterns {
                    let rule = HighlightRule::new(&pattern, color.clone(), case_insensitive);
                    if let Some(error) = rule.fallback_error() {
                        tracing::warn!(
                            "{}:{}: {}, using bare-word fallback",
                            source,
                            line_number,
                            error
                        );
                    }
                    ruleset.push_rule(rule);
                }
            }
            other => {
                tracing::warn!(
                    "{}:{}: unknown directive '{}'",
                    source,
                    line_number,
                    other
                );
            }
        }
    }

    tracing::debug!("loaded {} rulesets from {}", rulesets.len(), source);
    rulesets
}
