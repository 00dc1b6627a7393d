//! # Pattern Dialect
//!
//! Rule files are written in a POSIX-flavoured regex dialect. Bracket
//! classes such as `[[:alpha:]]` are understood by `regex` as-is; word
//! boundaries written as `\<`, `\>`, `[[:<:]]` or `[[:>:]]` are rewritten to
//! `\b`. Anything `regex` still rejects (backreferences, lookaround) is a
//! conversion failure the caller recovers from.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use thiserror::Error;

/// Pattern used for any rule whose own pattern cannot be converted
pub const FALLBACK_PATTERN: &str = r"\b\w+\b";

static FALLBACK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FALLBACK_PATTERN).expect("valid fallback regex"));

#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,

    #[error("pattern '{pattern}' ends with a lone backslash")]
    TrailingEscape { pattern: String },

    #[error("pattern '{pattern}' does not compile: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Rewrite dialect word boundaries into `regex` syntax
pub fn translate_pattern(pattern: &str) -> Result<String, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut translated = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some(tail) = rest
            .strip_prefix("[[:<:]]")
            .or_else(|| rest.strip_prefix("[[:>:]]"))
        {
            translated.push_str(r"\b");
            rest = tail;
            continue;
        }

        let mut chars = rest.chars();
        let Some(ch) = chars.next() else { break };
        if ch == '\\' {
            match chars.next() {
                Some('<') | Some('>') => translated.push_str(r"\b"),
                Some(escaped) => {
                    translated.push('\\');
                    translated.push(escaped);
                }
                None => {
                    return Err(PatternError::TrailingEscape {
                        pattern: pattern.to_string(),
                    })
                }
            }
        } else {
            translated.push(ch);
        }
        rest = chars.as_str();
    }

    Ok(translated)
}

/// Translate and compile a dialect pattern
pub fn compile_pattern(pattern: &str, case_insensitive: bool) -> Result<Regex, PatternError> {
    let translated = translate_pattern(pattern)?;
    RegexBuilder::new(&translated)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| PatternError::Compile {
            pattern: pattern.to_string(),
            source,
        })
}

/// Compile a pattern, substituting the bare-word fallback on failure
///
/// The error that forced the fallback is handed back for the caller to
/// report with its own context.
pub fn compile_or_fallback(
    pattern: &str,
    case_insensitive: bool,
) -> (Regex, Option<PatternError>) {
    match compile_pattern(pattern, case_insensitive) {
        Ok(regex) => (regex, None),
        Err(error) => (FALLBACK_REGEX.clone(), Some(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundaries_should_become_backslash_b() {
        assert_eq!(translate_pattern(r"\<fn\>").unwrap(), r"\bfn\b");
        assert_eq!(translate_pattern("[[:<:]]let[[:>:]]").unwrap(), r"\blet\b");
    }

    #[test]
    fn other_escapes_should_pass_through() {
        assert_eq!(translate_pattern(r"\.rs$").unwrap(), r"\.rs$");
        assert_eq!(translate_pattern(r"\\<").unwrap(), r"\\<");
        assert_eq!(translate_pattern(r#""[^"]*""#).unwrap(), r#""[^"]*""#);
    }

    #[test]
    fn posix_classes_should_compile_unchanged() {
        let regex = compile_pattern("[[:digit:]]+[[:space:]]", false).unwrap();
        assert!(regex.is_match("42 "));
        assert!(!regex.is_match("abc"));
    }

    #[test]
    fn translation_should_reject_trailing_backslash_and_empty() {
        assert!(matches!(
            translate_pattern(r"abc\"),
            Err(PatternError::TrailingEscape { .. })
        ));
        assert!(matches!(translate_pattern(""), Err(PatternError::Empty)));
    }

    #[test]
    fn unsupported_syntax_should_fail_to_compile() {
        assert!(matches!(
            compile_pattern(r"(a)\1", false),
            Err(PatternError::Compile { .. })
        ));
    }

    #[test]
    fn failed_patterns_should_fall_back_to_bare_words() {
        let (regex, error) = compile_or_fallback(r"(?<=x)y", false);
        assert!(matches!(error, Some(PatternError::Compile { .. })));
        assert_eq!(regex.as_str(), FALLBACK_PATTERN);

        let (regex, error) = compile_or_fallback(r"\<if\>", false);
        assert!(error.is_none());
        assert!(regex.is_match("if x"));
        assert!(!regex.is_match("gift"));
    }

    #[test]
    fn case_insensitive_patterns_should_match_any_case() {
        let regex = compile_pattern(r"\<select\>", true).unwrap();
        assert!(regex.is_match("SELECT * FROM t"));
    }
}
