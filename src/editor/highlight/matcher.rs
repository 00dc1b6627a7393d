//! # Span Matcher
//!
//! Turns one line plus a ruleset into non-overlapping colored spans, and
//! spans into a line with inline color markup. Both are pure functions: each
//! call runs fresh `find_iter` searches and keeps no state between lines.

use super::colors::HighlightColor;
use super::rules::HighlightRuleSet;
use crate::editor::models::text_buffer::byte_offset;

/// Half-open char range `[start, end)` of a line painted in one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub color: HighlightColor,
}

impl HighlightSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Char index of every char boundary, including the end of the line
fn char_boundaries(line: &str) -> Vec<usize> {
    line.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()))
        .collect()
}

fn char_index(boundaries: &[usize], byte: usize) -> usize {
    boundaries.partition_point(|&offset| offset < byte)
}

/// Collect, order and greedily select the spans for one line
///
/// Candidates are ordered by start, longer first on equal starts, rule
/// order last. A candidate is accepted only when it starts at or after the
/// end of every span accepted so far.
pub fn find_spans(line: &str, ruleset: &HighlightRuleSet) -> Vec<HighlightSpan> {
    if line.is_empty() {
        return Vec::new();
    }
    let boundaries = char_boundaries(line);

    let mut candidates: Vec<HighlightSpan> = ruleset
        .rules()
        .iter()
        .flat_map(|rule| {
            let boundaries = &boundaries;
            rule.regex()
                .find_iter(line)
                .filter(|found| !found.is_empty())
                .map(move |found| HighlightSpan {
                    start: char_index(boundaries, found.start()),
                    end: char_index(boundaries, found.end()),
                    color: rule.color().clone(),
                })
        })
        .collect();

    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.len().cmp(&a.len())));

    let mut accepted: Vec<HighlightSpan> = Vec::new();
    let mut covered_until = 0;
    for candidate in candidates {
        if candidate.start >= covered_until {
            covered_until = candidate.end;
            accepted.push(candidate);
        }
    }
    accepted
}

/// Insert color markup around each span, working from the rightmost span
/// to the leftmost so earlier offsets stay valid
pub fn render_spans(line: &str, spans: &[HighlightSpan]) -> String {
    if spans.is_empty() {
        return line.to_string();
    }

    let mut rendered = line.to_string();
    for span in spans.iter().rev() {
        let start = byte_offset(line, span.start);
        let end = byte_offset(line, span.end);
        rendered.insert_str(end, span.color.end_code());
        rendered.insert_str(start, &span.color.start_code());
    }
    rendered
}

/// Restrict spans to the window `[from, to)` and shift them to window-relative offsets
pub fn clip_spans(spans: &[HighlightSpan], from: usize, to: usize) -> Vec<HighlightSpan> {
    spans
        .iter()
        .filter_map(|span| {
            let start = span.start.max(from);
            let end = span.end.min(to);
            (start < end).then(|| HighlightSpan {
                start: start - from,
                end: end - from,
                color: span.color.clone(),
            })
        })
        .collect()
}
