//! Markdown preservation.
//!
//! Detection is word-anchored, so emphasis markers survive conversion
//! untouched and the text inside `**bold**` or `_italic_` converts like any
//! other prose. The one structure that needs masking is the link target:
//! the URL of `[text](url)`, autolinks, and bare URLs must stay
//! byte-identical while the link text remains convertible.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static LINK_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]\n]*\]\(([^)\n]+)\)").unwrap());

static AUTOLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<((?:https?|ftp)://[^>\s]+)>").unwrap());

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?|ftp)://\S+|\bwww\.\S+").unwrap());

/// Byte ranges of `text` that markdown structure protects from conversion.
pub fn protected_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for captures in LINK_TARGET.captures_iter(text) {
        if let Some(target) = captures.get(1) {
            ranges.push(target.start()..target.end());
        }
    }
    for captures in AUTOLINK.captures_iter(text) {
        if let Some(target) = captures.get(1) {
            ranges.push(target.start()..target.end());
        }
    }
    for m in BARE_URL.find_iter(text) {
        // Link targets already cover their own URLs.
        if !ranges.iter().any(|r| r.start <= m.start() && m.end() <= r.end) {
            ranges.push(m.start()..m.end());
        }
    }

    ranges.sort_by_key(|range| range.start);
    ranges
}
