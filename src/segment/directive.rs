//! Ignore-directive scanning.
//!
//! The marker token `m2e-ignore` is recognized case-insensitively inside
//! common comment syntaxes. Three kinds:
//!
//! - `m2e-ignore-file` suppresses the whole file
//! - `m2e-ignore-next-line` skips the following line
//! - bare `m2e-ignore` skips its own line when the line carries other
//!   content, or the following line when the comment stands alone
//!
//! Scanning happens once per conversion; the result is a sorted list of
//! skipped byte ranges that the converter subtracts from detector output.

use std::ops::Range;

use ahash::AHashSet;

/// The ignore marker, matched case-insensitively.
pub const MARKER: &str = "m2e-ignore";

const FILE_SUFFIX: &str = "-file";
const NEXT_LINE_SUFFIX: &str = "-next-line";

/// Comment openers the marker is recognized behind. A single `'` (VB style)
/// is handled separately: it only counts at the start of the line, or every
/// prose apostrophe would open a comment.
pub(crate) const COMMENT_OPENERS: &[&str] = &[
    "//", "#", "--", ";", "%", "/*", "<!--", "\"\"\"", "'''",
];

/// Closers tolerated after the marker on a standalone comment line.
const COMMENT_CLOSERS: &[&str] = &["*/", "-->", "\"\"\"", "'''"];

/// The scanned directive state of one input text.
#[derive(Debug, Clone, Default)]
pub struct IgnoreDirectives {
    file_ignored: bool,
    skipped: Vec<Range<usize>>,
}

impl IgnoreDirectives {
    /// Scan `text` for ignore markers.
    pub fn scan(text: &str) -> Self {
        let lines = line_spans(text);
        let mut file_ignored = false;
        let mut skipped_lines: AHashSet<usize> = AHashSet::new();

        for (idx, span) in lines.iter().enumerate() {
            let line = &text[span.clone()];
            let lower = line.to_lowercase();
            let Some(pos) = lower.find(MARKER) else {
                continue;
            };
            // The marker only counts inside a comment.
            let before = &lower[..pos];
            let in_comment = COMMENT_OPENERS.iter().any(|opener| before.contains(opener))
                || before.trim_start().starts_with('\'');
            if !in_comment {
                continue;
            }

            let rest = &lower[pos + MARKER.len()..];
            if rest.starts_with(FILE_SUFFIX) {
                file_ignored = true;
            } else if rest.starts_with(NEXT_LINE_SUFFIX) {
                skipped_lines.insert(idx);
                skipped_lines.insert(idx + 1);
            } else {
                skipped_lines.insert(idx);
                if is_standalone_comment(&lower, pos) {
                    skipped_lines.insert(idx + 1);
                }
            }
        }

        let mut skipped: Vec<Range<usize>> = skipped_lines
            .into_iter()
            .filter(|idx| *idx < lines.len())
            .map(|idx| lines[idx].clone())
            .collect();
        skipped.sort_by_key(|range| range.start);

        IgnoreDirectives { file_ignored, skipped }
    }

    /// Whether a file-level marker was found.
    pub fn file_ignored(&self) -> bool {
        self.file_ignored
    }

    /// Whether the span `[start, end)` touches any skipped line.
    pub fn covers(&self, start: usize, end: usize) -> bool {
        self.skipped
            .iter()
            .any(|range| start < range.end && range.start < end)
    }

    /// The skipped byte ranges, sorted by start.
    pub fn skipped_ranges(&self) -> &[Range<usize>] {
        &self.skipped
    }
}

/// Byte span of each line, excluding its terminator.
fn line_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    for segment in text.split_inclusive('\n') {
        let end = start + segment.trim_end_matches(['\n', '\r']).len();
        spans.push(start..end);
        start += segment.len();
    }
    spans
}

/// Whether the marker's line is nothing but a comment holding the marker.
fn is_standalone_comment(lower_line: &str, marker_pos: usize) -> bool {
    let before = lower_line[..marker_pos].trim();
    let opener_only = before == "'" || COMMENT_OPENERS.iter().any(|opener| before == *opener);

    let after = lower_line[marker_pos + MARKER.len()..].trim();
    let closer_only = after.is_empty() || COMMENT_CLOSERS.contains(&after);

    opener_only && closer_only
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers() {
        let directives = IgnoreDirectives::scan("The color is gray.\nAbout 12 feet wide.\n");
        assert!(!directives.file_ignored());
        assert!(directives.skipped_ranges().is_empty());
    }

    #[test]
    fn test_file_marker() {
        let directives = IgnoreDirectives::scan("# m2e-ignore-file\nThe color is gray.\n");
        assert!(directives.file_ignored());
    }

    #[test]
    fn test_next_line_marker() {
        let text = "first color line\n// m2e-ignore-next-line\nsecond color line\nthird color line\n";
        let directives = IgnoreDirectives::scan(text);
        assert!(!directives.covers(0, 5));
        let third_start = text.find("third").unwrap();
        assert!(!directives.covers(third_start, third_start + 5));
        let second_start = text.find("second").unwrap();
        assert!(directives.covers(second_start, second_start + 5));
    }

    #[test]
    fn test_standalone_bare_marker_skips_next_line() {
        let text = "<!-- m2e-ignore -->\nThe color gray stays American.\nBut this color converts.\n";
        let directives = IgnoreDirectives::scan(text);
        let first = text.find("The color").unwrap();
        assert!(directives.covers(first, first + 9));
        let second = text.find("But this").unwrap();
        assert!(!directives.covers(second, second + 8));
    }

    #[test]
    fn test_trailing_bare_marker_skips_own_line() {
        let text = "let gray = 1; // m2e-ignore\nplain color text\n";
        let directives = IgnoreDirectives::scan(text);
        assert!(directives.covers(4, 8));
        let plain = text.find("plain").unwrap();
        assert!(!directives.covers(plain, plain + 5));
    }

    #[test]
    fn test_marker_outside_comment_ignored() {
        let directives = IgnoreDirectives::scan("the string m2e-ignore appears in prose\n");
        assert!(directives.skipped_ranges().is_empty());
    }

    #[test]
    fn test_apostrophe_in_prose_is_not_a_comment() {
        let directives =
            IgnoreDirectives::scan("it's fine to mention m2e-ignore in prose\ncolor here\n");
        assert!(directives.skipped_ranges().is_empty());
    }

    #[test]
    fn test_vb_comment_at_line_start() {
        let directives = IgnoreDirectives::scan("' m2e-ignore-file\nDim color As String\n");
        assert!(directives.file_ignored());
    }

    #[test]
    fn test_case_insensitive() {
        let directives = IgnoreDirectives::scan("# M2E-IGNORE-FILE\n");
        assert!(directives.file_ignored());
    }

    #[test]
    fn test_marker_on_last_line() {
        // Standalone marker with no following line must not panic.
        let directives = IgnoreDirectives::scan("// m2e-ignore");
        assert!(directives.covers(0, 5));
    }
}
