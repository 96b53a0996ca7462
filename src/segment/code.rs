//! Code awareness: fenced blocks, inline code spans, and the whole-text
//! code sniff.
//!
//! Inside a fenced block only recognized comment text converts; the rest of
//! the block stays byte-identical. Inline backtick spans never convert. An
//! input with no fence or inline marker is plain text unless the whole-text
//! sniff recognizes source code, in which case the entire input is demoted
//! to comment-only conversion.

use std::ops::Range;

/// Comment openers recognized anywhere in a code line.
const UNAMBIGUOUS_OPENERS: &[&str] = &["//", "/*", "<!--"];

/// Openers that double as ordinary code characters (`;` terminates
/// statements, `#` starts preprocessor lines). Only counted at line start or
/// after whitespace. `'` is excluded outright: it would collide with
/// apostrophes inside string literals.
const AMBIGUOUS_OPENERS: &[&str] = &["#", "--", ";", "%"];

/// Byte ranges of one scanned input, split into untouchable code and
/// convertible comment text.
#[derive(Debug, Clone, Default)]
pub struct CodeSegments {
    code: Vec<Range<usize>>,
    comments: Vec<Range<usize>>,
}

impl CodeSegments {
    /// Scan `text` for fenced blocks and inline code spans.
    pub fn scan(text: &str) -> Self {
        let mut segments = CodeSegments::default();

        let has_fence = text
            .lines()
            .any(|line| fence_delimiter(line.trim_start()).is_some());
        let has_inline = text.contains('`');

        if !has_fence && !has_inline {
            if looks_like_code(text) {
                // Whole input is source code; convert comments only.
                let mut offset = 0;
                for raw in text.split_inclusive('\n') {
                    let line = raw.trim_end_matches(['\n', '\r']);
                    segments.push_code_line_split(text, offset, offset + line.len());
                    offset += raw.len();
                }
            }
            return segments;
        }

        let mut fence: Option<char> = None;
        let mut offset = 0;
        for raw in text.split_inclusive('\n') {
            let line_start = offset;
            offset += raw.len();
            let line = raw.trim_end_matches(['\n', '\r']);
            let line_end = line_start + line.len();

            if let Some(delimiter) = fence_delimiter(line.trim_start()) {
                match fence {
                    Some(open) if open == delimiter => fence = None,
                    Some(_) => {
                        // A mismatched delimiter is ordinary code inside the
                        // open fence.
                        segments.push_code_line_split(text, line_start, line_end);
                        continue;
                    }
                    None => fence = Some(delimiter),
                }
                // Delimiter lines (and any language tag) stay untouched.
                segments.code.push(line_start..line_end);
                continue;
            }

            if fence.is_some() {
                segments.push_code_line_split(text, line_start, line_end);
            } else {
                segments.push_inline_spans(line, line_start);
            }
        }

        segments
    }

    /// Whether `[start, end)` touches an untouchable code range.
    pub fn suppresses(&self, start: usize, end: usize) -> bool {
        self.code
            .iter()
            .any(|range| start < range.end && range.start < end)
    }

    /// Untouchable code ranges, in input order.
    pub fn code_ranges(&self) -> &[Range<usize>] {
        &self.code
    }

    /// Convertible comment ranges inside code, in input order.
    pub fn comment_ranges(&self) -> &[Range<usize>] {
        &self.comments
    }

    /// Split one code line at its comment opener, if any.
    fn push_code_line_split(&mut self, text: &str, start: usize, end: usize) {
        let line = &text[start..end];
        match comment_start(line) {
            Some(pos) => {
                if pos > 0 {
                    self.code.push(start..start + pos);
                }
                self.comments.push(start + pos..end);
            }
            None => {
                if start < end {
                    self.code.push(start..end);
                }
            }
        }
    }

    /// Mark paired inline backtick spans on one prose line.
    fn push_inline_spans(&mut self, line: &str, line_start: usize) {
        let ticks: Vec<usize> = line
            .char_indices()
            .filter(|(_, c)| *c == '`')
            .map(|(i, _)| i)
            .collect();
        for pair in ticks.chunks_exact(2) {
            self.code.push(line_start + pair[0]..line_start + pair[1] + 1);
        }
    }
}

/// Position where the comment portion of a code line begins, if any.
fn comment_start(line: &str) -> Option<usize> {
    let mut best: Option<usize> = None;
    for opener in UNAMBIGUOUS_OPENERS {
        if let Some(pos) = line.find(opener) {
            best = Some(best.map_or(pos, |b| b.min(pos)));
        }
    }
    for opener in AMBIGUOUS_OPENERS {
        let mut search = 0;
        while let Some(rel) = line[search..].find(opener) {
            let pos = search + rel;
            if pos == 0 || line[..pos].ends_with(char::is_whitespace) {
                best = Some(best.map_or(pos, |b| b.min(pos)));
                break;
            }
            search = pos + opener.len();
        }
    }
    best
}

/// First fence delimiter character of a line starting with ``` or ~~~.
fn fence_delimiter(trimmed: &str) -> Option<char> {
    for delimiter in ['`', '~'] {
        if trimmed.chars().take_while(|c| *c == delimiter).count() >= 3 {
            return Some(delimiter);
        }
    }
    None
}

/// Whole-text sniff for inputs that are source code without any fence.
///
/// A shebang decides outright; otherwise at least two distinct code-shape
/// signals are required, so ordinary prose with a stray brace stays prose.
pub fn looks_like_code(text: &str) -> bool {
    if text.starts_with("#!") {
        return true;
    }

    let mut signals = 0;
    // Trailing comments hide the statement terminator, so test the code
    // portion of each line only.
    let terminated_lines = text
        .lines()
        .filter(|line| {
            let code = comment_start(line).map_or(*line, |pos| &line[..pos]);
            let trimmed = code.trim_end();
            trimmed.ends_with(';') || trimmed.ends_with('{') || trimmed.ends_with('}')
        })
        .count();
    if terminated_lines >= 2 {
        signals += 1;
    }
    for needle in [
        "fn ", "def ", "function ", "#include", "import ", "class ", "return ", "=> ",
    ] {
        if text.contains(needle) {
            signals += 1;
        }
    }
    if text.matches(" = ").count() >= 2 {
        signals += 1;
    }

    signals >= 2
}
