//! Shared text utilities: context windows, case patterns, URL recognition.

use std::sync::LazyLock;

use regex::Regex;

/// Radius (in characters) of the scoring context window around a span.
pub const CONTEXT_RADIUS: usize = 50;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:https?|ftp)://\S+|www\.\S+|\S+\.(?:com|org|net|io|dev|co\.uk)(?:/\S*)?)$")
        .unwrap()
});

/// The capitalization shape of a word, preserved across replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CasePattern {
    /// Every alphabetic character is uppercase ("COLOR").
    AllCaps,
    /// First character uppercase, rest lowercase ("Color").
    Capitalised,
    /// Everything else, left as the replacement's own casing.
    Lowercase,
}

impl CasePattern {
    /// Detect the case pattern of `word`.
    pub fn of(word: &str) -> CasePattern {
        let mut alphabetic = word.chars().filter(|c| c.is_alphabetic());
        match alphabetic.next() {
            Some(first) if first.is_uppercase() => {
                let rest: Vec<char> = alphabetic.collect();
                if !rest.is_empty() && rest.iter().all(|c| c.is_uppercase()) {
                    CasePattern::AllCaps
                } else {
                    CasePattern::Capitalised
                }
            }
            _ => CasePattern::Lowercase,
        }
    }

    /// Apply this pattern to `replacement`.
    pub fn apply(&self, replacement: &str) -> String {
        match self {
            CasePattern::AllCaps => replacement.to_uppercase(),
            CasePattern::Capitalised => {
                let mut chars = replacement.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
            CasePattern::Lowercase => replacement.to_string(),
        }
    }
}

/// Restore the case pattern of `original` onto `replacement`.
pub fn match_case(original: &str, replacement: &str) -> String {
    CasePattern::of(original).apply(replacement)
}

/// Extract the ±[`CONTEXT_RADIUS`]-character window around `[start, end)`.
///
/// Offsets are byte offsets; the window is widened outward to character
/// boundaries so slicing never lands inside a multi-byte sequence. Used for
/// scoring only, never persisted.
pub fn context_window(text: &str, start: usize, end: usize) -> &str {
    let mut window_start = start.saturating_sub(CONTEXT_RADIUS);
    while window_start > 0 && !text.is_char_boundary(window_start) {
        window_start -= 1;
    }

    let mut window_end = (end + CONTEXT_RADIUS).min(text.len());
    while window_end < text.len() && !text.is_char_boundary(window_end) {
        window_end += 1;
    }

    &text[window_start..window_end]
}

/// Whether `token` looks like a URL or bare domain. URL tokens are never
/// looked up or rewritten.
pub fn is_url(token: &str) -> bool {
    URL_PATTERN.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_pattern_detection() {
        assert_eq!(CasePattern::of("COLOR"), CasePattern::AllCaps);
        assert_eq!(CasePattern::of("Color"), CasePattern::Capitalised);
        assert_eq!(CasePattern::of("color"), CasePattern::Lowercase);
        assert_eq!(CasePattern::of("cOLOR"), CasePattern::Lowercase);
        // A single capital letter reads as capitalised, not all-caps.
        assert_eq!(CasePattern::of("I"), CasePattern::Capitalised);
    }

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("COLOR", "colour"), "COLOUR");
        assert_eq!(match_case("Color", "colour"), "Colour");
        assert_eq!(match_case("color", "colour"), "colour");
    }

    #[test]
    fn test_context_window_bounds() {
        let text = "short";
        assert_eq!(context_window(text, 0, 5), "short");

        let long = "a".repeat(200);
        let window = context_window(&long, 100, 110);
        assert_eq!(window.len(), 110);
    }

    #[test]
    fn test_context_window_char_boundary() {
        let text = "héllo wörld ".repeat(20);
        let window = context_window(&text, 60, 70);
        assert!(!window.is_empty());
    }

    #[test]
    fn test_url_detection() {
        assert!(is_url("https://example.com/color"));
        assert!(is_url("http://example.org"));
        assert!(is_url("www.example.net"));
        assert!(is_url("example.com"));
        assert!(!is_url("color"));
        assert!(!is_url("colorful"));
    }
}
