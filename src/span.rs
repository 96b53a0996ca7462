//! Span primitives shared by all detectors.
//!
//! A span is a half-open byte range `[start, end)` into the *original* input
//! string, together with a confidence score and a proposed replacement. Every
//! detector produces spans anchored to the same original string; offsets are
//! never adjusted before splicing.
//!
//! # Core pieces
//!
//! - [`Span`] - trait implemented by every detection type
//! - [`Replacement`] - a resolved span ready for application
//! - [`resolve_overlaps`] - keep the higher-confidence span of each
//!   intersecting pair, with a deterministic tie-break
//! - [`splice`] - apply replacements highest-start-first to one buffer
//!
//! # Examples
//!
//! ```
//! use anglicise::span::{Replacement, splice};
//!
//! let replacements = vec![
//!     Replacement::new(0, 5, "Howdy".to_string()),
//!     Replacement::new(6, 11, "globe".to_string()),
//! ];
//! assert_eq!(splice("Hello world", replacements), "Howdy globe");
//! ```

use serde::{Deserialize, Serialize};

/// Trait for detections that occupy a byte range of the original input.
///
/// Invariants: `start() < end()`, `confidence()` in `[0, 1]`, and within one
/// filtered detector pass no two spans intersect.
pub trait Span {
    /// Byte offset where the span starts in the original text.
    fn start(&self) -> usize;

    /// Byte offset one past the end of the span.
    fn end(&self) -> usize;

    /// Heuristic confidence in `[0, 1]`.
    fn confidence(&self) -> f64;

    /// Byte length of the span.
    fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Whether two spans intersect: `a.start < b.end && b.start < a.end`.
    fn overlaps(&self, other: &dyn Span) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }
}

/// A resolved replacement: the producer has already been applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Replacement {
    /// Byte offset where the replaced range starts.
    pub start: usize,
    /// Byte offset one past the end of the replaced range.
    pub end: usize,
    /// Text to substitute for `[start, end)`.
    pub text: String,
}

impl Replacement {
    /// Create a new replacement for `[start, end)`.
    pub fn new(start: usize, end: usize, text: String) -> Self {
        Replacement { start, end, text }
    }
}

impl Span for Replacement {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn confidence(&self) -> f64 {
        1.0
    }
}

/// Resolve overlapping spans, keeping the higher-confidence one of each
/// intersecting pair.
///
/// Ties break deterministically: the earlier start wins, and at identical
/// starts the span registered first (earlier in `spans`) wins. The result is
/// strictly increasing in `start` and pairwise non-overlapping.
pub fn resolve_overlaps<T: Span>(mut spans: Vec<T>) -> Vec<T> {
    // Stable sort preserves registration order for identical starts.
    spans.sort_by(|a, b| a.start().cmp(&b.start()));

    let mut kept: Vec<T> = Vec::with_capacity(spans.len());
    for candidate in spans {
        match kept.last() {
            Some(last) if candidate.start() < last.end() => {
                // Strict comparison: on equal confidence the earlier span stays.
                if candidate.confidence() > last.confidence() {
                    kept.pop();
                    kept.push(candidate);
                }
            }
            _ => kept.push(candidate),
        }
    }
    kept
}

/// Apply non-overlapping replacements to `original`, producing a new string.
///
/// Replacements are applied highest-`start`-first into a single buffer.
/// Replacement length generally differs from matched length, so any other
/// order would invalidate the offsets of unapplied replacements.
pub fn splice(original: &str, mut replacements: Vec<Replacement>) -> String {
    replacements.sort_by(|a, b| b.start.cmp(&a.start));

    let mut output = original.to_string();
    for r in &replacements {
        debug_assert!(r.start < r.end && r.end <= original.len());
        output.replace_range(r.start..r.end, &r.text);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rep(start: usize, end: usize, conf: f64) -> TestSpan {
        TestSpan { start, end, conf }
    }

    struct TestSpan {
        start: usize,
        end: usize,
        conf: f64,
    }

    impl Span for TestSpan {
        fn start(&self) -> usize {
            self.start
        }
        fn end(&self) -> usize {
            self.end
        }
        fn confidence(&self) -> f64 {
            self.conf
        }
    }

    #[test]
    fn test_resolve_keeps_higher_confidence() {
        let spans = vec![rep(0, 10, 0.6), rep(5, 12, 0.9)];
        let resolved = resolve_overlaps(spans);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].start, 5);
    }

    #[test]
    fn test_resolve_tie_prefers_earlier_start() {
        let spans = vec![rep(5, 12, 0.8), rep(0, 10, 0.8)];
        let resolved = resolve_overlaps(spans);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].start, 0);
    }

    #[test]
    fn test_resolve_tie_prefers_earlier_registered() {
        let spans = vec![rep(0, 10, 0.8), rep(0, 8, 0.8)];
        let resolved = resolve_overlaps(spans);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].end, 10);
    }

    #[test]
    fn test_resolve_disjoint_spans_all_kept() {
        let spans = vec![rep(0, 4, 0.5), rep(4, 8, 0.9), rep(10, 12, 0.3)];
        let resolved = resolve_overlaps(spans);
        assert_eq!(resolved.len(), 3);
        assert!(resolved.windows(2).all(|w| w[0].end <= w[1].start));
    }

    #[test]
    fn test_splice_reverse_order() {
        let reps = vec![
            Replacement::new(0, 5, "colour".to_string()),
            Replacement::new(10, 15, "metre".to_string()),
        ];
        assert_eq!(splice("color and meter", reps), "colour and metre");
    }

    #[test]
    fn test_splice_length_changes_do_not_shift_earlier_spans() {
        // A longer replacement late in the string must not disturb an
        // earlier offset.
        let reps = vec![
            Replacement::new(12, 16, "kilometres and kilometres".to_string()),
            Replacement::new(0, 4, "grey".to_string()),
        ];
        assert_eq!(
            splice("gray skies, mile after mile", reps),
            "grey skies, kilometres and kilometres after mile"
        );
    }

    #[test]
    fn test_splice_empty_list_is_identity() {
        assert_eq!(splice("unchanged", Vec::new()), "unchanged");
    }
}
