//! The conversion facade.
//!
//! A [`Converter`] compiles every rule table once at construction and is
//! immutable afterward, so one instance is `Send + Sync` and safe to share
//! across threads. Each call runs the same pure pipeline: optional
//! smart-quote normalization, segmentation, the three detectors, overlap
//! resolution, and a single splice over the original string.
//!
//! # Examples
//!
//! ```
//! use anglicise::Converter;
//! use anglicise::config::{UnitConfig, WordConfig};
//!
//! let converter = Converter::new(UnitConfig::default(), WordConfig::default()).unwrap();
//! let output = converter
//!     .convert_to_regional("My favorite color fence is 6 feet tall.", false)
//!     .unwrap();
//! assert_eq!(output, "My favourite colour fence is 1.8 metres tall.");
//! ```

use crate::config::{UnitConfig, WordConfig};
use crate::convert::{ConvertedUnit, UnitConverter};
use crate::detect::unit::{UnitDetector, UnitMatch};
use crate::detect::word::{WordDisambiguator, WordMatch};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::segment::{CodeSegments, IgnoreDirectives, protected_ranges};
use crate::span::{Replacement, Span, resolve_overlaps, splice};

/// A scored candidate replacement from any detector.
struct Candidate {
    replacement: Replacement,
    confidence: f64,
}

impl Span for Candidate {
    fn start(&self) -> usize {
        self.replacement.start
    }

    fn end(&self) -> usize {
        self.replacement.end
    }

    fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Compiled conversion pipeline.
pub struct Converter {
    units: UnitDetector,
    words: WordDisambiguator,
    dictionary: Dictionary,
    unit_converter: UnitConverter,
    words_enabled: bool,
}

impl Converter {
    /// Validate both configs and compile the full rule set.
    pub fn new(unit: UnitConfig, word: WordConfig) -> Result<Converter> {
        unit.validate()?;
        word.validate()?;
        Ok(Converter {
            units: UnitDetector::new(&unit)?,
            words: WordDisambiguator::new(&word)?,
            dictionary: Dictionary::from_config(&word),
            unit_converter: UnitConverter::new(unit),
            words_enabled: word.enabled,
        })
    }

    /// Convert `text` with the full segmentation front-end: ignore
    /// directives, code awareness, and markdown preservation.
    pub fn convert_to_regional(&self, text: &str, normalise_smart_quotes: bool) -> Result<String> {
        self.convert_inner(text, true, true, normalise_smart_quotes)
    }

    /// Convert with code and markdown awareness but without honoring
    /// `m2e-ignore` markers.
    pub fn convert_ignoring_directives(
        &self,
        text: &str,
        normalise_smart_quotes: bool,
    ) -> Result<String> {
        self.convert_inner(text, false, true, normalise_smart_quotes)
    }

    /// Convert the whole input as plain prose, with no segmentation at all.
    pub fn convert_plain(&self, text: &str, normalise_smart_quotes: bool) -> Result<String> {
        self.convert_inner(text, false, false, normalise_smart_quotes)
    }

    /// Detect unit spans without converting them.
    pub fn detect_unit_spans(&self, text: &str) -> Vec<UnitMatch> {
        self.units.detect(text)
    }

    /// Convert one detected unit span to its metric equivalent.
    pub fn convert_unit_span(&self, m: &UnitMatch) -> Result<ConvertedUnit> {
        self.unit_converter.convert(m)
    }

    /// Detect contextual-word spans without converting them.
    pub fn detect_word_spans(&self, text: &str) -> Vec<WordMatch> {
        self.words.detect(text)
    }

    fn convert_inner(
        &self,
        text: &str,
        honor_directives: bool,
        segment: bool,
        normalise_smart_quotes: bool,
    ) -> Result<String> {
        let normalized;
        let text: &str = if normalise_smart_quotes {
            normalized = normalize_smart_quotes(text);
            &normalized
        } else {
            text
        };

        let directives = honor_directives.then(|| IgnoreDirectives::scan(text));
        if let Some(directives) = &directives {
            if directives.file_ignored() {
                return Ok(text.to_string());
            }
        }

        let (code, protected) = if segment {
            (CodeSegments::scan(text), protected_ranges(text))
        } else {
            (CodeSegments::default(), Vec::new())
        };

        let mut candidates = self.collect_candidates(text);
        candidates.retain(|candidate| {
            let (start, end) = (candidate.start(), candidate.end());
            if let Some(directives) = &directives {
                if directives.covers(start, end) {
                    return false;
                }
            }
            if code.suppresses(start, end) {
                return false;
            }
            !protected
                .iter()
                .any(|range| start < range.end && range.start < end)
        });

        let replacements = resolve_overlaps(candidates)
            .into_iter()
            .map(|candidate| candidate.replacement)
            .collect();
        Ok(splice(text, replacements))
    }

    /// Run all three detectors over `text` and collect scored candidates.
    fn collect_candidates(&self, text: &str) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        if self.words_enabled {
            for replacement in self.dictionary.detect(text) {
                candidates.push(Candidate { replacement, confidence: 1.0 });
            }
        }

        for m in self.words.detect(text) {
            // Verb readings of e.g. "license" decide to keep the American
            // spelling; those are not replacements.
            if m.replacement == m.original_word {
                continue;
            }
            candidates.push(Candidate {
                replacement: Replacement::new(m.start, m.end, m.replacement),
                confidence: m.confidence,
            });
        }

        for m in self.units.detect(text) {
            // Units missing from the conversion table skip their span; the
            // rest of the batch keeps going.
            let Ok(converted) = self.unit_converter.convert(&m) else {
                continue;
            };
            candidates.push(Candidate {
                replacement: Replacement::new(m.start, m.end, converted.formatted),
                confidence: m.confidence,
            });
        }

        candidates
    }
}

/// Replace curly single and double quotes with their straight equivalents.
fn normalize_smart_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> Converter {
        Converter::new(UnitConfig::default(), WordConfig::default()).unwrap()
    }

    #[test]
    fn test_mixed_sentence() {
        let output = converter()
            .convert_to_regional("My favorite color fence is 6 feet tall.", false)
            .unwrap();
        assert_eq!(output, "My favourite colour fence is 1.8 metres tall.");
    }

    #[test]
    fn test_contextual_noun_and_verb() {
        let output = converter()
            .convert_to_regional("I need a license to drive.", false)
            .unwrap();
        assert_eq!(output, "I need a licence to drive.");

        let output = converter()
            .convert_to_regional("We will license our software.", false)
            .unwrap();
        assert_eq!(output, "We will license our software.");
    }

    #[test]
    fn test_fenced_code_untouched_comments_convert() {
        let input = "The color is gray.\n```rust\nlet color = \"gray\"; // favorite color\n```\n";
        let output = converter().convert_to_regional(input, false).unwrap();
        assert!(output.starts_with("The colour is grey.\n"));
        assert!(output.contains("let color = \"gray\"; // favourite colour"));
    }

    #[test]
    fn test_file_ignore_marker() {
        let input = "# m2e-ignore-file\nThe color is gray, 12 feet wide.\n";
        let output = converter().convert_to_regional(input, false).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_next_line_skip() {
        let input = "<!-- m2e-ignore -->\nThe color stays.\nThe color changes.\n";
        let output = converter().convert_to_regional(input, false).unwrap();
        assert_eq!(output, "<!-- m2e-ignore -->\nThe color stays.\nThe colour changes.\n");
    }

    #[test]
    fn test_plain_mode_converts_inside_code() {
        let input = "```\nfavorite color\n```\n";
        let output = converter().convert_plain(input, false).unwrap();
        assert!(output.contains("favourite colour"));

        let output = converter().convert_to_regional(input, false).unwrap();
        assert!(output.contains("favorite color"));
    }

    #[test]
    fn test_ignoring_directives_still_segments() {
        let input = "// m2e-ignore\nfavorite color here\n`color` inline\n";
        let output = converter().convert_ignoring_directives(input, false).unwrap();
        assert!(output.contains("favourite colour here"));
        assert!(output.contains("`color` inline"));
    }

    #[test]
    fn test_smart_quote_normalization() {
        let output = converter()
            .convert_plain("\u{2018}color\u{2019} and \u{201C}gray\u{201D}", true)
            .unwrap();
        assert_eq!(output, "'colour' and \"grey\"");
    }

    #[test]
    fn test_link_target_preserved() {
        let input = "Read [color theory](https://example.com/color-theory) first.";
        let output = converter().convert_to_regional(input, false).unwrap();
        assert_eq!(
            output,
            "Read [colour theory](https://example.com/color-theory) first."
        );
    }

    #[test]
    fn test_idempotent_on_converted_output() {
        let converter = converter();
        let input = "My favorite color fence is 6 feet tall, 12 feet wide.";
        let once = converter.convert_to_regional(input, false).unwrap();
        let twice = converter.convert_to_regional(&once, false).unwrap();
        assert_eq!(once, twice);
    }
}
