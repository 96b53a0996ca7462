//! Unit-of-measure detection.
//!
//! Runs every compiled unit pattern over the input, parses the numeral of
//! each match, scores it against its surrounding context, and resolves
//! overlaps into an ordered [`UnitMatch`] list.
//!
//! # Examples
//!
//! ```
//! use anglicise::config::UnitConfig;
//! use anglicise::detect::unit::UnitDetector;
//! use anglicise::pattern::UnitType;
//!
//! let detector = UnitDetector::new(&UnitConfig::default()).unwrap();
//! let matches = detector.detect("The room is 12 feet wide");
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].value, 12.0);
//! assert_eq!(matches[0].unit, "feet");
//! assert_eq!(matches[0].unit_type, UnitType::Length);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::UnitConfig;
use crate::error::Result;
use crate::pattern::exclusion::ExclusionRules;
use crate::pattern::numeral::parse_numeral;
use crate::pattern::unit::{self, UnitPattern, UnitType};
use crate::scoring::{ContextFeatures, score};
use crate::span::{Span, resolve_overlaps};
use crate::util::context_window;

/// Vocabulary that raises confidence when it appears near a unit match.
const MEASUREMENT_VOCAB: &[&str] = &[
    "wide", "width", "tall", "height", "long", "length", "deep", "depth", "high", "distance",
    "weigh", "weighs", "weight", "heavy", "temperature", "warm", "cold", "hot", "area", "room",
    "ceiling", "wall", "fence", "tank", "capacity", "measure", "measures", "size", "walked",
    "drove", "drive", "ran", "pour", "add",
];

/// Parsed values in this range get the plausibility boost.
const PLAUSIBLE_RANGE: std::ops::RangeInclusive<f64> = 0.01..=1000.0;

/// A detected unit span.
///
/// Offsets index the *original* string handed to [`UnitDetector::detect`].
/// `context` carries the ±50-character scoring window and is never
/// serialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitMatch {
    /// Byte offset where the matched phrase starts.
    pub start: usize,
    /// Byte offset one past the end of the matched phrase.
    pub end: usize,
    /// The matched phrase, verbatim.
    pub text: String,
    /// Parsed numeric value.
    pub value: f64,
    /// Canonical unit name ("feet", "fahrenheit").
    pub unit: String,
    /// Measurement family.
    pub unit_type: UnitType,
    /// Hyphenated compound form ("6-foot"), rendered singular on conversion.
    pub is_compound: bool,
    /// Final clamped confidence.
    pub confidence: f64,
    /// Scoring context window; not persisted.
    #[serde(skip)]
    pub context: String,
}

impl Span for UnitMatch {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Detector for unit-of-measure phrases.
///
/// Pattern tables compile once at construction and are read-only afterward,
/// so a detector is safe to share across threads.
#[derive(Debug)]
pub struct UnitDetector {
    patterns: Vec<UnitPattern>,
    exclusions: ExclusionRules,
    min_confidence: f64,
    enabled: bool,
}

impl UnitDetector {
    /// Compile the pattern library and exclusion rules for `config`.
    pub fn new(config: &UnitConfig) -> Result<Self> {
        Ok(UnitDetector {
            patterns: unit::compile(config)?,
            exclusions: ExclusionRules::for_units(&config.excluded_patterns)?,
            min_confidence: config.min_confidence,
            enabled: config.enabled,
        })
    }

    /// Detect unit spans in `text`.
    ///
    /// The result is strictly increasing in `start` and pairwise
    /// non-overlapping. Unparseable numerals drop their match; nothing
    /// aborts the pass.
    pub fn detect(&self, text: &str) -> Vec<UnitMatch> {
        if !self.enabled {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        for pattern in &self.patterns {
            for captures in pattern.regex.captures_iter(text) {
                let Some(whole) = captures.get(0) else {
                    continue;
                };
                let numeral = match captures.name("n") {
                    Some(group) => group.as_str(),
                    None => continue,
                };
                let value = match parse_numeral(numeral) {
                    Ok(value) => value,
                    Err(_) => continue,
                };

                let context = context_window(text, whole.start(), whole.end());
                let features = self.features(whole.as_str(), value, context, pattern);
                let confidence = score(pattern.base_confidence, &features);
                if confidence < self.min_confidence {
                    continue;
                }

                candidates.push(UnitMatch {
                    start: whole.start(),
                    end: whole.end(),
                    text: whole.as_str().to_string(),
                    value,
                    unit: pattern.unit.to_string(),
                    unit_type: pattern.unit_type,
                    is_compound: pattern.is_compound,
                    confidence,
                    context: context.to_string(),
                });
            }
        }

        resolve_overlaps(candidates)
    }

    fn features(
        &self,
        matched: &str,
        value: f64,
        context: &str,
        pattern: &UnitPattern,
    ) -> ContextFeatures {
        let context_lower = context.to_lowercase();
        let vocabulary_hits = MEASUREMENT_VOCAB
            .iter()
            .filter(|word| context_lower.contains(*word))
            .count();

        ContextFeatures {
            vocabulary_hits,
            no_space_adjacency: !pattern.is_compound
                && !matched.contains(char::is_whitespace)
                && matched.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '-'),
            plausible_value: PLAUSIBLE_RANGE.contains(&value),
            strong_cue: false,
            idiom_hit: self.exclusions.vetoes(context),
            co_occurrence_penalty: false,
            // Temperatures are the one family where negative values are
            // ordinary readings.
            out_of_range: if pattern.unit_type == UnitType::Temperature {
                !(-500.0..=10000.0).contains(&value)
            } else {
                !(0.001..=10000.0).contains(&value)
            },
        }
    }
}
