//! Contextual word disambiguation.
//!
//! Words like "license" keep one spelling in American English but split by
//! grammatical role in British English ("licence" noun, "license" verb).
//! The disambiguator runs every compiled word rule over the input, scores
//! each candidate against its context, and picks a replacement that
//! preserves the original case pattern.
//!
//! # Examples
//!
//! ```
//! use anglicise::config::WordConfig;
//! use anglicise::detect::word::WordDisambiguator;
//! use anglicise::pattern::WordType;
//!
//! let disambiguator = WordDisambiguator::new(&WordConfig::default()).unwrap();
//! let matches = disambiguator.detect("I need a license to drive");
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].word_type, WordType::Noun);
//! assert_eq!(matches[0].replacement, "licence");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::WordConfig;
use crate::error::Result;
use crate::pattern::exclusion::ExclusionRules;
use crate::pattern::grammar::{self, WordRule, WordRuleKind, WordType};
use crate::scoring::{ContextFeatures, score};
use crate::span::{Span, resolve_overlaps};
use crate::util::{context_window, match_case};

/// Co-occurring phrases that argue against rewriting a word. Unlike
/// exclusions these only subtract; strong surrounding grammar can still win.
const CO_OCCURRENCES: &[(&str, &str)] = &[
    ("license", r"(?i)\b(?:software|commercial|proprietary|site)\s+licen[cs]e\b"),
    ("practice", r"(?i)\bin\s+practice\b"),
];

/// A detected contextual-word span.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    /// Byte offset where the word starts.
    pub start: usize,
    /// Byte offset one past the end of the word.
    pub end: usize,
    /// The matched word, verbatim.
    pub original_word: String,
    /// Grammatical role the winning rule assigned.
    pub word_type: WordType,
    /// The configured base word, lowercase.
    pub base_word: String,
    /// Case-adjusted replacement. Equal to `original_word` when the decided
    /// role keeps the American spelling.
    pub replacement: String,
    /// Final clamped confidence.
    pub confidence: f64,
}

impl Span for WordMatch {
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

/// Detector choosing between noun/verb spellings of ambiguous words.
#[derive(Debug)]
pub struct WordDisambiguator {
    rules: Vec<WordRule>,
    exclusions: ExclusionRules,
    co_occurrences: Vec<(String, Regex)>,
    min_confidence: f64,
    enabled: bool,
}

impl WordDisambiguator {
    /// Compile the rule set and exclusion rules for `config`.
    pub fn new(config: &WordConfig) -> Result<Self> {
        let mut co_occurrences = Vec::with_capacity(CO_OCCURRENCES.len());
        for (base_word, pattern) in CO_OCCURRENCES {
            co_occurrences.push((base_word.to_string(), Regex::new(pattern)?));
        }
        Ok(WordDisambiguator {
            rules: grammar::compile(config)?,
            exclusions: ExclusionRules::for_words(&config.excluded_patterns)?,
            co_occurrences,
            min_confidence: config.min_confidence,
            enabled: config.enabled,
        })
    }

    /// Detect contextual-word spans in `text`.
    ///
    /// Every rule runs for every enabled word; the ordered, non-overlapping
    /// result keeps the highest-confidence reading of each position.
    /// Semantic-variant rules carry 0.99 confidence and therefore outrank
    /// any grammatical reading of the same span.
    pub fn detect(&self, text: &str) -> Vec<WordMatch> {
        if !self.enabled {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        for rule in &self.rules {
            for captures in rule.regex.captures_iter(text) {
                let word = match captures.name("w") {
                    Some(group) => group,
                    None => continue,
                };

                let context = context_window(text, word.start(), word.end());
                if self.exclusions.vetoes(context) {
                    continue;
                }

                let features = self.features(rule, context);
                let confidence = score(rule.base_confidence, &features);
                if confidence < self.min_confidence {
                    continue;
                }

                let word_type = match &rule.kind {
                    WordRuleKind::Semantic { .. } => WordType::Unknown,
                    WordRuleKind::Grammatical { role, .. } => *role,
                };

                candidates.push(WordMatch {
                    start: word.start(),
                    end: word.end(),
                    original_word: word.as_str().to_string(),
                    word_type,
                    base_word: rule.base_word.clone(),
                    replacement: match_case(word.as_str(), &rule.replacement_for(word.as_str())),
                    confidence,
                });
            }
        }

        resolve_overlaps(candidates)
    }

    fn features(&self, rule: &WordRule, context: &str) -> ContextFeatures {
        let context_lower = context.to_lowercase();

        let strong_cue = matches!(
            &rule.kind,
            WordRuleKind::Grammatical { role: WordType::Verb, .. }
        ) && context_lower.contains(&format!("to {}", rule.base_word));

        let co_occurrence_penalty = self
            .co_occurrences
            .iter()
            .any(|(base, pattern)| *base == rule.base_word && pattern.is_match(context));

        ContextFeatures {
            strong_cue,
            co_occurrence_penalty,
            ..Default::default()
        }
    }
}
