//! Contextual-word and dictionary configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AngliciseError, Result};

/// The noun/verb spelling pair for one grammatically ambiguous base word.
///
/// American English collapses these pairs into one spelling; the target
/// dialect splits them by grammatical role ("licence" noun, "license" verb).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordEntry {
    /// Spelling when the word is used as a noun.
    pub noun: String,
    /// Spelling when the word is used as a verb.
    pub verb: String,
    /// Per-word disable switch.
    pub enabled: bool,
}

impl Default for WordEntry {
    fn default() -> Self {
        WordEntry {
            noun: String::new(),
            verb: String::new(),
            enabled: true,
        }
    }
}

/// Configuration for the word disambiguator and dictionary lookup.
///
/// `contextual_words` is a `BTreeMap` so rule generation iterates in a
/// deterministic order; overlap ties then resolve to the earliest-registered
/// rule instead of inheriting map-iteration ambiguity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordConfig {
    /// Master switch for spelling conversion (dictionary + contextual).
    pub enabled: bool,
    /// Contextual-word spans scoring below this are dropped. Range [0, 1].
    pub min_confidence: f64,
    /// Grammatically ambiguous words handled by the disambiguator.
    /// Keys here are excluded from the plain dictionary table.
    pub contextual_words: BTreeMap<String, WordEntry>,
    /// User word→word entries merged onto the built-in dictionary.
    pub dictionary_overrides: BTreeMap<String, String>,
    /// Extra exclusion patterns matched against the ±50-character context.
    pub excluded_patterns: Vec<String>,
}

impl Default for WordConfig {
    fn default() -> Self {
        let mut contextual_words = BTreeMap::new();
        contextual_words.insert(
            "license".to_string(),
            WordEntry {
                noun: "licence".to_string(),
                verb: "license".to_string(),
                enabled: true,
            },
        );
        contextual_words.insert(
            "practice".to_string(),
            WordEntry {
                noun: "practice".to_string(),
                verb: "practise".to_string(),
                enabled: true,
            },
        );
        // Semantic-variant words: the sense, not the grammatical role, is
        // the split. Identical noun/verb spellings suppress grammatical rule
        // generation; the hand-authored semantic rules in the pattern
        // library carry the rewrites. Listing them here also keeps them out
        // of the plain dictionary.
        contextual_words.insert(
            "meter".to_string(),
            WordEntry {
                noun: "meter".to_string(),
                verb: "meter".to_string(),
                enabled: true,
            },
        );
        contextual_words.insert(
            "story".to_string(),
            WordEntry {
                noun: "story".to_string(),
                verb: "story".to_string(),
                enabled: true,
            },
        );

        WordConfig {
            enabled: true,
            min_confidence: 0.5,
            contextual_words,
            dictionary_overrides: BTreeMap::new(),
            excluded_patterns: Vec::new(),
        }
    }
}

impl WordConfig {
    /// Build a config by deep-merging `overrides` onto the defaults.
    pub fn from_value(overrides: &Value) -> Result<Self> {
        let config: WordConfig = super::from_overrides(overrides)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the documented invariants. Never mutates.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(AngliciseError::invalid_config(format!(
                "min_confidence must be in [0, 1], got {}",
                self.min_confidence
            )));
        }
        for (base, entry) in &self.contextual_words {
            if entry.enabled && (entry.noun.is_empty() || entry.verb.is_empty()) {
                return Err(AngliciseError::invalid_config(format!(
                    "contextual word \"{base}\" needs both noun and verb spellings"
                )));
            }
        }
        for pattern in &self.excluded_patterns {
            regex::Regex::new(pattern)?;
        }
        Ok(())
    }

    /// Whether `word` (lowercase) is owned by the disambiguator.
    pub fn is_contextual(&self, word: &str) -> bool {
        self.contextual_words
            .get(word)
            .map(|entry| entry.enabled)
            .unwrap_or(false)
    }
}
