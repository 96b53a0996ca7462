//! Exclusion rules: veto patterns for idioms, proper names, and filenames.
//!
//! An exclusion rule fires when the ±50-character context window around a
//! candidate span matches it. Exclusions are checked before confidence
//! filtering; a hit applies the idiom penalty, which in practice drops the
//! span below any sensible minimum confidence.

use regex::Regex;

use crate::error::Result;

/// Built-in idiom and proper-name exclusions for unit spans.
const UNIT_EXCLUSIONS: &[&str] = &[
    // Figurative distance.
    r"(?i)\bmiles?\s+(?:ahead|away|apart|better|off)\b",
    r"(?i)\bmiles?\s+(?:per|an)\s+hour\b",
    r"(?i)\bgo(?:es|ing)?\s+the\s+extra\s+mile\b",
    // Figurative quantity. "5 tons of gravel" stays convertible; only the
    // idiomatic objects veto.
    r"(?i)\btons?\s+of\s+(?:fun|work|time|stuff|things|people|money)\b",
    r"(?i)\bweighs?\s+a\s+ton\b",
    // Inch idioms.
    r"(?i)\binch\s+by\s+inch\b",
    r"(?i)\bevery\s+inch\b",
    r"(?i)\bgive\s+(?:him|her|them|an?)\s+inch\b",
    // Pound idioms and currency.
    r"(?i)\bpound\s+of\s+flesh\b",
    r"(?i)\bpounds?\s+sterling\b",
    r"£\s*\d",
    // Named things.
    r"(?i)\bten-gallon\s+hat\b",
    r"(?i)\bquarter\s+pounder\b",
    r"(?i)\bsquare\s+footage\b",
];

/// Built-in exclusions for contextual word spans.
const WORD_EXCLUSIONS: &[&str] = &[
    // Licence proper names and legal boilerplate stay verbatim.
    r"(?i)\b(?:MIT|Apache|BSD|GPL|LGPL|AGPL|MPL|ISC|Mozilla|Creative\s+Commons)\s+licen[cs]e\b",
    r"(?i)\blicen[cs]e\s+(?:agreement|header)\b",
    r"(?i)\bunder\s+the\s+\w+\s+licen[cs]e\b",
    // The conventional repository filename.
    r"\bLICENSE(?:\.(?:md|txt))?\b",
    r"(?i)\blicen[cs]e\.(?:md|txt)\b",
    // "best practices" is a fixed phrase in both dialects.
    r"(?i)\bbest\s+practices\b",
];

/// A compiled, immutable set of veto patterns.
#[derive(Debug)]
pub struct ExclusionRules {
    rules: Vec<Regex>,
}

impl ExclusionRules {
    /// Compile the built-in unit exclusions plus user-supplied patterns.
    pub fn for_units(extra_patterns: &[String]) -> Result<Self> {
        Self::compile(UNIT_EXCLUSIONS, extra_patterns)
    }

    /// Compile the built-in word exclusions plus user-supplied patterns.
    pub fn for_words(extra_patterns: &[String]) -> Result<Self> {
        Self::compile(WORD_EXCLUSIONS, extra_patterns)
    }

    fn compile(built_in: &[&str], extra: &[String]) -> Result<Self> {
        let mut rules = Vec::with_capacity(built_in.len() + extra.len());
        for pattern in built_in {
            rules.push(Regex::new(pattern)?);
        }
        for pattern in extra {
            rules.push(Regex::new(pattern)?);
        }
        Ok(ExclusionRules { rules })
    }

    /// Whether any veto pattern matches the given context window.
    pub fn vetoes(&self, context: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(context))
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_idioms_veto() {
        let rules = ExclusionRules::for_units(&[]).unwrap();
        assert!(rules.vetoes("they are miles ahead of us"));
        assert!(rules.vetoes("tons of fun"));
        assert!(!rules.vetoes("ordered 5 tons of gravel"));
        assert!(rules.vetoes("doing 70 miles per hour"));
        assert!(rules.vetoes("moved inch by inch"));
        assert!(!rules.vetoes("the room is 12 feet wide"));
    }

    #[test]
    fn test_word_exclusions_veto() {
        let rules = ExclusionRules::for_words(&[]).unwrap();
        assert!(rules.vetoes("This is under MIT license"));
        assert!(rules.vetoes("see the LICENSE file"));
        assert!(rules.vetoes("industry best practices"));
        assert!(!rules.vetoes("I need a license to drive"));
    }

    #[test]
    fn test_user_patterns_append() {
        let rules =
            ExclusionRules::for_units(&[r"(?i)\bfoot\s+of\s+the\s+bed\b".to_string()]).unwrap();
        assert!(rules.vetoes("at the foot of the bed"));
    }

    #[test]
    fn test_bad_user_pattern_is_an_error() {
        assert!(ExclusionRules::for_units(&["(unclosed".to_string()]).is_err());
    }
}
