//! Grammatical pattern library for contextual word disambiguation.
//!
//! American English collapses some noun/verb spelling pairs into one word
//! ("license" for both roles); the target dialect splits them ("licence"
//! noun, "license" verb). Shallow grammatical templates parameterised by the
//! base word decide the role; no part-of-speech tagging happens here.
//!
//! Two rule kinds exist:
//!
//! - **Semantic-variant rules** - hand-authored literal patterns for
//!   domain-specific ambiguity (the measuring "meter" vs the parking
//!   "meter"), confidence 0.99, taking priority over grammatical rules.
//! - **Grammatical rules** - generated once by crossing the template table
//!   against each configured word's noun/verb spelling pair.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::WordConfig;
use crate::error::Result;

/// Grammatical role assigned to a matched word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
    Unknown,
}

/// How the replacement is derived from the matched word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateShape {
    /// The match is exactly the base word; replace with the role spelling.
    Plain,
    /// The match is base word + inflection ("licenses", "practiced");
    /// replace with role spelling + the matched suffix.
    Suffixed,
    /// The match is the -ing form; replace with the verb stem + "ing"
    /// ("practicing" → "practising").
    Ing,
}

/// One generated or hand-authored word rule.
#[derive(Debug)]
pub struct WordRule {
    pub regex: Regex,
    /// The configured base word this rule targets, lowercase.
    pub base_word: String,
    pub kind: WordRuleKind,
    pub base_confidence: f64,
}

/// Payload distinguishing semantic from grammatical rules.
#[derive(Debug)]
pub enum WordRuleKind {
    /// Literal replacement for the captured word (case restored later).
    Semantic { replacement: String },
    /// Role decided by the template; spelling chosen from the word pair.
    Grammatical {
        role: WordType,
        shape: TemplateShape,
        /// Target spelling for the decided role.
        spelling: String,
    },
}

struct GrammarTemplate {
    /// Pattern with `{w}` (base word), `{ws}`/`{wd}` (its -s/-ed inflection),
    /// or `{stem}` (base minus trailing "e") placeholders. The candidate word
    /// is the named group `w`.
    pattern: &'static str,
    role: WordType,
    base_confidence: f64,
    shape: TemplateShape,
}

/// The general template table. Crossed against every configured word pair at
/// compile time; ordering is part of the deterministic tie-break.
const GRAMMAR_TEMPLATES: &[GrammarTemplate] = &[
    // Determiner + word: "a license", "the practice".
    GrammarTemplate {
        pattern: r"(?i)\b(?:a|an|the|my|your|his|her|its|our|their|this|that|these|those|each|every|no)\s+(?P<w>{w})\b",
        role: WordType::Noun,
        base_confidence: 0.8,
        shape: TemplateShape::Plain,
    },
    // Infinitive: "to license".
    GrammarTemplate {
        pattern: r"(?i)\bto\s+(?P<w>{w})\b",
        role: WordType::Verb,
        base_confidence: 0.85,
        shape: TemplateShape::Plain,
    },
    // Modal + verb: "will license", "must practice".
    GrammarTemplate {
        pattern: r"(?i)\b(?:can|could|will|would|shall|should|may|might|must|cannot)\s+(?P<w>{w})\b",
        role: WordType::Verb,
        base_confidence: 0.85,
        shape: TemplateShape::Plain,
    },
    // Subject pronoun + verb: "we license", "they practice".
    GrammarTemplate {
        pattern: r"(?i)\b(?:i|we|you|they)\s+(?P<w>{w})\b",
        role: WordType::Verb,
        base_confidence: 0.75,
        shape: TemplateShape::Plain,
    },
    // Third person singular: "she practices daily".
    GrammarTemplate {
        pattern: r"(?i)\b(?:he|she|it)\s+(?P<w>{ws})\b",
        role: WordType::Verb,
        base_confidence: 0.8,
        shape: TemplateShape::Suffixed,
    },
    // Plural noun: "licenses", "practices".
    GrammarTemplate {
        pattern: r"(?i)\b(?P<w>{ws})\b",
        role: WordType::Noun,
        base_confidence: 0.6,
        shape: TemplateShape::Suffixed,
    },
    // Possessive: "the license's terms".
    GrammarTemplate {
        pattern: r"(?i)\b(?P<w>{w})'s\b",
        role: WordType::Noun,
        base_confidence: 0.8,
        shape: TemplateShape::Plain,
    },
    // Preposition + optional determiner + noun: "without a license".
    GrammarTemplate {
        pattern: r"(?i)\b(?:of|for|with|without|under|over|by|from)\s+(?:the\s+|a\s+|an\s+)?(?P<w>{w})\b",
        role: WordType::Noun,
        base_confidence: 0.75,
        shape: TemplateShape::Plain,
    },
    // Verb + object: "license the software".
    GrammarTemplate {
        pattern: r"(?i)\b(?P<w>{w})\s+(?:it|them|him|her|us|me|you|the|a|an|my|your|our|their|this|that|these|those|all)\b",
        role: WordType::Verb,
        base_confidence: 0.7,
        shape: TemplateShape::Plain,
    },
    // Adjective + noun: "a valid license".
    GrammarTemplate {
        pattern: r"(?i)\b(?:new|old|valid|expired|full|special|annual|official|proper|current|good|best|common)\s+(?P<w>{w})\b",
        role: WordType::Noun,
        base_confidence: 0.75,
        shape: TemplateShape::Plain,
    },
    // Acquisition verbs + optional determiner: "got a license", "needs a license".
    GrammarTemplate {
        pattern: r"(?i)\b(?:get|got|gets|obtain|obtains|obtained|hold|holds|held|renew|renews|renewed|grant|grants|granted|issue|issues|issued|need|needs|needed|have|has|had|require|requires|required)\s+(?:a\s+|an\s+|the\s+|your\s+|my\s+|their\s+)?(?P<w>{w})\b",
        role: WordType::Noun,
        base_confidence: 0.8,
        shape: TemplateShape::Plain,
    },
    // Perfect/passive participle: "was licensed", "has practiced".
    GrammarTemplate {
        pattern: r"(?i)\b(?:is|are|was|were|been|being|be|has|have|had|get|gets|got)\s+(?P<w>{wd})\b",
        role: WordType::Verb,
        base_confidence: 0.8,
        shape: TemplateShape::Suffixed,
    },
    // Bare participle/past: "licensed under", "practiced law".
    GrammarTemplate {
        pattern: r"(?i)\b(?P<w>{wd})\b",
        role: WordType::Verb,
        base_confidence: 0.6,
        shape: TemplateShape::Suffixed,
    },
    // Progressive/gerund: "licensing", "practicing".
    GrammarTemplate {
        pattern: r"(?i)\b(?P<w>{stem}ing)\b",
        role: WordType::Verb,
        base_confidence: 0.85,
        shape: TemplateShape::Ing,
    },
    // Adverb + verb: "regularly practice".
    GrammarTemplate {
        pattern: r"(?i)\b(?:regularly|often|never|always|usually|rarely|actively|still)\s+(?P<w>{w})\b",
        role: WordType::Verb,
        base_confidence: 0.7,
        shape: TemplateShape::Plain,
    },
    // Noun compound head: "license fee", "license plate".
    GrammarTemplate {
        pattern: r"(?i)\b(?P<w>{w})\s+(?:plate|number|fee|fees|holder|renewal|application|exam|test|requirement|requirements)\b",
        role: WordType::Noun,
        base_confidence: 0.85,
        shape: TemplateShape::Plain,
    },
    // Noun before infinitive: "a license to drive" (reinforces determiner rule).
    GrammarTemplate {
        pattern: r"(?i)\b(?P<w>{w})\s+to\s+\w+",
        role: WordType::Noun,
        base_confidence: 0.65,
        shape: TemplateShape::Plain,
    },
    // Sentence-initial imperative: "Practice the scales."
    GrammarTemplate {
        pattern: r"(?im)^(?P<w>{w})\s+(?:the|your|all|every)\b",
        role: WordType::Verb,
        base_confidence: 0.7,
        shape: TemplateShape::Plain,
    },
    // Sentence-final noun: "renew your licence."
    GrammarTemplate {
        pattern: r"(?i)\b(?P<w>{w})(?:[.!?;:,]|$)",
        role: WordType::Noun,
        base_confidence: 0.55,
        shape: TemplateShape::Plain,
    },
];

struct SemanticVariant {
    /// Base word this variant belongs to.
    base_word: &'static str,
    /// Literal pattern; the affected word is the named group `w`.
    pattern: &'static str,
    /// Replacement for the captured word.
    replacement: &'static str,
}

/// Hand-authored semantic-variant rules. Confidence is fixed at 0.99 so they
/// win overlap resolution against any grammatical rule for the same word.
const SEMANTIC_VARIANTS: &[SemanticVariant] = &[
    // The measuring-device "meter" keeps its spelling.
    SemanticVariant {
        base_word: "meter",
        pattern: r"(?i)\b(?:parking|gas|water|electricity|electric|smart|taxi|utility)\s+(?P<w>meter)\b",
        replacement: "meter",
    },
    SemanticVariant {
        base_word: "meter",
        pattern: r"(?i)\b(?:parking|gas|water|electricity|electric|smart|taxi|utility)\s+(?P<w>meters)\b",
        replacement: "meters",
    },
    // The unit of length becomes "metre".
    SemanticVariant {
        base_word: "meter",
        pattern: r"(?i)\b\d+(?:\.\d+)?\s*(?P<w>meter)\b",
        replacement: "metre",
    },
    SemanticVariant {
        base_word: "meter",
        pattern: r"(?i)\b\d+(?:\.\d+)?\s*(?P<w>meters)\b",
        replacement: "metres",
    },
    SemanticVariant {
        base_word: "meter",
        pattern: r"(?i)\b(?P<w>meters)\s+(?:long|wide|tall|high|deep|away|apart)\b",
        replacement: "metres",
    },
    // A building storey.
    SemanticVariant {
        base_word: "story",
        pattern: r"(?i)\b\d+-(?P<w>story)\b",
        replacement: "storey",
    },
    SemanticVariant {
        base_word: "story",
        pattern: r"(?i)\b(?P<w>story)\s+(?:building|house|tower|block|car\s+park)\b",
        replacement: "storey",
    },
    SemanticVariant {
        base_word: "story",
        pattern: r"(?i)\b(?P<w>stories)\s+(?:tall|high)\b",
        replacement: "storeys",
    },
];

fn stem(word: &str) -> &str {
    word.strip_suffix('e').unwrap_or(word)
}

/// Compile the word rule set for `config`.
///
/// Per word: semantic-variant rules first, then grammatical rules in
/// template order. Registration order is the overlap tie-break, so this
/// ordering is load-bearing.
pub fn compile(config: &WordConfig) -> Result<Vec<WordRule>> {
    let mut rules = Vec::new();

    for (base_word, entry) in &config.contextual_words {
        if !entry.enabled {
            continue;
        }
        let escaped = regex::escape(base_word);
        // An optional "e" before the suffix covers non-e bases only; with an
        // e-final base it would swallow derived words ("licensees").
        let plural = if base_word.ends_with('e') {
            format!("{escaped}s")
        } else {
            format!("{escaped}e?s")
        };
        let past = if base_word.ends_with('e') {
            format!("{escaped}d")
        } else {
            format!("{escaped}ed")
        };

        for variant in SEMANTIC_VARIANTS
            .iter()
            .filter(|v| v.base_word == base_word)
        {
            rules.push(WordRule {
                regex: Regex::new(variant.pattern)?,
                base_word: base_word.clone(),
                kind: WordRuleKind::Semantic {
                    replacement: variant.replacement.to_string(),
                },
                base_confidence: 0.99,
            });
        }

        // Semantic-variant words with identical noun/verb spellings have no
        // grammatical split to detect.
        if entry.noun == entry.verb {
            continue;
        }

        for template in GRAMMAR_TEMPLATES {
            let pattern = template
                .pattern
                .replace("{ws}", &plural)
                .replace("{wd}", &past)
                .replace("{stem}", &regex::escape(stem(base_word)))
                .replace("{w}", &escaped);
            let spelling = match template.role {
                WordType::Noun => entry.noun.clone(),
                WordType::Verb | WordType::Adjective | WordType::Unknown => entry.verb.clone(),
            };
            rules.push(WordRule {
                regex: Regex::new(&pattern)?,
                base_word: base_word.clone(),
                kind: WordRuleKind::Grammatical {
                    role: template.role,
                    shape: template.shape,
                    spelling,
                },
                base_confidence: template.base_confidence,
            });
        }
    }

    Ok(rules)
}

impl WordRule {
    /// Derive the (lowercase) replacement for a captured word.
    pub fn replacement_for(&self, matched_word: &str) -> String {
        match &self.kind {
            WordRuleKind::Semantic { replacement } => replacement.clone(),
            WordRuleKind::Grammatical { shape, spelling, .. } => match shape {
                TemplateShape::Plain => spelling.clone(),
                TemplateShape::Suffixed => {
                    let suffix = &matched_word[self.base_word.len().min(matched_word.len())..];
                    format!("{}{}", spelling, suffix.to_lowercase())
                }
                TemplateShape::Ing => format!("{}ing", stem(spelling)),
            },
        }
    }
}
