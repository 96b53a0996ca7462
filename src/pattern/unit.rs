//! Unit pattern library.
//!
//! Declarative templates crossed against the supported-unit table produce
//! compiled [`UnitPattern`]s, each yielding `(value, unit-name, confidence)`
//! candidates when run over text. Four template shapes exist per unit:
//! spaced numeral ("12 feet"), no-space abbreviation ("12ft"), hyphenated
//! compound ("6-foot"), and written number ("six feet").

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::UnitConfig;
use crate::error::Result;
use crate::pattern::numeral::written_number_alternation;

/// Measurement family of a detected unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Length,
    Mass,
    Volume,
    Temperature,
    Area,
}

/// A static entry in the supported-unit table.
struct UnitSpec {
    /// Canonical unit name handed to the converter ("feet").
    canonical: &'static str,
    unit_type: UnitType,
    /// Full word forms, longest first so "square feet" beats "feet".
    names: &'static [&'static str],
    /// Singular form used in hyphenated compounds ("6-foot").
    singular: &'static str,
    /// Abbreviations safe to match with no space ("12ft").
    abbreviations: &'static [&'static str],
}

/// Supported US-customary units. Bare "in" is deliberately absent from the
/// inch abbreviations: it is an English preposition.
const UNIT_TABLE: &[UnitSpec] = &[
    UnitSpec {
        canonical: "square feet",
        unit_type: UnitType::Area,
        names: &["square\\s+feet", "square\\s+foot", "sq\\.?\\s*ft\\.?"],
        singular: "square-foot",
        abbreviations: &[],
    },
    UnitSpec {
        canonical: "square yards",
        unit_type: UnitType::Area,
        names: &["square\\s+yards", "square\\s+yard", "sq\\.?\\s*yd\\.?"],
        singular: "square-yard",
        abbreviations: &[],
    },
    UnitSpec {
        canonical: "square miles",
        unit_type: UnitType::Area,
        names: &["square\\s+miles", "square\\s+mile", "sq\\.?\\s*mi\\.?"],
        singular: "square-mile",
        abbreviations: &[],
    },
    UnitSpec {
        canonical: "acres",
        unit_type: UnitType::Area,
        names: &["acres", "acre"],
        singular: "acre",
        abbreviations: &[],
    },
    UnitSpec {
        canonical: "fluid ounces",
        unit_type: UnitType::Volume,
        names: &["fluid\\s+ounces", "fluid\\s+ounce", "fl\\.?\\s*oz\\.?"],
        singular: "fluid-ounce",
        abbreviations: &[],
    },
    UnitSpec {
        canonical: "inches",
        unit_type: UnitType::Length,
        names: &["inches", "inch"],
        singular: "inch",
        abbreviations: &["in\\."],
    },
    UnitSpec {
        canonical: "feet",
        unit_type: UnitType::Length,
        names: &["feet", "foot"],
        singular: "foot",
        abbreviations: &["ft\\.?"],
    },
    UnitSpec {
        canonical: "yards",
        unit_type: UnitType::Length,
        names: &["yards", "yard"],
        singular: "yard",
        abbreviations: &["yds?\\.?"],
    },
    UnitSpec {
        canonical: "miles",
        unit_type: UnitType::Length,
        names: &["miles", "mile"],
        singular: "mile",
        abbreviations: &["mi\\.?"],
    },
    UnitSpec {
        canonical: "ounces",
        unit_type: UnitType::Mass,
        names: &["ounces", "ounce"],
        singular: "ounce",
        abbreviations: &["oz\\.?"],
    },
    UnitSpec {
        canonical: "pounds",
        unit_type: UnitType::Mass,
        names: &["pounds", "pound"],
        singular: "pound",
        abbreviations: &["lbs?\\.?"],
    },
    UnitSpec {
        canonical: "tons",
        unit_type: UnitType::Mass,
        names: &["short\\s+tons", "short\\s+ton", "tons", "ton"],
        singular: "ton",
        abbreviations: &[],
    },
    UnitSpec {
        canonical: "cups",
        unit_type: UnitType::Volume,
        names: &["cups", "cup"],
        singular: "cup",
        abbreviations: &[],
    },
    UnitSpec {
        canonical: "pints",
        unit_type: UnitType::Volume,
        names: &["pints", "pint"],
        singular: "pint",
        abbreviations: &["pt\\.?"],
    },
    UnitSpec {
        canonical: "quarts",
        unit_type: UnitType::Volume,
        names: &["quarts", "quart"],
        singular: "quart",
        abbreviations: &["qt\\.?"],
    },
    UnitSpec {
        canonical: "gallons",
        unit_type: UnitType::Volume,
        names: &["gallons", "gallon"],
        singular: "gallon",
        abbreviations: &["gal\\.?"],
    },
];

/// Base confidence for spaced "12 feet" matches.
const SPACED_BASE: f64 = 0.7;
/// Base confidence for no-space "12ft" matches.
const NO_SPACE_BASE: f64 = 0.65;
/// Base confidence for hyphenated "6-foot" compounds.
const COMPOUND_BASE: f64 = 0.75;
/// Base confidence for written-number "six feet" matches.
const WRITTEN_BASE: f64 = 0.6;
/// Base confidence for temperature matches; the degree sign is a strong
/// signal on its own.
const TEMPERATURE_BASE: f64 = 0.8;

/// A compiled unit pattern.
///
/// Immutable after [`compile`]; the regex captures the numeral as group
/// `"n"` and the whole match is the candidate span.
#[derive(Debug)]
pub struct UnitPattern {
    pub regex: Regex,
    /// Canonical unit name for the converter.
    pub unit: &'static str,
    pub unit_type: UnitType,
    pub base_confidence: f64,
    /// Hyphenated compound form ("6-foot") requiring singular rendering.
    pub is_compound: bool,
}

/// Numeral sub-pattern: decimal, mixed fraction, or simple fraction.
const NUMERAL: &str = r"\d+(?:\.\d+)?(?:\s+\d+/\d+)?|\d+/\d+";

/// Compile the unit pattern library for `config`, skipping disabled families.
pub fn compile(config: &UnitConfig) -> Result<Vec<UnitPattern>> {
    let mut patterns = Vec::new();
    let written = written_number_alternation();

    for spec in UNIT_TABLE {
        let enabled = match spec.unit_type {
            UnitType::Length => config.families.length,
            UnitType::Mass => config.families.mass,
            UnitType::Volume => config.families.volume,
            UnitType::Temperature => config.families.temperature,
            UnitType::Area => config.families.area,
        };
        if !enabled {
            continue;
        }

        let names = spec.names.join("|");

        // "12 feet", "1 1/2 cups"
        patterns.push(UnitPattern {
            regex: Regex::new(&format!(r"(?i)\b(?P<n>{NUMERAL})\s+(?:{names})\b"))?,
            unit: spec.canonical,
            unit_type: spec.unit_type,
            base_confidence: SPACED_BASE,
            is_compound: false,
        });

        // "12ft"
        if !spec.abbreviations.is_empty() {
            let abbreviations = spec.abbreviations.join("|");
            patterns.push(UnitPattern {
                regex: Regex::new(&format!(
                    r"(?i)\b(?P<n>{NUMERAL})\s?(?:{abbreviations})(?:\b|\B)"
                ))?,
                unit: spec.canonical,
                unit_type: spec.unit_type,
                base_confidence: NO_SPACE_BASE,
                is_compound: false,
            });
        }

        // "6-foot", "ten-gallon"
        let compound_names = format!("{}|{}", spec.singular, names);
        patterns.push(UnitPattern {
            regex: Regex::new(&format!(
                r"(?i)\b(?P<n>\d+(?:\.\d+)?|{written})-(?:{compound_names})\b"
            ))?,
            unit: spec.canonical,
            unit_type: spec.unit_type,
            base_confidence: COMPOUND_BASE,
            is_compound: true,
        });

        // "six feet", "twenty five miles"
        patterns.push(UnitPattern {
            regex: Regex::new(&format!(
                r"(?i)\b(?P<n>(?:{written})(?:[-\s](?:{written}))?)\s+(?:{names})\b"
            ))?,
            unit: spec.canonical,
            unit_type: spec.unit_type,
            base_confidence: WRITTEN_BASE,
            is_compound: false,
        });
    }

    // Temperature carries its own templates: values may be negative and the
    // degree sign binds with no space. No leading \b: it can never sit
    // between a space and a minus sign, and the unit suffix anchors the
    // match on its own.
    if config.families.temperature {
        patterns.push(UnitPattern {
            regex: Regex::new(
                r"(?i)(?P<n>-?\d+(?:\.\d+)?)\s*(?:°\s*F\b|degrees?\s+fahrenheit\b|fahrenheit\b)",
            )?,
            unit: "fahrenheit",
            unit_type: UnitType::Temperature,
            base_confidence: TEMPERATURE_BASE,
            is_compound: false,
        });
        patterns.push(UnitPattern {
            regex: Regex::new(&format!(
                r"(?i)\b(?P<n>(?:{written})(?:[-\s](?:{written}))?)\s+degrees?\s+fahrenheit\b"
            ))?,
            unit: "fahrenheit",
            unit_type: UnitType::Temperature,
            base_confidence: WRITTEN_BASE,
            is_compound: false,
        });
    }

    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Vec<UnitPattern> {
        compile(&UnitConfig::default()).unwrap()
    }

    fn find(patterns: &[UnitPattern], text: &str) -> Vec<(&'static str, String)> {
        let mut found = Vec::new();
        for pattern in patterns {
            for m in pattern.regex.find_iter(text) {
                found.push((pattern.unit, m.as_str().to_string()));
            }
        }
        found
    }

    #[test]
    fn test_spaced_match() {
        let found = find(&patterns(), "The room is 12 feet wide");
        assert!(found.contains(&("feet", "12 feet".to_string())));
    }

    #[test]
    fn test_no_space_abbreviation() {
        let found = find(&patterns(), "about 12ft of rope and 3lbs of nails");
        assert!(found.iter().any(|(unit, text)| *unit == "feet" && text == "12ft"));
        assert!(found.iter().any(|(unit, text)| *unit == "pounds" && text == "3lbs"));
    }

    #[test]
    fn test_compound_match() {
        let found = find(&patterns(), "a 6-foot fence and a ten-gallon hat");
        assert!(found.iter().any(|(unit, text)| *unit == "feet" && text == "6-foot"));
        assert!(found.iter().any(|(unit, text)| *unit == "gallons" && text == "ten-gallon"));
    }

    #[test]
    fn test_written_number_match() {
        let found = find(&patterns(), "walked six miles home");
        assert!(found.iter().any(|(unit, text)| *unit == "miles" && text == "six miles"));
    }

    #[test]
    fn test_temperature_variants() {
        let found = find(&patterns(), "it hit 72°F then -4 °F, around 72 degrees Fahrenheit");
        let temps: Vec<_> = found.iter().filter(|(unit, _)| *unit == "fahrenheit").collect();
        assert!(temps.iter().any(|(_, t)| t == "72°F"));
        assert!(temps.iter().any(|(_, t)| t == "-4 °F"));
        assert!(temps.iter().any(|(_, t)| t == "72 degrees Fahrenheit"));
    }

    #[test]
    fn test_square_feet_not_shadowed() {
        let found = find(&patterns(), "an 800 square feet flat");
        assert!(found.iter().any(|(unit, _)| *unit == "square feet"));
        // Plain "feet" must not fire: "square" sits between numeral and unit.
        assert!(!found.iter().any(|(unit, _)| *unit == "feet"));
    }

    #[test]
    fn test_bare_in_is_not_an_inch() {
        let found = find(&patterns(), "see section 3 in the manual");
        assert!(found.is_empty());
    }

    #[test]
    fn test_disabled_family_compiles_out() {
        let mut config = UnitConfig::default();
        config.families.mass = false;
        let patterns = compile(&config).unwrap();
        assert!(patterns.iter().all(|p| p.unit_type != UnitType::Mass));
        assert!(patterns.iter().any(|p| p.unit_type == UnitType::Length));
    }

    #[test]
    fn test_fractions_captured() {
        let patterns = patterns();
        let pattern = patterns
            .iter()
            .find(|p| p.unit == "cups" && !p.is_compound)
            .unwrap();
        let captures = pattern.regex.captures("add 1 1/2 cups of flour").unwrap();
        assert_eq!(&captures["n"], "1 1/2");
    }
}
