//! Confidence scoring for detected spans.
//!
//! All confidence arithmetic lives behind the pure [`score`] function so the
//! boost and penalty table can be tested in isolation. Detectors gather a
//! [`ContextFeatures`] for each candidate span from the ±50 characters around
//! it, then combine it with the pattern's base confidence here.

/// Context features observed around a candidate span.
///
/// Each field maps to one boost or penalty in [`score`]. Features default to
/// "absent", so `ContextFeatures::default()` scores exactly the base.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContextFeatures {
    /// Measurement or domain vocabulary found within the context window.
    pub vocabulary_hits: usize,
    /// The numeral touches the unit with no intervening space ("12ft").
    pub no_space_adjacency: bool,
    /// The parsed value falls in a plausible everyday range.
    pub plausible_value: bool,
    /// A strong local cue matched (e.g. "to " directly before a verb).
    pub strong_cue: bool,
    /// An exclusion/idiom rule matched the context window.
    pub idiom_hit: bool,
    /// A co-occurring term argues against this reading ("software license").
    pub co_occurrence_penalty: bool,
    /// Value outside [0.001, 10000].
    pub out_of_range: bool,
}

/// Boost for each vocabulary hit, capped at two hits.
const VOCABULARY_BOOST: f64 = 0.05;
/// Boost when the numeral abuts the unit with no space.
const NO_SPACE_BOOST: f64 = 0.05;
/// Boost for values in a plausible everyday range.
const PLAUSIBLE_VALUE_BOOST: f64 = 0.05;
/// Boost for a strong local grammatical cue.
const STRONG_CUE_BOOST: f64 = 0.1;
/// Penalty when the context matches an idiom/exclusion rule.
const IDIOM_PENALTY: f64 = 0.5;
/// Penalty for a contradicting co-occurring term.
const CO_OCCURRENCE_PENALTY: f64 = 0.3;
/// Penalty for values outside the supported magnitude range.
const OUT_OF_RANGE_PENALTY: f64 = 0.4;

/// Combine a pattern's base confidence with observed context features.
///
/// The result is clamped to `[0, 1]`. Pure: same inputs, same output.
pub fn score(base: f64, features: &ContextFeatures) -> f64 {
    let mut confidence = base;

    confidence += VOCABULARY_BOOST * features.vocabulary_hits.min(2) as f64;
    if features.no_space_adjacency {
        confidence += NO_SPACE_BOOST;
    }
    if features.plausible_value {
        confidence += PLAUSIBLE_VALUE_BOOST;
    }
    if features.strong_cue {
        confidence += STRONG_CUE_BOOST;
    }
    if features.idiom_hit {
        confidence -= IDIOM_PENALTY;
    }
    if features.co_occurrence_penalty {
        confidence -= CO_OCCURRENCE_PENALTY;
    }
    if features.out_of_range {
        confidence -= OUT_OF_RANGE_PENALTY;
    }

    confidence.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_features_scores_base() {
        assert_eq!(score(0.8, &ContextFeatures::default()), 0.8);
    }

    #[test]
    fn test_boost_table() {
        let cases = [
            (
                ContextFeatures {
                    vocabulary_hits: 1,
                    ..Default::default()
                },
                0.75,
            ),
            (
                ContextFeatures {
                    vocabulary_hits: 5, // capped at two hits
                    ..Default::default()
                },
                0.8,
            ),
            (
                ContextFeatures {
                    no_space_adjacency: true,
                    ..Default::default()
                },
                0.75,
            ),
            (
                ContextFeatures {
                    strong_cue: true,
                    ..Default::default()
                },
                0.8,
            ),
        ];

        for (features, expected) in cases {
            let got = score(0.7, &features);
            assert!(
                (got - expected).abs() < 1e-9,
                "features {features:?}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn test_penalties_reduce_confidence() {
        let idiom = ContextFeatures {
            idiom_hit: true,
            ..Default::default()
        };
        assert!((score(0.9, &idiom) - 0.4).abs() < 1e-9);

        let out_of_range = ContextFeatures {
            out_of_range: true,
            ..Default::default()
        };
        assert!((score(0.9, &out_of_range) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_to_unit_interval() {
        let all_boosts = ContextFeatures {
            vocabulary_hits: 2,
            no_space_adjacency: true,
            plausible_value: true,
            strong_cue: true,
            ..Default::default()
        };
        assert_eq!(score(0.95, &all_boosts), 1.0);

        let all_penalties = ContextFeatures {
            idiom_hit: true,
            co_occurrence_penalty: true,
            out_of_range: true,
            ..Default::default()
        };
        assert_eq!(score(0.3, &all_penalties), 0.0);
    }
}
