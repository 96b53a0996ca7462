//! Span detectors.
//!
//! Each detector runs its compiled pattern library over one eligible text
//! range, scores every candidate against its ±50-character context, applies
//! exclusion vetoes and the minimum-confidence filter, and resolves overlaps
//! into an ordered, non-overlapping span list.

pub mod unit;
pub mod word;

pub use unit::{UnitDetector, UnitMatch};
pub use word::{WordDisambiguator, WordMatch};
