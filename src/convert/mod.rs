//! Conversion of detected spans into metric replacements.

pub mod unit;

pub use unit::{ConvertedUnit, UnitConverter};
