//! Unit-conversion configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AngliciseError, Result};

/// How converted temperatures are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureSymbol {
    /// "21°C"
    #[default]
    Degrees,
    /// "21 degrees Celsius"
    Word,
}

/// Per-family enable flags for unit detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitFamilies {
    pub length: bool,
    pub mass: bool,
    pub volume: bool,
    pub temperature: bool,
    pub area: bool,
}

impl Default for UnitFamilies {
    fn default() -> Self {
        UnitFamilies {
            length: true,
            mass: true,
            volume: true,
            temperature: true,
            area: true,
        }
    }
}

/// Configuration for the unit detector and converter.
///
/// All fields have documented defaults; user overrides deep-merge onto them
/// via [`UnitConfig::from_value`]. Instances are immutable once handed to a
/// converter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitConfig {
    /// Master switch for unit detection/conversion.
    pub enabled: bool,
    /// Spans scoring below this are dropped. Range [0, 1].
    pub min_confidence: f64,
    /// Decimal places for formatted values. Range [0, 10].
    pub precision: u8,
    /// Values within this distance of an integer render as whole numbers.
    /// Range [0, 0.5).
    pub whole_number_threshold: f64,
    /// Put a space between value and unit name ("3.7 metres" vs "3.7metres").
    pub unit_spacing: bool,
    /// Temperature rendering style.
    pub temperature_symbol: TemperatureSymbol,
    /// Which unit families to detect.
    pub families: UnitFamilies,
    /// Extra exclusion (idiom) patterns, as regexes matched against the
    /// ±50-character context window.
    pub excluded_patterns: Vec<String>,
}

impl Default for UnitConfig {
    fn default() -> Self {
        UnitConfig {
            enabled: true,
            min_confidence: 0.5,
            precision: 1,
            whole_number_threshold: 0.05,
            unit_spacing: true,
            temperature_symbol: TemperatureSymbol::default(),
            families: UnitFamilies::default(),
            excluded_patterns: Vec::new(),
        }
    }
}

impl UnitConfig {
    /// Build a config by deep-merging `overrides` onto the defaults.
    pub fn from_value(overrides: &Value) -> Result<Self> {
        let config: UnitConfig = super::from_overrides(overrides)?;
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
        if self.precision > 10 {
            return Err(AngliciseError::invalid_config(format!(
                "precision must be in [0, 10], got {}",
                self.precision
            )));
        }
        if !(0.0..0.5).contains(&self.whole_number_threshold) {
            return Err(AngliciseError::invalid_config(format!(
                "whole_number_threshold must be in [0, 0.5), got {}",
                self.whole_number_threshold
            )));
        }
        for pattern in &self.excluded_patterns {
            regex::Regex::new(pattern)?;
        }
        Ok(())
    }
}
