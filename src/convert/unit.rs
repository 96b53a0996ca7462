//! US-customary to metric conversion and formatting.
//!
//! Dispatches on the unit family to a fixed conversion table, picks the
//! best-fit metric display unit by magnitude, and formats the value per the
//! configured precision and rounding preferences.
//!
//! # Examples
//!
//! ```
//! use anglicise::config::UnitConfig;
//! use anglicise::convert::unit::UnitConverter;
//! use anglicise::detect::unit::UnitMatch;
//! use anglicise::pattern::UnitType;
//!
//! let converter = UnitConverter::new(UnitConfig::default());
//! let m = UnitMatch {
//!     start: 12, end: 19, text: "12 feet".into(),
//!     value: 12.0, unit: "feet".into(), unit_type: UnitType::Length,
//!     is_compound: false, confidence: 0.85, context: String::new(),
//! };
//! let converted = converter.convert(&m).unwrap();
//! assert_eq!(converted.formatted, "3.7 metres");
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{TemperatureSymbol, UnitConfig};
use crate::detect::unit::UnitMatch;
use crate::error::{AngliciseError, Result};
use crate::pattern::unit::UnitType;

/// US-customary units mapped to their base metric factor.
///
/// Length in metres, mass in kilograms, volume in litres, area in square
/// metres. Temperature is affine and handled separately.
const CONVERSION_TABLE: &[(&str, UnitType, f64)] = &[
    ("inches", UnitType::Length, 0.0254),
    ("feet", UnitType::Length, 0.3048),
    ("yards", UnitType::Length, 0.9144),
    ("miles", UnitType::Length, 1609.344),
    ("ounces", UnitType::Mass, 0.028_349_5),
    ("pounds", UnitType::Mass, 0.453_592),
    ("tons", UnitType::Mass, 907.185),
    ("fluid ounces", UnitType::Volume, 0.029_573_5),
    ("cups", UnitType::Volume, 0.236_588),
    ("pints", UnitType::Volume, 0.473_176),
    ("quarts", UnitType::Volume, 0.946_353),
    ("gallons", UnitType::Volume, 3.785_41),
    ("square feet", UnitType::Area, 0.092_903),
    ("square yards", UnitType::Area, 0.836_127),
    ("acres", UnitType::Area, 4046.86),
    ("square miles", UnitType::Area, 2_589_988.11),
];

/// A converted unit span, ready for splicing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvertedUnit {
    /// Converted numeric value in the chosen display unit.
    pub value: f64,
    /// Display unit name, singular ("metre").
    pub unit: String,
    /// Full replacement text ("3.7 metres", "1.8-metre").
    pub formatted: String,
}

/// Converter from detected US-customary spans to metric text.
#[derive(Debug, Clone)]
pub struct UnitConverter {
    config: UnitConfig,
}

impl UnitConverter {
    /// Create a converter with the given formatting preferences.
    pub fn new(config: UnitConfig) -> Self {
        UnitConverter { config }
    }

    /// Convert a detected span to its metric equivalent.
    ///
    /// Fails with [`AngliciseError::UnsupportedUnit`] for unit strings
    /// missing from the conversion table; callers skip the span and keep
    /// processing the batch.
    pub fn convert(&self, m: &UnitMatch) -> Result<ConvertedUnit> {
        if m.unit_type == UnitType::Temperature {
            return Ok(self.convert_temperature(m.value));
        }

        let factor = CONVERSION_TABLE
            .iter()
            .find(|(unit, unit_type, _)| *unit == m.unit && *unit_type == m.unit_type)
            .map(|(_, _, factor)| *factor)
            .ok_or_else(|| AngliciseError::unsupported_unit(m.unit.clone()))?;

        let base_value = m.value * factor;
        let (display_value, singular, plural) = best_fit(m.unit_type, base_value);
        let formatted_value = self.format_value(display_value);

        let is_singular = formatted_value == "1" || m.is_compound;
        let unit_name = if is_singular { singular } else { plural };

        let formatted = if m.is_compound {
            // Compound forms always render the singular: "a 1.8-metre fence".
            format!("{formatted_value}-{singular}")
        } else if self.config.unit_spacing {
            format!("{formatted_value} {unit_name}")
        } else {
            format!("{formatted_value}{unit_name}")
        };

        Ok(ConvertedUnit {
            value: display_value,
            unit: singular.to_string(),
            formatted,
        })
    }

    fn convert_temperature(&self, fahrenheit: f64) -> ConvertedUnit {
        let celsius = (fahrenheit - 32.0) * 5.0 / 9.0;
        let formatted_value = self.format_value(celsius);
        let formatted = match self.config.temperature_symbol {
            TemperatureSymbol::Degrees => format!("{formatted_value}°C"),
            TemperatureSymbol::Word => format!("{formatted_value} degrees Celsius"),
        };
        ConvertedUnit {
            value: celsius,
            unit: "Celsius".to_string(),
            formatted,
        }
    }

    /// Format a value per the configured rounding preferences.
    ///
    /// Values within `whole_number_threshold` of an integer render whole.
    /// Otherwise the value rounds to `precision` decimals, then precision is
    /// trimmed while the trimmed value stays within threshold/10 of exact.
    fn format_value(&self, value: f64) -> String {
        let threshold = self.config.whole_number_threshold;
        if (value - value.round()).abs() <= threshold {
            return format!("{:.0}", value.round());
        }

        let precision = self.config.precision as usize;
        let mut chosen = precision;
        for fewer in (1..precision).rev() {
            let trimmed = round_to(value, fewer);
            if (trimmed - value).abs() <= threshold / 10.0 {
                chosen = fewer;
            } else {
                break;
            }
        }

        let rounded = round_to(value, chosen);
        format!("{rounded:.chosen$}")
    }
}

/// Round to `decimals` places, halves away from zero.
///
/// Conversion products that are exact in decimal (0.25 in = 6.35 mm) can sit
/// a few ulps below the .5 boundary in binary; the nudge lifts them back
/// onto it before rounding.
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    let nudged = scaled + scaled.signum() * scaled.abs().max(1.0) * 1e-12;
    nudged.round() / scale
}

/// Pick the display unit for a base-metric value by magnitude.
///
/// Returns `(display value, singular name, plural name)`.
fn best_fit(unit_type: UnitType, base_value: f64) -> (f64, &'static str, &'static str) {
    let magnitude = base_value.abs();
    match unit_type {
        UnitType::Length => {
            if magnitude < 0.01 {
                (base_value * 1000.0, "millimetre", "millimetres")
            } else if magnitude < 1.0 {
                (base_value * 100.0, "centimetre", "centimetres")
            } else if magnitude < 1000.0 {
                (base_value, "metre", "metres")
            } else {
                (base_value / 1000.0, "kilometre", "kilometres")
            }
        }
        UnitType::Mass => {
            if magnitude < 0.001 {
                (base_value * 1_000_000.0, "milligram", "milligrams")
            } else if magnitude < 1.0 {
                (base_value * 1000.0, "gram", "grams")
            } else if magnitude < 1000.0 {
                (base_value, "kilogram", "kilograms")
            } else {
                (base_value / 1000.0, "tonne", "tonnes")
            }
        }
        UnitType::Volume => {
            if magnitude < 1.0 {
                (base_value * 1000.0, "millilitre", "millilitres")
            } else {
                (base_value, "litre", "litres")
            }
        }
        UnitType::Area => {
            if magnitude < 10_000.0 {
                (base_value, "square metre", "square metres")
            } else {
                (base_value / 10_000.0, "hectare", "hectares")
            }
        }
        UnitType::Temperature => (base_value, "Celsius", "Celsius"),
    }
}
