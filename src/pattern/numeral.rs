//! Numeral parsing for unit detection.
//!
//! Accepts decimals ("12", "3.5"), simple fractions ("1/2"), mixed fractions
//! ("1 1/2"), and a small written-number table ("six", "twenty", "half").
//! Anything else is a [`AngliciseError::Parse`]: the detector drops that
//! match and keeps going.
//!
//! [`AngliciseError::Parse`]: crate::error::AngliciseError::Parse

use crate::error::{AngliciseError, Result};

/// Written numbers recognized in unit phrases ("six feet", "half a mile").
const WRITTEN_NUMBERS: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
    ("twenty", 20.0),
    ("thirty", 30.0),
    ("forty", 40.0),
    ("fifty", 50.0),
    ("sixty", 60.0),
    ("seventy", 70.0),
    ("eighty", 80.0),
    ("ninety", 90.0),
    ("hundred", 100.0),
    ("thousand", 1000.0),
    ("half", 0.5),
    ("quarter", 0.25),
];

/// A regex alternation over every written number, longest first so
/// "seventeen" wins over "seven" in pattern matching.
pub fn written_number_alternation() -> String {
    let mut names: Vec<&str> = WRITTEN_NUMBERS.iter().map(|(name, _)| *name).collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    names.join("|")
}

/// Parse the numeral portion of a matched unit phrase.
pub fn parse_numeral(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AngliciseError::parse("empty numeral"));
    }

    // Plain decimal.
    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() {
            return Ok(value);
        }
        return Err(AngliciseError::parse(format!("non-finite numeral: {trimmed}")));
    }

    // Mixed fraction: "1 1/2".
    if let Some((whole, fraction)) = trimmed.split_once(' ') {
        if let (Ok(whole), Ok(fraction)) = (whole.trim().parse::<f64>(), parse_fraction(fraction))
        {
            return Ok(whole + fraction);
        }
    }

    // Simple fraction: "3/4".
    if let Ok(value) = parse_fraction(trimmed) {
        return Ok(value);
    }

    // Written number.
    let lowered = trimmed.to_lowercase();
    if let Some((_, value)) = WRITTEN_NUMBERS.iter().find(|(name, _)| *name == lowered) {
        return Ok(*value);
    }

    // Two-part written number: "twenty five" / "twenty-five".
    let parts: Vec<&str> = lowered.split(['-', ' ']).collect();
    if parts.len() == 2 {
        let tens = WRITTEN_NUMBERS.iter().find(|(name, _)| *name == parts[0]);
        let ones = WRITTEN_NUMBERS.iter().find(|(name, _)| *name == parts[1]);
        if let (Some((_, tens)), Some((_, ones))) = (tens, ones) {
            if *tens >= 20.0 && tens % 10.0 == 0.0 && *ones < 10.0 {
                return Ok(tens + ones);
            }
        }
    }

    Err(AngliciseError::parse(format!("unparseable numeral: {trimmed}")))
}

fn parse_fraction(text: &str) -> Result<f64> {
    let (numerator, denominator) = text
        .trim()
        .split_once('/')
        .ok_or_else(|| AngliciseError::parse(format!("not a fraction: {text}")))?;
    let numerator: f64 = numerator
        .trim()
        .parse()
        .map_err(|_| AngliciseError::parse(format!("bad numerator: {text}")))?;
    let denominator: f64 = denominator
        .trim()
        .parse()
        .map_err(|_| AngliciseError::parse(format!("bad denominator: {text}")))?;
    if denominator == 0.0 {
        return Err(AngliciseError::parse(format!("zero denominator: {text}")));
    }
    Ok(numerator / denominator)
}
