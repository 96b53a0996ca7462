//! Configuration for unit and contextual-word conversion.
//!
//! Configuration arrives as parsed value objects: callers hand the core a
//! [`serde_json::Value`] (or a fully typed struct) and the core deep-merges
//! it over documented defaults. The core never reads files itself, and a
//! converter instance never mutates its configuration after construction.
//!
//! Validation is explicit: [`UnitConfig::validate`] and
//! [`WordConfig::validate`] surface [`AngliciseError::InvalidConfig`] to the
//! loading collaborator, which decides the fallback. The core never silently
//! repairs an invalid config.
//!
//! [`AngliciseError::InvalidConfig`]: crate::error::AngliciseError::InvalidConfig

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

pub mod unit;
pub mod word;

pub use unit::{TemperatureSymbol, UnitConfig, UnitFamilies};
pub use word::{WordConfig, WordEntry};

/// Deep-merge `overlay` onto `base`: objects merge key-by-key recursively,
/// every other value kind replaces wholesale.
pub(crate) fn merge_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => merge_values(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}

/// Deserialize a config value merged over `D::default()`.
pub(crate) fn from_overrides<D>(overrides: &Value) -> Result<D>
where
    D: Default + Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(D::default())?;
    merge_values(&mut merged, overrides);
    Ok(serde_json::from_value(merged)?)
}
