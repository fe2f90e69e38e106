use crate::error::LegendError;
use crate::keywords::{parse_lookup_str, GenusLookup};

const DESERT_SOUTHWEST_JSON: &str = include_str!("../../../../keywords/desert-southwest.json");

/// Available predefined keyword tables.
pub const PRESETS: &[&str] = &["desert-southwest"];

/// Name of the table used when nothing else is configured.
pub const DEFAULT_PRESET: &str = "desert-southwest";

/// Load a predefined keyword table by name.
pub fn load_preset(name: &str) -> Result<GenusLookup, LegendError> {
    match name {
        "desert-southwest" => parse_lookup_str(DESERT_SOUTHWEST_JSON),
        _ => Err(LegendError::LookupInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
