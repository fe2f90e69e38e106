pub mod extract;
pub mod keywords;
pub mod ocr;

use legend_core::config::ExtractConfig;
use legend_core::error::LegendError;
use std::path::Path;

/// Load the config file if given, otherwise defaults.
pub fn load_config(path: Option<&Path>) -> Result<ExtractConfig, LegendError> {
    match path {
        Some(path) => ExtractConfig::load(path),
        None => Ok(ExtractConfig::default()),
    }
}
