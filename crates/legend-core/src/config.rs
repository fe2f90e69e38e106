use crate::error::LegendError;
use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TOOL_NAME: &str = "Legend Plant Extractor";

/// How text from several uploaded documents is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentMode {
    /// Join all document texts and parse them as one; a heading in one
    /// document still applies to the lines of the next.
    #[default]
    Concatenate,
    /// Parse every document with a fresh heading state, then merge.
    PerDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language code(s), e.g. "eng" or "eng+spa".
    pub language: String,
    /// Resolution used when rasterizing PDF pages.
    pub dpi: u32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            dpi: 300,
        }
    }
}

/// Settings for an extraction run, usually read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub project: Option<String>,
    pub tool_name: String,
    /// Category for entries with neither a heading nor a keyword match.
    pub fallback: Category,
    pub mode: DocumentMode,
    /// Custom genus keyword file; the built-in table is used when unset.
    pub keywords: Option<PathBuf>,
    pub ocr: OcrConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            project: None,
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            fallback: Category::Accent,
            mode: DocumentMode::Concatenate,
            keywords: None,
            ocr: OcrConfig::default(),
        }
    }
}

impl ExtractConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, LegendError> {
        let content = std::fs::read_to_string(path).map_err(|e| LegendError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: ExtractConfig =
            serde_json::from_str(&content).map_err(|e| LegendError::ConfigLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate().map_err(|reason| LegendError::ConfigLoad {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.tool_name.trim().is_empty() {
            return Err("tool_name must not be empty".into());
        }
        if self.ocr.language.trim().is_empty() {
            return Err("ocr.language must not be empty".into());
        }
        if !(70..=1200).contains(&self.ocr.dpi) {
            return Err(format!(
                "ocr.dpi must be between 70 and 1200, got {}",
                self.ocr.dpi
            ));
        }
        Ok(())
    }
}
