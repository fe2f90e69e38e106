pub mod builtin;
pub mod schema;

use crate::error::LegendError;
use crate::model::Category;
use schema::GenusLookupDef;
use std::path::Path;

/// Immutable category -> keyword mapping used by the classifier.
///
/// Keywords are stored lower-cased and kept per category in
/// [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenusLookup {
    name: String,
    table: Vec<(Category, Vec<String>)>,
}

impl GenusLookup {
    pub fn new<I, W, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, W)>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table: Vec<(Category, Vec<String>)> =
            Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        for (category, words) in entries {
            if let Some((_, slot)) = table.iter_mut().find(|(c, _)| *c == category) {
                slot.extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
            }
        }
        GenusLookup {
            name: name.into(),
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self, category: Category) -> &[String] {
        self.table
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    /// Categories with their keywords, in classifier order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.table.iter().map(|(c, words)| (*c, words.as_slice()))
    }

    pub fn keyword_count(&self) -> usize {
        self.table.iter().map(|(_, words)| words.len()).sum()
    }

    fn from_def(def: &GenusLookupDef) -> Result<Self, LegendError> {
        let mut table: Vec<(Category, Vec<String>)> =
            Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        for (category_name, words) in &def.keywords {
            let category: Category = category_name.parse().map_err(|_| {
                LegendError::LookupInvalid(format!(
                    "unknown category '{}' (expected Tree, Accent, Shrub or Groundcover)",
                    category_name
                ))
            })?;
            if let Some((_, slot)) = table.iter_mut().find(|(c, _)| *c == category) {
                slot.extend(words.iter().map(|w| w.trim().to_lowercase()));
            }
        }
        Ok(GenusLookup {
            name: def.name.clone(),
            table,
        })
    }
}

impl Default for GenusLookup {
    fn default() -> Self {
        builtin::load_preset(builtin::DEFAULT_PRESET).unwrap_or_else(|_| GenusLookup {
            name: builtin::DEFAULT_PRESET.to_string(),
            table: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        })
    }
}

/// Load a keyword table from a JSON file.
pub fn load_lookup(path: &Path) -> Result<GenusLookup, LegendError> {
    let content = std::fs::read_to_string(path).map_err(|e| LegendError::LookupLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_lookup(&content, path)
}

/// Parse a keyword table from a JSON string.
pub fn parse_lookup(json: &str, source: &Path) -> Result<GenusLookup, LegendError> {
    let def: GenusLookupDef = serde_json::from_str(json).map_err(|e| LegendError::LookupLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_lookup(&def)?;
    GenusLookup::from_def(&def)
}

/// Parse a keyword table from a JSON string (no file path context).
pub fn parse_lookup_str(json: &str) -> Result<GenusLookup, LegendError> {
    let def: GenusLookupDef = serde_json::from_str(json).map_err(LegendError::Json)?;
    validate_lookup(&def)?;
    GenusLookup::from_def(&def)
}

/// Validate that a keyword table is well-formed.
pub fn validate_lookup(def: &GenusLookupDef) -> Result<(), LegendError> {
    if def.name.trim().is_empty() {
        return Err(LegendError::LookupInvalid("name must not be empty".into()));
    }

    for (category, words) in &def.keywords {
        if category.parse::<Category>().is_err() {
            return Err(LegendError::LookupInvalid(format!(
                "unknown category '{}' (expected Tree, Accent, Shrub or Groundcover)",
                category
            )));
        }

        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(LegendError::LookupInvalid(format!(
                "category '{}' contains an empty keyword",
                category
            )));
        }
    }

    if def.keywords.values().all(|words| words.is_empty()) {
        return Err(LegendError::LookupInvalid(
            "keywords must not be empty".into(),
        ));
    }

    Ok(())
}
