use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk form of a genus keyword table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenusLookupDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Map of category name -> genus/keyword substrings.
    pub keywords: BTreeMap<String, Vec<String>>,
}
