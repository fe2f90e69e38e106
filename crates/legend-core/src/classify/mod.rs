use crate::keywords::GenusLookup;
use crate::model::Category;

/// Infer a plant category from its botanical/common name.
///
/// Categories are tried in [`Category::ALL`] order, so a name containing
/// both a tree and a shrub keyword resolves to `Tree`. Returns `fallback`
/// when no keyword is a substring of the lower-cased name.
pub fn classify(name: &str, fallback: Category, lookup: &GenusLookup) -> Category {
    let lower = name.to_lowercase();
    lookup
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w.as_str())))
        .map(|(category, _)| category)
        .unwrap_or(fallback)
}
