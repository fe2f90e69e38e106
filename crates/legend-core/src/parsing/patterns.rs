//! Named matchers for the pieces of a plant schedule line.
//!
//! Each matcher works on a single trimmed line (or the description part of
//! an entry line) and only ever reports its first match.

use super::normalize::collapse_whitespace;
use crate::model::Category;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)trees?|accents?|shrubs?|groundcovers?").expect("heading pattern is valid")
});

static ENTRY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s+(.*)$").expect("entry pattern is valid"));

static DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+['′’]?)\s*[×x]\s*([0-9]+['′’]?)").expect("dimension pattern is valid")
});

static SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+\s*(?i:gal|box|in\.?|ft\.?|bth|bare root).*").expect("size pattern is valid")
});

/// Quantity and description of a quantity-first entry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPrefix<'a> {
    pub quantity: u64,
    pub description: &'a str,
}

/// A matched "H × W" descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionMatch {
    /// Byte range of the raw match within the searched text.
    pub span: Range<usize>,
    /// Canonical form, always separated by " × ".
    pub text: String,
}

/// A matched container size descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeMatch {
    pub span: Range<usize>,
    pub text: String,
}

/// Detect a section heading line.
///
/// Any occurrence of tree(s), accent(s), shrub(s) or groundcover(s) makes
/// the line a heading. When several keywords appear, the category that comes
/// first in [`Category::ALL`] wins.
pub fn match_heading(line: &str) -> Option<Category> {
    let found: Vec<String> = HEADING
        .find_iter(line)
        .map(|m| m.as_str().to_lowercase())
        .collect();
    if found.is_empty() {
        return None;
    }
    Category::ALL
        .into_iter()
        .find(|c| found.iter().any(|word| word.starts_with(c.heading_keyword())))
}

/// Match a line starting with an integer quantity followed by whitespace.
///
/// Returns `None` for lines without a leading quantity and for digit runs
/// that do not fit a `u64`.
pub fn match_entry_prefix(line: &str) -> Option<EntryPrefix<'_>> {
    let caps = ENTRY_PREFIX.captures(line)?;
    let quantity = caps.get(1)?.as_str().parse::<u64>().ok()?;
    let description = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
    Some(EntryPrefix {
        quantity,
        description,
    })
}

/// Find the first "N × M" dimension pair (either `x` or `×`, optional foot
/// marks on both numbers).
pub fn match_dimensions(text: &str) -> Option<DimensionMatch> {
    let caps = DIMENSIONS.captures(text)?;
    let whole = caps.get(0)?;
    let height = caps.get(1)?.as_str();
    let width = caps.get(2)?.as_str();
    Some(DimensionMatch {
        span: whole.range(),
        text: format!("{height} × {width}"),
    })
}

/// Find the first container size ("15 Gal", "24 in Box", "2 BTH", ...).
///
/// The match runs from the number to the end of the text. Dimension text
/// (`exclude`) inside that run is cut out of the size, so trailing notes
/// after the dimensions stay with the size. A size whose number is shared
/// with the dimension match ("3 x 5 Gal") is kept as matched.
///
/// `span` is the whole raw match and may overlap `exclude`.
pub fn match_size(text: &str, exclude: Option<&Range<usize>>) -> Option<SizeMatch> {
    let found = SIZE.find(text)?;
    let span = found.range();

    let raw = match exclude {
        Some(ex) if span.start < ex.start && ex.start < span.end => {
            let resume = ex.end.min(span.end);
            format!("{} {}", &text[span.start..ex.start], &text[resume..span.end])
        }
        _ => found.as_str().to_string(),
    };

    let size = collapse_whitespace(&raw);
    if size.is_empty() {
        return None;
    }
    Some(SizeMatch { span, text: size })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_plural_and_case() {
        assert_eq!(match_heading("SHRUBS"), Some(Category::Shrub));
        assert_eq!(match_heading("Trees"), Some(Category::Tree));
        assert_eq!(match_heading("accent"), Some(Category::Accent));
        assert_eq!(match_heading("GROUNDCOVERS / VINES"), Some(Category::Groundcover));
    }

    #[test]
    fn test_heading_anywhere_in_line() {
        assert_eq!(match_heading("-- Proposed Trees (see L2.1) --"), Some(Category::Tree));
    }

    #[test]
    fn test_heading_priority_follows_category_order() {
        assert_eq!(match_heading("SHRUBS AND TREES"), Some(Category::Tree));
        assert_eq!(match_heading("Groundcover & Accent"), Some(Category::Accent));
    }

    #[test]
    fn test_heading_absent() {
        assert_eq!(match_heading("Plant Schedule Notes"), None);
        assert_eq!(match_heading("12 Quercus virginiana"), None);
    }

    #[test]
    fn test_heading_wins_over_quantity_line() {
        assert_eq!(match_heading("3 Shrub roses"), Some(Category::Shrub));
    }

    #[test]
    fn test_entry_prefix() {
        let p = match_entry_prefix("12 Quercus virginiana 36 in Box").unwrap();
        assert_eq!(p.quantity, 12);
        assert_eq!(p.description, "Quercus virginiana 36 in Box");
    }

    #[test]
    fn test_entry_prefix_zero_quantity() {
        assert_eq!(match_entry_prefix("0 Agave parryi").unwrap().quantity, 0);
    }

    #[test]
    fn test_entry_prefix_rejects() {
        assert!(match_entry_prefix("Plant Schedule Notes").is_none());
        assert!(match_entry_prefix("12").is_none());
        assert!(match_entry_prefix("12Agave").is_none());
        assert!(match_entry_prefix("99999999999999999999999 Agave").is_none());
    }

    #[test]
    fn test_dimensions_foot_marks() {
        let d = match_dimensions("Quercus 12' × 10'").unwrap();
        assert_eq!(d.text, "12' × 10'");
        let d = match_dimensions("Agave 3′x4′").unwrap();
        assert_eq!(d.text, "3′ × 4′");
        let d = match_dimensions("Yucca 6 x 5 clumping").unwrap();
        assert_eq!(d.text, "6 × 5");
    }

    #[test]
    fn test_dimensions_first_match_and_span() {
        let text = "Olea 20' x 15' or 25' x 20'";
        let d = match_dimensions(text).unwrap();
        assert_eq!(d.text, "20' × 15'");
        assert_eq!(&text[d.span.clone()], "20' x 15'");
    }

    #[test]
    fn test_dimensions_absent() {
        assert!(match_dimensions("Leucophyllum frutescens 5 Gal").is_none());
        assert!(match_dimensions("Texas ranger").is_none());
    }

    #[test]
    fn test_size_units() {
        assert_eq!(match_size("Leucophyllum 5 Gal", None).unwrap().text, "5 Gal");
        assert_eq!(match_size("Quercus 24 in Box", None).unwrap().text, "24 in Box");
        assert_eq!(match_size("Washingtonia 12 ft. BTH", None).unwrap().text, "12 ft. BTH");
        assert_eq!(match_size("Phoenix 14 BTH", None).unwrap().text, "14 BTH");
        assert_eq!(match_size("Rosa 1 Bare Root", None).unwrap().text, "1 Bare Root");
        assert_eq!(match_size("Dalea 1 gal.", None).unwrap().text, "1 gal.");
        assert_eq!(match_size("Tecoma 15GAL", None).unwrap().text, "15GAL");
    }

    #[test]
    fn test_size_keeps_trailing_text() {
        let m = match_size("Prosopis 36 in Box multi-trunk", None).unwrap();
        assert_eq!(m.text, "36 in Box multi-trunk");
    }

    #[test]
    fn test_size_drops_dimension_text() {
        let text = "Quercus virginiana 36 in Box 12' × 10'";
        let dims = match_dimensions(text).unwrap();
        let size = match_size(text, Some(&dims.span)).unwrap();
        assert_eq!(size.text, "36 in Box");
        assert_eq!(&text[size.span.clone()], "36 in Box 12' × 10'");
    }

    #[test]
    fn test_size_sharing_dimension_number_is_kept() {
        let text = "Agave parryi 3 x 5 Gal";
        let dims = match_dimensions(text).unwrap();
        let size = match_size(text, Some(&dims.span)).unwrap();
        assert_eq!(size.text, "5 Gal");
        assert_eq!(&text[size.span.clone()], "5 Gal");

        let text = "Agave 3' x 5' 5 Gal";
        let dims = match_dimensions(text).unwrap();
        assert_eq!(match_size(text, Some(&dims.span)).unwrap().text, "5 Gal");
    }

    #[test]
    fn test_size_keeps_text_after_dimensions() {
        let text = "Quercus virginiana 36 in Box 12' x 10' multi-trunk";
        let dims = match_dimensions(text).unwrap();
        let size = match_size(text, Some(&dims.span)).unwrap();
        assert_eq!(size.text, "36 in Box multi-trunk");
    }

    #[test]
    fn test_size_absent() {
        assert!(match_size("Agave americana", None).is_none());
    }
}
