use crate::error::LegendError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plant category as used in landscape legends.
///
/// Variant order is the display order of a schedule.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Tree,
    #[default]
    Accent,
    Shrub,
    Groundcover,
}

impl Category {
    /// All categories in classifier and display order.
    pub const ALL: [Category; 4] = [
        Category::Tree,
        Category::Accent,
        Category::Shrub,
        Category::Groundcover,
    ];

    /// Sort rank of the category (Tree = 1 ... Groundcover = 4).
    pub fn rank(self) -> u8 {
        match self {
            Category::Tree => 1,
            Category::Accent => 2,
            Category::Shrub => 3,
            Category::Groundcover => 4,
        }
    }

    /// Lower-case keyword that marks a section heading for this category.
    pub fn heading_keyword(self) -> &'static str {
        match self {
            Category::Tree => "tree",
            Category::Accent => "accent",
            Category::Shrub => "shrub",
            Category::Groundcover => "groundcover",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tree => "Tree",
            Category::Accent => "Accent",
            Category::Shrub => "Shrub",
            Category::Groundcover => "Groundcover",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LegendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.heading_keyword() == lower)
            .ok_or_else(|| LegendError::UnknownCategory(s.trim().to_string()))
    }
}

/// A single plant line parsed from OCR text, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantEntry {
    pub category: Category,
    pub quantity: u64,
    pub name: String,
    /// Container size such as "15 Gal" or "24 in Box"; empty if absent.
    pub size: String,
    /// Mature "H × W"; empty if absent.
    pub dimensions: String,
}

impl PlantEntry {
    pub fn key(&self) -> RowKey {
        RowKey {
            category: self.category,
            name: self.name.clone(),
            size: self.size.clone(),
            dimensions: self.dimensions.clone(),
        }
    }
}

/// Identity of an aggregated schedule row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    pub category: Category,
    pub name: String,
    pub size: String,
    pub dimensions: String,
}

/// One row of the aggregated plant schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub category: Category,
    pub name: String,
    pub size: String,
    pub dimensions: String,
    pub quantity: u64,
}

impl ScheduleRow {
    pub fn as_entry(&self) -> PlantEntry {
        PlantEntry {
            category: self.category,
            quantity: self.quantity,
            name: self.name.clone(),
            size: self.size.clone(),
            dimensions: self.dimensions.clone(),
        }
    }
}

/// Deduplicated, ordered plant schedule. Built by [`crate::aggregate::aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantSchedule {
    rows: Vec<ScheduleRow>,
}

impl PlantSchedule {
    pub(crate) fn from_sorted_rows(rows: Vec<ScheduleRow>) -> Self {
        PlantSchedule { rows }
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_quantity(&self) -> u64 {
        self.rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.quantity))
    }

    /// Rows turned back into entries, e.g. to merge with another run.
    pub fn to_entries(&self) -> Vec<PlantEntry> {
        self.rows.iter().map(ScheduleRow::as_entry).collect()
    }
}

impl<'a> IntoIterator for &'a PlantSchedule {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_rank_order() {
        let ranks: Vec<u8> = Category::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("tree".parse::<Category>().unwrap(), Category::Tree);
        assert_eq!(" Groundcover ".parse::<Category>().unwrap(), Category::Groundcover);
        assert!("vine".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_name() {
        let json = serde_json::to_string(&Category::Shrub).unwrap();
        assert_eq!(json, "\"Shrub\"");
    }
}
