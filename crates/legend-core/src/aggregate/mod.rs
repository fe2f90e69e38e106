use crate::model::{PlantEntry, PlantSchedule, RowKey, ScheduleRow};
use std::collections::BTreeMap;

/// Size keywords in display order. The empty key matches every size.
const SIZE_ORDER: &[(&str, u8)] = &[("box", 1), ("gal", 2), ("cal", 3), ("", 4)];

/// Rank used for sizes matching none of [`SIZE_ORDER`].
const SIZE_RANK_UNMATCHED: u8 = 5;

/// Sort rank of a size descriptor: boxed stock first, then gallon
/// containers, then caliper sizes, then everything else.
pub fn size_rank(size: &str) -> u8 {
    let lower = size.to_lowercase();
    SIZE_ORDER
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, rank)| *rank)
        .unwrap_or(SIZE_RANK_UNMATCHED)
}

/// Merge entries sharing `(category, name, size, dimensions)` and order the
/// result by category rank, then size rank.
///
/// Quantities are summed (saturating). Groups are first laid out in key
/// order and then stable-sorted, so ties keep a reproducible order.
pub fn aggregate<'a, I>(entries: I) -> PlantSchedule
where
    I: IntoIterator<Item = &'a PlantEntry>,
{
    let mut groups: BTreeMap<RowKey, u64> = BTreeMap::new();
    for entry in entries {
        let total = groups.entry(entry.key()).or_insert(0);
        *total = total.saturating_add(entry.quantity);
    }

    let mut rows: Vec<ScheduleRow> = groups
        .into_iter()
        .map(|(key, quantity)| ScheduleRow {
            category: key.category,
            name: key.name,
            size: key.size,
            dimensions: key.dimensions,
            quantity,
        })
        .collect();

    rows.sort_by_key(|r| (r.category.rank(), size_rank(&r.size)));

    tracing::debug!(rows = rows.len(), "aggregated plant schedule");

    PlantSchedule::from_sorted_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use std::collections::HashMap;

    fn entry(category: Category, quantity: u64, name: &str, size: &str, dims: &str) -> PlantEntry {
        PlantEntry {
            category,
            quantity,
            name: name.into(),
            size: size.into(),
            dimensions: dims.into(),
        }
    }

    fn sample() -> Vec<PlantEntry> {
        vec![
            entry(Category::Groundcover, 40, "Lantana montevidensis", "1 Gal", ""),
            entry(Category::Accent, 3, "Agave americana", "", ""),
            entry(Category::Tree, 2, "Olea europaea", "15 Gal", ""),
            entry(Category::Shrub, 5, "Leucophyllum frutescens", "5 Gal", ""),
            entry(Category::Accent, 4, "Agave americana", "", ""),
            entry(Category::Tree, 6, "Quercus virginiana", "36 in Box", "12' × 10'"),
            entry(Category::Tree, 1, "Chilopsis linearis", "2 in Cal", ""),
            entry(Category::Shrub, 5, "Leucophyllum frutescens", "5 Gal", "4' × 4'"),
        ]
    }

    #[test]
    fn test_size_rank() {
        assert_eq!(size_rank("36 in Box"), 1);
        assert_eq!(size_rank("24\" BOX"), 1);
        assert_eq!(size_rank("15 Gal"), 2);
        assert_eq!(size_rank("2 in Cal"), 3);
        assert_eq!(size_rank(""), 4);
        assert_eq!(size_rank("Bare Root"), 4);
        assert_eq!(size_rank("12 ft. BTH"), 4);
    }

    #[test]
    fn test_duplicates_merged() {
        let schedule = aggregate(&[
            entry(Category::Accent, 3, "Agave americana", "", ""),
            entry(Category::Accent, 4, "Agave americana", "", ""),
        ]);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.rows()[0].quantity, 7);
    }

    #[test]
    fn test_distinct_dimensions_not_merged() {
        let schedule = aggregate(&sample());
        let leuco: Vec<_> = schedule
            .iter()
            .filter(|r| r.name == "Leucophyllum frutescens")
            .collect();
        assert_eq!(leuco.len(), 2);
    }

    #[test]
    fn test_sort_order() {
        let schedule = aggregate(&sample());
        let order: Vec<&str> = schedule.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "Quercus virginiana",
                "Olea europaea",
                "Chilopsis linearis",
                "Agave americana",
                "Leucophyllum frutescens",
                "Leucophyllum frutescens",
                "Lantana montevidensis",
            ]
        );
    }

    #[test]
    fn test_sort_invariant() {
        let schedule = aggregate(&sample());
        for pair in schedule.rows().windows(2) {
            let a = (pair[0].category.rank(), size_rank(&pair[0].size));
            let b = (pair[1].category.rank(), size_rank(&pair[1].size));
            assert!(a <= b, "{:?} sorted after {:?}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_sum_invariant() {
        let entries = sample();
        let schedule = aggregate(&entries);

        let mut expected: HashMap<RowKey, u64> = HashMap::new();
        for e in &entries {
            *expected.entry(e.key()).or_insert(0) += e.quantity;
        }
        assert_eq!(schedule.len(), expected.len());
        for row in &schedule {
            assert_eq!(expected[&row.as_entry().key()], row.quantity);
        }
        assert_eq!(
            schedule.total_quantity(),
            entries.iter().map(|e| e.quantity).sum::<u64>()
        );
    }

    #[test]
    fn test_idempotent() {
        let once = aggregate(&sample());
        let twice = aggregate(&once.to_entries());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_independent_grouping() {
        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(aggregate(&sample()), aggregate(&reversed));
    }

    #[test]
    fn test_saturating_sum() {
        let schedule = aggregate(&[
            entry(Category::Tree, u64::MAX, "Pinus eldarica", "", ""),
            entry(Category::Tree, 1, "Pinus eldarica", "", ""),
        ]);
        assert_eq!(schedule.rows()[0].quantity, u64::MAX);
    }

    #[test]
    fn test_empty() {
        assert!(aggregate(&[]).is_empty());
    }
}
