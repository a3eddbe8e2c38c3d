//! Per-category item counts.
//!
//! Counts are derived from a filtered item set and only ever contain
//! categories with a count above zero; a missing category means zero.

use std::collections::HashMap;

use crate::catalog::{Dataset, Item, ItemSet};

/// Mapping from category name to the number of items carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: HashMap<String, usize>,
}

impl CategoryCounts {
    /// Count for `category`, zero when absent.
    pub fn get(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Whether `category` has a count above zero.
    pub fn contains(&self, category: &str) -> bool {
        self.counts.contains_key(category)
    }

    /// Number of categories with a count above zero.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(category, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn increment(&mut self, category: &str) {
        // Avoid allocating a key for categories already seen
        if let Some(count) = self.counts.get_mut(category) {
            *count += 1;
        } else {
            self.counts.insert(category.to_string(), 1);
        }
    }
}

/// Counts, for every category, how many of `items` list it.
///
/// Order-independent and total.
///
/// # Examples
///
/// ```
/// use compendium_core::aggregation::count_by_category;
/// use compendium_core::catalog::Item;
///
/// let items = [
///     Item::new("Button", ["Controls"]),
///     Item::new("Input Field", ["Controls", "Inputs"]),
/// ];
/// let counts = count_by_category(&items);
/// assert_eq!(counts.get("Controls"), 2);
/// assert_eq!(counts.get("Inputs"), 1);
/// assert_eq!(counts.get("Charts"), 0);
/// ```
pub fn count_by_category<'a, I>(items: I) -> CategoryCounts
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut counts = CategoryCounts::default();
    for item in items {
        for category in &item.categories {
            counts.increment(category);
        }
    }
    counts
}

/// [`count_by_category`] over the members of `set`.
pub fn count_set(dataset: &Dataset, set: &ItemSet) -> CategoryCounts {
    count_by_category(set.iter().filter_map(|id| dataset.get(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    #[test]
    fn test_empty_input() {
        let counts = count_by_category(std::iter::empty::<&Item>());
        assert!(counts.is_empty());
        assert_eq!(counts.get("Controls"), 0);
    }

    #[test]
    fn test_counts_match_membership() {
        let dataset = sample::generated_dataset(4, 50).unwrap();
        let counts = count_by_category(dataset.items());

        for category in dataset.categories() {
            let expected = dataset
                .items()
                .iter()
                .filter(|item| item.has_category(category))
                .count();
            assert_eq!(counts.get(category), expected, "category {}", category);
        }
    }

    #[test]
    fn test_zero_counts_are_absent() {
        let items = [Item::new("Bar Chart", ["Charts"])];
        let counts = count_by_category(&items);
        assert_eq!(counts.len(), 1);
        assert!(!counts.contains("Controls"));
    }

    #[test]
    fn test_order_independent() {
        let dataset = sample::library().unwrap();
        let forward = count_by_category(dataset.items());
        let backward = count_by_category(dataset.items().iter().rev());
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_count_set_only_counts_members() {
        let dataset = sample::library().unwrap();
        // "Bar Chart" and "Line Chart"
        let set = ItemSet::new(vec![
            crate::catalog::ItemId::from_index(2),
            crate::catalog::ItemId::from_index(3),
        ]);
        let counts = count_set(&dataset, &set);
        assert_eq!(counts.get("Charts"), 2);
        assert_eq!(counts.len(), 1);
    }
}
