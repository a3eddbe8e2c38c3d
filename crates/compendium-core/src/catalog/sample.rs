//! Bundled sample data.
//!
//! The viewer ships a small component library (`library.json`) and pads it
//! with generated items so the windowed list has something large to scroll.

use tracing::info;

use super::types::{Dataset, DatasetBuilder, Item};
use crate::config::{GENERATED_CATEGORY_COUNT, GENERATED_ITEM_COUNT};
use crate::error::CatalogError;

const LIBRARY_JSON: &str = include_str!("library.json");

/// The bundled component library without generated items.
pub fn library() -> Result<Dataset, CatalogError> {
    Dataset::from_json(LIBRARY_JSON)
}

/// The bundled library plus the default bulk data.
pub fn sample_dataset() -> Result<Dataset, CatalogError> {
    generated_dataset(GENERATED_CATEGORY_COUNT, GENERATED_ITEM_COUNT)
}

/// The bundled library plus `categories` generated categories and `items`
/// generated items.
pub fn generated_dataset(categories: usize, items: usize) -> Result<Dataset, CatalogError> {
    let mut builder = DatasetBuilder::from_json(LIBRARY_JSON)?;
    extend_generated(&mut builder, categories, items);
    let dataset = builder.build()?;
    info!(
        "Loaded sample dataset: {} items, {} categories",
        dataset.len(),
        dataset.categories().len()
    );
    Ok(dataset)
}

/// Appends `Category{n}` categories and `Comp{n}` items.
///
/// Item `i` is tagged with `Category{i % categories}` and
/// `Category{(i + 1) % categories}`; with a single category both tags are the
/// same and only one is kept. No items are generated without categories.
pub fn extend_generated(builder: &mut DatasetBuilder, categories: usize, items: usize) {
    if categories == 0 {
        return;
    }

    for i in 0..categories {
        builder.push_category(format!("Category{}", i));
    }

    builder.reserve_items(items);
    for i in 0..items {
        let first = i % categories;
        let second = (i + 1) % categories;
        let tags = if first == second {
            vec![format!("Category{}", first)]
        } else {
            vec![format!("Category{}", first), format!("Category{}", second)]
        };
        builder.push_item(Item::new(format!("Comp{}", i), tags));
    }
}
