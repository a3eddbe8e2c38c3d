use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::error::CatalogError;
use crate::selection::{ALL_LABEL, ALL_RESULTS_LABEL};

/// Index of an item inside its [`Dataset`].
///
/// Stored as `u32` to keep million-item sets compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl ItemId {
    /// Creates an ID from a dataset position.
    ///
    /// Positions beyond `u32::MAX` saturate; datasets that large are rejected
    /// by [`DatasetBuilder::build`].
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Returns the dataset position of this item.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A named catalog entry tagged with one or more categories.
///
/// Serialized in the library document's shape (`Name`, `Categories`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Categories")]
    pub categories: Vec<String>,
}

impl Item {
    pub fn new<I, S>(name: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this item is tagged with `category`.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// The library document: `{"Components": [...], "Categories": [...]}`.
#[derive(Debug, Deserialize)]
struct LibraryDocument {
    #[serde(rename = "Components")]
    components: Vec<Item>,
    #[serde(rename = "Categories")]
    categories: Vec<String>,
}

/// Collects items and categories before freezing them into a [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    items: Vec<Item>,
    categories: Vec<String>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a library document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: LibraryDocument = serde_json::from_str(json)?;
        Ok(Self {
            items: doc.components,
            categories: doc.categories,
        })
    }

    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn push_category(&mut self, name: impl Into<String>) {
        self.categories.push(name.into());
    }

    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn reserve_items(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Validates and freezes the collected data.
    ///
    /// Duplicate entries in the category list are collapsed, keeping the first
    /// occurrence. Every item must list each of its categories at most once,
    /// and only categories from the category list.
    pub fn build(self) -> Result<Dataset, CatalogError> {
        if u32::try_from(self.items.len()).is_err() {
            return Err(CatalogError::Parse(format!(
                "{} items exceed the supported dataset size",
                self.items.len()
            )));
        }

        let mut known: HashSet<&str> = HashSet::with_capacity(self.categories.len());
        let mut categories = Vec::with_capacity(self.categories.len());
        for category in &self.categories {
            if category == ALL_LABEL || category == ALL_RESULTS_LABEL {
                return Err(CatalogError::ReservedCategory(category.clone()));
            }
            if known.insert(category.as_str()) {
                categories.push(category.clone());
            }
        }

        for item in &self.items {
            for (pos, category) in item.categories.iter().enumerate() {
                if !known.contains(category.as_str()) {
                    return Err(CatalogError::UnknownCategory {
                        item: item.name.clone(),
                        category: category.clone(),
                    });
                }
                if item.categories[..pos].contains(category) {
                    return Err(CatalogError::DuplicateCategory {
                        item: item.name.clone(),
                        category: category.clone(),
                    });
                }
            }
        }

        let folded_names = self.items.iter().map(|i| i.name.to_lowercase()).collect();

        debug!(
            "Built dataset: {} items, {} categories",
            self.items.len(),
            categories.len()
        );

        Ok(Dataset {
            items: self.items,
            folded_names,
            categories,
        })
    }
}

/// Immutable, ordered collection of items plus every known category.
///
/// Item names are case-folded once at construction so that filtering a large
/// dataset does not re-fold every name on every keystroke.
#[derive(Debug)]
pub struct Dataset {
    items: Vec<Item>,
    folded_names: Vec<String>,
    categories: Vec<String>,
}

impl Dataset {
    /// Parses and validates a library document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        DatasetBuilder::from_json(json)?.build()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    /// Case-folded name of an item, used by the filter.
    pub fn folded_name(&self, id: ItemId) -> Option<&str> {
        self.folded_names.get(id.index()).map(String::as_str)
    }

    /// All known category names, in declaration order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Iterates item IDs in dataset order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.items.len()).map(ItemId::from_index)
    }
}
