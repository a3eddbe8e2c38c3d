//! Catalog data model.
//!
//! - `types`: [`Item`], [`ItemId`], the immutable [`Dataset`] and its builder
//! - `item_set`: [`ItemSet`], an ordered, cheaply clonable selection of items
//! - `sample`: the bundled component library plus the bulk stress-test generator
//!
//! A [`Dataset`] is built once at startup and then shared read-only (behind an
//! `Arc`) by every component. Nothing in the crate mutates it afterwards.

mod item_set;
pub mod sample;
mod types;

pub use item_set::{ItemSet, SetId};
pub use types::{Dataset, DatasetBuilder, Item, ItemId};
