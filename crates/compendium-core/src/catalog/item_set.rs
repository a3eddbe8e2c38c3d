use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::types::{Dataset, ItemId};

/// Global counter for set identities.
static SET_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of an [`ItemSet`].
///
/// Two sets with equal contents built separately get different IDs. Row
/// layout state is keyed on this identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetId(u64);

impl SetId {
    fn next() -> Self {
        Self(SET_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Ordered, immutable selection of dataset items.
///
/// Cloning is an `Arc` bump. Equality is identity: a clone compares equal to
/// its source, a freshly built set never compares equal to an older one. This
/// keeps reactive comparisons O(1) for million-item sets and makes "the set
/// changed" observable without comparing contents.
#[derive(Debug, Clone)]
pub struct ItemSet {
    id: SetId,
    ids: Arc<[ItemId]>,
}

impl ItemSet {
    pub fn new(ids: Vec<ItemId>) -> Self {
        Self {
            id: SetId::next(),
            ids: ids.into(),
        }
    }

    /// Every item of `dataset`, in order.
    pub fn all(dataset: &Dataset) -> Self {
        Self::new(dataset.ids().collect())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn id(&self) -> SetId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    /// Items in `range`, clamped to the set bounds.
    pub fn slice(&self, range: Range<usize>) -> &[ItemId] {
        let end = range.end.min(self.ids.len());
        let start = range.start.min(end);
        &self.ids[start..end]
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }
}

impl PartialEq for ItemSet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ItemSet {}
