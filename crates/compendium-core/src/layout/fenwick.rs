/// Fenwick (binary indexed) tree over `u64` values.
///
/// `prefix(n)` is the sum of the first `n` values.
#[derive(Debug, Clone, Default)]
pub(crate) struct FenwickTree {
    /// 1-based; `tree[0]` is unused.
    tree: Vec<u64>,
}

impl FenwickTree {
    /// Builds a tree from `values` in O(n).
    pub(crate) fn from_values(values: &[u64]) -> Self {
        let n = values.len();
        let mut tree = vec![0u64; n + 1];
        tree[1..].copy_from_slice(values);
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                tree[parent] += tree[i];
            }
        }
        Self { tree }
    }

    pub(crate) fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    /// Adds `delta` to the value at `idx`.
    pub(crate) fn add(&mut self, idx: usize, delta: i64) {
        let n = self.len();
        let mut i = idx + 1;
        while i <= n {
            self.tree[i] = self.tree[i].wrapping_add_signed(delta);
            i += lowbit(i);
        }
    }

    /// Sum of the first `count` values.
    pub(crate) fn prefix(&self, count: usize) -> u64 {
        let mut i = count.min(self.len());
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        sum
    }

    pub(crate) fn total(&self) -> u64 {
        self.prefix(self.len())
    }

    /// Largest `count` such that `prefix(count) <= target`.
    pub(crate) fn count_within(&self, target: u64) -> usize {
        let n = self.len();
        if n == 0 {
            return 0;
        }
        let mut pos = 0;
        let mut remaining = target;
        let mut step = 1usize << (usize::BITS - 1 - n.leading_zeros());
        while step > 0 {
            let next = pos + step;
            if next <= n && self.tree[next] <= remaining {
                pos = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }
        pos
    }
}

fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}
