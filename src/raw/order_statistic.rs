use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;
use smallvec::{SmallVec, smallvec};

use super::node::Node;
use super::raw_symbol_table::RawSymbolTable;

impl<K, V> RawSymbolTable<K, V> {
    /// Returns the node holding the smallest key.
    pub(crate) fn min_node(&self) -> Option<&Node<K, V>> {
        let mut current = self.root()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(current)
    }

    /// Returns the node holding the largest key.
    pub(crate) fn max_node(&self) -> Option<&Node<K, V>> {
        let mut current = self.root()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(current)
    }

    pub(crate) fn min(&self) -> Option<&K> {
        self.min_node().map(|node| &node.key)
    }

    pub(crate) fn max(&self) -> Option<&K> {
        self.max_node().map(|node| &node.key)
    }

    /// Returns the node at position `rank` in sorted order.
    pub(crate) fn select_node(&self, rank: usize) -> Option<&Node<K, V>> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root();
        let mut remaining = rank;

        while let Some(node) = current {
            let left_size = node.left_size();
            match remaining.cmp(&left_size) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => {
                    // Skip the left subtree and this node.
                    remaining -= left_size + 1;
                    current = node.right.as_deref();
                }
            }
        }

        None
    }

    /// Returns the key at position `rank` in sorted order.
    pub(crate) fn select(&self, rank: usize) -> Option<&K> {
        self.select_node(rank).map(|node| &node.key)
    }

    /// Gets a mutable element by its rank.
    pub(crate) fn select_entry_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root_mut().as_deref_mut();
        let mut remaining = rank;

        while let Some(node) = current {
            let left_size = node.left_size();
            match remaining.cmp(&left_size) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Equal => return Some((&node.key, &mut node.value)),
                Ordering::Greater => {
                    remaining -= left_size + 1;
                    current = node.right.as_deref_mut();
                }
            }
        }

        None
    }

    /// Collects every entry in ascending key order.
    pub(crate) fn entries(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut ancestors: SmallVec<[&Node<K, V>; 32]> = SmallVec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                ancestors.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = ancestors.pop() else {
                break;
            };
            entries.push((&node.key, &node.value));
            current = node.right.as_deref();
        }

        entries
    }

    /// Collects every key in ascending order.
    pub(crate) fn keys(&self) -> Vec<&K> {
        self.entries().into_iter().map(|(key, _)| key).collect()
    }

    /// Length of the longest root-to-leaf path; a lone root has height 0.
    pub(crate) fn height(&self) -> Option<usize> {
        let root = self.root()?;
        let mut pending: SmallVec<[(&Node<K, V>, usize); 32]> = smallvec![(root, 0)];
        let mut height = 0;

        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        Some(height)
    }
}

impl<K: Ord, V> RawSymbolTable<K, V> {
    /// Returns the number of keys strictly less than `key`.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root();
        let mut rank = 0;

        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => {
                    rank += node.left_size() + 1;
                    current = node.right.as_deref();
                }
                Ordering::Equal => return rank + node.left_size(),
            }
        }

        rank
    }

    /// Returns the largest key less than or equal to `key`.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root();
        let mut floor = None;

        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => {
                    // A candidate; a closer one can only be to the right.
                    floor = Some(&node.key);
                    current = node.right.as_deref();
                }
            }
        }

        floor
    }

    /// Returns the smallest key greater than or equal to `key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        // `rank(key) == len()` when every key is smaller, and `select` rejects it.
        self.select(self.rank(key))
    }

    /// Returns the number of keys in `[low, high]`.
    pub(crate) fn range_len<Q>(&self, low: &Q, high: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if high < low || self.is_empty() {
            return 0;
        }
        self.rank(high) + usize::from(self.contains(high)) - self.rank(low)
    }

    /// Returns the keys in `[low, high]` in ascending order.
    pub(crate) fn range_keys<Q>(&self, low: &Q, high: &Q) -> Vec<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if high < low {
            return Vec::new();
        }
        let start = self.rank(low);
        let end = self.rank(high) + usize::from(self.contains(high));
        (start..end).filter_map(|rank| self.select(rank)).collect()
    }
}
