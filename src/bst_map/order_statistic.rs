use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use alloc::vec::Vec;

use super::BstMap;
use crate::Rank;

impl<K, V> BstMap<K, V> {
    /// Returns the smallest key in the map, or `None` if it is empty.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.min(), None);
    /// map.put(2, "b");
    /// map.put(1, "a");
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        self.raw.min()
    }

    /// Returns the largest key in the map, or `None` if it is empty.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.max(), Some(&2));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&K> {
        self.raw.max()
    }

    /// Returns the first key-value pair in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.min_node().map(|node| (&node.key, &node.value))
    }

    /// Returns the last key-value pair in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.last_key_value(), Some((&2, &"b")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.max_node().map(|node| (&node.key, &node.value))
    }

    /// Returns the key at position `rank` in sorted order.
    ///
    /// The rank is zero-based, so `select(0)` is the minimum and `select(len() - 1)` the
    /// maximum. Returns `None` if `rank >= len()`.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.select(0), Some(&10));
    /// assert_eq!(map.select(2), Some(&30));
    /// assert_eq!(map.select(3), None);
    /// ```
    #[must_use]
    pub fn select(&self, rank: usize) -> Option<&K> {
        self.raw.select(rank)
    }

    /// Returns the key-value pair at position `rank` in sorted order, or `None` if `rank` is
    /// out of bounds.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([("a", 10), ("c", 30), ("b", 20)]);
    /// assert_eq!(map.select_entry(1), Some((&"b", &20)));
    /// assert!(map.select_entry(3).is_none());
    /// ```
    #[must_use]
    pub fn select_entry(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.select_node(rank).map(|node| (&node.key, &node.value))
    }

    /// Returns the key and a mutable reference to the value at position `rank` in sorted
    /// order.
    ///
    /// The key is returned as a shared reference because mutating it would break symmetric
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut map = BstMap::from([(10, "a"), (5, "b")]);
    /// if let Some((key, value)) = map.select_entry_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn select_entry_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.select_entry_mut(rank)
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Returns the number of keys in the map strictly less than `key`.
    ///
    /// `key` does not have to be present. When it is, its rank is its zero-based position in
    /// sorted order, and `select(rank(key))` returns it.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.rank(&10), 0);
    /// assert_eq!(map.rank(&15), 1);
    /// assert_eq!(map.rank(&35), 3);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the largest key less than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.floor(&25), Some(&20));
    /// assert_eq!(map.floor(&20), Some(&20));
    /// assert_eq!(map.floor(&5), None);
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key)
    }

    /// Returns the smallest key greater than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.ceiling(&25), Some(&30));
    /// assert_eq!(map.ceiling(&35), None);
    /// ```
    #[must_use]
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key)
    }

    /// Returns the number of keys in the closed interval `[low, high]`.
    ///
    /// Returns zero when `high < low`.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(10, ()), (20, ()), (30, ()), (40, ())]);
    /// assert_eq!(map.range_len(&15, &35), 2);
    /// assert_eq!(map.range_len(&10, &40), 4);
    /// assert_eq!(map.range_len(&25, &24), 0);
    /// ```
    #[must_use]
    pub fn range_len<Q>(&self, low: &Q, high: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.range_len(low, high)
    }

    /// Returns the keys in the closed interval `[low, high]` in ascending order.
    ///
    /// # Complexity
    ///
    /// O(m · h) for m keys in the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(10, ()), (20, ()), (30, ()), (40, ())]);
    /// assert_eq!(map.range_keys(&15, &35), [&20, &30]);
    /// assert!(map.range_keys(&35, &15).is_empty());
    /// ```
    #[must_use]
    pub fn range_keys<Q>(&self, low: &Q, high: &Q) -> Vec<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.range_keys(low, high)
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use sized_bst::{BstMap, Rank};
///
/// let map = BstMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map[Rank(0)], 1);
/// ```
impl<K, V> Index<Rank> for BstMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select_entry(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use sized_bst::{BstMap, Rank};
///
/// let mut map = BstMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for BstMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.select_entry_mut(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}
