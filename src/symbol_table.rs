use alloc::vec::Vec;

/// An ordered symbol table: a map from totally ordered keys to values that can also answer
/// questions about where a key sits in sorted order.
///
/// Keys only need [`Ord`]; equality and "less than or equal" come from the same ordering.
/// Putting an existing key replaces its value, so a table never holds duplicate keys.
///
/// The provided methods define the range and successor queries in terms of [`rank`] and
/// [`select`]. Implementations may override them with faster equivalents.
///
/// # Examples
///
/// Code can be written against the trait rather than a concrete table:
///
/// ```
/// use sized_bst::{BstMap, SymbolTable};
///
/// fn median<T: SymbolTable<u32, &'static str>>(table: &T) -> Option<&u32> {
///     table.select(table.len() / 2)
/// }
///
/// let table = BstMap::from([(7, "g"), (1, "a"), (4, "d")]);
/// assert_eq!(median(&table), Some(&4));
/// ```
///
/// [`rank`]: SymbolTable::rank
/// [`select`]: SymbolTable::select
pub trait SymbolTable<K: Ord, V> {
    /// Associates `value` with `key`, returning the value it replaced.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value associated with `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Removes `key`, returning its value. Removing an absent key does nothing.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns the number of key-value pairs.
    fn len(&self) -> usize;

    /// Releases every entry.
    fn clear(&mut self);

    /// Removes and returns the entry with the smallest key.
    fn delete_min(&mut self) -> Option<(K, V)>;

    /// Removes and returns the entry with the largest key.
    fn delete_max(&mut self) -> Option<(K, V)>;

    /// Returns the smallest key.
    fn min(&self) -> Option<&K>;

    /// Returns the largest key.
    fn max(&self) -> Option<&K>;

    /// Returns the largest key less than or equal to `key`.
    fn floor(&self, key: &K) -> Option<&K>;

    /// Returns the number of keys strictly less than `key`.
    fn rank(&self, key: &K) -> usize;

    /// Returns the key at zero-based position `rank` in sorted order, or `None` if
    /// `rank >= self.len()`.
    fn select(&self, rank: usize) -> Option<&K>;

    /// Returns `true` if `key` is present.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if the table holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the smallest key greater than or equal to `key`.
    fn ceiling(&self, key: &K) -> Option<&K> {
        self.select(self.rank(key))
    }

    /// Returns the number of keys in the closed interval `[low, high]`, or zero if
    /// `high < low`.
    fn range_len(&self, low: &K, high: &K) -> usize {
        if high < low {
            return 0;
        }
        self.rank(high) + usize::from(self.contains(high)) - self.rank(low)
    }

    /// Returns the keys in the closed interval `[low, high]` in ascending order.
    fn range_keys(&self, low: &K, high: &K) -> Vec<&K> {
        if high < low {
            return Vec::new();
        }
        let end = self.rank(high) + usize::from(self.contains(high));
        (self.rank(low)..end).filter_map(|rank| self.select(rank)).collect()
    }

    /// Returns every key in ascending order.
    fn keys(&self) -> Vec<&K> {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => self.range_keys(min, max),
            _ => Vec::new(),
        }
    }
}
