use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Index;

use alloc::vec::Vec;

use crate::check::CheckError;
use crate::raw::RawSymbolTable;
use crate::symbol_table::SymbolTable;

mod order_statistic;

/// An ordered symbol table based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], the map keeps its entries in symmetric order: every
/// key in a node's left subtree is smaller than the node's key and every key in its right
/// subtree is larger. Keys must implement [`Ord`]; the map never compares them any other way.
///
/// Each node also caches the size of its subtree, which lets the map answer order-statistic
/// queries such as [`rank`], [`select`], [`floor`], [`ceiling`] and [`range_len`] by walking a
/// single root-to-leaf path.
///
/// The tree is never rebalanced. Every operation runs in time proportional to the height of
/// the tree, which is logarithmic for keys inserted in random order but linear when keys
/// arrive sorted.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `BstMap` that observed the logic error and not result in undefined behavior. [`check`] reports
/// the resulting damage.
///
/// # Examples
///
/// ```
/// use sized_bst::BstMap;
///
/// let mut heights = BstMap::new();
/// heights.put("Everest", 8849);
/// heights.put("K2", 8611);
/// heights.put("Kangchenjunga", 8586);
/// heights.put("Lhotse", 8516);
///
/// assert_eq!(heights.get("K2"), Some(&8611));
/// assert_eq!(heights.len(), 4);
///
/// // Keys are kept in sorted order.
/// assert_eq!(heights.min(), Some(&"Everest"));
/// assert_eq!(heights.select(1), Some(&"K2"));
/// assert_eq!(heights.rank("Kangchenjunga"), 2);
///
/// // Closed-interval range queries.
/// assert_eq!(heights.range_keys("J", "L"), [&"K2", &"Kangchenjunga"]);
/// assert_eq!(heights.range_len("A", "Z"), 4);
///
/// heights.remove("Lhotse");
/// assert_eq!(heights.max(), Some(&"Kangchenjunga"));
/// ```
///
/// A `BstMap` with a known list of items can be initialized from an array:
///
/// ```
/// use sized_bst::BstMap;
///
/// let solar_distance = BstMap::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(solar_distance.floor("N"), Some(&"Mercury"));
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
/// [`rank`]: BstMap::rank
/// [`select`]: BstMap::select
/// [`floor`]: BstMap::floor
/// [`ceiling`]: BstMap::ceiling
/// [`range_len`]: BstMap::range_len
/// [`check`]: BstMap::check
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct BstMap<K, V> {
    raw: RawSymbolTable<K, V>,
}

impl<K, V> BstMap<K, V> {
    /// Makes a new, empty `BstMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.put(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> BstMap<K, V> {
        BstMap {
            raw: RawSymbolTable::new(),
        }
    }

    /// Clears the map, releasing every node.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut a = BstMap::new();
    /// a.put(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of elements in the map.
    ///
    /// This is the root's cached subtree size.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut a = BstMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.put(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut a = BstMap::new();
    /// assert!(a.is_empty());
    /// a.put(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the height of the tree: the number of edges on its longest root-to-leaf path.
    ///
    /// A single-entry map has height 0 and an empty map has no height. Useful for seeing how
    /// far insertion order has pushed the tree away from balance.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.height(), None);
    ///
    /// // Sorted insertion builds a path.
    /// for i in 0..4 {
    ///     map.put(i, ());
    /// }
    /// assert_eq!(map.height(), Some(3));
    ///
    /// let balanced = BstMap::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(balanced.height(), Some(1));
    /// ```
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.raw.height()
    }

    /// Returns every key in ascending order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// assert_eq!(map.keys(), [&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> Vec<&K> {
        self.raw.keys()
    }

    /// Returns every key-value pair in ascending key order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.entries(), [(&1, &"a"), (&2, &"b")]);
    /// ```
    #[must_use]
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.raw.entries()
    }

    /// Removes and returns the entry with the smallest key, or `None` if the map is empty.
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
    /// let mut map = BstMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.delete_min(), Some((1, "a")));
    /// assert_eq!(map.delete_min(), Some((2, "b")));
    /// assert_eq!(map.delete_min(), None);
    /// ```
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        self.raw.delete_min()
    }

    /// Removes and returns the entry with the largest key, or `None` if the map is empty.
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
    /// let mut map = BstMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.delete_max(), Some((2, "b")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn delete_max(&mut self) -> Option<(K, V)> {
        self.raw.delete_max()
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
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
    /// map.put(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the stored key and its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let map = BstMap::from([(String::from("a"), 1)]);
    /// assert_eq!(map.get_key_value("a"), Some((&String::from("a"), &1)));
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.put(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.put(1, "a");
    /// assert!(map.contains(&1));
    /// assert!(!map.contains(&2));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(key)
    }

    /// Associates `value` with `key`.
    ///
    /// If the map did not have this key present, a new leaf is attached and `None` is
    /// returned. If the key was present, its value is replaced in place and the old value is
    /// returned; the shape of the tree does not change.
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
    /// assert_eq!(map.put(37, "a"), None);
    /// assert_eq!(map.put(37, "b"), Some("a"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map[&37], "b");
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.raw.put(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map. Removing an absent key leaves the map untouched.
    ///
    /// A node with two children is replaced by its in-order predecessor (Hibbard deletion).
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
    /// map.put(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Verifies the tree's structural invariants: symmetric order, subtree sizes, and
    /// agreement between [`rank`](Self::rank) and [`select`](Self::select).
    ///
    /// Every failed invariant is listed in the error and logged as a `tracing` warning. A
    /// failure indicates a bug (or a key whose ordering changed while in the map); it is not
    /// something callers are expected to recover from.
    ///
    /// # Complexity
    ///
    /// O(n · h) where h is the height of the tree.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] naming each [`Invariant`](crate::Invariant) that does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::BstMap;
    ///
    /// let mut map: BstMap<_, _> = (0..100).map(|i| ((i * 37) % 101, i)).collect();
    /// map.remove(&37);
    /// assert!(map.check().is_ok());
    /// ```
    pub fn check(&self) -> Result<(), CheckError> {
        self.raw.check()
    }

    /// Returns `true` if every key is greater than all keys in its left subtree and less than
    /// all keys in its right subtree.
    #[must_use]
    pub fn is_symmetric_ordered(&self) -> bool {
        self.raw.is_symmetric_ordered()
    }

    /// Returns `true` if every node's cached subtree size matches its children.
    #[must_use]
    pub fn is_size_consistent(&self) -> bool {
        self.raw.is_size_consistent()
    }

    /// Returns `true` if `rank(select(i)) == i` for every rank and `select(rank(k)) == k` for
    /// every key.
    #[must_use]
    pub fn is_rank_consistent(&self) -> bool {
        self.raw.is_rank_consistent()
    }
}

impl<K: Ord, V> SymbolTable<K, V> for BstMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.raw.put(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.raw.get(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.raw.remove(key)
    }

    fn len(&self) -> usize {
        self.raw.len()
    }

    fn clear(&mut self) {
        self.raw.clear();
    }

    fn delete_min(&mut self) -> Option<(K, V)> {
        self.raw.delete_min()
    }

    fn delete_max(&mut self) -> Option<(K, V)> {
        self.raw.delete_max()
    }

    fn min(&self) -> Option<&K> {
        self.raw.min()
    }

    fn max(&self) -> Option<&K> {
        self.raw.max()
    }

    fn floor(&self, key: &K) -> Option<&K> {
        self.raw.floor(key)
    }

    fn rank(&self, key: &K) -> usize {
        self.raw.rank(key)
    }

    fn select(&self, rank: usize) -> Option<&K> {
        self.raw.select(rank)
    }

    fn contains(&self, key: &K) -> bool {
        self.raw.contains(key)
    }

    fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn ceiling(&self, key: &K) -> Option<&K> {
        self.raw.ceiling(key)
    }

    fn range_len(&self, low: &K, high: &K) -> usize {
        self.raw.range_len(low, high)
    }

    fn range_keys(&self, low: &K, high: &K) -> Vec<&K> {
        self.raw.range_keys(low, high)
    }

    fn keys(&self) -> Vec<&K> {
        self.raw.keys()
    }
}

impl<K: Clone + Ord, V: Clone> Clone for BstMap<K, V> {
    fn clone(&self) -> Self {
        BstMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for BstMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.entries() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BstMap<K, V> {
    /// Maps are equal when they hold the same entries, whatever their shapes.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries() == other.entries()
    }
}

impl<K: Eq, V: Eq> Eq for BstMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BstMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        BstMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BstMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = BstMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for BstMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, Q, V> Index<&Q> for BstMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `BstMap`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for BstMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}
