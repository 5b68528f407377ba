/// A zero-based rank into the sorted order of a [`BstMap`](crate::BstMap).
///
/// Indexing by `Rank` panics when the rank is out of bounds; use
/// [`select_entry`](crate::BstMap::select_entry) for a checked lookup.
///
/// # Examples
///
/// ```
/// use sized_bst::{BstMap, Rank};
///
/// let mut map = BstMap::new();
/// map.put("b", 20);
/// map.put("a", 10);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
