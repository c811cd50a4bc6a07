/// A zero-based rank into the sorted order of a [`BstMap`](crate::BstMap).
///
/// Indexing a map by `Rank` walks the cached subtree sizes instead of the
/// keys, so `map[Rank(i)]` costs O(height).
///
/// # Examples
///
/// ```
/// use bst_map::{BstMap, Rank};
///
/// let mut map = BstMap::new();
/// map.insert("b", 20);
/// map.insert("a", 10);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
