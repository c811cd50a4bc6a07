use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Index;

use alloc::vec::Vec;

use crate::raw::RawBst;

mod capacity;
mod order_statistic;
mod render;
#[cfg(feature = "serde")]
mod serde_support;

pub use crate::Rank;
pub use render::{InOrderKeys, PrettyKeys};

/// An ordered map based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], the map keeps its entries in key
/// order. Keys must implement [`Ord`] so that any two of them can be compared.
///
/// Unlike `BTreeMap`, the tree is never rebalanced: its shape is decided
/// entirely by the order in which keys were inserted and removed. Inserting
/// keys in sorted order therefore produces a chain whose height equals
/// `len() - 1`, and every operation below that is O(height) becomes O(n).
///
/// Each node caches the number of nodes in its subtree, so the median and
/// rank queries in [`get_by_rank`](BstMap::get_by_rank) and
/// [`rank_of`](BstMap::rank_of) follow a single root-to-node path.
///
/// It is a logic error for a key to be modified in such a way that the key's
/// ordering relative to any other key changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `BstMap` that observed it.
///
/// # Examples
///
/// ```
/// use bst_map::BstMap;
///
/// let mut tree = BstMap::new();
/// tree.insert(7, "seven");
/// tree.insert(3, "three");
/// tree.insert(8, "eight");
///
/// assert_eq!(tree.get(&3), Some(&"three"));
/// assert_eq!(tree.height(), 1);
///
/// // Removing a missing key is a no-op.
/// assert_eq!(tree.remove(&9), None);
/// assert_eq!(tree.remove(&7), Some("seven"));
/// assert_eq!(tree.print_keys_in_order(), "(()3(()8()))");
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct BstMap<K, V> {
    raw: RawBst<K, V>,
}

impl<K, V> BstMap<K, V> {
    /// Makes a new, empty `BstMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> BstMap<K, V> {
        BstMap { raw: RawBst::new() }
    }

    /// Clears the map, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut a = BstMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of elements in the map.
    ///
    /// # Complexity
    ///
    /// O(1), read from the root's subtree size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut a = BstMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of edges on the longest path from the root to a leaf.
    ///
    /// An empty map has height `-1` and a single entry has height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.height(), -1);
    ///
    /// map.insert(1, ());
    /// assert_eq!(map.height(), 0);
    ///
    /// // Sorted insertion builds a chain.
    /// map.insert(2, ());
    /// map.insert(3, ());
    /// assert_eq!(map.height(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> isize {
        self.raw.height()
    }

    /// Returns the first key-value pair in the map, the one with the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let map = BstMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the last key-value pair in the map, the one with the maximum key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Returns the keys in pre-order: each node before its left subtree, and
    /// the left subtree before the right one.
    ///
    /// Inserting the returned keys, in order, into an empty map reproduces this
    /// map's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let map = BstMap::from([(2, ()), (3, ()), (1, ())]);
    /// assert_eq!(map.pre_order_keys(), [&2, &1, &3]);
    /// ```
    #[must_use]
    pub fn pre_order_keys(&self) -> Vec<&K> {
        self.raw.pre_order().into_iter().map(|(key, _)| key).collect()
    }

    /// Returns the keys in ascending order.
    #[must_use]
    pub fn in_order_keys(&self) -> Vec<&K> {
        self.raw.in_order().into_iter().map(|(key, _)| key).collect()
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
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
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

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
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

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, a new leaf is attached and
    /// `None` is returned.
    ///
    /// If the map did have this key present, the value is replaced in place and
    /// the old value is returned. The tree shape and the stored key are left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Sets the value for `key`, treating a missing value as a deletion.
    ///
    /// `put(key, Some(value))` behaves like [`insert`](BstMap::insert) and
    /// `put(key, None)` like [`remove`](BstMap::remove). Either way the
    /// previous value, if any, is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.put(7, Some(7));
    /// map.put(7, Some(17));
    /// assert_eq!(map[&7], 17);
    ///
    /// assert_eq!(map.put(7, None), Some(17));
    /// assert_eq!(map.print_keys_in_order(), "()");
    /// ```
    pub fn put(&mut self, key: K, value: Option<V>) -> Option<V> {
        match value {
            Some(value) => self.raw.insert(key, value),
            None => self.raw.remove(&key),
        }
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// A node with two children is not unlinked: its in-order predecessor (the
    /// largest key of its left subtree) is unlinked instead and moved into its
    /// place.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::from([(2, "b"), (1, "a"), (3, "c")]);
    /// assert_eq!(map.remove(&2), Some("b"));
    /// assert_eq!(map.remove(&2), None);
    ///
    /// // 1 took 2's place at the root.
    /// assert_eq!(map.pre_order_keys(), [&1, &3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
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
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// map.insert(1, "a");
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
}

impl<K: Clone, V: Clone> Clone for BstMap<K, V> {
    fn clone(&self) -> Self {
        BstMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for BstMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.raw.in_order() {
            k.hash(state);
            v.hash(state);
        }
    }
}

/// Maps are equal when they hold the same entries, whatever their shapes.
impl<K: PartialEq, V: PartialEq> PartialEq for BstMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.raw.in_order() == other.raw.in_order()
    }
}

impl<K: Eq, V: Eq> Eq for BstMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BstMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.raw.in_order()).finish()
    }
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        BstMap::new()
    }
}

/// Inserts the pairs in iteration order, which decides the tree shape.
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
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for BstMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
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

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_shape() {
        let chain = BstMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
        let balanced = BstMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);

        assert_ne!(chain.height(), balanced.height());
        assert_eq!(chain, balanced);
        assert_eq!(hash_of(&chain), hash_of(&balanced));
        assert_ne!(chain, BstMap::from([(1, 'a'), (2, 'b')]));
        assert_ne!(chain, BstMap::from([(1, 'a'), (2, 'b'), (3, 'z')]));
    }

    #[test]
    fn debug_lists_entries_in_key_order() {
        let map = BstMap::from([(2, "b"), (3, "c"), (1, "a")]);
        assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b", 3: "c"}"#);
        assert_eq!(format!("{:?}", BstMap::<i32, i32>::new()), "{}");
    }

    #[test]
    fn put_none_deletes() {
        let mut map = BstMap::new();
        map.put(String::from("k"), Some(1));
        assert_eq!(map.put(String::from("k"), None), Some(1));
        assert_eq!(map.put(String::from("k"), None), None);
        assert!(map.is_empty());
    }

    #[test]
    fn extend_from_references() {
        let source = BstMap::from([(1, 10), (2, 20)]);
        let mut copy = BstMap::new();
        copy.extend(source.raw.pre_order());
        assert_eq!(copy, source);
        assert_eq!(copy.pre_order_keys(), source.pre_order_keys());
    }

    #[test]
    fn borrowed_lookups() {
        let mut map: BstMap<String, usize> = BstMap::new();
        map.insert(String::from("apple"), 5);
        assert_eq!(map.get("apple"), Some(&5));
        assert!(map.contains_key("apple"));
        assert_eq!(map["apple"], 5);
        assert_eq!(map.remove("apple"), Some(5));
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn index_missing_key_panics() {
        let map: BstMap<i32, i32> = BstMap::new();
        let _ = map[&1];
    }

    #[test]
    fn clone_is_independent() {
        let original = BstMap::from([(1, 1), (2, 2)]);
        let mut copy = original.clone();
        copy.insert(3, 3);
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.pre_order_keys(), [&1, &2, &3]);
    }
}
