use core::borrow::Borrow;
use core::ops::Index;

use super::BstMap;
use crate::Rank;

impl<K, V> BstMap<K, V> {
    /// Returns the median key.
    ///
    /// For keys `k1 < k2 < ... < kN` this is the key at position `(N + 1) / 2`
    /// (integer division), so the lower of the two middle keys when `N` is even.
    /// Returns `None` for an empty map.
    ///
    /// # Complexity
    ///
    /// O(height), using the cached subtree sizes rather than a traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.median(), None);
    ///
    /// for key in [7, 8, 3, 1, 2, 6, 4, 5] {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.median(), Some(&4));
    /// ```
    #[must_use]
    pub fn median(&self) -> Option<&K> {
        self.raw.median()
    }

    /// Returns the key-value pair at position `rank` in sorted order.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeMap` API.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
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
    /// map.insert("a", 10);
    /// map.insert("c", 30);
    /// map.insert("b", 20);
    ///
    /// assert_eq!(map.get_by_rank(1), Some((&"b", &20)));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank)
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Returns the zero-based position of `key` in sorted order, or `None` if
    /// the key is not present.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let map = BstMap::from([(30, ()), (10, ()), (20, ())]);
    /// assert_eq!(map.rank_of(&20), Some(1));
    /// assert_eq!(map.rank_of(&25), None);
    /// ```
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }
}

impl<K, V> Index<Rank> for BstMap<K, V> {
    type Output = V;

    /// Returns a reference to the value at the given rank.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is out of bounds.
    fn index(&self, rank: Rank) -> &V {
        match self.get_by_rank(rank.0) {
            Some((_, value)) => value,
            None => panic!("`BstMap::index()` - rank {} out of bounds (len {})!", rank.0, self.len()),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn median_of_even_and_odd_counts() {
        let odd = BstMap::from([(5, ()), (1, ()), (9, ())]);
        assert_eq!(odd.median(), Some(&5));

        let even = BstMap::from([(5, ()), (1, ()), (9, ()), (7, ())]);
        assert_eq!(even.median(), Some(&5));
    }

    #[test]
    fn index_by_rank() {
        let map = BstMap::from([("b", 2), ("a", 1), ("c", 3)]);
        assert_eq!(map[Rank(0)], 1);
        assert_eq!(map[Rank(2)], 3);
    }

    #[test]
    #[should_panic(expected = "`BstMap::index()` - rank 3 out of bounds (len 3)!")]
    fn index_by_rank_out_of_bounds() {
        let map = BstMap::from([("b", 2), ("a", 1), ("c", 3)]);
        let _ = map[Rank(3)];
    }
}
