use super::BstMap;
use crate::raw::RawBst;

impl<K, V> BstMap<K, V> {
    /// Creates an empty map with node storage for at least `capacity` entries.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let map: BstMap<i32, i32> = BstMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BstMap {
            raw: RawBst::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold before its node storage
    /// has to grow.
    ///
    /// Slots freed by removals are reused before the storage grows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Releases node storage that is not backing a live entry, as far as the
    /// current node layout allows.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map: BstMap<i32, i32> = (0..100).map(|i| (i, i)).collect();
    /// for i in 10..100 {
    ///     map.remove(&i);
    /// }
    /// map.shrink_to_fit();
    /// assert!(map.capacity() < 100);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
