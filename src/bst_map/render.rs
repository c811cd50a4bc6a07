use core::fmt::{self, Display};

use alloc::string::{String, ToString};

use super::BstMap;
use crate::raw::RawBst;

/// Displays the keys of a [`BstMap`] as a fully parenthesized in-order walk.
///
/// Created by [`BstMap::keys_in_order`].
pub struct InOrderKeys<'a, K, V> {
    raw: &'a RawBst<K, V>,
}

/// Displays the keys of a [`BstMap`] as an indented ASCII tree, one node per
/// line.
///
/// Created by [`BstMap::pretty_keys`].
pub struct PrettyKeys<'a, K, V> {
    raw: &'a RawBst<K, V>,
}

impl<K: Display, V> Display for InOrderKeys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.write_in_order(f)
    }
}

impl<K: Display, V> Display for PrettyKeys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.write_pretty(f)
    }
}

impl<K: Display, V> BstMap<K, V> {
    /// Returns a [`Display`] adapter for [`print_keys_in_order`](BstMap::print_keys_in_order)
    /// that writes straight into a formatter.
    #[must_use]
    pub fn keys_in_order(&self) -> InOrderKeys<'_, K, V> {
        InOrderKeys { raw: &self.raw }
    }

    /// Returns a [`Display`] adapter for [`pretty_print_keys`](BstMap::pretty_print_keys).
    #[must_use]
    pub fn pretty_keys(&self) -> PrettyKeys<'_, K, V> {
        PrettyKeys { raw: &self.raw }
    }

    /// Prints all keys in order, with every subtree inside parentheses.
    ///
    /// Each node becomes `(left)key(right)`, where an absent subtree is empty,
    /// and the whole tree is wrapped in one more pair of parentheses. An empty
    /// map prints as `()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.print_keys_in_order(), "()");
    ///
    /// map.insert('A', ());
    /// assert_eq!(map.print_keys_in_order(), "(()A())");
    ///
    /// //   B
    /// //  / \
    /// // A   C
    /// //      \
    /// //       D
    /// map.clear();
    /// for key in ['B', 'A', 'C', 'D'] {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.print_keys_in_order(), "((()A())B(()C(()D())))");
    /// ```
    #[must_use]
    pub fn print_keys_in_order(&self) -> String {
        self.keys_in_order().to_string()
    }

    /// Pretty-prints the tree, one node per line.
    ///
    /// A node prints as `prefix-key` and an absent child as `prefix-null`.
    /// The left child is indented with `" |"` and the right child with two
    /// spaces, so a bar runs down from each node to its right child. An empty
    /// map prints as `"-null\n"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::BstMap;
    ///
    /// let map = BstMap::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(
    ///     map.pretty_print_keys(),
    ///     "-2\n |-1\n | |-null\n |  -null\n  -3\n   |-null\n    -null\n",
    /// );
    /// ```
    #[must_use]
    pub fn pretty_print_keys(&self) -> String {
        self.pretty_keys().to_string()
    }
}
