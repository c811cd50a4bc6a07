use crate::raw::RawBst;

/// Returns `true` if `keys` is the pre-order traversal of a binary search tree.
///
/// The keys are inserted, in the order given, into a fresh tree whose
/// pre-order walk (node, left subtree, right subtree) is then compared
/// element by element with `keys`. Empty and single-element sequences are
/// always accepted. A sequence with a repeated key is rejected, since the
/// rebuilt tree holds each key once.
///
/// # Examples
///
/// ```
/// use bst_map::is_bst_pre_order;
///
/// assert!(is_bst_pre_order::<i32>(&[]));
/// assert!(is_bst_pre_order(&[10, 5, 1, 7, 40, 60]));
/// assert!(!is_bst_pre_order(&[10, 50, 1, 7, 40, 60]));
/// ```
///
/// # Complexity
///
/// O(n * height) to rebuild the tree, O(n) to compare.
#[must_use]
pub fn is_bst_pre_order<K: Ord>(keys: &[K]) -> bool {
    let mut tree = RawBst::with_capacity(keys.len());
    for key in keys {
        tree.insert(key, ());
    }

    tree.len() == keys.len() && tree.pre_order().into_iter().zip(keys).all(|((rebuilt, ()), key)| *rebuilt == key)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    /// Stack-based check that some BST has `keys` as its pre-order walk,
    /// without building one.
    fn admits_pre_order(keys: &[i32]) -> bool {
        let mut stack: Vec<i32> = Vec::new();
        let mut floor = None;
        for &key in keys {
            if floor.is_some_and(|floor| key < floor) {
                return false;
            }
            while stack.last().is_some_and(|&top| top < key) {
                floor = stack.pop();
            }
            stack.push(key);
        }
        true
    }

    #[test]
    fn trivial_sequences() {
        assert!(is_bst_pre_order::<i32>(&[]));
        assert!(is_bst_pre_order(&[1]));
    }

    #[test]
    fn valid_pre_order() {
        assert!(is_bst_pre_order(&[10, 5, 1, 7, 40, 60]));
        assert!(is_bst_pre_order(&[7, 3, 1, 2, 6, 4, 5, 8]));
        assert!(is_bst_pre_order(&[1, 2, 3, 4]));
        assert!(is_bst_pre_order(&[4, 3, 2, 1]));
    }

    #[test]
    fn invalid_pre_order() {
        assert!(!is_bst_pre_order(&[10, 50, 1, 7, 40, 60]));
        assert!(!is_bst_pre_order(&[2, 3, 1]));
        assert!(!is_bst_pre_order(&[5, 1, 7, 6, 2]));
    }

    #[test]
    fn repeated_key_is_rejected() {
        assert!(!is_bst_pre_order(&[3, 3]));
        assert!(!is_bst_pre_order(&[2, 1, 2]));
    }

    #[test]
    fn works_for_borrowed_strings() {
        assert!(is_bst_pre_order(&["m", "c", "a", "x"]));
        assert!(!is_bst_pre_order(&["m", "x", "a"]));
    }

    fn distinct_keys() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::btree_set(0i32..100, 0..40).prop_map(|keys| keys.into_iter().collect::<Vec<_>>()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn agrees_with_stack_check(keys in distinct_keys()) {
            prop_assert_eq!(is_bst_pre_order(&keys), admits_pre_order(&keys));
        }

        #[test]
        fn accepts_any_tree_walk(keys in distinct_keys()) {
            let mut tree = RawBst::new();
            for &key in &keys {
                tree.insert(key, ());
            }
            let walk: Vec<i32> = tree.pre_order().into_iter().map(|(&key, ())| key).collect();
            prop_assert!(is_bst_pre_order(&walk));
        }
    }
}
