use super::handle::Handle;
use super::size::Size;

/// A single key/value pair and the links to its two subtrees.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    // Nodes in the subtree rooted here, including this one.
    pub(crate) size: Size,
}

/// Which child link of a parent a node hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<K, V> Node<K, V> {
    /// Creates a childless node.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            size: Size::ONE,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<Handle> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_no_children() {
        let node = Node::leaf(1, "one");
        assert_eq!(node.size, Size::ONE);
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.child(Side::Right), None);
    }

    #[test]
    fn child_mut_links_the_requested_side() {
        let mut node = Node::leaf(2, ());
        *node.child_mut(Side::Right) = Some(Handle::for_slot(7));
        assert_eq!(node.right, Some(Handle::for_slot(7)));
        assert_eq!(node.child(Side::Left), None);
    }
}
