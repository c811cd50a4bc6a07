use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::{self, Display, Write};
use core::mem;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use super::size::Size;

/// The unbalanced binary search tree backing `BstMap`.
#[derive(Clone)]
pub(crate) struct RawBst<K, V> {
    /// Arena owning every node; a handle is linked from exactly one place.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

/// Ancestors visited on the way down, root first.
type Path = SmallVec<[Handle; 32]>;

/// The slot a node hangs from: the root slot, or one child link of a parent.
type Link = Option<(Handle, Side)>;

impl<K, V> RawBst<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Returns the number of key-value pairs, read from the root's size.
    pub(crate) fn len(&self) -> usize {
        let len = self.size_of(self.root).to_usize();
        debug_assert_eq!(len, self.nodes.len(), "root size disagrees with the live node count");
        len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    #[inline]
    fn size_of(&self, link: Option<Handle>) -> Size {
        link.map_or(Size::ZERO, |handle| self.nodes.get(handle).size)
    }

    fn set_link(&mut self, link: Link, child: Option<Handle>) {
        match link {
            None => self.root = child,
            Some((parent, side)) => *self.nodes.get_mut(parent).child_mut(side) = child,
        }
    }

    fn increment_sizes_along_path(&mut self, path: &Path) {
        for &handle in path {
            self.nodes.get_mut(handle).size.increment();
        }
    }

    fn decrement_sizes_along_path(&mut self, path: &Path) {
        for &handle in path {
            self.nodes.get_mut(handle).size.decrement();
        }
    }

    /// Number of edges from the root to the deepest leaf; -1 when empty.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn height(&self) -> isize {
        self.levels(self.root) as isize - 1
    }

    /// Number of levels in the subtree: 0 for an absent child.
    fn levels(&self, link: Option<Handle>) -> usize {
        let mut deepest = 0;
        let mut stack: SmallVec<[(Handle, usize); 32]> = link.map(|handle| (handle, 1)).into_iter().collect();

        while let Some((handle, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = self.nodes.get(handle);
            stack.extend([node.left, node.right].into_iter().flatten().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Gets an element by its rank (0-indexed position in sorted order).
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root?;
        let mut remaining = rank;

        // Sizes guarantee the walk ends on a node before running out of children.
        loop {
            let node = self.nodes.get(current);
            let left = self.size_of(node.left).to_usize();
            match remaining.cmp(&left) {
                Ordering::Less => current = node.left?,
                Ordering::Equal => return Some((&node.key, &node.value)),
                Ordering::Greater => {
                    remaining -= left + 1;
                    current = node.right?;
                }
            }
        }
    }

    /// Returns the key at 1-indexed position `(len + 1) / 2` in sorted order.
    pub(crate) fn median(&self) -> Option<&K> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.get_by_rank((len - 1) / 2).map(|(key, _)| key)
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        self.extreme(Side::Left)
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        self.extreme(Side::Right)
    }

    /// Follows `side` links from the root as far as they go.
    fn extreme(&self, side: Side) -> Option<(&K, &V)> {
        let mut node = self.nodes.get(self.root?);
        while let Some(child) = node.child(side) {
            node = self.nodes.get(child);
        }
        Some((&node.key, &node.value))
    }

    /// Entries in pre-order: node, then left subtree, then right subtree.
    pub(crate) fn pre_order(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut stack: Path = self.root.into_iter().collect();

        while let Some(handle) = stack.pop() {
            let node = self.nodes.get(handle);
            entries.push((&node.key, &node.value));
            stack.extend(node.right);
            stack.extend(node.left);
        }
        entries
    }

    /// Entries in key order.
    pub(crate) fn in_order(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut stack = Path::new();
        let mut current = self.root;

        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes.get(handle).left;
            }
            let Some(handle) = stack.pop() else {
                return entries;
            };
            let node = self.nodes.get(handle);
            entries.push((&node.key, &node.value));
            current = node.right;
        }
    }
}

/// Pending work for the in-order renderer.
enum InOrderStep {
    Subtree(Option<Handle>),
    Key(Handle),
    Close,
}

/// A pretty-printer line still to be written: the link to print, and the
/// prefix it inherits (`depth` bytes of the parent's prefix plus `branch`).
struct PrettyLine {
    link: Option<Handle>,
    depth: usize,
    branch: &'static str,
}

impl<K: Display, V> RawBst<K, V> {
    /// Writes `(` + left + `)` + key + `(` + right + `)` for every node,
    /// wrapped in one outer pair of parentheses.
    pub(crate) fn write_in_order<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut steps: SmallVec<[InOrderStep; 32]> = SmallVec::new();
        steps.push(InOrderStep::Subtree(self.root));

        out.write_char('(')?;
        while let Some(step) = steps.pop() {
            match step {
                InOrderStep::Subtree(None) => {}
                InOrderStep::Subtree(Some(handle)) => {
                    let node = self.nodes.get(handle);
                    out.write_char('(')?;
                    steps.extend([
                        InOrderStep::Close,
                        InOrderStep::Subtree(node.right),
                        InOrderStep::Key(handle),
                        InOrderStep::Subtree(node.left),
                    ]);
                }
                InOrderStep::Key(handle) => write!(out, "){}(", self.nodes.get(handle).key)?,
                InOrderStep::Close => out.write_char(')')?,
            }
        }
        out.write_char(')')
    }

    /// Writes one `-key` line per node and `-null` per absent child, indented
    /// by ` |` under a left branch and two spaces under a right branch.
    pub(crate) fn write_pretty<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut prefix = String::new();
        let mut lines: SmallVec<[PrettyLine; 32]> = SmallVec::new();
        lines.push(PrettyLine { link: self.root, depth: 0, branch: "" });

        while let Some(PrettyLine { link, depth, branch }) = lines.pop() {
            prefix.truncate(depth);
            prefix.push_str(branch);
            out.write_str(&prefix)?;

            let Some(handle) = link else {
                out.write_str("-null\n")?;
                continue;
            };
            let node = self.nodes.get(handle);
            writeln!(out, "-{}", node.key)?;

            let depth = prefix.len();
            lines.push(PrettyLine { link: node.right, depth, branch: "  " });
            lines.push(PrettyLine { link: node.left, depth, branch: " |" });
        }
        Ok(())
    }
}

impl<K: Ord, V> RawBst<K, V> {
    /// Searches the tree for a key, returning the node's handle if found.
    fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| &self.nodes.get(handle).value)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| {
            let node = self.nodes.get(handle);
            (&node.key, &node.value)
        })
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Returns the rank (0-indexed position) of a key.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut rank = 0;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left,
                Ordering::Equal => return Some(rank + self.size_of(node.left).to_usize()),
                Ordering::Greater => {
                    rank += self.size_of(node.left).to_usize() + 1;
                    current = node.right;
                }
            }
        }
        None
    }

    /// Inserts a key-value pair, returning the old value if the key was present.
    ///
    /// A present key keeps its node and the tree shape; an absent key gets a new
    /// leaf and every ancestor's size grows by one.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut path = Path::new();
        let mut link: Link = None;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get_mut(handle);
            let side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            };
            path.push(handle);
            link = Some((handle, side));
            current = node.child(side);
        }

        let leaf = self.nodes.insert(Node::leaf(key, value));
        self.set_link(link, Some(leaf));
        self.increment_sizes_along_path(&path);
        None
    }

    /// Removes a key, returning the stored key and value if it was present.
    ///
    /// A node with two children is not unlinked itself: its in-order
    /// predecessor is unlinked first and then moved into it.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path = Path::new();
        let mut link: Link = None;
        let mut current = self.root;

        let target = loop {
            let handle = current?;
            let node = self.nodes.get(handle);
            let side = match key.cmp(node.key.borrow()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break handle,
            };
            path.push(handle);
            link = Some((handle, side));
            current = node.child(side);
        };

        let node = self.nodes.get(target);
        let (Some(left), Some(_)) = (node.left, node.right) else {
            // Zero or one child: splice the child (if any) into the target's slot.
            let child = node.left.or(node.right);
            self.set_link(link, child);
            self.decrement_sizes_along_path(&path);
            let removed = self.nodes.remove(target);
            return Some((removed.key, removed.value));
        };

        // The predecessor is the rightmost node of the left subtree.
        path.push(target);
        let mut link = (target, Side::Left);
        let mut predecessor = left;
        while let Some(right) = self.nodes.get(predecessor).right {
            path.push(predecessor);
            link = (predecessor, Side::Right);
            predecessor = right;
        }

        let orphan = self.nodes.get(predecessor).left;
        self.set_link(Some(link), orphan);
        self.decrement_sizes_along_path(&path);
        let predecessor = self.nodes.remove(predecessor);

        let node = self.nodes.get_mut(target);
        let key = mem::replace(&mut node.key, predecessor.key);
        let value = mem::replace(&mut node.value, predecessor.value);
        Some((key, value))
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }
}
