use core::num::NonZero;

// Narrow handles under test so a full arena fits in memory.
#[cfg(test)]
type Slot = u16;
#[cfg(not(test))]
type Slot = u32;

/// Names the arena slot of one tree node.
///
/// Slot `n` is stored as `n + 1`, leaving zero free to encode an absent child:
/// a node's `left` and `right` links are each exactly one `Slot` wide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<Slot>);

impl Handle {
    /// Number of distinct slots a handle can name.
    pub(crate) const SLOTS: usize = Slot::MAX as usize;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn for_slot(slot: usize) -> Self {
        assert!(slot < Self::SLOTS, "`Handle::for_slot()` - `slot` >= `Handle::SLOTS`!");
        match NonZero::new((slot + 1) as Slot) {
            Some(stored) => Self(stored),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}
