use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes.
///
/// Vacated slots are kept on a free list and handed out again before the slot
/// vector grows, so a handle may be reused once the node it named is gone.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub(crate) fn insert(&mut self, element: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.slot()] = Some(element);
            return handle;
        }

        assert!(
            self.slots.len() < Handle::SLOTS,
            "`Arena::insert()` - arena is full ({} slots)!",
            Handle::SLOTS
        );
        let handle = Handle::for_slot(self.slots.len());
        self.slots.push(Some(element));
        handle
    }

    #[inline]
    #[track_caller]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.slot()] {
            Some(element) => element,
            None => panic!("`Arena::get()` - slot {} is vacant!", handle.slot()),
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.slot()] {
            Some(element) => element,
            None => panic!("`Arena::get_mut()` - slot {} is vacant!", handle.slot()),
        }
    }

    /// Vacates the slot and returns its element.
    #[track_caller]
    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        let Some(element) = self.slots[handle.slot()].take() else {
            panic!("`Arena::remove()` - slot {} is vacant!", handle.slot());
        };
        self.vacant.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    /// Drops trailing vacant slots and releases unused memory.
    pub(crate) fn shrink_to_fit(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        let len = self.slots.len();
        self.vacant.retain(|handle| handle.slot() < len);
        self.slots.shrink_to_fit();
        self.vacant.shrink_to_fit();
    }
}
