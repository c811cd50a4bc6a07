use super::handle::Handle;

/// Number of nodes in a subtree, including its root.
///
/// Bounded by the number of addressable arena slots, so it fits the same
/// width as a [`Handle`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Size(u32);

impl Size {
    pub(crate) const MAX: usize = Handle::SLOTS;
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const ONE: Self = Self(1);

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        Self(size as u32)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn increment(&mut self) {
        *self = Self::from_usize(self.to_usize() + 1);
    }

    #[inline]
    pub(crate) fn decrement(&mut self) {
        assert!(self.0 > 0, "`Size::decrement()` - size is already zero!");
        self.0 -= 1;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::const_assert;

    const_assert!(Size::MAX <= u32::MAX as usize);

    #[test]
    #[should_panic(expected = "`Size::from_usize()` - `size` > `Size::MAX`!")]
    fn size_past_max_panics() {
        let _ = Size::from_usize(Size::MAX + 1);
    }

    #[test]
    #[should_panic(expected = "`Size::decrement()` - size is already zero!")]
    fn decrement_below_zero_panics() {
        let mut size = Size::ZERO;
        size.decrement();
    }

    #[test]
    fn constants() {
        assert_eq!(Size::ZERO.to_usize(), 0);
        assert_eq!(Size::ONE.to_usize(), 1);
        assert_eq!(Size::from_usize(Size::MAX).to_usize(), Size::MAX);
    }

    proptest! {
        #[test]
        fn increment_then_decrement_is_identity(start in 0..Size::MAX) {
            let mut size = Size::from_usize(start);
            size.increment();
            prop_assert_eq!(size.to_usize(), start + 1);
            size.decrement();
            prop_assert_eq!(size.to_usize(), start);
        }
    }
}
