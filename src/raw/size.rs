use core::num::NonZero;

/// Number of nodes in a subtree, including its root.
///
/// A node always counts itself, so the size of a present subtree is never zero. This lets
/// `Option<Size>` keep the same layout as `Size`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(NonZero<usize>);

impl Size {
    pub(crate) const ONE: Self = Self(NonZero::<usize>::MIN);

    #[cfg(test)]
    pub(crate) const fn from_usize(size: usize) -> Self {
        match NonZero::new(size) {
            Some(size) => Self(size),
            None => panic!("`Size::from_usize()` - `size` == 0!"),
        }
    }

    /// The size of a node whose children hold `left` and `right` nodes.
    #[inline]
    pub(crate) const fn of_children(left: usize, right: usize) -> Self {
        Self(Self::ONE.0.saturating_add(left).saturating_add(right))
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.get()
    }
}
