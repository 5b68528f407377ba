use alloc::boxed::Box;

use super::size::Size;

/// An owning edge to a subtree. `None` is an empty subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    // The number of nodes in the subtree rooted at this node.
    pub(crate) size: Size,
}

impl<K, V> Node<K, V> {
    /// Allocates a childless node.
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            size: Size::ONE,
        })
    }

    /// Recomputes this node's size from its children.
    #[inline]
    pub(crate) fn update_size(&mut self) {
        self.size = Size::of_children(size(&self.left), size(&self.right));
    }

    #[inline]
    pub(crate) fn left_size(&self) -> usize {
        size(&self.left)
    }
}

/// Number of nodes below `link`, zero for an empty subtree.
#[inline]
pub(crate) fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size.to_usize())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_unit_size() {
        let node = Node::leaf(1, "a");
        assert!(node.left.is_none() && node.right.is_none());
        assert_eq!(node.size, Size::ONE);
        assert_eq!(node.left_size(), 0);
    }

    #[test]
    fn update_size_counts_both_children() {
        let mut root = Node::leaf(2, ());
        root.left = Some(Node::leaf(1, ()));
        root.right = Some(Node::leaf(3, ()));
        root.update_size();
        assert_eq!(root.size.to_usize(), 3);
        assert_eq!(root.left_size(), 1);
        assert_eq!(size(&Some(root)), 3);
        assert_eq!(size::<i32, ()>(&None), 0);
    }
}
