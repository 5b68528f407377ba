use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use alloc::boxed::Box;
use smallvec::SmallVec;

use super::node::{Link, Node, size};

/// The unbalanced, size-augmented binary search tree backing `BstMap`.
pub(crate) struct RawSymbolTable<K, V> {
    /// Root of the tree, `None` when the tree is empty.
    root: Link<K, V>,
}

impl<K, V> RawSymbolTable<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self { root: None }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) fn len(&self) -> usize {
        size(&self.root)
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Returns the root link for in-place edits.
    pub(crate) fn root_mut(&mut self) -> &mut Link<K, V> {
        &mut self.root
    }

    /// Releases every node and resets the tree to empty.
    pub(crate) fn clear(&mut self) {
        let released = self.len();
        release(self.root.take());
        tracing::debug!(released, "bst.clear");
    }

    /// Removes and returns the entry with the smallest key.
    pub(crate) fn delete_min(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        let (rest, min) = detach_min(root);
        self.root = rest;
        Some(min)
    }

    /// Removes and returns the entry with the largest key.
    pub(crate) fn delete_max(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        let (rest, max) = detach_max(root);
        self.root = rest;
        Some(max)
    }
}

impl<K: Ord, V> RawSymbolTable<K, V> {
    /// Searches for a key and returns its node if found.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref_mut();

        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }

        None
    }

    /// Returns the key-value pair corresponding to the key.
    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|node| (&node.key, &node.value))
    }

    /// Returns true if the tree contains the specified key.
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present.
    pub(crate) fn put(&mut self, key: K, value: V) -> Option<V> {
        put(&mut self.root, key, value)
    }

    /// Removes a key from the tree, returning the stored key and value.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        remove(&mut self.root, key)
    }

    /// Removes a key from the tree, returning its value.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }
}

impl<K: Clone + Ord, V: Clone> Clone for RawSymbolTable<K, V> {
    /// Re-inserts the entries in pre-order, which rebuilds the exact same shape.
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        let mut pending: SmallVec<[&Node<K, V>; 32]> = self.root().into_iter().collect();

        while let Some(node) = pending.pop() {
            cloned.put(node.key.clone(), node.value.clone());
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }

        cloned
    }
}

impl<K, V> Drop for RawSymbolTable<K, V> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

/// Frees a subtree one node at a time.
///
/// Dropping a `Box<Node>` directly recurses once per level, which overflows the stack on a
/// degenerate tree built from sorted keys.
fn release<K, V>(link: Link<K, V>) {
    let mut pending: SmallVec<[Box<Node<K, V>>; 32]> = link.into_iter().collect();

    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

fn put<K: Ord, V>(link: &mut Link<K, V>, key: K, value: V) -> Option<V> {
    match link {
        None => {
            *link = Some(Node::leaf(key, value));
            None
        }
        Some(node) => {
            let old_value = match key.cmp(&node.key) {
                Ordering::Less => put(&mut node.left, key, value),
                Ordering::Greater => put(&mut node.right, key, value),
                // Existing key: the shape and every size stay as they are.
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            };
            node.update_size();
            old_value
        }
    }
}

fn remove<K, V, Q>(link: &mut Link<K, V>, key: &Q) -> Option<(K, V)>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    let node = link.as_mut()?;

    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => remove(&mut node.left, key)?,
        Ordering::Greater => remove(&mut node.right, key)?,
        Ordering::Equal => {
            let target = link.take()?;
            let (replacement, entry) = splice(target);
            *link = replacement;
            return Some(entry);
        }
    };

    // Only reached when something below was removed.
    node.update_size();
    Some(removed)
}

/// Takes `node` out of its subtree. Returns the subtree that replaces it and its entry.
fn splice<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
    match (node.left.take(), node.right.take()) {
        (None, None) => (None, into_entry(node)),
        (Some(child), None) | (None, Some(child)) => (Some(child), into_entry(node)),
        (Some(left), Some(right)) => {
            // Hibbard deletion: the in-order predecessor takes over this node's slot.
            let (rest, (key, value)) = detach_max(left);
            let old_key = mem::replace(&mut node.key, key);
            let old_value = mem::replace(&mut node.value, value);
            node.left = rest;
            node.right = Some(right);
            node.update_size();
            tracing::trace!(size = node.size.to_usize(), "bst.remove.predecessor_swap");
            (Some(node), (old_key, old_value))
        }
    }
}

/// Detaches the smallest node of the subtree rooted at `node`.
fn detach_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = detach_min(left);
            node.left = rest;
            node.update_size();
            (Some(node), min)
        }
        None => splice(node),
    }
}

/// Detaches the largest node of the subtree rooted at `node`.
fn detach_max<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
    match node.right.take() {
        Some(right) => {
            let (rest, max) = detach_max(right);
            node.right = rest;
            node.update_size();
            (Some(node), max)
        }
        None => splice(node),
    }
}

fn into_entry<K, V>(node: Box<Node<K, V>>) -> (K, V) {
    let Node { key, value, .. } = *node;
    (key, value)
}
