//! Structural self-checks for the tree.
//!
//! These walk the whole tree and are meant for tests and debugging. A failure means a
//! mutation left the tree corrupt, which no public operation should ever do.

use core::fmt;

use smallvec::{SmallVec, smallvec};
use thiserror::Error;

use crate::raw::{Node, RawSymbolTable, size};

/// A structural property every [`BstMap`](crate::BstMap) maintains.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Invariant {
    /// Every key in a left subtree is smaller, and every key in a right subtree larger, than
    /// the key of the subtree's parent.
    SymmetricOrder,
    /// Every node's cached size is one more than the sizes of its children combined.
    SizeConsistency,
    /// `select` and `rank` are inverses over every rank and every key.
    RankConsistency,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Invariant::SymmetricOrder => "not in symmetric order",
            Invariant::SizeConsistency => "subtree counts not consistent",
            Invariant::RankConsistency => "ranks not consistent",
        })
    }
}

/// Returned by [`BstMap::check`](crate::BstMap::check) when the tree is corrupt.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("tree invariants violated: {failed:?}")]
pub struct CheckError {
    failed: SmallVec<[Invariant; 3]>,
}

impl CheckError {
    /// The invariants that did not hold, in checking order.
    #[must_use]
    pub fn failed(&self) -> &[Invariant] {
        &self.failed
    }

    /// Returns true if `invariant` is among the failures.
    #[must_use]
    pub fn violates(&self, invariant: Invariant) -> bool {
        self.failed.contains(&invariant)
    }
}

impl<K: Ord, V> RawSymbolTable<K, V> {
    /// Runs every check, reporting all that fail.
    pub(crate) fn check(&self) -> Result<(), CheckError> {
        let mut failed = SmallVec::new();

        for (invariant, holds) in [
            (Invariant::SymmetricOrder, self.is_symmetric_ordered()),
            (Invariant::SizeConsistency, self.is_size_consistent()),
            (Invariant::RankConsistency, self.is_rank_consistent()),
        ] {
            if !holds {
                tracing::warn!(%invariant, len = self.len(), "bst.check.failed");
                failed.push(invariant);
            }
        }

        if failed.is_empty() { Ok(()) } else { Err(CheckError { failed }) }
    }

    /// Checks that every key lies strictly between the bounds set by its ancestors.
    ///
    /// Strict bounds also rule out a key appearing twice.
    pub(crate) fn is_symmetric_ordered(&self) -> bool {
        let Some(root) = self.root() else {
            return true;
        };
        // (node, exclusive lower bound, exclusive upper bound)
        let mut pending: SmallVec<[(&Node<K, V>, Option<&K>, Option<&K>); 32]> = smallvec![(root, None, None)];

        while let Some((node, lower, upper)) = pending.pop() {
            if lower.is_some_and(|lower| node.key <= *lower) || upper.is_some_and(|upper| node.key >= *upper) {
                return false;
            }
            if let Some(left) = node.left.as_deref() {
                pending.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, Some(&node.key), upper));
            }
        }

        true
    }

    /// Checks every cached subtree size against the sizes of the node's children.
    pub(crate) fn is_size_consistent(&self) -> bool {
        let mut pending: SmallVec<[&Node<K, V>; 32]> = self.root().into_iter().collect();

        while let Some(node) = pending.pop() {
            if node.size.to_usize() != 1 + size(&node.left) + size(&node.right) {
                return false;
            }
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        true
    }

    /// Checks that the `i`th key has rank `i`, and that every key is found at its own rank.
    pub(crate) fn is_rank_consistent(&self) -> bool {
        let ranks_round_trip = (0..self.len()).all(|i| self.select(i).is_some_and(|key| self.rank(key) == i));

        ranks_round_trip
            && self
                .keys()
                .into_iter()
                .all(|key| self.select(self.rank(key)).is_some_and(|selected| selected == key))
    }
}
