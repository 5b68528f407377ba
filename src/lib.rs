//! An ordered symbol table backed by an unbalanced binary search tree with subtree sizes.
//!
//! [`BstMap`] maps totally ordered keys to values. Every node caches the number of nodes in
//! its subtree, so besides the usual map operations the tree answers order-statistic
//! queries by walking a single path from the root:
//!
//! - [`rank`](BstMap::rank) - How many keys are strictly smaller than a given key
//! - [`select`](BstMap::select) - The key at a given sorted position
//! - [`floor`](BstMap::floor) and [`ceiling`](BstMap::ceiling) - The nearest keys at or below and at or above
//! - [`range_len`](BstMap::range_len) and [`range_keys`](BstMap::range_keys) - Closed-interval queries
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the value of the smallest key
//!
//! The same operations are described by the [`SymbolTable`] trait, so code can be written
//! against any ordered table.
//!
//! # Example
//!
//! ```
//! use sized_bst::{BstMap, Rank};
//!
//! let mut scores = BstMap::new();
//! scores.put("Carol", 92);
//! scores.put("Alice", 100);
//! scores.put("Bob", 85);
//!
//! assert_eq!(scores.get("Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Bob sorts second.
//! assert_eq!(scores.select(1), Some(&"Bob"));
//! assert_eq!(scores.rank("Carol"), 2);
//! assert_eq!(scores[Rank(0)], 100);
//!
//! // Every structural invariant holds after any sequence of operations.
//! scores.remove("Carol");
//! assert!(scores.check().is_ok());
//! ```
//!
//! # Implementation
//!
//! The tree is a plain binary search tree and is never rebalanced, so operations cost
//! time proportional to its height. Deletion uses Hibbard's method, replacing a node that
//! has two children with its in-order predecessor. Teardown and traversals are iterative,
//! so even a tree degenerated into a path can be dropped without exhausting the stack.
//!
//! [`BstMap::check`] verifies symmetric order, subtree sizes and the agreement between
//! `rank` and `select`, and reports failures through [`CheckError`] and `tracing` events.

#![cfg_attr(not(test), no_std)]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod order_statistic;
mod raw;
mod symbol_table;

pub mod bst_map;
pub mod check;

pub use bst_map::BstMap;
pub use check::{CheckError, Invariant};
pub use order_statistic::Rank;
pub use symbol_table::SymbolTable;
