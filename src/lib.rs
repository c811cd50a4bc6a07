//! An order-statistic binary search tree map for Rust.
//!
//! This crate provides [`BstMap`], an ordered key-value map backed by a plain
//! (unbalanced) binary search tree. Every node caches the size of its subtree,
//! which makes rank queries such as [`median`](BstMap::median) and
//! [`get_by_rank`](BstMap::get_by_rank) run in O(height) without a traversal.
//!
//! # Example
//!
//! ```
//! use bst_map::{BstMap, Rank};
//!
//! let mut tree = BstMap::new();
//! for key in [7, 8, 3, 1, 2, 6, 4, 5] {
//!     tree.insert(key, key * 10);
//! }
//!
//! assert_eq!(tree.get(&6), Some(&60));
//! assert_eq!(tree.len(), 8);
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.median(), Some(&4));
//! assert_eq!(tree[Rank(0)], 10);
//!
//! // Deleting a node with two children relabels it with its predecessor.
//! tree.remove(&3);
//! assert_eq!(tree.print_keys_in_order(), "(((()1())2((()4(()5()))6()))7(()8()))");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **O(height) rank operations** - Subtree size augmentation on every node
//! - **No balancing** - The shape is determined solely by the insertion and deletion history
//! - **`serde`** (optional) - Serializes in pre-order so the tree shape survives a round trip
//!
//! # Implementation
//!
//! Nodes live in a slot arena and refer to their children through compact
//! handles. Removal uses Hibbard deletion with the in-order *predecessor*
//! (rather than the successor) replacing a node that has two children.

#![no_std]
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
#[cfg(test)]
extern crate std;

mod order_statistic;
mod pre_order;
mod raw;

pub mod bst_map;

pub use crate::bst_map::BstMap;
pub use order_statistic::Rank;
pub use pre_order::is_bst_pre_order;
