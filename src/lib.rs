//! # MLS tree
//!
//! Tree math and a generic combining tree for MLS-style group key agreement.
//!
//! The crate has two layers:
//!
//! * [`binary_tree`] computes node indices in the array representation of a
//!   left-balanced binary tree for an arbitrary number of leaves: root,
//!   parent, children, sibling, direct path and copath.
//! * [`tree`] stores a value per node and derives every parent from its two
//!   children through a caller-supplied [`NodeDefinition`](tree::NodeDefinition).
//!   It supports appending leaves, updating a leaf together with its direct
//!   path, and extracting copaths and the frontier of the tree.
//!
//! The crate doesn't implement any cryptography. Hashing, key derivation and
//! the like live behind the `NodeDefinition` trait.
//!
//! ## Error handling
//!
//! All functions that can fail return a [`Result`]. The tree operations
//! return a [`TreeError`](tree::TreeError), the node definition reports
//! failures as [`NodeError`](tree::NodeError). Failing operations leave the
//! tree unchanged.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade. Node values are only logged
//! when the `crypto-debug` feature is enabled.
#![forbid(unsafe_code)]

#[macro_use]
mod utils;

#[cfg(any(feature = "test-utils", test))]
#[macro_use]
pub mod test_utils;

pub mod binary_tree;
pub mod tree;

/// Single place, re-exporting the most used public functions.
pub mod prelude;
