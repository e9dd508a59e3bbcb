//! # Binary tree math
//!
//! Node addressing for full, left-balanced binary trees in the array
//! representation. All derivations in the [`tree`](crate::tree) module are
//! keyed on the indices computed here, so these functions must produce the
//! exact same numbers as every other implementation of the protocol.

mod index;
mod treemath;

pub use index::{LeafCount, LeafIndex, NodeIndex, MAX_LEAF_COUNT};
pub use treemath::{
    checked_copath, checked_dirpath, copath, dirpath, is_node_in_tree, leaf_copath,
    leaf_direct_path, left, level, log2, lowest_common_ancestor, node_width, parent, right, root,
    sibling, TreeMathError,
};

#[cfg(any(feature = "test-utils", test))]
pub mod kat_treemath;

#[cfg(test)]
mod test_treemath;
