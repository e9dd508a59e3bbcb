//! # Known Answer Tests for treemath
//!
//! This module generates and verifies test vectors for tree math.
//!
//! ## Parameter:
//! Number of leaves `n_leaves`.
//!
//! ## Format:
//! ```text
//! {
//!     "n_leaves": /* uint32 */,
//!     "n_nodes": /* uint32 */,
//!     "root": /* uint32 */,
//!     "left": [ /* array of option<uint32> */ ],
//!     "right": [ /* array of option<uint32> */ ],
//!     "parent": [ /* array of option<uint32> */ ],
//!     "sibling": [ /* array of option<uint32> */ ]
//! }
//! ```
//!
//! Any value that is invalid is represented as `null`: leaves have no
//! children and the root has neither a parent nor a sibling.
//!
//! ## Verification:
//! * `n_nodes` is the number of nodes in the tree with `n_leaves` leaves
//! * `root` is the root node index of the tree
//! * `left[i]` is the node index of the left child of the node with index `i`
//!   in a tree with `n_leaves` leaves
//! * `right[i]` is the node index of the right child of the node with index `i`
//!   in a tree with `n_leaves` leaves
//! * `parent[i]` is the node index of the parent of the node with index `i` in
//!   a tree with `n_leaves` leaves
//! * `sibling[i]` is the node index of the sibling of the node with index `i`
//!   in a tree with `n_leaves` leaves

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{left, node_width, parent, right, root, sibling, LeafCount, NodeIndex};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TreeMathTestVector {
    n_leaves: u32,
    n_nodes: u32,
    root: u32,
    left: Vec<Option<u32>>,
    right: Vec<Option<u32>>,
    parent: Vec<Option<u32>>,
    sibling: Vec<Option<u32>>,
}

pub fn generate_test_vector(n_leaves: LeafCount) -> TreeMathTestVector {
    let n_nodes = node_width(n_leaves);
    let tree_root = root(n_leaves);
    let mut test_vector = TreeMathTestVector {
        n_leaves,
        n_nodes,
        root: tree_root.as_u32(),
        left: Vec::new(),
        right: Vec::new(),
        parent: Vec::new(),
        sibling: Vec::new(),
    };

    for i in 0..n_nodes {
        let index = NodeIndex::new(i);
        if index.is_leaf() {
            // Leaves don't have children
            test_vector.left.push(None);
            test_vector.right.push(None);
        } else {
            test_vector.left.push(Some(left(index).as_u32()));
            test_vector.right.push(Some(right(index, n_leaves).as_u32()));
        }
        // Exclude root
        if index == tree_root {
            test_vector.parent.push(None);
            test_vector.sibling.push(None);
        } else {
            test_vector.parent.push(Some(parent(index, n_leaves).as_u32()));
            test_vector
                .sibling
                .push(Some(sibling(index, n_leaves).as_u32()));
        }
    }

    test_vector
}

pub fn run_test_vector(test_vector: TreeMathTestVector) -> Result<(), TmTestVectorError> {
    let n_leaves = test_vector.n_leaves;
    if n_leaves == 0 {
        return Err(TmTestVectorError::TreeSizeMismatch);
    }
    let n_nodes = node_width(n_leaves);
    if test_vector.n_nodes != n_nodes {
        return Err(TmTestVectorError::TreeSizeMismatch);
    }
    let columns = [
        &test_vector.left,
        &test_vector.right,
        &test_vector.parent,
        &test_vector.sibling,
    ];
    if columns.iter().any(|c| c.len() != n_nodes as usize) {
        return Err(TmTestVectorError::TreeSizeMismatch);
    }
    if test_vector.root != root(n_leaves).as_u32() {
        return Err(TmTestVectorError::RootIndexMismatch);
    }

    let expected = generate_test_vector(n_leaves);
    for i in 0..n_nodes as usize {
        if test_vector.left[i] != expected.left[i] {
            log::error!("Left child of node {} doesn't match.", i);
            return Err(TmTestVectorError::LeftIndexMismatch);
        }
        if test_vector.right[i] != expected.right[i] {
            log::error!("Right child of node {} doesn't match.", i);
            return Err(TmTestVectorError::RightIndexMismatch);
        }
        if test_vector.parent[i] != expected.parent[i] {
            log::error!("Parent of node {} doesn't match.", i);
            return Err(TmTestVectorError::ParentIndexMismatch);
        }
        if test_vector.sibling[i] != expected.sibling[i] {
            log::error!("Sibling of node {} doesn't match.", i);
            return Err(TmTestVectorError::SiblingIndexMismatch);
        }
    }
    Ok(())
}

#[test]
fn read_test_vectors_tm() {
    let tests: Vec<TreeMathTestVector> = read_json!("../../test_vectors/tree-math.json");
    assert!(!tests.is_empty());
    for test_vector in tests {
        match run_test_vector(test_vector) {
            Ok(_) => {}
            Err(e) => panic!("Error while checking tree math test vector.\n{e:?}"),
        }
    }
}

#[test]
fn generated_vectors_verify() {
    for n_leaves in 1..100 {
        let test_vector = generate_test_vector(n_leaves);
        assert_eq!(run_test_vector(test_vector), Ok(()));
    }
}

#[test]
fn tampered_vectors_fail() {
    let mut test_vector = generate_test_vector(11);
    test_vector.sibling[0] = Some(4);
    assert_eq!(
        run_test_vector(test_vector),
        Err(TmTestVectorError::SiblingIndexMismatch)
    );

    let mut test_vector = generate_test_vector(11);
    test_vector.root = 7;
    assert_eq!(
        run_test_vector(test_vector),
        Err(TmTestVectorError::RootIndexMismatch)
    );

    let mut test_vector = generate_test_vector(11);
    test_vector.right.pop();
    assert_eq!(
        run_test_vector(test_vector),
        Err(TmTestVectorError::TreeSizeMismatch)
    );
}

/// TreeMath test vector error
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TmTestVectorError {
    /// The computed tree size doesn't match the one in the test vector.
    #[error("The computed tree size doesn't match the one in the test vector.")]
    TreeSizeMismatch,
    /// The computed root index doesn't match the one in the test vector.
    #[error("The computed root index doesn't match the one in the test vector.")]
    RootIndexMismatch,
    /// A computed left child index doesn't match the one in the test vector.
    #[error("A computed left child index doesn't match the one in the test vector.")]
    LeftIndexMismatch,
    /// A computed right child index doesn't match the one in the test vector.
    #[error("A computed right child index doesn't match the one in the test vector.")]
    RightIndexMismatch,
    /// A computed parent index doesn't match the one in the test vector.
    #[error("A computed parent index doesn't match the one in the test vector.")]
    ParentIndexMismatch,
    /// A computed sibling index doesn't match the one in the test vector.
    #[error("A computed sibling index doesn't match the one in the test vector.")]
    SiblingIndexMismatch,
}
