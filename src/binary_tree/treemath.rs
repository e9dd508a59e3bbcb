//! Index arithmetic for the array representation of a left-balanced binary
//! tree.
//!
//! A tree with `n` leaves uses the node indices `0..node_width(n)`. Leaf `i`
//! lives at index `2i`, parents live at odd indices. Appending a leaf never
//! renumbers existing nodes, it only extends the range of valid indices and
//! may move the root.
//!
//! The functions in this module assume their node index lies within the tree
//! (`x < node_width(n)`) and that `n > 0`. This is checked with debug
//! assertions only. Callers that get their input from the outside should go
//! through the `checked_*` variants.

use std::cmp::Ordering;
use thiserror::Error;

use super::index::{LeafCount, LeafIndex, NodeIndex};

/// TreeMath error
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeMathError {
    /// Parent node indices can't be converted to leaf indices.
    #[error("Parent node indices can't be converted to leaf indices.")]
    NotALeaf,
    /// The node index is outside of the tree.
    #[error("The node index is outside of the tree.")]
    NodeNotInTree,
    /// An empty tree has no nodes.
    #[error("An empty tree has no nodes.")]
    EmptyTree,
}

/// Floor of the binary logarithm, with `log2(0) = 0`.
pub fn log2(x: u32) -> usize {
    if x == 0 {
        return 0;
    }
    (u32::BITS - 1 - x.leading_zeros()) as usize
}

/// The level of a node is the number of trailing one-bits of its index.
/// Leaves are at level 0.
pub fn level(index: NodeIndex) -> usize {
    index.as_u32().trailing_ones() as usize
}

/// The number of nodes in a tree with `n` leaves.
pub fn node_width(n: LeafCount) -> u32 {
    if n == 0 {
        0
    } else {
        2 * (n - 1) + 1
    }
}

pub fn is_node_in_tree(index: NodeIndex, n: LeafCount) -> bool {
    index.as_u32() < node_width(n)
}

pub fn root(n: LeafCount) -> NodeIndex {
    debug_assert!(n > 0);
    let w = node_width(n);
    NodeIndex::new((1 << log2(w)) - 1)
}

/// The left child of a parent node. The left child of a leaf is the leaf
/// itself.
pub fn left(index: NodeIndex) -> NodeIndex {
    let x = index.as_u32();
    let k = level(index);
    if k == 0 {
        return index;
    }
    NodeIndex::new(x ^ (0x01 << (k - 1)))
}

/// The right child of a parent node. If the right subtree is truncated by the
/// leaf count, this descends to the left until it hits a node that exists.
/// The right child of a leaf is the leaf itself.
pub fn right(index: NodeIndex, n: LeafCount) -> NodeIndex {
    debug_assert!(is_node_in_tree(index, n));
    let x = index.as_u32();
    let k = level(index);
    if k == 0 {
        return index;
    }
    let width = node_width(n);
    let mut r = NodeIndex::new(x ^ (0x03 << (k - 1)));
    while r.as_u32() >= width {
        r = left(r);
    }
    r
}

// The parent here might be beyond the right edge of the tree.
fn parent_step(x: u32) -> u32 {
    let k = level(NodeIndex::new(x));
    let b = (x >> (k + 1)) & 0x01;
    (x | (1 << k)) ^ (b << (k + 1))
}

/// The parent of a node. The root is its own parent.
pub fn parent(index: NodeIndex, n: LeafCount) -> NodeIndex {
    debug_assert!(is_node_in_tree(index, n));
    if index == root(n) {
        return index;
    }
    let width = node_width(n);
    let mut p = parent_step(index.as_u32());
    while p >= width {
        let new_p = parent_step(p);
        debug_assert!(new_p != p);
        p = new_p;
    }
    NodeIndex::new(p)
}

/// The other child of a node's parent. The root is its own sibling.
pub fn sibling(index: NodeIndex, n: LeafCount) -> NodeIndex {
    let p = parent(index, n);
    match index.cmp(&p) {
        Ordering::Less => right(p, n),
        Ordering::Greater => left(p),
        Ordering::Equal => p,
    }
}

/// Direct path from a node to the root.
/// Ordered from the node to the root, includes both.
pub fn dirpath(index: NodeIndex, n: LeafCount) -> Vec<NodeIndex> {
    let r = root(n);
    let mut d = vec![index];
    let mut x = index;
    while x != r {
        x = parent(x, n);
        d.push(x);
    }
    d
}

/// Copath of a node: the sibling of every node on the direct path except the
/// root. Ordered from the node to the root.
pub fn copath(index: NodeIndex, n: LeafCount) -> Vec<NodeIndex> {
    let mut d = dirpath(index, n);
    // The root doesn't have a sibling
    d.pop();
    d.into_iter().map(|x| sibling(x, n)).collect()
}

pub fn leaf_direct_path(leaf_index: LeafIndex, n: LeafCount) -> Vec<NodeIndex> {
    dirpath(NodeIndex::from(leaf_index), n)
}

pub fn leaf_copath(leaf_index: LeafIndex, n: LeafCount) -> Vec<NodeIndex> {
    copath(NodeIndex::from(leaf_index), n)
}

fn check_bounds(index: NodeIndex, n: LeafCount) -> Result<(), TreeMathError> {
    if n == 0 {
        return Err(TreeMathError::EmptyTree);
    }
    if !is_node_in_tree(index, n) {
        return Err(TreeMathError::NodeNotInTree);
    }
    Ok(())
}

/// Same as [`dirpath`], but returns an error instead of relying on the node
/// being in the tree.
pub fn checked_dirpath(index: NodeIndex, n: LeafCount) -> Result<Vec<NodeIndex>, TreeMathError> {
    check_bounds(index, n)?;
    Ok(dirpath(index, n))
}

/// Same as [`copath`], but returns an error instead of relying on the node
/// being in the tree.
pub fn checked_copath(index: NodeIndex, n: LeafCount) -> Result<Vec<NodeIndex>, TreeMathError> {
    check_bounds(index, n)?;
    Ok(copath(index, n))
}

/// Lowest common ancestor of two nodes, aka the node where their direct paths
/// intersect. A node is its own ancestor.
pub fn lowest_common_ancestor(x: NodeIndex, y: NodeIndex, n: LeafCount) -> NodeIndex {
    let x_path = dirpath(x, n);
    let y_path = dirpath(y, n);

    // Both paths end in the root, so walk them backwards until they diverge.
    let mut ancestor = root(n);
    for (a, b) in x_path.iter().rev().zip(y_path.iter().rev()) {
        if a != b {
            break;
        }
        ancestor = *a;
    }
    ancestor
}
