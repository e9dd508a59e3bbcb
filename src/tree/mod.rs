//! # Combining tree
//!
//! A [`CombiningTree`] stores one value per node of a left-balanced binary
//! tree. Leaves are set by the caller, every parent is derived from its two
//! children through a [`NodeDefinition`]:
//!
//! ```text
//! node[p] = create(combine(node[left(p)], node[right(p, size)]))
//! ```
//!
//! Nodes are addressed with the array representation from
//! [`binary_tree`](crate::binary_tree). The node map is sparse: a node is only
//! present once its value has been computed.
//!
//! All mutating operations stage their changes in a diff first and only merge
//! it once all derivations succeeded, so a failing operation never leaves the
//! tree in a partially updated state.
//!
//! The tree is a plain data structure without interior mutability. Concurrent
//! readers are fine, writers need `&mut` and are thus serialized by the borrow
//! checker.

use std::collections::BTreeMap;

use crate::binary_tree::{
    checked_copath, checked_dirpath, level, node_width, parent, root, LeafCount, LeafIndex,
    NodeIndex, MAX_LEAF_COUNT,
};

mod codec;
mod copath;
pub(crate) mod diff;
mod errors;
mod frontier;
mod node;

pub use copath::Copath;
pub use errors::{NodeError, TreeError};
pub use frontier::{Frontier, FrontierEntry};
pub use node::NodeDefinition;

use diff::{StagedTreeDiff, TreeDiff};


#[derive(Debug, Clone)]
pub struct CombiningTree<D: NodeDefinition> {
    definition: D,
    size: LeafCount,
    nodes: BTreeMap<NodeIndex, D::Node>,
}

impl<D: NodeDefinition> CombiningTree<D> {
    /// Create a new tree without any leaves.
    pub fn new(definition: D) -> Self {
        Self {
            definition,
            size: 0,
            nodes: BTreeMap::new(),
        }
    }

    /// Create a tree from the given leaves and derive all parents.
    ///
    /// Returns [`TreeError::InvalidNode`] if one of the leaves is not valid or
    /// a derivation fails, and [`TreeError::TreeTooLarge`] if there are more
    /// than [`MAX_LEAF_COUNT`] leaves.
    pub fn from_leaves(definition: D, leaves: Vec<D::Node>) -> Result<Self, TreeError> {
        log::debug!("Creating a tree from {} leaves", leaves.len());
        if leaves.len() > MAX_LEAF_COUNT as usize {
            return Err(TreeError::TreeTooLarge);
        }
        let mut tree = Self::new(definition);
        for leaf in leaves.iter() {
            tree.check_valid(leaf)?;
        }

        let staged = {
            let mut diff = tree.empty_diff();
            diff.grow_to(leaves.len() as LeafCount)?;
            for (i, leaf) in leaves.into_iter().enumerate() {
                diff.set_node(LeafIndex::new(i as u32).into(), leaf);
            }

            // Derive parents level by level, so that children are always
            // derived before their parents.
            let size = diff.size();
            if size > 1 {
                let width = node_width(size);
                for k in 1..=level(root(size)) {
                    let step = 1u32 << (k + 1);
                    let mut p = (1u32 << k) - 1;
                    while p < width {
                        diff.try_derive(NodeIndex::new(p))?;
                        p += step;
                    }
                }
            }
            diff.stage()
        };
        tree.merge_diff(staged);
        Ok(tree)
    }

    pub fn definition(&self) -> &D {
        &self.definition
    }

    /// The number of leaves of the tree.
    pub fn size(&self) -> LeafCount {
        self.size
    }

    /// Returns the value at `node_index`, or `None` if the node is outside of
    /// the tree or has not been computed.
    pub fn node(&self, node_index: NodeIndex) -> Option<&D::Node> {
        self.nodes.get(&node_index)
    }

    pub fn leaf(&self, leaf_index: LeafIndex) -> Option<&D::Node> {
        self.node(leaf_index.into())
    }

    /// The index of the root, or `None` for an empty tree.
    pub fn root_index(&self) -> Option<NodeIndex> {
        if self.size == 0 {
            None
        } else {
            Some(root(self.size))
        }
    }

    pub fn root(&self) -> Option<&D::Node> {
        self.root_index().and_then(|index| self.node(index))
    }

    /// Add a leaf to the right edge of the tree and derive all parents that
    /// became computable. Returns the index of the new leaf.
    ///
    /// Parents whose other child is still missing are left out and will be
    /// derived by a later append.
    pub fn append(&mut self, leaf: D::Node) -> Result<LeafIndex, TreeError> {
        log::debug!("Appending a leaf to a tree of size {}", self.size);
        self.check_valid(&leaf)?;
        let leaf_index = LeafIndex::new(self.size);

        let staged = {
            let mut diff = self.empty_diff();
            diff.grow_to(self.size + 1)?;
            let size = diff.size();
            let root = root(size);

            let mut x = NodeIndex::from(leaf_index);
            diff.set_node(x, leaf);
            while x != root {
                let p = parent(x, size);
                if !diff.try_derive(p)? {
                    log::trace!("Parent {} is incomplete, stopping", p);
                    break;
                }
                x = p;
            }
            diff.stage()
        };
        self.merge_diff(staged);
        Ok(leaf_index)
    }

    /// Replace the leaf at `leaf_index` and re-derive its direct path up to
    /// the root.
    pub fn update(&mut self, leaf_index: LeafIndex, leaf: D::Node) -> Result<(), TreeError> {
        log::debug!("Updating leaf {} of a tree of size {}", leaf_index, self.size);
        let staged = self.update_diff(leaf_index, leaf)?.0.stage();
        self.merge_diff(staged);
        Ok(())
    }

    /// Compute the values `update` would put on the direct path of
    /// `leaf_index`, without changing the tree.
    ///
    /// The root is not part of the result. The values are ordered from the
    /// child of the root down to the new leaf value.
    pub fn update_path(
        &self,
        leaf_index: LeafIndex,
        leaf: D::Node,
    ) -> Result<Vec<D::Node>, TreeError> {
        log::debug!(
            "Computing the update path of leaf {} of a tree of size {}",
            leaf_index,
            self.size
        );
        let (diff, mut direct_path) = self.update_diff(leaf_index, leaf)?;
        // Remove root
        direct_path.pop();
        direct_path
            .iter()
            .rev()
            .map(|&index| {
                diff.node(index)
                    .cloned()
                    .ok_or(TreeError::LibraryError("Node on the update path is missing."))
            })
            .collect()
    }

    /// Set the leaf at `leaf_index` and all of its ancestors below the root to
    /// the values in `path`, then re-derive the root.
    ///
    /// `path` is ordered from the leaf upwards, i.e. in the reverse order of
    /// what [`update_path`](Self::update_path) returns. Its length has to
    /// match the length of the leaf's direct path without the root.
    pub fn update_with_path(
        &mut self,
        leaf_index: LeafIndex,
        path: Vec<D::Node>,
    ) -> Result<(), TreeError> {
        log::debug!(
            "Updating leaf {} of a tree of size {} with a path of length {}",
            leaf_index,
            self.size,
            path.len()
        );
        let mut direct_path = self.leaf_dirpath(leaf_index)?;
        let root = direct_path
            .pop()
            .ok_or(TreeError::LibraryError("Direct path is empty."))?;
        if path.len() != direct_path.len() {
            return Err(TreeError::PathLengthMismatch {
                expected: direct_path.len(),
                actual: path.len(),
            });
        }
        for node in path.iter() {
            self.check_valid(node)?;
        }
        // In a tree with a single leaf, the leaf is the root and there is
        // nothing below it to set.
        if direct_path.is_empty() {
            return Ok(());
        }

        let staged = {
            let mut diff = self.empty_diff();
            for (index, node) in direct_path.into_iter().zip(path) {
                diff.set_node(index, node);
            }
            diff.derive(root)?;
            diff.stage()
        };
        self.merge_diff(staged);
        Ok(())
    }

    /// The roots of the maximal complete subtrees, largest first.
    pub fn frontier(&self) -> Result<Frontier<D::Node>, TreeError> {
        let mut entries = Vec::new();
        let mut offset = 0u32;
        for k in (0..u32::BITS).rev() {
            let block = 1u32 << k;
            if self.size & block == 0 {
                continue;
            }
            let index = NodeIndex::new(2 * offset + block - 1);
            let value = self
                .node(index)
                .cloned()
                .ok_or(TreeError::LibraryError("Frontier node is missing."))?;
            entries.push(FrontierEntry::new(value, block));
            offset += block;
        }
        Ok(Frontier::new(entries))
    }

    /// The values on the copath of `leaf_index`, ordered from the leaf
    /// upwards.
    pub fn copath(&self, leaf_index: LeafIndex) -> Result<Copath<D::Node>, TreeError> {
        if leaf_index.as_u32() >= self.size {
            return Err(TreeError::IndexOutOfRange);
        }
        let nodes = checked_copath(leaf_index.into(), self.size)?
            .into_iter()
            .map(|index| {
                self.node(index)
                    .cloned()
                    .ok_or(TreeError::LibraryError("Copath node is missing."))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Copath::new(leaf_index, self.size, nodes))
    }

    pub fn has_all_leaves(&self) -> bool {
        self.leaves().all(|leaf| leaf.is_some())
    }

    /// The leaf values from left to right, one item per leaf index. A leaf
    /// that is not present yields `None`, so the position of an item is
    /// always its leaf index.
    pub fn leaves(&self) -> impl Iterator<Item = Option<&D::Node>> {
        (0..self.size).map(move |i| self.leaf(LeafIndex::new(i)))
    }

    /// Two trees are equal if they have the same size, the same set of present
    /// nodes and all present nodes are equal according to the node
    /// definition.
    pub fn equal(&self, other: &Self) -> bool {
        self.size == other.size
            && self.nodes.len() == other.nodes.len()
            && self
                .nodes
                .iter()
                .zip(other.nodes.iter())
                .all(|((index_a, a), (index_b, b))| {
                    index_a == index_b && self.definition.equal(a, b)
                })
    }

    fn check_valid(&self, node: &D::Node) -> Result<(), TreeError> {
        if self.definition.valid(node) {
            Ok(())
        } else {
            log_crypto!(debug, "Invalid node value: {:?}", node);
            Err(NodeError::InvalidNode.into())
        }
    }

    /// Direct path of a leaf, including the leaf and the root.
    fn leaf_dirpath(&self, leaf_index: LeafIndex) -> Result<Vec<NodeIndex>, TreeError> {
        if leaf_index.as_u32() >= self.size {
            return Err(TreeError::IndexOutOfRange);
        }
        Ok(checked_dirpath(leaf_index.into(), self.size)?)
    }

    /// Stage a leaf update. Returns the diff and the direct path of the leaf.
    fn update_diff(
        &self,
        leaf_index: LeafIndex,
        leaf: D::Node,
    ) -> Result<(TreeDiff<'_, D>, Vec<NodeIndex>), TreeError> {
        let direct_path = self.leaf_dirpath(leaf_index)?;
        self.check_valid(&leaf)?;

        let mut diff = self.empty_diff();
        diff.set_node(leaf_index.into(), leaf);
        for &index in direct_path.iter().skip(1) {
            diff.derive(index)?;
        }
        Ok((diff, direct_path))
    }

    fn empty_diff(&self) -> TreeDiff<'_, D> {
        TreeDiff::new(self)
    }

    /// Merges a staged diff into the tree. This can only increase the size of
    /// the tree.
    fn merge_diff(&mut self, staged: StagedTreeDiff<D::Node>) {
        debug_assert!(staged.size() >= self.size);
        self.size = staged.size();
        self.nodes.extend(staged.into_nodes());
    }
}

impl<D: NodeDefinition> PartialEq for CombiningTree<D> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}
