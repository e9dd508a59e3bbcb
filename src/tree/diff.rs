//! Staged changes to a [`CombiningTree`].
//!
//! Mutating operations never write to the tree directly. They create a
//! [`TreeDiff`] on top of the tree, put all new leaves and derived parents into
//! it and finally stage it. Only a [`StagedTreeDiff`] can be merged into the
//! tree, and only once every derivation succeeded. A failing derivation drops
//! the diff and leaves the tree untouched.

use std::collections::BTreeMap;

use super::{CombiningTree, NodeDefinition, TreeError};
use crate::binary_tree::{left, right, LeafCount, NodeIndex, MAX_LEAF_COUNT};

pub(crate) struct StagedTreeDiff<N> {
    diff: BTreeMap<NodeIndex, N>,
    size: LeafCount,
}

impl<N> StagedTreeDiff<N> {
    pub(super) fn size(&self) -> LeafCount {
        self.size
    }

    pub(super) fn into_nodes(self) -> BTreeMap<NodeIndex, N> {
        self.diff
    }
}

pub(crate) struct TreeDiff<'a, D: NodeDefinition> {
    original_tree: &'a CombiningTree<D>,
    diff: BTreeMap<NodeIndex, D::Node>,
    size: LeafCount,
}

impl<'a, D: NodeDefinition> TreeDiff<'a, D> {
    pub(super) fn new(tree: &'a CombiningTree<D>) -> Self {
        Self {
            original_tree: tree,
            diff: BTreeMap::new(),
            size: tree.size(),
        }
    }

    pub(super) fn size(&self) -> LeafCount {
        self.size
    }

    /// Set the number of leaves of the diff. The size can only grow.
    pub(super) fn grow_to(&mut self, size: LeafCount) -> Result<(), TreeError> {
        if size > MAX_LEAF_COUNT {
            return Err(TreeError::TreeTooLarge);
        }
        debug_assert!(size >= self.size);
        self.size = size;
        Ok(())
    }

    /// Returns the node at `node_index`, looking at the diff first and at the
    /// original tree second.
    pub(super) fn node(&self, node_index: NodeIndex) -> Option<&D::Node> {
        self.diff
            .get(&node_index)
            .or_else(|| self.original_tree.node(node_index))
    }

    pub(super) fn set_node(&mut self, node_index: NodeIndex, node: D::Node) {
        debug_assert!(crate::binary_tree::is_node_in_tree(node_index, self.size));
        log::trace!("Setting node {}", node_index);
        self.diff.insert(node_index, node);
    }

    /// Derive the parent at `node_index` from its children if both of them
    /// are present. Returns whether the parent was derived.
    pub(super) fn try_derive(&mut self, node_index: NodeIndex) -> Result<bool, TreeError> {
        let value = match (
            self.node(left(node_index)),
            self.node(right(node_index, self.size)),
        ) {
            (Some(left_child), Some(right_child)) => self
                .original_tree
                .definition()
                .derive_parent(left_child, right_child)?,
            _ => return Ok(false),
        };
        log::trace!("Derived parent {}", node_index);
        log_crypto!(trace, "  value: {:?}", value);
        self.diff.insert(node_index, value);
        Ok(true)
    }

    /// Derive the parent at `node_index` from its children. Both children
    /// must be present.
    pub(super) fn derive(&mut self, node_index: NodeIndex) -> Result<(), TreeError> {
        if self.try_derive(node_index)? {
            Ok(())
        } else {
            Err(TreeError::LibraryError("A child of a parent node is missing."))
        }
    }

    pub(super) fn stage(self) -> StagedTreeDiff<D::Node> {
        StagedTreeDiff {
            diff: self.diff,
            size: self.size,
        }
    }
}
