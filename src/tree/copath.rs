use serde::{Deserialize, Serialize};

use crate::binary_tree::{LeafCount, LeafIndex};

/// The values of the copath of a leaf, ordered from the leaf's sibling up to
/// the child of the root that is not on the leaf's direct path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copath<N> {
    pub(crate) leaf_index: LeafIndex,
    pub(crate) size: LeafCount,
    pub(crate) nodes: Vec<N>,
}

impl<N> Copath<N> {
    pub fn new(leaf_index: LeafIndex, size: LeafCount, nodes: Vec<N>) -> Self {
        Self {
            leaf_index,
            size,
            nodes,
        }
    }

    pub fn leaf_index(&self) -> LeafIndex {
        self.leaf_index
    }

    /// Number of leaves of the tree the copath was taken from.
    pub fn size(&self) -> LeafCount {
        self.size
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}
