use serde::{Deserialize, Serialize};
use std::fmt;
use tls_codec::{TlsDeserialize, TlsSerialize, TlsSize};

use super::treemath::TreeMathError;

/// The number of leaves of a tree.
pub type LeafCount = u32;

/// The largest number of leaves a tree can have. Keeping the leaf count at or
/// below 2^30 guarantees that all index arithmetic stays within `u32`.
pub const MAX_LEAF_COUNT: LeafCount = 1 << 30;

/// NodeIndex is an index to the nodes of a tree in the array representation,
/// both parent and leaf nodes. Leaves live at even indices, parents at odd
/// indices.
#[derive(
    Debug,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Copy,
    Clone,
    Hash,
    Default,
    Serialize,
    Deserialize,
    TlsSerialize,
    TlsDeserialize,
    TlsSize,
)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Create a new `NodeIndex` from a `u32`.
    pub const fn new(index: u32) -> Self {
        NodeIndex(index)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn is_leaf(&self) -> bool {
        self.0 % 2 == 0
    }

    pub fn is_parent(&self) -> bool {
        self.0 % 2 == 1
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

impl From<u32> for NodeIndex {
    fn from(i: u32) -> NodeIndex {
        NodeIndex(i)
    }
}

impl From<NodeIndex> for u32 {
    fn from(i: NodeIndex) -> u32 {
        i.as_u32()
    }
}

impl From<LeafIndex> for NodeIndex {
    fn from(leaf_index: LeafIndex) -> NodeIndex {
        NodeIndex(leaf_index.as_u32() * 2)
    }
}

/// LeafIndex is an index to the leaves of a tree.
#[derive(
    Debug,
    Default,
    Ord,
    PartialOrd,
    Hash,
    Eq,
    PartialEq,
    Copy,
    Clone,
    Serialize,
    Deserialize,
    TlsDeserialize,
    TlsSerialize,
    TlsSize,
)]
pub struct LeafIndex(u32);

impl LeafIndex {
    /// Create a new `LeafIndex` from a `u32`.
    pub const fn new(index: u32) -> Self {
        LeafIndex(index)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LeafIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LeafIndex {
    fn from(i: u32) -> LeafIndex {
        LeafIndex(i)
    }
}

impl From<LeafIndex> for u32 {
    fn from(i: LeafIndex) -> u32 {
        i.as_u32()
    }
}

impl TryFrom<NodeIndex> for LeafIndex {
    type Error = TreeMathError;

    fn try_from(node_index: NodeIndex) -> Result<Self, Self::Error> {
        // A node with an odd index must be a parent node and therefore cannot be
        // converted to a leaf node
        if node_index.is_parent() {
            Err(TreeMathError::NotALeaf)
        } else {
            Ok(LeafIndex(node_index.as_u32() / 2))
        }
    }
}
