use serde::{Deserialize, Serialize};

use crate::binary_tree::LeafCount;

/// The root value of a maximal complete subtree together with the number of
/// leaves it spans. The size is always a power of two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierEntry<N> {
    pub(crate) value: N,
    pub(crate) size: LeafCount,
}

impl<N> FrontierEntry<N> {
    pub fn new(value: N, size: LeafCount) -> Self {
        Self { value, size }
    }

    pub fn value(&self) -> &N {
        &self.value
    }

    /// Number of leaves covered by this entry.
    pub fn size(&self) -> LeafCount {
        self.size
    }
}

/// The peaks of a tree: one entry per set bit of the leaf count, largest
/// subtree first. The entries partition the leaves from left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontier<N> {
    pub(crate) entries: Vec<FrontierEntry<N>>,
}

impl<N> Frontier<N> {
    pub fn new(entries: Vec<FrontierEntry<N>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FrontierEntry<N>] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of leaves covered by the frontier.
    pub fn leaf_count(&self) -> LeafCount {
        self.entries.iter().map(FrontierEntry::size).sum()
    }
}
