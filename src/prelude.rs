pub use crate::binary_tree::{LeafCount, LeafIndex, NodeIndex, TreeMathError, MAX_LEAF_COUNT};
pub use crate::tree::{
    CombiningTree, Copath, Frontier, FrontierEntry, NodeDefinition, NodeError, TreeError,
};
