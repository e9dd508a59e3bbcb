//! Tree errors
//!
//! `TreeError` is returned by all fallible [`CombiningTree`](super::CombiningTree)
//! operations. `NodeError` is the error type of the
//! [`NodeDefinition`](super::NodeDefinition) seam.

use thiserror::Error;

use crate::binary_tree::TreeMathError;

/// Node definition error
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum NodeError {
    /// The node value is not valid for this node definition.
    #[error("The node value is not valid for this node definition.")]
    InvalidNode,
    /// A node value could not be derived.
    #[error("A node value could not be derived: {0}")]
    DerivationFailed(String),
}

/// Combining tree error
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// A node value was rejected by the node definition.
    #[error(transparent)]
    InvalidNode(#[from] NodeError),
    /// The leaf or node index is outside of the tree.
    #[error("The leaf or node index is outside of the tree.")]
    IndexOutOfRange,
    /// The path doesn't match the length of the direct path of the leaf.
    #[error("Expected a path of length {expected}, got {actual}.")]
    PathLengthMismatch { expected: usize, actual: usize },
    /// Adding a leaf exceeds the maximum possible size of the tree.
    #[error("Adding a leaf exceeds the maximum possible size of the tree.")]
    TreeTooLarge,
    /// An internal invariant of the tree was violated.
    #[error("Library error: {0}")]
    LibraryError(&'static str),
}

impl From<TreeMathError> for TreeError {
    fn from(_: TreeMathError) -> Self {
        TreeError::IndexOutOfRange
    }
}
