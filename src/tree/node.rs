use std::fmt::Debug;

use super::errors::NodeError;

/// The capabilities a [`CombiningTree`](super::CombiningTree) needs from its
/// node values. This is the only place where cryptography enters the tree: an
/// implementation typically hashes or KDFs two child secrets in `combine` and
/// turns the resulting bytes into key material in `create`.
///
/// The tree never stores raw bytes. A parent's value is always
/// `create(combine(left, right))`.
pub trait NodeDefinition {
    /// The value stored at every node of the tree.
    type Node: Clone + Debug;

    /// Returns `true` if `node` is a legal value for this definition.
    fn valid(&self, node: &Self::Node) -> bool;

    /// Value equality of two nodes.
    fn equal(&self, a: &Self::Node, b: &Self::Node) -> bool;

    /// Wrap the output of [`NodeDefinition::combine`] as a node value.
    fn create(&self, data: &[u8]) -> Result<Self::Node, NodeError>;

    /// Deterministically derive the raw value of a parent from its two
    /// children. Fails with [`NodeError::InvalidNode`] if either child is not
    /// [`valid`](NodeDefinition::valid).
    fn combine(&self, left: &Self::Node, right: &Self::Node) -> Result<Vec<u8>, NodeError>;

    /// `create(combine(left, right))`
    fn derive_parent(&self, left: &Self::Node, right: &Self::Node) -> Result<Self::Node, NodeError> {
        let data = self.combine(left, right)?;
        self.create(&data)
    }
}

impl<D: NodeDefinition + ?Sized> NodeDefinition for &D {
    type Node = D::Node;

    fn valid(&self, node: &Self::Node) -> bool {
        (**self).valid(node)
    }

    fn equal(&self, a: &Self::Node, b: &Self::Node) -> bool {
        (**self).equal(a, b)
    }

    fn create(&self, data: &[u8]) -> Result<Self::Node, NodeError> {
        (**self).create(data)
    }

    fn combine(&self, left: &Self::Node, right: &Self::Node) -> Result<Vec<u8>, NodeError> {
        (**self).combine(left, right)
    }
}
