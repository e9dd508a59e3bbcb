//! TLS encoding of the values that leave the tree.
//!
//! ```text
//! struct {
//!     N value;
//!     uint32 size;
//! } FrontierEntry;
//!
//! struct {
//!     FrontierEntry entries<0..2^32-1>;
//! } Frontier;
//!
//! struct {
//!     uint32 leaf_index;
//!     uint32 size;
//!     N nodes<0..2^32-1>;
//! } Copath;
//! ```
//!
//! The node type is generic and not every node type has a TLS encoding, so
//! the impls are written out here with the bounds on `N` instead of being
//! derived. Vectors go through [`TlsSliceU32`] and [`TlsVecU32`].

use std::io::{Read, Write};

use tls_codec::{Deserialize, Error, Serialize, Size, TlsSliceU32, TlsVecU32};

use super::{Copath, Frontier, FrontierEntry};
use crate::binary_tree::{LeafCount, LeafIndex};

impl<N: Size> Size for FrontierEntry<N> {
    fn tls_serialized_len(&self) -> usize {
        self.value.tls_serialized_len() + self.size.tls_serialized_len()
    }
}

impl<N: Serialize> Serialize for FrontierEntry<N> {
    fn tls_serialize<W: Write>(&self, writer: &mut W) -> Result<usize, Error> {
        let written = self.value.tls_serialize(writer)?;
        Ok(written + self.size.tls_serialize(writer)?)
    }
}

impl<N: Deserialize> Deserialize for FrontierEntry<N> {
    fn tls_deserialize<R: Read>(bytes: &mut R) -> Result<Self, Error> {
        let value = N::tls_deserialize(bytes)?;
        let size = LeafCount::tls_deserialize(bytes)?;
        Ok(Self { value, size })
    }
}

impl<N: Size> Size for Frontier<N> {
    fn tls_serialized_len(&self) -> usize {
        TlsSliceU32(&self.entries).tls_serialized_len()
    }
}

impl<N: Serialize> Serialize for Frontier<N> {
    fn tls_serialize<W: Write>(&self, writer: &mut W) -> Result<usize, Error> {
        TlsSliceU32(&self.entries).tls_serialize(writer)
    }
}

impl<N: Deserialize> Deserialize for Frontier<N> {
    fn tls_deserialize<R: Read>(bytes: &mut R) -> Result<Self, Error> {
        let entries = TlsVecU32::<FrontierEntry<N>>::tls_deserialize(bytes)?;
        Ok(Self {
            entries: entries.into_vec(),
        })
    }
}

impl<N: Size> Size for Copath<N> {
    fn tls_serialized_len(&self) -> usize {
        self.leaf_index.tls_serialized_len()
            + self.size.tls_serialized_len()
            + TlsSliceU32(&self.nodes).tls_serialized_len()
    }
}

impl<N: Serialize> Serialize for Copath<N> {
    fn tls_serialize<W: Write>(&self, writer: &mut W) -> Result<usize, Error> {
        let mut written = self.leaf_index.tls_serialize(writer)?;
        written += self.size.tls_serialize(writer)?;
        Ok(written + TlsSliceU32(&self.nodes).tls_serialize(writer)?)
    }
}

impl<N: Deserialize> Deserialize for Copath<N> {
    fn tls_deserialize<R: Read>(bytes: &mut R) -> Result<Self, Error> {
        let leaf_index = LeafIndex::tls_deserialize(bytes)?;
        let size = LeafCount::tls_deserialize(bytes)?;
        let nodes = TlsVecU32::<N>::tls_deserialize(bytes)?;
        Ok(Self {
            leaf_index,
            size,
            nodes: nodes.into_vec(),
        })
    }
}
