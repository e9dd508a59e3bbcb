//! Test utilities
//!
//! Node definitions for tests and benchmarks, and helpers for reading test
//! vectors.
#![allow(dead_code)]

use rand::Rng;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use std::{fs::File, io::BufReader};

use crate::tree::{NodeDefinition, NodeError};

#[allow(unused_macros)]
macro_rules! read_json {
    ($file_name:expr) => {{
        let data = include_str!($file_name);
        serde_json::from_str(data).expect(&format!("Error reading file {}", $file_name))
    }};
}

pub fn read<T: DeserializeOwned>(file_name: &str) -> T {
    let file = match File::open(file_name) {
        Ok(f) => f,
        Err(_) => panic!("Couldn't open file {}.", file_name),
    };
    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(r) => r,
        Err(e) => panic!("Error reading file.\n{:?}", e),
    }
}

/// Nodes are non-empty alphanumeric strings, parents are the concatenation of
/// their children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringNodeDefinition;

impl NodeDefinition for StringNodeDefinition {
    type Node = String;

    fn valid(&self, node: &String) -> bool {
        !node.is_empty() && node.chars().all(|c| c.is_ascii_alphanumeric())
    }

    fn equal(&self, a: &String, b: &String) -> bool {
        a == b
    }

    fn create(&self, data: &[u8]) -> Result<String, NodeError> {
        String::from_utf8(data.to_vec()).map_err(|e| NodeError::DerivationFailed(e.to_string()))
    }

    fn combine(&self, left: &String, right: &String) -> Result<Vec<u8>, NodeError> {
        if !self.valid(left) || !self.valid(right) {
            return Err(NodeError::InvalidNode);
        }
        Ok(format!("{left}{right}").into_bytes())
    }
}

/// Leaves `"a"`, `"b"`, ... for up to 26 leaves and `"l26"`, `"l27"`, ...
/// beyond that.
pub fn string_leaves(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i < 26 {
                ((b'a' + i as u8) as char).to_string()
            } else {
                format!("l{i}")
            }
        })
        .collect()
}

/// Length of a [`DigestNodeDefinition`] node.
pub const DIGEST_LEN: usize = 32;

pub type NodeDigest = [u8; DIGEST_LEN];

/// Nodes are SHA-256 digests, a parent is the digest of its children's
/// concatenation. Every digest is a valid node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestNodeDefinition;

impl NodeDefinition for DigestNodeDefinition {
    type Node = NodeDigest;

    fn valid(&self, _node: &NodeDigest) -> bool {
        true
    }

    fn equal(&self, a: &NodeDigest, b: &NodeDigest) -> bool {
        a == b
    }

    fn create(&self, data: &[u8]) -> Result<NodeDigest, NodeError> {
        data.try_into().map_err(|_| {
            NodeError::DerivationFailed(format!(
                "Expected {} bytes, got {}",
                DIGEST_LEN,
                data.len()
            ))
        })
    }

    fn combine(&self, left: &NodeDigest, right: &NodeDigest) -> Result<Vec<u8>, NodeError> {
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        Ok(hasher.finalize().to_vec())
    }
}

/// Random leaves for the [`DigestNodeDefinition`].
pub fn random_digest_leaves(n: usize) -> Vec<NodeDigest> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen::<NodeDigest>()).collect()
}
