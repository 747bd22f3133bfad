//! In-memory sparse Merkle tree producing proofs in the verifier's format.
//!
//! This is a reference prover for tests and offline tooling. It rehashes the
//! affected subtrees on every call and keeps no node cache.

use std::collections::BTreeMap;

use ferry_primitives::buf::Buf32;

use crate::{
    hasher::{bit_at, default_leaf, leaf_hash, node_hash, set_bit},
    proof::SparseMerkleProof,
};

#[derive(Clone, Debug, Default)]
pub struct SparseMerkleTree {
    leaves: BTreeMap<Buf32, Buf32>,
}

impl SparseMerkleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: Buf32, value: Buf32) -> Option<Buf32> {
        self.leaves.insert(key, value)
    }

    pub fn remove(&mut self, key: &Buf32) -> Option<Buf32> {
        self.leaves.remove(key)
    }

    pub fn get(&self, key: &Buf32) -> Option<&Buf32> {
        self.leaves.get(key)
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn root(&self) -> Buf32 {
        let leaves = self.sorted_leaves();
        subtree_hash(&leaves, 0, &default_leaf())
    }

    /// Produces an inclusion proof if `key` is present and an exclusion proof
    /// otherwise.
    pub fn prove(&self, key: &Buf32) -> SparseMerkleProof {
        let empty = default_leaf();
        let leaves = self.sorted_leaves();
        let mut subtree = &leaves[..];
        let mut depth: u16 = 0;
        let mut siblings = Vec::new();

        let (included, proof_key, proof_value) = loop {
            match subtree {
                [] => break (false, Buf32::zero(), Buf32::zero()),
                [(leaf_key, leaf_value)] => break (leaf_key == key, *leaf_key, *leaf_value),
                _ => {
                    let (left, right) = split(subtree, depth);
                    let (next, other) = if bit_at(key.as_slice(), depth as usize) {
                        (right, left)
                    } else {
                        (left, right)
                    };
                    siblings.push(subtree_hash(other, depth + 1, &empty));
                    subtree = next;
                    depth += 1;
                }
            }
        };

        let mut bitmap = vec![0u8; (depth as usize).div_ceil(8)];
        let mut audit_path = Vec::new();
        for (level, sibling) in siblings.into_iter().enumerate() {
            if sibling != empty {
                set_bit(&mut bitmap, level);
                audit_path.push(sibling);
            }
        }

        SparseMerkleProof::from_parts(
            included,
            depth,
            *key,
            proof_key,
            proof_value,
            bitmap,
            audit_path,
        )
    }

    fn sorted_leaves(&self) -> Vec<(Buf32, Buf32)> {
        self.leaves.iter().map(|(k, v)| (*k, *v)).collect()
    }
}

/// Splits leaves sorted by key into those whose bit `depth` is clear and
/// those where it is set.
fn split(leaves: &[(Buf32, Buf32)], depth: u16) -> (&[(Buf32, Buf32)], &[(Buf32, Buf32)]) {
    let at = leaves.partition_point(|(k, _)| !bit_at(k.as_slice(), depth as usize));
    leaves.split_at(at)
}

fn subtree_hash(leaves: &[(Buf32, Buf32)], depth: u16, empty: &Buf32) -> Buf32 {
    match leaves {
        [] => *empty,
        [(key, value)] => leaf_hash(key, value, depth),
        _ => {
            let (left, right) = split(leaves, depth);
            node_hash(
                &subtree_hash(left, depth + 1, empty),
                &subtree_hash(right, depth + 1, empty),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_with_prefix(prefix: u8) -> Buf32 {
        let mut k = [0u8; 32];
        k[0] = prefix;
        Buf32::new(k)
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(SparseMerkleTree::new().root(), default_leaf());
    }

    #[test]
    fn test_single_leaf_sits_at_root() {
        let mut tree = SparseMerkleTree::new();
        let (k, v) = (key_with_prefix(0xaa), Buf32::new([1; 32]));
        tree.insert(k, v);
        assert_eq!(tree.root(), leaf_hash(&k, &v, 0));

        let proof = tree.prove(&k);
        assert!(proof.is_included());
        assert_eq!(proof.key_height(), 0);
        assert!(proof.audit_path().is_empty());
    }

    #[test]
    fn test_shortcut_depth() {
        // 0x00.. and 0x20.. first differ at bit 2.
        let mut tree = SparseMerkleTree::new();
        let a = key_with_prefix(0x00);
        let b = key_with_prefix(0x20);
        tree.insert(a, Buf32::new([1; 32]));
        tree.insert(b, Buf32::new([2; 32]));

        let proof = tree.prove(&a);
        assert_eq!(proof.key_height(), 3);
        assert_eq!(proof.audit_path().len(), 1);

        let expected = node_hash(
            &node_hash(
                &node_hash(
                    &leaf_hash(&a, &Buf32::new([1; 32]), 3),
                    &leaf_hash(&b, &Buf32::new([2; 32]), 3),
                ),
                &default_leaf(),
            ),
            &default_leaf(),
        );
        assert_eq!(tree.root(), expected);
    }

    #[test]
    fn test_remove_restores_root() {
        let mut tree = SparseMerkleTree::new();
        tree.insert(key_with_prefix(1), Buf32::new([1; 32]));
        let before = tree.root();
        tree.insert(key_with_prefix(2), Buf32::new([2; 32]));
        assert_ne!(tree.root(), before);
        tree.remove(&key_with_prefix(2));
        assert_eq!(tree.root(), before);
        assert_eq!(tree.len(), 1);
    }
}
