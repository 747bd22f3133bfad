use ferry_primitives::buf::Buf32;

use crate::{errors::MerkleProofError, hasher::bit_at, proof::SparseMerkleProof};

/// Verifies that encoded `proof` shows `key` holding `expected_value` under
/// `root`.
pub fn verify(
    root: &Buf32,
    proof: &[u8],
    key: &Buf32,
    expected_value: &Buf32,
) -> Result<(), MerkleProofError> {
    let proof = SparseMerkleProof::from_bytes(proof)?;
    verify_inclusion(root, &proof, key, expected_value)
}

/// Verifies a decoded inclusion proof.
///
/// The proof must be flagged as an inclusion proof and carry exactly the leaf
/// `(key, expected_value)`. Anything else is reported the same way as a root
/// mismatch.
pub fn verify_inclusion(
    root: &Buf32,
    proof: &SparseMerkleProof,
    key: &Buf32,
    expected_value: &Buf32,
) -> Result<(), MerkleProofError> {
    let carries_leaf =
        proof.key() == key && proof.proof_key() == key && proof.proof_value() == expected_value;
    if !proof.is_included() || !carries_leaf {
        return Err(MerkleProofError::ProofDoesNotMatchTrieRoot);
    }

    check_root(root, proof)
}

/// Verifies that `key` holds no value under `root`.
///
/// Accepts proofs ending in an empty subtree on the path to `key`, or in a
/// leaf for a different key that shares the first `key_height` bits.
pub fn verify_exclusion(
    root: &Buf32,
    proof: &SparseMerkleProof,
    key: &Buf32,
) -> Result<(), MerkleProofError> {
    if proof.is_included() {
        return Err(MerkleProofError::NotExclusionProof);
    }

    if proof.key() != key {
        return Err(MerkleProofError::ProofDoesNotMatchTrieRoot);
    }

    if !proof.terminates_empty() {
        if proof.proof_key() == key {
            return Err(MerkleProofError::NotExclusionProof);
        }

        let height = proof.key_height() as usize;
        let other = proof.proof_key().as_slice();
        let shares_prefix = (0..height).all(|d| bit_at(key.as_slice(), d) == bit_at(other, d));
        if !shares_prefix {
            return Err(MerkleProofError::ProofDoesNotMatchTrieRoot);
        }
    }

    check_root(root, proof)
}

fn check_root(root: &Buf32, proof: &SparseMerkleProof) -> Result<(), MerkleProofError> {
    if proof.compute_root() != *root {
        return Err(MerkleProofError::ProofDoesNotMatchTrieRoot);
    }
    Ok(())
}
