//! Sparse Merkle proofs over 256-bit keys.
//!
//! The trie is a binary tree of depth 256 addressed by the bits of a 32-byte
//! key, most significant bit first. A subtree holding a single leaf is
//! collapsed into a shortcut leaf at the depth where it becomes alone, and a
//! subtree holding nothing hashes to [`default_leaf`]. Proofs are
//! self-describing audit paths, see [`SparseMerkleProof`] for the wire format.

mod errors;
mod hasher;
mod proof;
pub mod prover;
mod verify;

pub use errors::{MerkleProofError, ProofDecodeError};
pub use hasher::{default_leaf, leaf_hash, node_hash};
pub use proof::{SparseMerkleProof, MAX_KEY_HEIGHT, PROOF_HEADER_LEN};
pub use verify::{verify, verify_exclusion, verify_inclusion};
