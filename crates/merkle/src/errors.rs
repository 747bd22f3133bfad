use thiserror::Error;

/// Structural problems found while decoding proof bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofDecodeError {
    #[error("proof is {0} bytes, shorter than the fixed header")]
    TooShort(usize),

    #[error("proof is {actual} bytes but its header declares {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("inclusion flag must be 0 or 1, got {0}")]
    InvalidInclusionFlag(u8),

    #[error("key height {0} exceeds the trie depth")]
    KeyHeightOutOfRange(u16),

    #[error("bitmap is {actual} bytes, key height requires {expected}")]
    BitmapLength { expected: usize, actual: usize },

    #[error("bitmap marks levels below the key height")]
    StrayBitmapBits,

    #[error("audit path has {actual} hashes, bitmap marks {expected}")]
    AuditPathLength { expected: usize, actual: usize },

    #[error("inclusion proof for a different key than the leaf it carries")]
    InclusionKeyMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleProofError {
    #[error("malformed proof: {0}")]
    Malformed(#[from] ProofDecodeError),

    #[error("proof does not match trie root")]
    ProofDoesNotMatchTrieRoot,

    #[error("proof does not show exclusion")]
    NotExclusionProof,
}
