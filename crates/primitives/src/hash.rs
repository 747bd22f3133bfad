//! Keccak helpers returning [`Buf32`].

use alloy_primitives::{keccak256, Keccak256};

use crate::buf::Buf32;

/// Keccak-256 of a single byte string.
pub fn keccak(data: impl AsRef<[u8]>) -> Buf32 {
    Buf32::from(keccak256(data))
}

/// Keccak-256 over the concatenation of `parts`, without allocating the
/// concatenated buffer.
pub fn keccak_concat(parts: &[&[u8]]) -> Buf32 {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    Buf32::from(hasher.finalize())
}
