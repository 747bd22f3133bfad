use ferry_primitives::buf::Buf32;

use crate::{
    errors::ProofDecodeError,
    hasher::{bit_at, default_leaf, leaf_hash, node_hash},
};

/// Depth of the trie, and so the largest valid key height.
pub const MAX_KEY_HEIGHT: u16 = 256;

/// Length of the fixed-size part of an encoded proof.
pub const PROOF_HEADER_LEN: usize = 1 + 2 + 32 + 32 + 32 + 2 + 2;

/// Audit path for a single key.
///
/// Encoded as, with big-endian integers:
///
/// ```text
/// included: u8 | key_height: u16 | key: [32] | proof_key: [32] |
/// proof_value: [32] | bitmap_len: u16 | path_len: u16 |
/// bitmap: [bitmap_len] | audit_path: [32 * path_len]
/// ```
///
/// `key_height` is the depth of the terminal node on the path to `key`. The
/// terminal is either the leaf `(proof_key, proof_value)` or, for exclusion
/// proofs with a zero `proof_key` and `proof_value`, an empty subtree. Bit `d`
/// of the bitmap (MSB first) is set when the sibling at depth `d` is non-empty,
/// in which case its hash is the next entry of `audit_path`. The audit path is
/// ordered from the root towards the leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseMerkleProof {
    included: bool,
    key_height: u16,
    key: Buf32,
    proof_key: Buf32,
    proof_value: Buf32,
    bitmap: Vec<u8>,
    audit_path: Vec<Buf32>,
}

impl SparseMerkleProof {
    /// Assembles a proof from parts already known to be consistent.
    pub(crate) fn from_parts(
        included: bool,
        key_height: u16,
        key: Buf32,
        proof_key: Buf32,
        proof_value: Buf32,
        bitmap: Vec<u8>,
        audit_path: Vec<Buf32>,
    ) -> Self {
        Self {
            included,
            key_height,
            key,
            proof_key,
            proof_value,
            bitmap,
            audit_path,
        }
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    pub fn key_height(&self) -> u16 {
        self.key_height
    }

    /// The key the proof speaks about.
    pub fn key(&self) -> &Buf32 {
        &self.key
    }

    /// Key of the leaf found at the terminal node.
    pub fn proof_key(&self) -> &Buf32 {
        &self.proof_key
    }

    /// Value of the leaf found at the terminal node.
    pub fn proof_value(&self) -> &Buf32 {
        &self.proof_value
    }

    pub fn audit_path(&self) -> &[Buf32] {
        &self.audit_path
    }

    /// Whether the terminal is an empty subtree rather than a leaf.
    pub fn terminates_empty(&self) -> bool {
        !self.included && self.proof_key.is_zero() && self.proof_value.is_zero()
    }

    /// Parses and structurally validates encoded proof bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProofDecodeError> {
        if bytes.len() < PROOF_HEADER_LEN {
            return Err(ProofDecodeError::TooShort(bytes.len()));
        }

        let mut reader = Reader::new(bytes);
        let included = match reader.u8() {
            0 => false,
            1 => true,
            flag => return Err(ProofDecodeError::InvalidInclusionFlag(flag)),
        };
        let key_height = reader.u16();
        let key = reader.buf32();
        let proof_key = reader.buf32();
        let proof_value = reader.buf32();
        let bitmap_len = reader.u16() as usize;
        let path_len = reader.u16() as usize;

        let expected = PROOF_HEADER_LEN + bitmap_len + 32 * path_len;
        if bytes.len() != expected {
            return Err(ProofDecodeError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        if key_height > MAX_KEY_HEIGHT {
            return Err(ProofDecodeError::KeyHeightOutOfRange(key_height));
        }

        let required_bitmap = (key_height as usize).div_ceil(8);
        if bitmap_len != required_bitmap {
            return Err(ProofDecodeError::BitmapLength {
                expected: required_bitmap,
                actual: bitmap_len,
            });
        }

        let bitmap = reader.take(bitmap_len).to_vec();
        let total_bits = bitmap_len * 8;
        if (key_height as usize..total_bits).any(|d| bit_at(&bitmap, d)) {
            return Err(ProofDecodeError::StrayBitmapBits);
        }

        let marked = bitmap.iter().map(|b| b.count_ones() as usize).sum::<usize>();
        if marked != path_len {
            return Err(ProofDecodeError::AuditPathLength {
                expected: marked,
                actual: path_len,
            });
        }

        if included && key != proof_key {
            return Err(ProofDecodeError::InclusionKeyMismatch);
        }

        let audit_path = (0..path_len).map(|_| reader.buf32()).collect();

        Ok(Self {
            included,
            key_height,
            key,
            proof_key,
            proof_value,
            bitmap,
            audit_path,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(PROOF_HEADER_LEN + self.bitmap.len() + 32 * self.audit_path.len());
        out.push(u8::from(self.included));
        out.extend_from_slice(&self.key_height.to_be_bytes());
        out.extend_from_slice(self.key.as_slice());
        out.extend_from_slice(self.proof_key.as_slice());
        out.extend_from_slice(self.proof_value.as_slice());
        out.extend_from_slice(&(self.bitmap.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.audit_path.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.bitmap);
        for hash in &self.audit_path {
            out.extend_from_slice(hash.as_slice());
        }
        out
    }

    /// Recomputes the root implied by the proof.
    ///
    /// The walk starts at the terminal node and climbs one level at a time,
    /// taking siblings from the end of the audit path. Every proof holds one
    /// path entry per set bitmap bit, checked by [`Self::from_bytes`].
    pub fn compute_root(&self) -> Buf32 {
        let empty = default_leaf();
        let mut node = if self.terminates_empty() {
            empty
        } else {
            leaf_hash(&self.proof_key, &self.proof_value, self.key_height)
        };

        let mut path = self.audit_path.iter().rev();
        for depth in (0..self.key_height).rev() {
            let level = depth as usize;
            let sibling = if bit_at(&self.bitmap, level) {
                path.next().copied().unwrap_or(empty)
            } else {
                empty
            };

            node = if bit_at(self.key.as_slice(), level) {
                node_hash(&sibling, &node)
            } else {
                node_hash(&node, &sibling)
            };
        }

        node
    }
}

/// Cursor over a buffer whose length has already been checked.
struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn take(&mut self, n: usize) -> &'a [u8] {
        let (head, rest) = self.bytes.split_at(n);
        self.bytes = rest;
        head
    }

    fn u8(&mut self) -> u8 {
        self.take(1)[0]
    }

    fn u16(&mut self) -> u16 {
        let b = self.take(2);
        u16::from_be_bytes([b[0], b[1]])
    }

    fn buf32(&mut self) -> Buf32 {
        let mut out = [0u8; 32];
        out.copy_from_slice(self.take(32));
        Buf32::new(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::set_bit;

    fn sample_proof() -> SparseMerkleProof {
        let mut bitmap = vec![0u8; 2];
        set_bit(&mut bitmap, 0);
        set_bit(&mut bitmap, 9);
        let key = Buf32::new([0xf0; 32]);
        SparseMerkleProof::from_parts(
            true,
            12,
            key,
            key,
            Buf32::new([3; 32]),
            bitmap,
            vec![Buf32::new([4; 32]), Buf32::new([5; 32])],
        )
    }

    #[test]
    fn test_encoding_layout() {
        let proof = sample_proof();
        let bytes = proof.to_bytes();
        assert_eq!(bytes.len(), PROOF_HEADER_LEN + 2 + 64);
        assert_eq!(bytes[0], 1);
        assert_eq!(&bytes[1..3], &[0, 12]);
        assert_eq!(SparseMerkleProof::from_bytes(&bytes).unwrap(), proof);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            SparseMerkleProof::from_bytes(&[1; 10]),
            Err(ProofDecodeError::TooShort(10))
        );
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = sample_proof().to_bytes();
        bytes.push(0);
        assert!(matches!(
            SparseMerkleProof::from_bytes(&bytes),
            Err(ProofDecodeError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_bad_flag() {
        let mut bytes = sample_proof().to_bytes();
        bytes[0] = 2;
        assert_eq!(
            SparseMerkleProof::from_bytes(&bytes),
            Err(ProofDecodeError::InvalidInclusionFlag(2))
        );
    }

    #[test]
    fn test_key_height_out_of_range() {
        let mut bytes = sample_proof().to_bytes();
        bytes[1..3].copy_from_slice(&257u16.to_be_bytes());
        assert_eq!(
            SparseMerkleProof::from_bytes(&bytes),
            Err(ProofDecodeError::KeyHeightOutOfRange(257))
        );
    }

    #[test]
    fn test_stray_bitmap_bit() {
        let mut bytes = sample_proof().to_bytes();
        // Bit 15 lies past key height 12.
        bytes[PROOF_HEADER_LEN + 1] |= 0x01;
        assert_eq!(
            SparseMerkleProof::from_bytes(&bytes),
            Err(ProofDecodeError::StrayBitmapBits)
        );
    }

    #[test]
    fn test_path_count_must_match_bitmap() {
        let mut bytes = sample_proof().to_bytes();
        // Clear bit 9, leaving one marked level for two hashes.
        bytes[PROOF_HEADER_LEN + 1] &= !0x40;
        assert_eq!(
            SparseMerkleProof::from_bytes(&bytes),
            Err(ProofDecodeError::AuditPathLength {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_empty_terminal_at_root() {
        let proof = SparseMerkleProof::from_parts(
            false,
            0,
            Buf32::new([9; 32]),
            Buf32::zero(),
            Buf32::zero(),
            Vec::new(),
            Vec::new(),
        );
        assert!(proof.terminates_empty());
        assert_eq!(proof.compute_root(), default_leaf());
    }
}
