use ferry_primitives::{
    buf::Buf32,
    hash::{keccak, keccak_concat},
};

/// Hash of an empty subtree, the same at every height.
pub fn default_leaf() -> Buf32 {
    keccak([0u8])
}

/// Hash of a shortcut leaf placed at `height` levels below the root.
pub fn leaf_hash(key: &Buf32, value: &Buf32, height: u16) -> Buf32 {
    keccak_concat(&[key.as_slice(), value.as_slice(), &height.to_be_bytes()])
}

pub fn node_hash(left: &Buf32, right: &Buf32) -> Buf32 {
    keccak_concat(&[left.as_slice(), right.as_slice()])
}

/// Bit `depth` of a bit string, most significant bit of the first byte first.
///
/// `depth` must be below `8 * bits.len()`.
pub(crate) fn bit_at(bits: &[u8], depth: usize) -> bool {
    bits[depth / 8] & (0x80 >> (depth % 8)) != 0
}

pub(crate) fn set_bit(bits: &mut [u8], depth: usize) {
    bits[depth / 8] |= 0x80 >> (depth % 8);
}
