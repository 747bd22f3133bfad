use alloy_primitives::{Address, B256};

use crate::macros::internal;

/// A 20-byte buffer, used for account and contract addresses.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Buf20(pub [u8; 20]);

internal::impl_buf_core!(Buf20, 20);
internal::impl_buf_fmt!(Buf20, 20);
internal::impl_buf_borsh!(Buf20, 20);
internal::impl_buf_arbitrary!(Buf20, 20);
internal::impl_buf_serde!(Buf20, 20);

/// A 32-byte buffer, used for hashes, roots and trie keys.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Buf32(pub [u8; 32]);

internal::impl_buf_core!(Buf32, 32);
internal::impl_buf_fmt!(Buf32, 32);
internal::impl_buf_borsh!(Buf32, 32);
internal::impl_buf_arbitrary!(Buf32, 32);
internal::impl_buf_serde!(Buf32, 32);

impl From<Address> for Buf20 {
    fn from(value: Address) -> Self {
        Self(value.into_array())
    }
}

impl From<Buf20> for Address {
    fn from(value: Buf20) -> Self {
        Address::new(value.0)
    }
}

impl From<B256> for Buf32 {
    fn from(value: B256) -> Self {
        Self(value.0)
    }
}

impl From<Buf32> for B256 {
    fn from(value: Buf32) -> Self {
        B256::new(value.0)
    }
}
