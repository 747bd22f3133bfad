//! Pool descriptors and the identity derived from them.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{
    buf::{Buf20, Buf32},
    hash::keccak_concat,
};

/// Domain separator mixed into every pool identity.
const POOL_IDENTITY_DOMAIN: &[u8] = b"ferry/pool-identity";

/// Kind of asset a pool custodies.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Fungible,
    NonFungible,
    MultiToken,
}

impl AssetClass {
    const fn code(self) -> u8 {
        match self {
            Self::Fungible => 1,
            Self::NonFungible => 2,
            Self::MultiToken => 3,
        }
    }
}

/// Layout of burn records redeemed at a local pool.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LocalLayout {
    /// Records carry a fee field; the owner must match the claimant.
    WithFee,

    /// Records omit the fee and are addressed to their receiver.
    ReceiverAddressed,
}

/// Which side of the bridge the custodied asset is native to.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Locality {
    /// Host-chain assets bridged out to the ledger and back.
    Local(LocalLayout),

    /// Ledger assets brought onto the host chain. Only the router may call
    /// into these pools.
    Native,
}

impl Locality {
    const fn code(self) -> u8 {
        match self {
            Self::Local(LocalLayout::WithFee) => 1,
            Self::Local(LocalLayout::ReceiverAddressed) => 2,
            Self::Native => 3,
        }
    }

    pub fn is_native(self) -> bool {
        matches!(self, Self::Native)
    }
}

/// Immutable binding of a pool to the token it custodies.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
pub struct PoolDescriptor {
    token_contract: Buf20,
    asset_class: AssetClass,
    locality: Locality,
    chain_id: u32,
    version: u32,
}

impl PoolDescriptor {
    pub fn new(
        token_contract: Buf20,
        asset_class: AssetClass,
        locality: Locality,
        chain_id: u32,
        version: u32,
    ) -> Self {
        Self {
            token_contract,
            asset_class,
            locality,
            chain_id,
            version,
        }
    }

    pub fn token_contract(&self) -> Buf20 {
        self.token_contract
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    pub fn locality(&self) -> Locality {
        self.locality
    }

    pub fn chain_id(&self) -> u32 {
        self.chain_id
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// One byte tag combining locality (high nibble) and asset class (low
    /// nibble).
    pub fn tag(&self) -> u8 {
        (self.locality.code() << 4) | self.asset_class.code()
    }

    /// Salt identifying the pool's capability independent of its version.
    pub fn capability_salt(&self) -> Buf32 {
        keccak_concat(&[
            self.token_contract.as_slice(),
            &[self.tag()],
            &self.chain_id.to_be_bytes(),
        ])
    }

    /// Address-sized identity of the pool.
    ///
    /// This is recomputed by the deposit notifier to authenticate callers, so
    /// it depends only on the descriptor.
    pub fn identity(&self) -> Buf20 {
        let digest = keccak_concat(&[
            POOL_IDENTITY_DOMAIN,
            self.capability_salt().as_slice(),
            &self.version.to_be_bytes(),
        ]);
        let mut out = [0u8; 20];
        out.copy_from_slice(&digest.0[12..]);
        Buf20::new(out)
    }
}
