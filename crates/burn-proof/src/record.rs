use alloy_primitives::U256;
use ferry_primitives::{
    asset::Asset,
    buf::{Buf20, Buf32},
    hash::keccak,
    pool::{AssetClass, LocalLayout, Locality, PoolDescriptor},
};

use crate::codec::encode;

/// Which burn struct a pool accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecordShape {
    locality: Locality,
    asset_class: AssetClass,
}

impl RecordShape {
    pub fn new(locality: Locality, asset_class: AssetClass) -> Self {
        Self {
            locality,
            asset_class,
        }
    }

    pub fn for_pool(descriptor: &PoolDescriptor) -> Self {
        Self::new(descriptor.locality(), descriptor.asset_class())
    }

    pub fn locality(&self) -> Locality {
        self.locality
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// Whether records carry token id and amount arrays.
    pub fn is_batch(&self) -> bool {
        self.asset_class == AssetClass::MultiToken
    }
}

/// Burn of a host-chain asset, keyed by the ledger transaction that burnt it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalBurnRecord {
    pub chain_id: u32,
    pub owner: Buf20,
    pub asset: Asset,
    /// Present exactly for [`LocalLayout::WithFee`] records. Informational
    /// only, the asset is released in full.
    pub fee: Option<U256>,
    pub tx_hash: Buf32,
}

impl LocalBurnRecord {
    pub fn layout(&self) -> LocalLayout {
        if self.fee.is_some() {
            LocalLayout::WithFee
        } else {
            LocalLayout::ReceiverAddressed
        }
    }
}

/// Burn of a ledger-native asset, keyed by its UTXO id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeBurnRecord {
    pub chain_id: u32,
    pub owner: Buf20,
    pub utxo_id: Buf32,
    pub asset: Asset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BurnRecord {
    Local(LocalBurnRecord),
    Native(NativeBurnRecord),
}

impl BurnRecord {
    pub fn chain_id(&self) -> u32 {
        match self {
            Self::Local(r) => r.chain_id,
            Self::Native(r) => r.chain_id,
        }
    }

    pub fn owner(&self) -> Buf20 {
        match self {
            Self::Local(r) => r.owner,
            Self::Native(r) => r.owner,
        }
    }

    /// The asset released when the record is redeemed.
    pub fn asset(&self) -> &Asset {
        match self {
            Self::Local(r) => &r.asset,
            Self::Native(r) => &r.asset,
        }
    }

    /// Shape of the record, as accepted by pools of matching descriptor.
    pub fn shape(&self) -> RecordShape {
        let locality = match self {
            Self::Local(r) => Locality::Local(r.layout()),
            Self::Native(_) => Locality::Native,
        };
        RecordShape::new(locality, self.asset().class())
    }
}

/// Key the record is stored under in the ledger's state trie, and the key it
/// is tracked under once redeemed.
pub fn key_of(record: &BurnRecord) -> Buf32 {
    match record {
        BurnRecord::Local(r) => keccak(r.tx_hash),
        BurnRecord::Native(r) => keccak(r.utxo_id),
    }
}

/// Hash of the canonical record encoding, the value stored at [`key_of`].
pub fn value_hash(record: &BurnRecord) -> Buf32 {
    keccak(encode(record))
}
