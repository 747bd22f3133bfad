//! Deposit records emitted when a pool locks an asset.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{asset::Asset, buf::Buf20, pool::PoolDescriptor};

/// Deposit nonces start at 1 and increase by one per accepted deposit.
pub type DepositNonce = u64;

/// What a pool reports to the deposit notifier after locking an asset.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
pub struct DepositNotice {
    pub depositor: Buf20,
    pub receiver: Buf20,
    pub asset: Asset,
}

/// Persisted record of an accepted deposit.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
pub struct DepositRecord {
    nonce: DepositNonce,
    pool: Buf20,
    descriptor: PoolDescriptor,
    depositor: Buf20,
    receiver: Buf20,
    asset: Asset,
}

impl DepositRecord {
    pub fn new(nonce: DepositNonce, descriptor: PoolDescriptor, notice: DepositNotice) -> Self {
        Self {
            nonce,
            pool: descriptor.identity(),
            descriptor,
            depositor: notice.depositor,
            receiver: notice.receiver,
            asset: notice.asset,
        }
    }

    pub fn nonce(&self) -> DepositNonce {
        self.nonce
    }

    /// Identity of the pool that locked the asset.
    pub fn pool(&self) -> Buf20 {
        self.pool
    }

    pub fn descriptor(&self) -> &PoolDescriptor {
        &self.descriptor
    }

    pub fn depositor(&self) -> Buf20 {
        self.depositor
    }

    /// Ledger account the deposit is credited to.
    pub fn receiver(&self) -> Buf20 {
        self.receiver
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }
}
