//! Module for database local types

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use ferry_primitives::{buf::Buf20, snapshot::Epoch};
use serde::{Deserialize, Serialize};

/// Bookkeeping for the snapshot ring, stored next to the slots it describes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
pub struct RingMeta {
    /// Number of slots, fixed when the ring is first opened.
    pub capacity: u32,

    /// Epoch of the first snapshot ever written.
    pub first_epoch: Option<Epoch>,

    /// Epoch of the most recently written snapshot.
    pub head_epoch: Option<Epoch>,
}

impl RingMeta {
    pub fn new_empty(capacity: u32) -> Self {
        Self {
            capacity,
            first_epoch: None,
            head_epoch: None,
        }
    }
}

/// Stored against a redeemed burn record key.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
pub struct RedemptionEntry {
    /// Epoch of the snapshot the burn was proven against.
    pub epoch: Epoch,

    /// Identity of the pool that released the asset.
    pub pool: Buf20,

    /// Account the asset was released to.
    pub receiver: Buf20,
}

impl RedemptionEntry {
    pub fn new(epoch: Epoch, pool: Buf20, receiver: Buf20) -> Self {
        Self {
            epoch,
            pool,
            receiver,
        }
    }
}
