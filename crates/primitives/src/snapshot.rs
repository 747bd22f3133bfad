//! Committed ledger snapshots.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::buf::Buf32;

/// Index of a committed snapshot.
///
/// Epochs are strictly increasing across commitments. Epoch 0 is reserved and
/// never refers to a stored snapshot.
pub type Epoch = u64;

/// Reserved epoch value that is never committed.
pub const NULL_EPOCH: Epoch = 0;

/// A commitment made by the ledger binding an epoch to its state root and the
/// header metadata it was produced with.
///
/// Withdrawals are proven against [`Snapshot::state_root`]; the remaining roots
/// are carried so the record can be audited against the ledger's headers.
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
pub struct Snapshot {
    /// Epoch this snapshot was committed at.
    pub epoch: Epoch,

    /// Ledger block height the roots were taken from.
    pub height: u32,

    /// Ledger chain the snapshot belongs to.
    pub chain_id: u32,

    /// Root of the previous ledger header.
    pub prev_root: Buf32,

    /// Transaction root of the ledger block.
    pub tx_root: Buf32,

    /// State root that burn proofs are verified against.
    pub state_root: Buf32,

    /// Root of the ledger header itself.
    pub header_root: Buf32,

    /// Host timestamp (unix seconds) at which the snapshot was committed.
    pub committed_at: u64,
}

impl Snapshot {
    /// Builds a snapshot carrying only an epoch and a state root, zeroing the
    /// header metadata.
    pub fn with_state_root(epoch: Epoch, state_root: Buf32) -> Self {
        Self {
            epoch,
            height: 0,
            chain_id: 0,
            prev_root: Buf32::zero(),
            tx_root: Buf32::zero(),
            state_root,
            header_root: Buf32::zero(),
            committed_at: 0,
        }
    }
}
