use ferry_burn_proof::BurnCodecError;
use ferry_db_types::DbError;
use ferry_merkle::MerkleProofError;
use ferry_primitives::{
    asset::AssetShapeError,
    buf::{Buf20, Buf32},
    pool::AssetClass,
    U256,
};
use ferry_snapshots::SnapshotError;
use thiserror::Error;

/// Failures of the asset transfer capability. A failed call moves nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("insufficient balance of token {token_id} for {account:?}")]
    InsufficientBalance { account: Buf20, token_id: U256 },

    #[error("balance overflow for token {0}")]
    Overflow(U256),

    #[error("transfer failed: {0}")]
    TransferFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The caller's identity doesn't match the descriptor it reported.
    #[error("caller {0:?} is not a bridge pool")]
    OnlyBridgePool(Buf20),

    #[error("db: {0}")]
    Db(#[from] DbError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgePoolError {
    #[error("caller {0:?} is not the bridge router")]
    OnlyBridgeRouter(Buf20),

    #[error("snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("burn record: {0}")]
    Codec(#[from] BurnCodecError),

    #[error("invalid asset: {0}")]
    InvalidAsset(#[from] AssetShapeError),

    #[error("pool holds {expected:?} assets, got {got:?}")]
    AssetClassMismatch {
        expected: AssetClass,
        got: AssetClass,
    },

    #[error("proof: {0}")]
    Proof(#[from] MerkleProofError),

    /// The proven leaf value is not the hash of the submitted record.
    #[error("burn record does not match the proven utxo")]
    UtxoDoesNotMatch,

    #[error("receiver {receiver:?} is not the owner {owner:?} of the burn record")]
    ReceiverIsNotOwnerOnProofOfBurnUtxo { owner: Buf20, receiver: Buf20 },

    #[error("burn record owner {owner:?} does not match receiver {receiver:?}")]
    UtxoAccountDoesNotMatchReceiver { owner: Buf20, receiver: Buf20 },

    #[error("burn record chain id {got} does not match pool chain id {expected}")]
    ChainIdDoesNotMatch { expected: u32, got: u32 },

    #[error("proven key does not match the record's utxo id")]
    MerkleProofKeyDoesNotMatchUtxoId,

    #[error("burn record {0} was already withdrawn")]
    UtxoAlreadyWithdrawn(Buf32),

    #[error("asset: {0}")]
    Asset(#[from] AssetError),

    #[error("notify: {0}")]
    Notify(#[from] NotifyError),

    #[error("db: {0}")]
    Db(#[from] DbError),
}
