//! Trait definitions for low level database interfaces.
//!
//! Operations are NOT VALIDATED at this level beyond what is needed to keep
//! the stored data consistent. Ring arithmetic, proof checks and authorization
//! live with the callers.

use std::sync::Arc;

use ferry_primitives::{
    buf::Buf32,
    deposit::{DepositNonce, DepositRecord},
    snapshot::Snapshot,
};

use crate::{
    types::{RedemptionEntry, RingMeta},
    DbResult,
};

/// Common database backend interface that callers can be parameterized over
/// instead of each individual trait.
pub trait DatabaseBackend: Send + Sync {
    fn snapshot_db(&self) -> Arc<impl SnapshotDatabase>;
    fn withdrawal_db(&self) -> Arc<impl WithdrawalDatabase>;
    fn deposit_db(&self) -> Arc<impl DepositDatabase>;
}

/// Slots of the snapshot ring and the metadata describing them.
pub trait SnapshotDatabase: Send + Sync + 'static {
    /// Gets the ring metadata, if the ring was ever initialized.
    fn get_ring_meta(&self) -> DbResult<Option<RingMeta>>;

    /// Writes the metadata of a fresh ring. Errors with
    /// [`DbError::EntryAlreadyExists`](crate::DbError::EntryAlreadyExists) if
    /// metadata is already present.
    fn init_ring_meta(&self, meta: RingMeta) -> DbResult<()>;

    /// Atomically overwrites `slot` with `snapshot` and replaces the ring
    /// metadata with `meta`. Either both writes land or neither does.
    fn put_snapshot(&self, slot: u32, snapshot: Snapshot, meta: RingMeta) -> DbResult<()>;

    /// Gets whatever snapshot currently occupies `slot`.
    fn get_snapshot_slot(&self, slot: u32) -> DbResult<Option<Snapshot>>;
}

/// Insert-only set of redeemed burn record keys.
///
/// There is one set for the whole bridge. A key redeemed at any pool is
/// redeemed everywhere.
pub trait WithdrawalDatabase: Send + Sync + 'static {
    fn is_redeemed(&self, key: Buf32) -> DbResult<bool>;

    /// Gets the entry stored for a redeemed key.
    fn get_redemption(&self, key: Buf32) -> DbResult<Option<RedemptionEntry>>;

    /// Marks `key` redeemed. Errors with
    /// [`DbError::EntryAlreadyExists`](crate::DbError::EntryAlreadyExists) if
    /// it already is, leaving the stored entry untouched.
    fn put_redemption(&self, key: Buf32, entry: RedemptionEntry) -> DbResult<()>;

    /// Removes a redemption mark, returning whether one was present.
    ///
    /// Only used to roll back a mark when releasing the asset failed.
    fn del_redemption(&self, key: Buf32) -> DbResult<bool>;

    /// Number of redeemed keys.
    fn count_redemptions(&self) -> DbResult<u64>;
}

/// Append-only log of accepted deposits.
pub trait DepositDatabase: Send + Sync + 'static {
    /// Appends a deposit. The record's nonce must be exactly one past the last
    /// stored nonce, or 1 for the first deposit, otherwise errors with
    /// [`DbError::OooInsert`](crate::DbError::OooInsert).
    fn put_deposit(&self, record: DepositRecord) -> DbResult<()>;

    fn get_deposit(&self, nonce: DepositNonce) -> DbResult<Option<DepositRecord>>;

    /// Gets the nonce of the most recent deposit.
    fn get_last_deposit_nonce(&self) -> DbResult<Option<DepositNonce>>;
}
