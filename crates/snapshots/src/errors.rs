use ferry_db_types::DbError;
use ferry_primitives::{buf::Buf20, snapshot::Epoch};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// Epoch 0 is reserved.
    #[error("epoch 0 is not a valid snapshot epoch")]
    InvalidEpoch,

    #[error("snapshot carries epoch {snapshot_epoch} but was written at {epoch}")]
    EpochMismatch { epoch: Epoch, snapshot_epoch: Epoch },

    #[error("expected epoch {expected}, got {got}")]
    NonMonotonicEpoch { expected: Epoch, got: Epoch },

    #[error("epoch {0} overflows the epoch counter")]
    EpochOverflow(Epoch),

    /// The epoch was committed but its slot has since been reused.
    #[error("epoch {epoch} was evicted (oldest resident {oldest})")]
    EpochEvicted { epoch: Epoch, oldest: Epoch },

    /// The epoch was never committed.
    #[error("epoch {0} was never committed")]
    EpochUnknown(Epoch),

    #[error("no snapshot has been committed yet")]
    NoSnapshots,

    #[error("ring capacity must be non-zero")]
    ZeroCapacity,

    #[error("ring was created with capacity {stored}, reopened with {requested}")]
    CapacityMismatch { stored: u32, requested: u32 },

    #[error("caller {0:?} is not the snapshot authority")]
    OnlySnapshotAuthority(Buf20),

    #[error("db: {0}")]
    Db(#[from] DbError),
}

impl SnapshotError {
    /// Whether this is a lookup failure for an epoch that is not resident,
    /// either because it was overwritten or because it never existed.
    pub fn is_evicted_or_unknown(&self) -> bool {
        matches!(self, Self::EpochEvicted { .. } | Self::EpochUnknown(_))
    }
}
