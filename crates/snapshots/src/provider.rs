use ferry_primitives::snapshot::{Epoch, Snapshot};

use crate::{SnapshotError, SnapshotRingBuffer};

/// Read-only access to committed snapshots.
pub trait SnapshotProvider: Send + Sync {
    /// Snapshot committed at exactly `epoch`.
    fn snapshot_at(&self, epoch: Epoch) -> Result<Snapshot, SnapshotError>;

    /// Most recently committed snapshot.
    fn latest_snapshot(&self) -> Result<Snapshot, SnapshotError>;
}

impl SnapshotProvider for SnapshotRingBuffer {
    fn snapshot_at(&self, epoch: Epoch) -> Result<Snapshot, SnapshotError> {
        self.read_at(epoch)
    }

    fn latest_snapshot(&self) -> Result<Snapshot, SnapshotError> {
        self.head()?.ok_or(SnapshotError::NoSnapshots)
    }
}
