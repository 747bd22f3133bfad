use std::sync::Arc;

use ferry_primitives::{
    buf::Buf20,
    snapshot::{Epoch, Snapshot},
};
use tracing::*;

use crate::{SnapshotError, SnapshotRingBuffer};

/// Write access to the ring, restricted to the snapshot authority.
#[expect(
    missing_debug_implementations,
    reason = "SnapshotRingBuffer doesn't implement Debug"
)]
pub struct SnapshotCommitter {
    ring: Arc<SnapshotRingBuffer>,
    authority: Buf20,
}

impl SnapshotCommitter {
    pub fn new(ring: Arc<SnapshotRingBuffer>, authority: Buf20) -> Self {
        Self { ring, authority }
    }

    pub fn authority(&self) -> Buf20 {
        self.authority
    }

    pub fn commit(
        &self,
        caller: Buf20,
        epoch: Epoch,
        snapshot: Snapshot,
    ) -> Result<(), SnapshotError> {
        if caller != self.authority {
            warn!(%caller, %epoch, "rejected snapshot from non-authority");
            return Err(SnapshotError::OnlySnapshotAuthority(caller));
        }

        let state_root = snapshot.state_root;
        self.ring.write(epoch, snapshot)?;
        info!(%epoch, %state_root, "committed snapshot");
        Ok(())
    }
}
