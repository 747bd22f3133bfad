use std::collections::HashMap;

use ferry_primitives::snapshot::Snapshot;
use parking_lot::Mutex;

use crate::{traits::SnapshotDatabase, types::RingMeta, DbError, DbResult};

#[derive(Debug, Default)]
struct Inner {
    meta: Option<RingMeta>,
    slots: HashMap<u32, Snapshot>,
}

/// Keeps slots and metadata under one lock so a write is atomic.
#[derive(Debug, Default)]
pub struct StubSnapshotDb {
    inner: Mutex<Inner>,
}

impl StubSnapshotDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotDatabase for StubSnapshotDb {
    fn get_ring_meta(&self) -> DbResult<Option<RingMeta>> {
        Ok(self.inner.lock().meta)
    }

    fn init_ring_meta(&self, meta: RingMeta) -> DbResult<()> {
        let mut inner = self.inner.lock();
        if inner.meta.is_some() {
            return Err(DbError::EntryAlreadyExists);
        }
        inner.meta = Some(meta);
        Ok(())
    }

    fn put_snapshot(&self, slot: u32, snapshot: Snapshot, meta: RingMeta) -> DbResult<()> {
        let mut inner = self.inner.lock();
        inner.slots.insert(slot, snapshot);
        inner.meta = Some(meta);
        Ok(())
    }

    fn get_snapshot_slot(&self, slot: u32) -> DbResult<Option<Snapshot>> {
        Ok(self.inner.lock().slots.get(&slot).cloned())
    }
}
