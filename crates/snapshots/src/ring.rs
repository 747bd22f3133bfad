use std::{ops::RangeInclusive, sync::Arc};

use ferry_db_types::{traits::SnapshotDatabase, types::RingMeta, DbError};
use ferry_primitives::snapshot::{Epoch, Snapshot, NULL_EPOCH};
use parking_lot::RwLock;
use tracing::*;

use crate::SnapshotError;

/// Number of slots used when none is configured.
pub const DEFAULT_CAPACITY: u32 = 1024;

/// Fixed-capacity ring of snapshots persisted through a [`SnapshotDatabase`].
///
/// The in-memory copy of the ring metadata doubles as the lock: writers hold
/// it exclusively across the storage write and readers hold it shared across
/// the slot lookup.
#[expect(
    missing_debug_implementations,
    reason = "database trait objects don't implement Debug"
)]
pub struct SnapshotRingBuffer {
    db: Arc<dyn SnapshotDatabase>,
    meta: RwLock<RingMeta>,
}

impl SnapshotRingBuffer {
    /// Opens the ring stored in `db`, creating it with `capacity` slots if it
    /// doesn't exist yet.
    pub fn open(db: Arc<dyn SnapshotDatabase>, capacity: u32) -> Result<Self, SnapshotError> {
        if capacity == 0 {
            return Err(SnapshotError::ZeroCapacity);
        }

        let meta = match db.get_ring_meta()? {
            Some(meta) if meta.capacity != capacity => {
                return Err(SnapshotError::CapacityMismatch {
                    stored: meta.capacity,
                    requested: capacity,
                });
            }
            Some(meta) => {
                debug!(%capacity, head = ?meta.head_epoch, "reopened snapshot ring");
                meta
            }
            None => {
                let meta = RingMeta::new_empty(capacity);
                db.init_ring_meta(meta)?;
                debug!(%capacity, "created snapshot ring");
                meta
            }
        };

        Ok(Self {
            db,
            meta: RwLock::new(meta),
        })
    }

    pub fn capacity(&self) -> u32 {
        self.meta.read().capacity
    }

    /// Stores `snapshot` as the commitment for `epoch`.
    ///
    /// The first write may use any non-zero epoch. Every later write must be
    /// for the epoch directly after the current head.
    pub fn write(&self, epoch: Epoch, snapshot: Snapshot) -> Result<(), SnapshotError> {
        if epoch == NULL_EPOCH {
            return Err(SnapshotError::InvalidEpoch);
        }

        if snapshot.epoch != epoch {
            return Err(SnapshotError::EpochMismatch {
                epoch,
                snapshot_epoch: snapshot.epoch,
            });
        }

        let mut meta = self.meta.write();
        if let Some(head) = meta.head_epoch {
            let expected = head
                .checked_add(1)
                .ok_or(SnapshotError::EpochOverflow(head))?;
            if epoch != expected {
                return Err(SnapshotError::NonMonotonicEpoch {
                    expected,
                    got: epoch,
                });
            }
        }

        let new_meta = RingMeta {
            capacity: meta.capacity,
            first_epoch: meta.first_epoch.or(Some(epoch)),
            head_epoch: Some(epoch),
        };
        let slot = slot_for(epoch, meta.capacity);
        self.db.put_snapshot(slot, snapshot, new_meta)?;
        *meta = new_meta;

        trace!(%epoch, %slot, "wrote snapshot");
        Ok(())
    }

    /// Returns the snapshot committed at `epoch` if it is still resident.
    pub fn read_at(&self, epoch: Epoch) -> Result<Snapshot, SnapshotError> {
        if epoch == NULL_EPOCH {
            return Err(SnapshotError::InvalidEpoch);
        }
        self.read_slot(&self.meta.read(), epoch)
    }

    /// Newest resident snapshot.
    pub fn head(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let meta = self.meta.read();
        meta.head_epoch
            .map(|head| self.read_slot(&meta, head))
            .transpose()
    }

    /// Oldest resident snapshot.
    pub fn tail(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let meta = self.meta.read();
        resident_range(&meta)
            .map(|range| self.read_slot(&meta, *range.start()))
            .transpose()
    }

    /// Looks `epoch` up under an already held read guard.
    fn read_slot(&self, meta: &RingMeta, epoch: Epoch) -> Result<Snapshot, SnapshotError> {
        let Some(resident) = resident_range(meta) else {
            return Err(SnapshotError::EpochUnknown(epoch));
        };

        let first = meta.first_epoch.unwrap_or(*resident.start());
        if epoch > *resident.end() || epoch < first {
            return Err(SnapshotError::EpochUnknown(epoch));
        }

        let oldest = *resident.start();
        if epoch < oldest {
            return Err(SnapshotError::EpochEvicted { epoch, oldest });
        }

        match self.db.get_snapshot_slot(slot_for(epoch, meta.capacity))? {
            Some(snapshot) if snapshot.epoch == epoch => Ok(snapshot),
            Some(_) => Err(SnapshotError::EpochEvicted { epoch, oldest }),
            None => Err(SnapshotError::Db(DbError::NonExistentEntry)),
        }
    }

    pub fn latest_epoch(&self) -> Option<Epoch> {
        self.meta.read().head_epoch
    }

    /// Range of epochs that can currently be read.
    pub fn resident_epochs(&self) -> Option<RangeInclusive<Epoch>> {
        resident_range(&self.meta.read())
    }
}

fn slot_for(epoch: Epoch, capacity: u32) -> u32 {
    (epoch % u64::from(capacity)) as u32
}

fn resident_range(meta: &RingMeta) -> Option<RangeInclusive<Epoch>> {
    let (first, head) = (meta.first_epoch?, meta.head_epoch?);
    let span = u64::from(meta.capacity) - 1;
    let oldest = head.saturating_sub(span).max(first);
    Some(oldest..=head)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use ferry_db_types::stubs::StubSnapshotDb;
    use ferry_primitives::buf::Buf32;
    use ferry_test_utils::ArbitraryGenerator;
    use proptest::prelude::*;

    use super::*;

    fn snapshot(epoch: Epoch) -> Snapshot {
        let mut root = [0u8; 32];
        root[..8].copy_from_slice(&epoch.to_be_bytes());
        Snapshot::with_state_root(epoch, Buf32::new(root))
    }

    fn ring(capacity: u32) -> SnapshotRingBuffer {
        SnapshotRingBuffer::open(Arc::new(StubSnapshotDb::new()), capacity).unwrap()
    }

    #[test]
    fn test_empty_ring() {
        let ring = ring(4);
        assert_eq!(ring.latest_epoch(), None);
        assert_eq!(ring.resident_epochs(), None);
        assert_eq!(ring.head().unwrap(), None);
        assert_eq!(ring.tail().unwrap(), None);
        assert_eq!(ring.read_at(1), Err(SnapshotError::EpochUnknown(1)));
    }

    #[test]
    fn test_zero_epoch_rejected() {
        let ring = ring(4);
        assert_eq!(
            ring.write(0, snapshot(0)),
            Err(SnapshotError::InvalidEpoch)
        );
        ring.write(1, snapshot(1)).unwrap();
        assert_eq!(ring.read_at(0), Err(SnapshotError::InvalidEpoch));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let res = SnapshotRingBuffer::open(Arc::new(StubSnapshotDb::new()), 0);
        assert!(matches!(res, Err(SnapshotError::ZeroCapacity)));
    }

    #[test]
    fn test_first_write_sets_start() {
        let ring = ring(4);
        ring.write(5, snapshot(5)).unwrap();
        assert_eq!(ring.read_at(5).unwrap(), snapshot(5));
        assert_eq!(ring.read_at(4), Err(SnapshotError::EpochUnknown(4)));
        assert_eq!(ring.read_at(6), Err(SnapshotError::EpochUnknown(6)));
        assert_eq!(ring.resident_epochs(), Some(5..=5));
    }

    #[test]
    fn test_writes_must_be_consecutive() {
        let ring = ring(4);
        ring.write(3, snapshot(3)).unwrap();
        assert_eq!(
            ring.write(5, snapshot(5)),
            Err(SnapshotError::NonMonotonicEpoch {
                expected: 4,
                got: 5
            })
        );
        assert_eq!(
            ring.write(3, snapshot(3)),
            Err(SnapshotError::NonMonotonicEpoch {
                expected: 4,
                got: 3
            })
        );
        ring.write(4, snapshot(4)).unwrap();
        assert_eq!(ring.latest_epoch(), Some(4));
    }

    #[test]
    fn test_snapshot_epoch_must_match() {
        let ring = ring(4);
        assert_eq!(
            ring.write(2, snapshot(3)),
            Err(SnapshotError::EpochMismatch {
                epoch: 2,
                snapshot_epoch: 3
            })
        );
        assert_eq!(ring.latest_epoch(), None);
    }

    #[test]
    fn test_eviction_after_capacity_writes() {
        let ring = ring(3);
        for epoch in 1..=3 {
            ring.write(epoch, snapshot(epoch)).unwrap();
        }
        assert_eq!(ring.read_at(1).unwrap(), snapshot(1));

        ring.write(4, snapshot(4)).unwrap();
        assert_eq!(
            ring.read_at(1),
            Err(SnapshotError::EpochEvicted {
                epoch: 1,
                oldest: 2
            })
        );
        for epoch in 2..=4 {
            assert_eq!(ring.read_at(epoch).unwrap(), snapshot(epoch));
        }
        assert_eq!(ring.tail().unwrap(), Some(snapshot(2)));
        assert_eq!(ring.head().unwrap(), Some(snapshot(4)));
    }

    #[test]
    fn test_reopen_keeps_contents() {
        let db = Arc::new(StubSnapshotDb::new());
        let ring = SnapshotRingBuffer::open(db.clone(), 8).unwrap();
        let mut arb = ArbitraryGenerator::new();
        let mut committed: Snapshot = arb.generate();
        committed.epoch = 10;
        ring.write(10, committed.clone()).unwrap();
        drop(ring);

        let ring = SnapshotRingBuffer::open(db.clone(), 8).unwrap();
        assert_eq!(ring.read_at(10).unwrap(), committed);
        assert_eq!(
            ring.write(12, snapshot(12)),
            Err(SnapshotError::NonMonotonicEpoch {
                expected: 11,
                got: 12
            })
        );

        assert!(matches!(
            SnapshotRingBuffer::open(db, 16),
            Err(SnapshotError::CapacityMismatch {
                stored: 8,
                requested: 16
            })
        ));
    }

    #[test]
    fn test_evicted_and_unknown_category() {
        assert!(SnapshotError::EpochUnknown(3).is_evicted_or_unknown());
        assert!(SnapshotError::EpochEvicted {
            epoch: 1,
            oldest: 2
        }
        .is_evicted_or_unknown());
        assert!(!SnapshotError::InvalidEpoch.is_evicted_or_unknown());
    }

    #[test]
    fn test_head_during_concurrent_commits() {
        let ring = ring(1);
        ring.write(1, snapshot(1)).unwrap();

        thread::scope(|scope| {
            scope.spawn(|| {
                for epoch in 2..=500 {
                    ring.write(epoch, snapshot(epoch)).unwrap();
                }
            });
            for _ in 0..500 {
                let head = ring.head().unwrap().unwrap();
                assert_eq!(head, snapshot(head.epoch));
            }
        });
        assert_eq!(ring.head().unwrap(), Some(snapshot(500)));
    }

    proptest! {
        #[test]
        fn proptest_only_last_capacity_epochs_resident(
            capacity in 1u32..16,
            start in 1u64..1000,
            count in 1u64..64,
        ) {
            let ring = ring(capacity);
            let end = start + count - 1;
            for epoch in start..=end {
                ring.write(epoch, snapshot(epoch)).unwrap();
            }

            let oldest = end.saturating_sub(u64::from(capacity) - 1).max(start);
            prop_assert_eq!(ring.resident_epochs(), Some(oldest..=end));

            for epoch in start..oldest {
                prop_assert_eq!(
                    ring.read_at(epoch),
                    Err(SnapshotError::EpochEvicted { epoch, oldest })
                );
            }
            for epoch in oldest..=end {
                prop_assert_eq!(ring.read_at(epoch).unwrap(), snapshot(epoch));
            }
            prop_assert_eq!(ring.read_at(end + 1), Err(SnapshotError::EpochUnknown(end + 1)));
            if start > 1 {
                prop_assert_eq!(
                    ring.read_at(start - 1),
                    Err(SnapshotError::EpochUnknown(start - 1))
                );
            }
        }
    }
}
