use ferry_db_types::{traits::SnapshotDatabase, types::RingMeta, DbError, DbResult};
use ferry_primitives::snapshot::Snapshot;
use sled::{transaction::ConflictableTransactionResult, Transactional};

use crate::{
    define_sled_database,
    utils::{decode_value, encode_value, to_db_error, tx_to_db_error},
};

const RING_META_KEY: &[u8] = b"ring";

define_sled_database!(
    /// Snapshot ring slots keyed by big-endian slot index, and the ring
    /// metadata under a single key.
    pub struct SnapshotDBSled {
        slot_tree: "snapshot_slots",
        meta_tree: "snapshot_meta",
    }
);

impl SnapshotDatabase for SnapshotDBSled {
    fn get_ring_meta(&self) -> DbResult<Option<RingMeta>> {
        self.meta_tree
            .get(RING_META_KEY)
            .map_err(to_db_error)?
            .map(|raw| decode_value(&raw))
            .transpose()
    }

    fn init_ring_meta(&self, meta: RingMeta) -> DbResult<()> {
        let raw = encode_value(&meta)?;
        self.config.with_retry(|| {
            self.meta_tree
                .compare_and_swap(RING_META_KEY, None::<&[u8]>, Some(raw.as_slice()))
                .map_err(to_db_error)?
                .map_err(|_| DbError::EntryAlreadyExists)
        })
    }

    fn put_snapshot(&self, slot: u32, snapshot: Snapshot, meta: RingMeta) -> DbResult<()> {
        let slot_key = slot.to_be_bytes();
        let raw_snapshot = encode_value(&snapshot)?;
        let raw_meta = encode_value(&meta)?;

        self.config.with_retry(|| {
            (&self.slot_tree, &self.meta_tree)
                .transaction(|(slots, metas)| -> ConflictableTransactionResult<(), DbError> {
                    slots.insert(&slot_key[..], raw_snapshot.as_slice())?;
                    metas.insert(RING_META_KEY, raw_meta.as_slice())?;
                    Ok(())
                })
                .map_err(tx_to_db_error)
        })
    }

    fn get_snapshot_slot(&self, slot: u32) -> DbResult<Option<Snapshot>> {
        self.slot_tree
            .get(slot.to_be_bytes())
            .map_err(to_db_error)?
            .map(|raw| decode_value(&raw))
            .transpose()
    }
}
