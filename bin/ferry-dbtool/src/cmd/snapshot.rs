use argh::FromArgs;
use ferry_db_types::traits::{DatabaseBackend, SnapshotDatabase};
use ferry_snapshots::{SnapshotError, SnapshotRingBuffer};

use crate::{
    bridge::BridgeContext,
    cli::OutputFormat,
    errors::{DisplayableError, DisplayedError},
    output::{
        output,
        snapshot::{SnapshotInfo, SnapshotsSummaryInfo},
    },
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-snapshot")]
/// Get the snapshot committed at an epoch
pub(crate) struct GetSnapshotArgs {
    /// epoch to look up
    #[argh(positional)]
    pub(crate) epoch: u64,

    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-snapshots-summary")]
/// Get a summary of the snapshot ring
pub(crate) struct GetSnapshotsSummaryArgs {
    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Open the ring at its configured capacity, or the stored one without a
/// config. Never initializes a missing ring.
fn open_ring(
    db: &impl DatabaseBackend,
    bridge: &BridgeContext,
) -> Result<(SnapshotRingBuffer, Option<u64>), DisplayedError> {
    let snapshot_db = db.snapshot_db();
    let meta = snapshot_db
        .get_ring_meta()
        .internal_error("Failed to get snapshot ring metadata")?
        .ok_or_else(|| {
            DisplayedError::UserError(
                "Snapshot ring not found in database".to_string(),
                Box::new(()),
            )
        })?;

    let capacity = bridge.snapshot_capacity.unwrap_or(meta.capacity);
    let ring = SnapshotRingBuffer::open(snapshot_db, capacity).map_err(|e| match e {
        SnapshotError::CapacityMismatch { .. } => DisplayedError::UserError(
            "Stored snapshot ring does not match the configured snapshot_capacity".to_string(),
            Box::new(e),
        ),
        e => DisplayedError::InternalError(
            "Failed to open snapshot ring".to_string(),
            Box::new(e),
        ),
    })?;
    Ok((ring, meta.first_epoch))
}

/// Get the snapshot committed at an epoch.
pub(crate) fn get_snapshot(
    db: &impl DatabaseBackend,
    bridge: &BridgeContext,
    args: GetSnapshotArgs,
) -> Result<(), DisplayedError> {
    let (ring, _) = open_ring(db, bridge)?;

    let snapshot = ring.read_at(args.epoch).map_err(|e| match e {
        SnapshotError::Db(_) => DisplayedError::InternalError(
            format!("Failed to read snapshot at epoch {}", args.epoch),
            Box::new(e),
        ),
        e => DisplayedError::UserError(
            format!("No resident snapshot at epoch {}", args.epoch),
            Box::new(e),
        ),
    })?;

    let info = SnapshotInfo {
        slot: (args.epoch % u64::from(ring.capacity())) as u32,
        snapshot: &snapshot,
    };
    output(&info, args.output_format)
}

/// Get snapshots summary - check every resident epoch can be read back.
pub(crate) fn get_snapshots_summary(
    db: &impl DatabaseBackend,
    bridge: &BridgeContext,
    args: GetSnapshotsSummaryArgs,
) -> Result<(), DisplayedError> {
    let (ring, first_epoch) = open_ring(db, bridge)?;
    let resident = ring.resident_epochs();

    let mut unreadable_epochs = Vec::new();
    let mut head_state_root = None;
    if let Some(range) = resident.clone() {
        let head = *range.end();
        for epoch in range {
            match ring.read_at(epoch) {
                Ok(snapshot) if epoch == head => head_state_root = Some(snapshot.state_root),
                Ok(_) => {}
                Err(_) => unreadable_epochs.push(epoch),
            }
        }
    }

    let output_data = SnapshotsSummaryInfo {
        capacity: ring.capacity(),
        first_epoch,
        head_epoch: ring.latest_epoch(),
        oldest_resident_epoch: resident.as_ref().map(|r| *r.start()),
        resident_count: resident.map(|r| r.end() - r.start() + 1).unwrap_or(0),
        head_state_root,
        all_resident_present: unreadable_epochs.is_empty(),
        unreadable_epochs,
    };

    output(&output_data, args.output_format)
}

#[cfg(test)]
mod tests {
    use ferry_db_types::stubs::StubBackend;
    use ferry_primitives::{buf::Buf32, snapshot::Snapshot};

    use super::*;

    fn args(epoch: u64) -> GetSnapshotArgs {
        GetSnapshotArgs {
            epoch,
            output_format: OutputFormat::Porcelain,
        }
    }

    #[test]
    fn test_missing_ring_is_user_error() {
        let db = StubBackend::new();
        assert!(matches!(
            get_snapshot(&db, &BridgeContext::default(), args(1)),
            Err(DisplayedError::UserError(..))
        ));
        // Inspecting must not create the ring.
        assert_eq!(db.snapshot_db().get_ring_meta().unwrap(), None);
    }

    #[test]
    fn test_reads_resident_epochs_only() {
        let db = StubBackend::new();
        let ring = SnapshotRingBuffer::open(db.snapshot_db(), 2).unwrap();
        for epoch in 1..=3 {
            ring.write(epoch, Snapshot::with_state_root(epoch, Buf32::new([1; 32])))
                .unwrap();
        }

        let bridge = BridgeContext::default();
        assert!(get_snapshot(&db, &bridge, args(3)).is_ok());
        assert!(get_snapshot(&db, &bridge, args(2)).is_ok());
        assert!(matches!(
            get_snapshot(&db, &bridge, args(1)),
            Err(DisplayedError::UserError(..))
        ));
        assert!(get_snapshots_summary(
            &db,
            &bridge,
            GetSnapshotsSummaryArgs {
                output_format: OutputFormat::Json,
            }
        )
        .is_ok());
    }

    #[test]
    fn test_configured_capacity_is_checked() {
        let db = StubBackend::new();
        let ring = SnapshotRingBuffer::open(db.snapshot_db(), 4).unwrap();
        ring.write(1, Snapshot::with_state_root(1, Buf32::new([2; 32])))
            .unwrap();

        let matching = BridgeContext {
            snapshot_capacity: Some(4),
            pools: vec![],
        };
        assert!(get_snapshot(&db, &matching, args(1)).is_ok());

        let other = BridgeContext {
            snapshot_capacity: Some(8),
            pools: vec![],
        };
        assert!(matches!(
            get_snapshot(&db, &other, args(1)),
            Err(DisplayedError::UserError(..))
        ));
        assert_eq!(db.snapshot_db().get_ring_meta().unwrap().unwrap().capacity, 4);
    }
}
