use ferry_db_types::{traits::SnapshotDatabase, types::RingMeta, DbError};
use ferry_primitives::snapshot::Snapshot;
use ferry_test_utils::ArbitraryGenerator;

pub fn test_empty_db(db: &impl SnapshotDatabase) {
    assert_eq!(db.get_ring_meta().expect("test: get meta"), None);
    assert_eq!(db.get_snapshot_slot(0).expect("test: get slot"), None);
}

pub fn test_init_ring_meta_once(db: &impl SnapshotDatabase) {
    let meta = RingMeta::new_empty(8);
    db.init_ring_meta(meta).expect("test: init");
    assert_eq!(db.get_ring_meta().expect("test: get meta"), Some(meta));

    let res = db.init_ring_meta(RingMeta::new_empty(16));
    assert!(matches!(res, Err(DbError::EntryAlreadyExists)));
    assert_eq!(db.get_ring_meta().expect("test: get meta"), Some(meta));
}

pub fn test_put_snapshot_updates_meta(db: &impl SnapshotDatabase) {
    let mut arb = ArbitraryGenerator::new();
    db.init_ring_meta(RingMeta::new_empty(4)).expect("test: init");

    let mut snapshot: Snapshot = arb.generate();
    snapshot.epoch = 5;
    let meta = RingMeta {
        capacity: 4,
        first_epoch: Some(5),
        head_epoch: Some(5),
    };
    db.put_snapshot(1, snapshot.clone(), meta)
        .expect("test: put");

    assert_eq!(db.get_ring_meta().expect("test: get meta"), Some(meta));
    assert_eq!(
        db.get_snapshot_slot(1).expect("test: get slot"),
        Some(snapshot)
    );
    assert_eq!(db.get_snapshot_slot(0).expect("test: get slot"), None);
}

pub fn test_put_snapshot_overwrites_slot(db: &impl SnapshotDatabase) {
    let mut arb = ArbitraryGenerator::new();
    let mut first: Snapshot = arb.generate();
    first.epoch = 2;
    let mut second: Snapshot = arb.generate();
    second.epoch = 6;

    let meta = |head| RingMeta {
        capacity: 4,
        first_epoch: Some(2),
        head_epoch: Some(head),
    };
    db.put_snapshot(2, first, meta(2)).expect("test: put");
    db.put_snapshot(2, second.clone(), meta(6))
        .expect("test: put");

    assert_eq!(
        db.get_snapshot_slot(2).expect("test: get slot"),
        Some(second)
    );
    assert_eq!(db.get_ring_meta().expect("test: get meta"), Some(meta(6)));
}

#[macro_export]
macro_rules! snapshot_db_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_empty_db() {
            let db = $setup_expr;
            $crate::snapshot_tests::test_empty_db(&db);
        }

        #[test]
        fn test_init_ring_meta_once() {
            let db = $setup_expr;
            $crate::snapshot_tests::test_init_ring_meta_once(&db);
        }

        #[test]
        fn test_put_snapshot_updates_meta() {
            let db = $setup_expr;
            $crate::snapshot_tests::test_put_snapshot_updates_meta(&db);
        }

        #[test]
        fn test_put_snapshot_overwrites_slot() {
            let db = $setup_expr;
            $crate::snapshot_tests::test_put_snapshot_overwrites_slot(&db);
        }
    };
}
