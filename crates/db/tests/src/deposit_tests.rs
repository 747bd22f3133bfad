use ferry_db_types::{traits::DepositDatabase, DbError};
use ferry_primitives::{
    deposit::{DepositNotice, DepositRecord},
    pool::PoolDescriptor,
};
use ferry_test_utils::ArbitraryGenerator;

fn record_with_nonce(arb: &mut ArbitraryGenerator, nonce: u64) -> DepositRecord {
    let descriptor: PoolDescriptor = arb.generate();
    let notice: DepositNotice = arb.generate();
    DepositRecord::new(nonce, descriptor, notice)
}

pub fn test_empty_log(db: &impl DepositDatabase) {
    assert_eq!(db.get_last_deposit_nonce().expect("test: last"), None);
    assert_eq!(db.get_deposit(1).expect("test: get"), None);
}

pub fn test_append_in_order(db: &impl DepositDatabase) {
    let mut arb = ArbitraryGenerator::new();
    let records: Vec<_> = (1..=5).map(|n| record_with_nonce(&mut arb, n)).collect();

    for record in &records {
        db.put_deposit(record.clone()).expect("test: put");
        assert_eq!(
            db.get_last_deposit_nonce().expect("test: last"),
            Some(record.nonce())
        );
    }

    for record in records {
        assert_eq!(
            db.get_deposit(record.nonce()).expect("test: get"),
            Some(record)
        );
    }
}

pub fn test_first_nonce_must_be_one(db: &impl DepositDatabase) {
    let mut arb = ArbitraryGenerator::new();
    let res = db.put_deposit(record_with_nonce(&mut arb, 2));
    assert!(matches!(res, Err(DbError::OooInsert("deposits", 2))));
    assert_eq!(db.get_last_deposit_nonce().expect("test: last"), None);
}

pub fn test_gap_and_repeat_rejected(db: &impl DepositDatabase) {
    let mut arb = ArbitraryGenerator::new();
    let first = record_with_nonce(&mut arb, 1);
    db.put_deposit(first.clone()).expect("test: put");

    let res = db.put_deposit(record_with_nonce(&mut arb, 3));
    assert!(matches!(res, Err(DbError::OooInsert("deposits", 3))));

    let res = db.put_deposit(record_with_nonce(&mut arb, 1));
    assert!(matches!(res, Err(DbError::OooInsert("deposits", 1))));

    assert_eq!(db.get_deposit(1).expect("test: get"), Some(first));
    assert_eq!(db.get_deposit(3).expect("test: get"), None);
    assert_eq!(db.get_last_deposit_nonce().expect("test: last"), Some(1));
}

#[macro_export]
macro_rules! deposit_db_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_empty_log() {
            let db = $setup_expr;
            $crate::deposit_tests::test_empty_log(&db);
        }

        #[test]
        fn test_append_in_order() {
            let db = $setup_expr;
            $crate::deposit_tests::test_append_in_order(&db);
        }

        #[test]
        fn test_first_nonce_must_be_one() {
            let db = $setup_expr;
            $crate::deposit_tests::test_first_nonce_must_be_one(&db);
        }

        #[test]
        fn test_gap_and_repeat_rejected() {
            let db = $setup_expr;
            $crate::deposit_tests::test_gap_and_repeat_rejected(&db);
        }
    };
}
