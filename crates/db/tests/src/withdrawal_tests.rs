use ferry_db_types::{traits::WithdrawalDatabase, types::RedemptionEntry, DbError};
use ferry_primitives::buf::{Buf20, Buf32};
use ferry_test_utils::ArbitraryGenerator;

pub fn test_put_and_get_redemption(db: &impl WithdrawalDatabase) {
    let mut arb = ArbitraryGenerator::new();
    let key: Buf32 = arb.generate();
    let entry = RedemptionEntry::new(7, arb.generate(), arb.generate());

    assert!(!db.is_redeemed(key).expect("test: is_redeemed"));
    assert_eq!(db.get_redemption(key).expect("test: get"), None);

    db.put_redemption(key, entry).expect("test: put");
    assert!(db.is_redeemed(key).expect("test: is_redeemed"));
    assert_eq!(db.get_redemption(key).expect("test: get"), Some(entry));
}

pub fn test_redemption_is_insert_once(db: &impl WithdrawalDatabase) {
    let mut arb = ArbitraryGenerator::new();
    let key: Buf32 = arb.generate();
    let first = RedemptionEntry::new(1, Buf20::new([0xaa; 20]), Buf20::new([1; 20]));
    let second = RedemptionEntry::new(2, Buf20::new([0xaa; 20]), Buf20::new([2; 20]));

    db.put_redemption(key, first).expect("test: put");
    let res = db.put_redemption(key, second);
    assert!(matches!(res, Err(DbError::EntryAlreadyExists)));
    assert_eq!(db.get_redemption(key).expect("test: get"), Some(first));
}

pub fn test_redemption_is_shared_across_pools(db: &impl WithdrawalDatabase) {
    let key = Buf32::new([0x42; 32]);
    let at_a = RedemptionEntry::new(3, Buf20::new([0xaa; 20]), Buf20::new([9; 20]));
    let at_b = RedemptionEntry::new(3, Buf20::new([0xbb; 20]), Buf20::new([9; 20]));

    db.put_redemption(key, at_a).expect("test: put");
    let res = db.put_redemption(key, at_b);
    assert!(matches!(res, Err(DbError::EntryAlreadyExists)));
    assert_eq!(db.get_redemption(key).expect("test: get"), Some(at_a));

    db.put_redemption(Buf32::new([0x43; 32]), at_b)
        .expect("test: put");
    assert_eq!(db.count_redemptions().expect("test: count"), 2);
}

pub fn test_del_redemption(db: &impl WithdrawalDatabase) {
    let key = Buf32::new([2; 32]);
    let entry = |epoch| RedemptionEntry::new(epoch, Buf20::new([1; 20]), Buf20::zero());

    assert!(!db.del_redemption(key).expect("test: del"));
    db.put_redemption(key, entry(1)).expect("test: put");
    assert!(db.del_redemption(key).expect("test: del"));
    assert!(!db.is_redeemed(key).expect("test: is_redeemed"));
    assert_eq!(db.count_redemptions().expect("test: count"), 0);

    // A removed mark can be placed again.
    db.put_redemption(key, entry(2)).expect("test: put again");
}

#[macro_export]
macro_rules! withdrawal_db_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_put_and_get_redemption() {
            let db = $setup_expr;
            $crate::withdrawal_tests::test_put_and_get_redemption(&db);
        }

        #[test]
        fn test_redemption_is_insert_once() {
            let db = $setup_expr;
            $crate::withdrawal_tests::test_redemption_is_insert_once(&db);
        }

        #[test]
        fn test_redemption_is_shared_across_pools() {
            let db = $setup_expr;
            $crate::withdrawal_tests::test_redemption_is_shared_across_pools(&db);
        }

        #[test]
        fn test_del_redemption() {
            let db = $setup_expr;
            $crate::withdrawal_tests::test_del_redemption(&db);
        }
    };
}
