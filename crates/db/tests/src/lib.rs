//! Backend-agnostic test suites for the database traits.
//!
//! Each module exposes plain functions taking `&impl Trait` and a macro that
//! expands them into `#[test]` items around a setup expression, so every
//! backend runs the same checks.

pub mod deposit_tests;
pub mod snapshot_tests;
pub mod withdrawal_tests;

#[cfg(test)]
mod stub_tests {
    mod snapshot {
        use ferry_db_types::stubs::StubSnapshotDb;

        crate::snapshot_db_tests!(StubSnapshotDb::default());
    }

    mod withdrawal {
        use ferry_db_types::stubs::StubWithdrawalDb;

        crate::withdrawal_db_tests!(StubWithdrawalDb::default());
    }

    mod deposit {
        use ferry_db_types::stubs::StubDepositDb;

        crate::deposit_db_tests!(StubDepositDb::default());
    }
}
