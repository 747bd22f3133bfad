//! In-memory database implementations for tests and ephemeral setups.

mod deposit;
mod snapshot;
mod withdrawal;

use std::sync::Arc;

pub use deposit::StubDepositDb;
pub use snapshot::StubSnapshotDb;
pub use withdrawal::StubWithdrawalDb;

use crate::traits::{DatabaseBackend, DepositDatabase, SnapshotDatabase, WithdrawalDatabase};

#[derive(Debug, Default)]
pub struct StubBackend {
    snapshot_db: Arc<StubSnapshotDb>,
    withdrawal_db: Arc<StubWithdrawalDb>,
    deposit_db: Arc<StubDepositDb>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatabaseBackend for StubBackend {
    fn snapshot_db(&self) -> Arc<impl SnapshotDatabase> {
        self.snapshot_db.clone()
    }

    fn withdrawal_db(&self) -> Arc<impl WithdrawalDatabase> {
        self.withdrawal_db.clone()
    }

    fn deposit_db(&self) -> Arc<impl DepositDatabase> {
        self.deposit_db.clone()
    }
}
