//! Sled store for the bridge verification state.

mod config;
mod deposit;
mod init;
pub mod macros;
mod snapshot;
pub mod utils;
mod withdrawal;

use std::{path::Path, sync::Arc};

pub use config::SledDbConfig;
pub use deposit::DepositDBSled;
use ferry_db_types::{
    traits::{DatabaseBackend, DepositDatabase, SnapshotDatabase, WithdrawalDatabase},
    DbResult,
};
pub use init::open_sled_database;
pub use snapshot::SnapshotDBSled;
pub use withdrawal::WithdrawalDBSled;

pub const SLED_NAME: &str = "ferry";

/// Opens a complete Sled backend from datadir with all database types
pub fn open_sled_backend(
    datadir: &Path,
    dbname: &'static str,
    config: SledDbConfig,
) -> anyhow::Result<Arc<SledBackend>> {
    let sled_db = open_sled_database(datadir, dbname)?;
    SledBackend::new(&sled_db, config)
        .map_err(|e| anyhow::anyhow!("failed to initialize sled backend: {e}"))
        .map(Arc::new)
}

/// Complete Sled backend with all database types
#[derive(Debug)]
pub struct SledBackend {
    snapshot_db: Arc<SnapshotDBSled>,
    withdrawal_db: Arc<WithdrawalDBSled>,
    deposit_db: Arc<DepositDBSled>,
}

impl SledBackend {
    pub fn new(sled_db: &sled::Db, config: SledDbConfig) -> DbResult<Self> {
        let snapshot_db = Arc::new(SnapshotDBSled::new(sled_db, config.clone())?);
        let withdrawal_db = Arc::new(WithdrawalDBSled::new(sled_db, config.clone())?);
        let deposit_db = Arc::new(DepositDBSled::new(sled_db, config)?);
        Ok(Self {
            snapshot_db,
            withdrawal_db,
            deposit_db,
        })
    }
}

impl DatabaseBackend for SledBackend {
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
