use std::collections::BTreeMap;

use ferry_primitives::deposit::{DepositNonce, DepositRecord};
use parking_lot::Mutex;

use crate::{traits::DepositDatabase, DbError, DbResult};

#[derive(Debug, Default)]
pub struct StubDepositDb {
    deposits: Mutex<BTreeMap<DepositNonce, DepositRecord>>,
}

impl StubDepositDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DepositDatabase for StubDepositDb {
    fn put_deposit(&self, record: DepositRecord) -> DbResult<()> {
        let mut tbl = self.deposits.lock();
        let expected = tbl.keys().next_back().map_or(1, |last| last + 1);
        if record.nonce() != expected {
            return Err(DbError::OooInsert("deposits", record.nonce()));
        }
        tbl.insert(record.nonce(), record);
        Ok(())
    }

    fn get_deposit(&self, nonce: DepositNonce) -> DbResult<Option<DepositRecord>> {
        Ok(self.deposits.lock().get(&nonce).cloned())
    }

    fn get_last_deposit_nonce(&self) -> DbResult<Option<DepositNonce>> {
        Ok(self.deposits.lock().keys().next_back().copied())
    }
}
