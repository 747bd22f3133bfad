use std::collections::{hash_map::Entry, HashMap};

use ferry_primitives::buf::Buf32;
use parking_lot::Mutex;

use crate::{traits::WithdrawalDatabase, types::RedemptionEntry, DbError, DbResult};

#[derive(Debug, Default)]
pub struct StubWithdrawalDb {
    redeemed: Mutex<HashMap<Buf32, RedemptionEntry>>,
}

impl StubWithdrawalDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WithdrawalDatabase for StubWithdrawalDb {
    fn is_redeemed(&self, key: Buf32) -> DbResult<bool> {
        Ok(self.redeemed.lock().contains_key(&key))
    }

    fn get_redemption(&self, key: Buf32) -> DbResult<Option<RedemptionEntry>> {
        Ok(self.redeemed.lock().get(&key).copied())
    }

    fn put_redemption(&self, key: Buf32, entry: RedemptionEntry) -> DbResult<()> {
        match self.redeemed.lock().entry(key) {
            Entry::Occupied(_) => Err(DbError::EntryAlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    fn del_redemption(&self, key: Buf32) -> DbResult<bool> {
        Ok(self.redeemed.lock().remove(&key).is_some())
    }

    fn count_redemptions(&self) -> DbResult<u64> {
        Ok(self.redeemed.lock().len() as u64)
    }
}
