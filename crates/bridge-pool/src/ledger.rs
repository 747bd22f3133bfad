use std::sync::Arc;

use ferry_db_types::{traits::WithdrawalDatabase, types::RedemptionEntry, DbResult};
use ferry_primitives::buf::Buf32;

/// Replay guard: the set of burn record keys redeemed so far.
///
/// Every pool of a bridge must be built over the same store. Burn records do
/// not name a pool, so a key redeemed at one pool must be refused by all.
#[derive(Clone)]
#[expect(
    missing_debug_implementations,
    reason = "database trait objects don't implement Debug"
)]
pub struct WithdrawalLedger {
    db: Arc<dyn WithdrawalDatabase>,
}

impl WithdrawalLedger {
    pub fn new(db: Arc<dyn WithdrawalDatabase>) -> Self {
        Self { db }
    }

    pub fn is_redeemed(&self, key: Buf32) -> DbResult<bool> {
        self.db.is_redeemed(key)
    }

    pub fn redemption(&self, key: Buf32) -> DbResult<Option<RedemptionEntry>> {
        self.db.get_redemption(key)
    }

    /// Marks `key` redeemed. Fails if it already is.
    pub fn mark_redeemed(&self, key: Buf32, entry: RedemptionEntry) -> DbResult<()> {
        self.db.put_redemption(key, entry)
    }

    /// Rolls back a mark placed by [`Self::mark_redeemed`].
    pub fn unmark(&self, key: Buf32) -> DbResult<bool> {
        self.db.del_redemption(key)
    }

    pub fn redeemed_count(&self) -> DbResult<u64> {
        self.db.count_redemptions()
    }
}
