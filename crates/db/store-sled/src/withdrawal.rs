use ferry_db_types::{traits::WithdrawalDatabase, types::RedemptionEntry, DbError, DbResult};
use ferry_primitives::buf::Buf32;

use crate::{
    define_sled_database,
    utils::{decode_value, encode_value, to_db_error},
};

define_sled_database!(
    /// Redeemed burn record keys shared by every pool.
    pub struct WithdrawalDBSled {
        redeemed_tree: "redeemed",
    }
);

impl WithdrawalDatabase for WithdrawalDBSled {
    fn is_redeemed(&self, key: Buf32) -> DbResult<bool> {
        self.redeemed_tree
            .contains_key(key.as_slice())
            .map_err(to_db_error)
    }

    fn get_redemption(&self, key: Buf32) -> DbResult<Option<RedemptionEntry>> {
        self.redeemed_tree
            .get(key.as_slice())
            .map_err(to_db_error)?
            .map(|raw| decode_value(&raw))
            .transpose()
    }

    fn put_redemption(&self, key: Buf32, entry: RedemptionEntry) -> DbResult<()> {
        let raw = encode_value(&entry)?;
        self.config.with_retry(|| {
            self.redeemed_tree
                .compare_and_swap(key.as_slice(), None::<&[u8]>, Some(raw.as_slice()))
                .map_err(to_db_error)?
                .map_err(|_| DbError::EntryAlreadyExists)
        })
    }

    fn del_redemption(&self, key: Buf32) -> DbResult<bool> {
        self.config.with_retry(|| {
            Ok(self
                .redeemed_tree
                .remove(key.as_slice())
                .map_err(to_db_error)?
                .is_some())
        })
    }

    fn count_redemptions(&self) -> DbResult<u64> {
        Ok(self.redeemed_tree.len() as u64)
    }
}
