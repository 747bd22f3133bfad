use ferry_db_types::{traits::DepositDatabase, DbError, DbResult};
use ferry_primitives::deposit::{DepositNonce, DepositRecord};
use sled::{
    transaction::{ConflictableTransactionError, ConflictableTransactionResult},
    Transactional,
};

use crate::{
    define_sled_database,
    utils::{decode_value, encode_value, to_db_error, tx_to_db_error},
};

const LAST_NONCE_KEY: &[u8] = b"last_nonce";

define_sled_database!(
    /// Deposit records keyed by big-endian nonce, and the last nonce written.
    pub struct DepositDBSled {
        deposit_tree: "deposits",
        meta_tree: "deposit_meta",
    }
);

impl DepositDatabase for DepositDBSled {
    fn put_deposit(&self, record: DepositRecord) -> DbResult<()> {
        let nonce = record.nonce();
        let raw_record = encode_value(&record)?;
        let raw_nonce = encode_value(&nonce)?;

        self.config.with_retry(|| {
            (&self.deposit_tree, &self.meta_tree)
                .transaction(|(deposits, meta)| -> ConflictableTransactionResult<(), DbError> {
                    let last: Option<DepositNonce> = meta
                        .get(LAST_NONCE_KEY)?
                        .map(|raw| decode_value(&raw))
                        .transpose()
                        .map_err(ConflictableTransactionError::Abort)?;

                    let expected = last.map_or(1, |n| n + 1);
                    if nonce != expected {
                        return Err(ConflictableTransactionError::Abort(DbError::OooInsert(
                            "deposits", nonce,
                        )));
                    }

                    deposits.insert(&nonce.to_be_bytes()[..], raw_record.as_slice())?;
                    meta.insert(LAST_NONCE_KEY, raw_nonce.as_slice())?;
                    Ok(())
                })
                .map_err(tx_to_db_error)
        })
    }

    fn get_deposit(&self, nonce: DepositNonce) -> DbResult<Option<DepositRecord>> {
        self.deposit_tree
            .get(nonce.to_be_bytes())
            .map_err(to_db_error)?
            .map(|raw| decode_value(&raw))
            .transpose()
    }

    fn get_last_deposit_nonce(&self) -> DbResult<Option<DepositNonce>> {
        self.meta_tree
            .get(LAST_NONCE_KEY)
            .map_err(to_db_error)?
            .map(|raw| decode_value(&raw))
            .transpose()
    }
}
