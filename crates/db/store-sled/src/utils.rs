use borsh::{BorshDeserialize, BorshSerialize};
use ferry_db_types::{DbError, DbResult};
use sled::transaction::TransactionError;

pub fn to_db_error(e: sled::Error) -> DbError {
    match e {
        sled::Error::Io(io) => DbError::IoError(io.to_string()),
        other => DbError::Other(format!("sled error: {other:?}")),
    }
}

/// Aborts carry a [`DbError`] already, storage failures are converted.
pub fn tx_to_db_error(e: TransactionError<DbError>) -> DbError {
    match e {
        TransactionError::Abort(e) => e,
        TransactionError::Storage(e) => to_db_error(e),
    }
}

pub(crate) fn encode_value<T: BorshSerialize>(value: &T) -> DbResult<Vec<u8>> {
    borsh::to_vec(value).map_err(|e| DbError::CodecError(e.to_string()))
}

pub(crate) fn decode_value<T: BorshDeserialize>(bytes: &[u8]) -> DbResult<T> {
    borsh::from_slice(bytes).map_err(|e| DbError::CodecError(e.to_string()))
}
