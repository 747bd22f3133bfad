use thiserror::Error;

/// Errors raised by the storage layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    /// A lookup that must succeed found nothing, e.g. a ring slot the
    /// metadata says is occupied.
    #[error("expected entry is missing")]
    NonExistentEntry,

    /// Insert-once write hit an existing key.
    #[error("entry already exists")]
    EntryAlreadyExists,

    /// Append to an ordered log with the wrong next index.
    #[error("out-of-order insert into {0} at index {1}")]
    OooInsert(&'static str, u64),

    /// Retried by the sled store.
    #[error("io: {0}")]
    IoError(String),

    #[error("codec: {0}")]
    CodecError(String),

    #[error("{0}")]
    Other(String),
}
