use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BurnCodecError {
    #[error("abi decoding failed: {0}")]
    Abi(String),

    /// The bytes decode, but are not what encoding the decoded record yields.
    #[error("burn record is not canonically encoded")]
    NonCanonical,

    #[error("record shape does not match the pool")]
    ShapeMismatch,
}
