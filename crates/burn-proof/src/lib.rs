//! Burn record preimages and the keys they are proven under.
//!
//! A burn record is the ABI encoding of one of the ledger's burn structs. The
//! struct used depends on the pool the record is redeemed at: local pools take
//! records keyed by the burning transaction hash, native pools take records
//! keyed by a UTXO id, and multi-token pools take the batch variants of either.

mod abi;
mod codec;
mod errors;
mod record;

pub use codec::{decode, decode_local, decode_native, encode};
pub use errors::BurnCodecError;
pub use record::{key_of, value_hash, BurnRecord, LocalBurnRecord, NativeBurnRecord, RecordShape};
