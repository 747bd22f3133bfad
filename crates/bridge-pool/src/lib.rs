//! Bridge pools: lock assets on deposit, release them against proven burns.
//!
//! A [`BridgePool`] is bound to one [`PoolDescriptor`](ferry_primitives::pool::PoolDescriptor).
//! Deposits lock an asset in the pool's [`AssetVault`] and are reported to a
//! [`DepositNotifier`]. Withdrawals decode a burn record, prove it against a
//! committed snapshot, check it against the claimant and the pool's chain,
//! and release the asset once, guarded by a
//! [`WithdrawalLedger`] shared by every pool.

mod errors;
mod ledger;
mod notifier;
mod pool;
mod receipt;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
mod vault;

pub use errors::{AssetError, BridgePoolError, NotifyError};
pub use ledger::WithdrawalLedger;
pub use notifier::{BridgeNotifier, DepositNotifier};
pub use pool::{BridgePool, WithdrawalRequest};
pub use receipt::{DepositReceipt, WithdrawalReceipt};
pub use vault::AssetVault;
