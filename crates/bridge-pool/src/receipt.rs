use ferry_primitives::{
    asset::Asset,
    buf::{Buf20, Buf32},
    deposit::DepositNonce,
    snapshot::Epoch,
};
use serde::{Deserialize, Serialize};

/// Returned to the depositor once the deposit is logged.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DepositReceipt {
    pub nonce: DepositNonce,
    pub pool: Buf20,
    pub depositor: Buf20,
    pub receiver: Buf20,
    pub asset: Asset,
}

/// Returned once a burn record was redeemed and its asset released.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WithdrawalReceipt {
    /// Key the burn record was proven and is now tracked under.
    pub key: Buf32,

    /// Epoch of the snapshot the proof was checked against.
    pub epoch: Epoch,

    pub receiver: Buf20,
    pub asset: Asset,
}
