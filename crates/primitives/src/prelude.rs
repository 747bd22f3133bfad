pub use crate::{
    asset::{Asset, AssetShapeError},
    buf::{Buf20, Buf32},
    deposit::{DepositNonce, DepositNotice, DepositRecord},
    hash::{keccak, keccak_concat},
    pool::{AssetClass, LocalLayout, Locality, PoolDescriptor},
    snapshot::{Epoch, Snapshot, NULL_EPOCH},
    U256,
};
