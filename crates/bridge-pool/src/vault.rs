use ferry_primitives::{asset::Asset, buf::Buf20};

use crate::AssetError;

/// Token transfer capability for the contract a pool custodies.
///
/// Both calls move the whole asset or nothing.
pub trait AssetVault {
    /// Moves `asset` from `from` into the pool's custody.
    fn lock(&mut self, from: Buf20, asset: &Asset) -> Result<(), AssetError>;

    /// Moves `asset` out of the pool's custody to `to`.
    fn unlock(&mut self, to: Buf20, asset: &Asset) -> Result<(), AssetError>;
}
