//! Assets moved by bridge pools.

use std::io::{self, Read, Write};

use alloy_primitives::U256;
use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pool::AssetClass;

/// A quantity of tokens held by a pool.
#[derive(Clone, Debug, PartialEq, Eq, Arbitrary, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Asset {
    /// An amount of a fungible token.
    Fungible { amount: U256 },

    /// A single non-fungible item.
    Item { token_id: U256 },

    /// Parallel arrays of multi-token ids and their amounts, moved together.
    Batch {
        token_ids: Vec<U256>,
        amounts: Vec<U256>,
    },
}

/// Shape violations detected before any asset is moved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetShapeError {
    #[error("token id and amount arrays differ in length ({token_ids} ids, {amounts} amounts)")]
    ArrayLengthMismatch { token_ids: usize, amounts: usize },

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("batch must carry at least one token")]
    EmptyBatch,
}

impl Asset {
    pub fn fungible(amount: U256) -> Self {
        Self::Fungible { amount }
    }

    pub fn item(token_id: U256) -> Self {
        Self::Item { token_id }
    }

    pub fn batch(token_ids: Vec<U256>, amounts: Vec<U256>) -> Self {
        Self::Batch { token_ids, amounts }
    }

    /// The pool class able to custody this asset.
    pub fn class(&self) -> AssetClass {
        match self {
            Self::Fungible { .. } => AssetClass::Fungible,
            Self::Item { .. } => AssetClass::NonFungible,
            Self::Batch { .. } => AssetClass::MultiToken,
        }
    }

    /// Checks the asset is well formed.
    ///
    /// Fungible amounts and every batch amount must be non-zero, and batch
    /// arrays must be non-empty and of equal length. Item ids are unrestricted.
    pub fn validate(&self) -> Result<(), AssetShapeError> {
        match self {
            Self::Fungible { amount } => {
                if amount.is_zero() {
                    return Err(AssetShapeError::ZeroAmount);
                }
            }
            Self::Item { .. } => {}
            Self::Batch { token_ids, amounts } => {
                if token_ids.len() != amounts.len() {
                    return Err(AssetShapeError::ArrayLengthMismatch {
                        token_ids: token_ids.len(),
                        amounts: amounts.len(),
                    });
                }
                if token_ids.is_empty() {
                    return Err(AssetShapeError::EmptyBatch);
                }
                if amounts.iter().any(U256::is_zero) {
                    return Err(AssetShapeError::ZeroAmount);
                }
            }
        }
        Ok(())
    }
}

const FUNGIBLE_TAG: u8 = 0;
const ITEM_TAG: u8 = 1;
const BATCH_TAG: u8 = 2;

fn write_u256<W: Write>(value: &U256, writer: &mut W) -> io::Result<()> {
    writer.write_all(&value.to_be_bytes::<32>())
}

fn read_u256<R: Read>(reader: &mut R) -> io::Result<U256> {
    let mut buf = [0u8; 32];
    reader.read_exact(&mut buf)?;
    Ok(U256::from_be_bytes(buf))
}

fn write_u256_vec<W: Write>(values: &[U256], writer: &mut W) -> io::Result<()> {
    let len = u32::try_from(values.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many batch entries"))?;
    BorshSerialize::serialize(&len, writer)?;
    values.iter().try_for_each(|v| write_u256(v, writer))
}

fn read_u256_vec<R: Read>(reader: &mut R) -> io::Result<Vec<U256>> {
    let len = u32::deserialize_reader(reader)?;
    (0..len).map(|_| read_u256(reader)).collect()
}

impl BorshSerialize for Asset {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Self::Fungible { amount } => {
                BorshSerialize::serialize(&FUNGIBLE_TAG, writer)?;
                write_u256(amount, writer)
            }
            Self::Item { token_id } => {
                BorshSerialize::serialize(&ITEM_TAG, writer)?;
                write_u256(token_id, writer)
            }
            Self::Batch { token_ids, amounts } => {
                BorshSerialize::serialize(&BATCH_TAG, writer)?;
                write_u256_vec(token_ids, writer)?;
                write_u256_vec(amounts, writer)
            }
        }
    }
}

impl BorshDeserialize for Asset {
    fn deserialize_reader<R: Read>(reader: &mut R) -> io::Result<Self> {
        match u8::deserialize_reader(reader)? {
            FUNGIBLE_TAG => Ok(Self::Fungible {
                amount: read_u256(reader)?,
            }),
            ITEM_TAG => Ok(Self::Item {
                token_id: read_u256(reader)?,
            }),
            BATCH_TAG => {
                let token_ids = read_u256_vec(reader)?;
                let amounts = read_u256_vec(reader)?;
                Ok(Self::Batch { token_ids, amounts })
            }
            tag => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unknown asset tag {tag}"),
            )),
        }
    }
}
