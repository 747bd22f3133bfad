use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::{SolType, SolValue};
use ferry_primitives::{
    asset::Asset,
    pool::{AssetClass, LocalLayout, Locality},
};

use crate::{
    abi::{
        LocalBatchBurnedUtxo, LocalBurnedUtxo, LocalReceiverBatchBurnedUtxo,
        LocalReceiverBurnedUtxo, NativeBatchBurnedUtxo, NativeBurnedUtxo,
    },
    errors::BurnCodecError,
    record::{BurnRecord, LocalBurnRecord, NativeBurnRecord, RecordShape},
};

/// Decodes a preimage of the given shape.
pub fn decode(shape: RecordShape, bytes: &[u8]) -> Result<BurnRecord, BurnCodecError> {
    match shape.locality() {
        Locality::Local(layout) => {
            decode_local(layout, shape.asset_class(), bytes).map(BurnRecord::Local)
        }
        Locality::Native => decode_native(shape.asset_class(), bytes).map(BurnRecord::Native),
    }
}

pub fn decode_local(
    layout: LocalLayout,
    class: AssetClass,
    bytes: &[u8],
) -> Result<LocalBurnRecord, BurnCodecError> {
    let record = match (layout, class) {
        (LocalLayout::WithFee, AssetClass::MultiToken) => {
            let r: LocalBatchBurnedUtxo = decode_canonical(bytes)?;
            LocalBurnRecord {
                chain_id: r.chainId,
                owner: r.owner.into(),
                asset: Asset::batch(r.tokenIds, r.amounts),
                fee: Some(r.fee),
                tx_hash: r.txHash.into(),
            }
        }
        (LocalLayout::ReceiverAddressed, AssetClass::MultiToken) => {
            let r: LocalReceiverBatchBurnedUtxo = decode_canonical(bytes)?;
            LocalBurnRecord {
                chain_id: r.chainId,
                owner: r.owner.into(),
                asset: Asset::batch(r.tokenIds, r.amounts),
                fee: None,
                tx_hash: r.txHash.into(),
            }
        }
        (LocalLayout::WithFee, class) => {
            let r: LocalBurnedUtxo = decode_canonical(bytes)?;
            LocalBurnRecord {
                chain_id: r.chainId,
                owner: r.owner.into(),
                asset: scalar_asset(class, r.value)?,
                fee: Some(r.fee),
                tx_hash: r.txHash.into(),
            }
        }
        (LocalLayout::ReceiverAddressed, class) => {
            let r: LocalReceiverBurnedUtxo = decode_canonical(bytes)?;
            LocalBurnRecord {
                chain_id: r.chainId,
                owner: r.owner.into(),
                asset: scalar_asset(class, r.value)?,
                fee: None,
                tx_hash: r.txHash.into(),
            }
        }
    };
    Ok(record)
}

pub fn decode_native(class: AssetClass, bytes: &[u8]) -> Result<NativeBurnRecord, BurnCodecError> {
    let record = if class == AssetClass::MultiToken {
        let r: NativeBatchBurnedUtxo = decode_canonical(bytes)?;
        NativeBurnRecord {
            chain_id: r.chainId,
            owner: r.owner.into(),
            utxo_id: r.utxoId.into(),
            asset: Asset::batch(r.tokenIds, r.amounts),
        }
    } else {
        let r: NativeBurnedUtxo = decode_canonical(bytes)?;
        NativeBurnRecord {
            chain_id: r.chainId,
            owner: r.owner.into(),
            utxo_id: r.utxoId.into(),
            asset: scalar_asset(class, r.value)?,
        }
    };
    Ok(record)
}

/// Canonical ABI encoding of a record.
pub fn encode(record: &BurnRecord) -> Vec<u8> {
    match record {
        BurnRecord::Local(r) => encode_local(r),
        BurnRecord::Native(r) => encode_native(r),
    }
}

fn encode_local(r: &LocalBurnRecord) -> Vec<u8> {
    let owner = Address::from(r.owner);
    let tx_hash = B256::from(r.tx_hash);
    match (&r.asset, r.fee) {
        (Asset::Batch { token_ids, amounts }, Some(fee)) => LocalBatchBurnedUtxo {
            chainId: r.chain_id,
            owner,
            tokenIds: token_ids.clone(),
            amounts: amounts.clone(),
            fee,
            txHash: tx_hash,
        }
        .abi_encode(),
        (Asset::Batch { token_ids, amounts }, None) => LocalReceiverBatchBurnedUtxo {
            chainId: r.chain_id,
            owner,
            tokenIds: token_ids.clone(),
            amounts: amounts.clone(),
            txHash: tx_hash,
        }
        .abi_encode(),
        (asset, Some(fee)) => LocalBurnedUtxo {
            chainId: r.chain_id,
            owner,
            value: scalar_value(asset),
            fee,
            txHash: tx_hash,
        }
        .abi_encode(),
        (asset, None) => LocalReceiverBurnedUtxo {
            chainId: r.chain_id,
            owner,
            value: scalar_value(asset),
            txHash: tx_hash,
        }
        .abi_encode(),
    }
}

fn encode_native(r: &NativeBurnRecord) -> Vec<u8> {
    let owner = Address::from(r.owner);
    let utxo_id = B256::from(r.utxo_id);
    match &r.asset {
        Asset::Batch { token_ids, amounts } => NativeBatchBurnedUtxo {
            chainId: r.chain_id,
            owner,
            utxoId: utxo_id,
            tokenIds: token_ids.clone(),
            amounts: amounts.clone(),
        }
        .abi_encode(),
        asset => NativeBurnedUtxo {
            chainId: r.chain_id,
            owner,
            utxoId: utxo_id,
            value: scalar_value(asset),
        }
        .abi_encode(),
    }
}

/// Decodes `bytes` and rejects inputs that do not re-encode to themselves, so
/// every record has exactly one accepted preimage.
fn decode_canonical<T>(bytes: &[u8]) -> Result<T, BurnCodecError>
where
    T: SolValue + From<<T::SolType as SolType>::RustType>,
{
    let value = T::abi_decode(bytes).map_err(|e| BurnCodecError::Abi(e.to_string()))?;
    if value.abi_encode() != bytes {
        return Err(BurnCodecError::NonCanonical);
    }
    Ok(value)
}

fn scalar_asset(class: AssetClass, value: U256) -> Result<Asset, BurnCodecError> {
    match class {
        AssetClass::Fungible => Ok(Asset::Fungible { amount: value }),
        AssetClass::NonFungible => Ok(Asset::Item { token_id: value }),
        AssetClass::MultiToken => Err(BurnCodecError::ShapeMismatch),
    }
}

/// Scalar carried in the `value` field. Only called on non-batch assets.
fn scalar_value(asset: &Asset) -> U256 {
    match asset {
        Asset::Fungible { amount } => *amount,
        Asset::Item { token_id } => *token_id,
        Asset::Batch { .. } => U256::ZERO,
    }
}
