use std::fmt::Display;

use ferry_primitives::{
    asset::Asset,
    pool::{Locality, PoolDescriptor},
};

pub(crate) fn porcelain_field(key: &str, value: impl Display) -> String {
    format!("{key}: {value}")
}

/// Renders `None` as `none`.
pub(crate) fn porcelain_optional(key: &str, value: Option<impl Display>) -> String {
    match value {
        Some(value) => porcelain_field(key, value),
        None => porcelain_field(key, "none"),
    }
}

/// Fields describing `asset`, keyed under `prefix`. Batch arrays are comma
/// separated.
pub(crate) fn porcelain_asset(prefix: &str, asset: &Asset) -> Vec<String> {
    match asset {
        Asset::Fungible { amount } => vec![
            porcelain_field(&format!("{prefix}.kind"), "fungible"),
            porcelain_field(&format!("{prefix}.amount"), amount),
        ],
        Asset::Item { token_id } => vec![
            porcelain_field(&format!("{prefix}.kind"), "item"),
            porcelain_field(&format!("{prefix}.token_id"), token_id),
        ],
        Asset::Batch { token_ids, amounts } => vec![
            porcelain_field(&format!("{prefix}.kind"), "batch"),
            porcelain_field(&format!("{prefix}.token_ids"), join(token_ids)),
            porcelain_field(&format!("{prefix}.amounts"), join(amounts)),
        ],
    }
}

/// Fields of a pool descriptor, keyed under `prefix`.
pub(crate) fn porcelain_pool(prefix: &str, pool: &PoolDescriptor) -> Vec<String> {
    let locality = match pool.locality() {
        Locality::Local(_) => "local",
        Locality::Native => "native",
    };
    vec![
        porcelain_field(
            &format!("{prefix}.token_contract"),
            format!("{:?}", pool.token_contract()),
        ),
        porcelain_field(
            &format!("{prefix}.asset_class"),
            format!("{:?}", pool.asset_class()),
        ),
        porcelain_field(&format!("{prefix}.locality"), locality),
        porcelain_field(&format!("{prefix}.chain_id"), pool.chain_id()),
        porcelain_field(&format!("{prefix}.version"), pool.version()),
    ]
}

fn join(values: &[impl Display]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use ferry_primitives::U256;

    use super::*;

    #[test]
    fn test_optional_field() {
        assert_eq!(porcelain_optional("head", Some(4u64)), "head: 4");
        assert_eq!(porcelain_optional("head", None::<u64>), "head: none");
    }

    #[test]
    fn test_batch_asset_fields() {
        let asset = Asset::batch(
            vec![U256::from(1), U256::from(2)],
            vec![U256::from(10), U256::from(20)],
        );
        assert_eq!(
            porcelain_asset("asset", &asset),
            vec![
                "asset.kind: batch".to_string(),
                "asset.token_ids: 1,2".to_string(),
                "asset.amounts: 10,20".to_string(),
            ]
        );
    }
}
