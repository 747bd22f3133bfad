//! Deposit log formatting implementations

use ferry_primitives::{buf::Buf20, deposit::DepositRecord};

use super::{
    helpers::{porcelain_asset, porcelain_field, porcelain_optional, porcelain_pool},
    traits::Formattable,
};

/// A single accepted deposit
#[derive(serde::Serialize)]
pub(crate) struct DepositInfo<'a> {
    #[serde(flatten)]
    pub record: &'a DepositRecord,
}

/// Deposits accepted by one pool
#[derive(serde::Serialize)]
pub(crate) struct PoolDeposits {
    pub pool: Buf20,
    pub deposits: u64,
    /// Whether the config file knows this pool. Unset without a config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
}

/// State of the whole deposit log
#[derive(serde::Serialize)]
pub(crate) struct DepositsSummaryInfo {
    pub last_nonce: Option<u64>,
    pub deposit_count: u64,
    pub all_deposits_present: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_nonces: Vec<u64>,
    pub pools: Vec<PoolDeposits>,
}

impl Formattable for DepositInfo<'_> {
    fn format_porcelain(&self) -> String {
        let r = self.record;
        let mut output = vec![
            porcelain_field("nonce", r.nonce()),
            porcelain_field("pool", format!("{:?}", r.pool())),
        ];
        output.extend(porcelain_pool("pool", r.descriptor()));
        output.push(porcelain_field("depositor", format!("{:?}", r.depositor())));
        output.push(porcelain_field("receiver", format!("{:?}", r.receiver())));
        output.extend(porcelain_asset("asset", r.asset()));
        output.join("\n")
    }
}

impl Formattable for DepositsSummaryInfo {
    fn format_porcelain(&self) -> String {
        let mut output = vec![
            porcelain_optional("last_nonce", self.last_nonce),
            porcelain_field("deposit_count", self.deposit_count),
            porcelain_field("all_deposits_present", self.all_deposits_present),
        ];

        for nonce in &self.missing_nonces {
            output.push(porcelain_field("missing_nonce", nonce));
        }

        for pool in &self.pools {
            let key = format!("pool.{:?}", pool.pool);
            output.push(porcelain_field(&key, pool.deposits));
            if let Some(configured) = pool.configured {
                output.push(porcelain_field(&format!("{key}.configured"), configured));
            }
        }

        output.join("\n")
    }
}
