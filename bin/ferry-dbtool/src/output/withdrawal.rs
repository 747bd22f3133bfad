//! Redemption formatting implementations

use ferry_db_types::types::RedemptionEntry;
use ferry_primitives::{
    buf::{Buf20, Buf32},
    pool::PoolDescriptor,
};

use super::{
    helpers::{porcelain_field, porcelain_optional, porcelain_pool},
    traits::Formattable,
};

/// Whether a burn record key was redeemed, and where
#[derive(serde::Serialize)]
pub(crate) struct RedeemedInfo {
    pub key: Buf32,
    pub redeemed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch: Option<u64>,
    /// Identity of the pool that released the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<Buf20>,
    /// Set when the config file knows the redeeming pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_descriptor: Option<PoolDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Buf20>,
    pub total_redeemed: u64,
}

impl RedeemedInfo {
    pub(crate) fn new(
        key: Buf32,
        entry: Option<RedemptionEntry>,
        pool_descriptor: Option<PoolDescriptor>,
        total_redeemed: u64,
    ) -> Self {
        Self {
            key,
            redeemed: entry.is_some(),
            epoch: entry.map(|e| e.epoch),
            pool: entry.map(|e| e.pool),
            pool_descriptor,
            receiver: entry.map(|e| e.receiver),
            total_redeemed,
        }
    }
}

impl Formattable for RedeemedInfo {
    fn format_porcelain(&self) -> String {
        let mut output = vec![
            porcelain_field("key", format!("{:?}", self.key)),
            porcelain_field("redeemed", self.redeemed),
            porcelain_optional("epoch", self.epoch),
            porcelain_optional("pool", self.pool.map(|p| format!("{p:?}"))),
        ];
        if let Some(descriptor) = &self.pool_descriptor {
            output.extend(porcelain_pool("pool", descriptor));
        }
        output.push(porcelain_optional(
            "receiver",
            self.receiver.map(|r| format!("{r:?}")),
        ));
        output.push(porcelain_field("total_redeemed", self.total_redeemed));
        output.join("\n")
    }
}
