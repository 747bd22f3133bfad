use std::collections::BTreeMap;

use argh::FromArgs;
use ferry_db_types::traits::{DatabaseBackend, DepositDatabase};
use ferry_primitives::deposit::{DepositNonce, DepositRecord};

use crate::{
    bridge::BridgeContext,
    cli::OutputFormat,
    errors::{DisplayableError, DisplayedError},
    output::{
        deposit::{DepositInfo, DepositsSummaryInfo, PoolDeposits},
        output,
    },
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-deposit")]
/// Get a deposit by nonce
pub(crate) struct GetDepositArgs {
    /// deposit nonce
    #[argh(positional)]
    pub(crate) nonce: u64,

    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-deposits-summary")]
/// Get a summary of the deposit log
pub(crate) struct GetDepositsSummaryArgs {
    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Get a deposit record by nonce.
pub(crate) fn get_deposit_record(
    db: &impl DatabaseBackend,
    nonce: DepositNonce,
) -> Result<Option<DepositRecord>, DisplayedError> {
    db.deposit_db()
        .get_deposit(nonce)
        .internal_error(format!("Failed to get deposit {nonce}"))
}

/// Get a deposit by nonce.
pub(crate) fn get_deposit(
    db: &impl DatabaseBackend,
    args: GetDepositArgs,
) -> Result<(), DisplayedError> {
    let record = get_deposit_record(db, args.nonce)?.ok_or_else(|| {
        DisplayedError::UserError(
            "No deposit found for nonce".to_string(),
            Box::new(args.nonce),
        )
    })?;

    output(&DepositInfo { record: &record }, args.output_format)
}

/// Get deposits summary.
pub(crate) fn get_deposits_summary(
    db: &impl DatabaseBackend,
    bridge: &BridgeContext,
    args: GetDepositsSummaryArgs,
) -> Result<(), DisplayedError> {
    let summary = summarize_deposits(db, bridge)?;
    output(&summary, args.output_format)
}

/// Walks the log from nonce 1 to the last nonce. With a config, each pool is
/// also checked against the configured pools.
fn summarize_deposits(
    db: &impl DatabaseBackend,
    bridge: &BridgeContext,
) -> Result<DepositsSummaryInfo, DisplayedError> {
    let last_nonce = db
        .deposit_db()
        .get_last_deposit_nonce()
        .internal_error("Failed to get last deposit nonce")?;

    let mut missing_nonces = Vec::new();
    let mut per_pool = BTreeMap::new();
    for nonce in 1..=last_nonce.unwrap_or(0) {
        match get_deposit_record(db, nonce)? {
            Some(record) => *per_pool.entry(record.pool()).or_insert(0u64) += 1,
            None => missing_nonces.push(nonce),
        }
    }

    Ok(DepositsSummaryInfo {
        last_nonce,
        deposit_count: per_pool.values().sum(),
        all_deposits_present: missing_nonces.is_empty(),
        missing_nonces,
        pools: per_pool
            .into_iter()
            .map(|(pool, deposits)| PoolDeposits {
                pool,
                deposits,
                configured: bridge
                    .is_configured()
                    .then(|| bridge.pool(pool).is_some()),
            })
            .collect(),
    })
}
