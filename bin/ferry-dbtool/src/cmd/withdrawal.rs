use argh::FromArgs;
use ferry_db_types::traits::{DatabaseBackend, WithdrawalDatabase};
use ferry_primitives::buf::Buf32;

use crate::{
    bridge::BridgeContext,
    cli::OutputFormat,
    errors::{DisplayableError, DisplayedError},
    output::{output, withdrawal::RedeemedInfo},
    utils::ids::parse_record_key,
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-redeemed")]
/// Check whether a burn record was redeemed, and by which pool
pub(crate) struct GetRedeemedArgs {
    /// burn record key (hex)
    #[argh(positional)]
    pub(crate) key: String,

    /// output format: "porcelain" (default) or "json"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Get the redemption entry for a record key.
pub(crate) fn get_redeemed(
    db: &impl DatabaseBackend,
    bridge: &BridgeContext,
    args: GetRedeemedArgs,
) -> Result<(), DisplayedError> {
    let key = parse_record_key(&args.key)?;
    let info = lookup_redemption(db, bridge, key)?;
    output(&info, args.output_format)
}

fn lookup_redemption(
    db: &impl DatabaseBackend,
    bridge: &BridgeContext,
    key: Buf32,
) -> Result<RedeemedInfo, DisplayedError> {
    let withdrawal_db = db.withdrawal_db();
    let entry = withdrawal_db
        .get_redemption(key)
        .internal_error(format!("Failed to get redemption for key {key:?}"))?;
    let total = withdrawal_db
        .count_redemptions()
        .internal_error("Failed to count redemptions")?;

    let pool = entry.and_then(|e| bridge.pool(e.pool)).copied();
    Ok(RedeemedInfo::new(key, entry, pool, total))
}
