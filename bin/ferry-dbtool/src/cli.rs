use std::{path::PathBuf, str::FromStr};

use argh::FromArgs;

use crate::cmd::{
    deposit::{GetDepositArgs, GetDepositsSummaryArgs},
    snapshot::{GetSnapshotArgs, GetSnapshotsSummaryArgs},
    withdrawal::GetRedeemedArgs,
};

#[derive(FromArgs, PartialEq, Debug)]
/// Offline inspector for a ferry bridge database.
pub(crate) struct Cli {
    /// config file with the datadir, db retry, logging and bridge settings
    #[argh(option, short = 'c')]
    pub(crate) config: Option<PathBuf>,

    /// data directory, takes precedence over the config file
    #[argh(option, short = 'd')]
    pub(crate) datadir: Option<PathBuf>,

    #[argh(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Command {
    GetSnapshot(GetSnapshotArgs),
    GetSnapshotsSummary(GetSnapshotsSummaryArgs),
    GetDeposit(GetDepositArgs),
    GetDepositsSummary(GetDepositsSummaryArgs),
    GetRedeemed(GetRedeemedArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// `key: value` lines, one field per line.
    Porcelain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "porcelain" => Ok(Self::Porcelain),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format {other}, expected \"porcelain\" or \"json\""
            )),
        }
    }
}
