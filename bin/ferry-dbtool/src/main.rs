//! Binary entry-point for the offline ferry database tool.
//! Parses CLI arguments with **argh** and reads the sled store directly.
mod bridge;
mod cli;
mod cmd;
mod db;
mod errors;
mod output;
mod utils;

use std::{fmt, path::PathBuf, process, time::Duration};

use ferry_common::logging::{init_logging_from_config, ConsoleTarget, LoggingInitConfig};
use ferry_config::Config;
use ferry_db_store_sled::SledDbConfig;

use crate::{
    bridge::BridgeContext,
    cli::{Cli, Command},
    cmd::{
        deposit::{get_deposit, get_deposits_summary},
        snapshot::{get_snapshot, get_snapshots_summary},
        withdrawal::get_redeemed,
    },
    db::open_database,
};

const SERVICE_NAME: &str = "ferry-dbtool";

fn main() {
    let cli: Cli = argh::from_env();

    let config = cli
        .config
        .as_deref()
        .map(Config::load)
        .transpose()
        .unwrap_or_else(|e| exit_with(e));

    init_logging(config.as_ref());

    let Some(datadir) = resolve_datadir(cli.datadir, config.as_ref()) else {
        exit_with("either --datadir or --config must be given");
    };

    let db_config = config
        .as_ref()
        .map(|c| SledDbConfig::new(c.db_retry_count, Duration::from_millis(c.db_retry_delay_ms)))
        .unwrap_or_else(SledDbConfig::production);

    let bridge = config
        .as_ref()
        .map(BridgeContext::from_config)
        .transpose()
        .unwrap_or_else(|e| exit_with(e))
        .unwrap_or_default();

    let db = open_database(&datadir, db_config).unwrap_or_else(|e| exit_with(e));

    let result = match cli.cmd {
        Command::GetSnapshot(args) => get_snapshot(db.as_ref(), &bridge, args),
        Command::GetSnapshotsSummary(args) => get_snapshots_summary(db.as_ref(), &bridge, args),
        Command::GetDeposit(args) => get_deposit(db.as_ref(), args),
        Command::GetDepositsSummary(args) => get_deposits_summary(db.as_ref(), &bridge, args),
        Command::GetRedeemed(args) => get_redeemed(db.as_ref(), &bridge, args),
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

/// `--datadir` wins over the config file.
fn resolve_datadir(datadir: Option<PathBuf>, config: Option<&Config>) -> Option<PathBuf> {
    datadir.or_else(|| config.map(|c| c.datadir.clone()))
}

/// Logs go to stderr, stdout carries the command output.
fn init_logging(config: Option<&Config>) {
    let logging = config.map(|c| c.logging.clone()).unwrap_or_default();
    init_logging_from_config(LoggingInitConfig {
        service_base_name: SERVICE_NAME,
        service_label: logging.service_label.as_deref(),
        log_dir: logging.log_dir.as_deref(),
        log_file_prefix: logging.log_file_prefix.as_deref(),
        json_format: logging.json_format,
        default_log_prefix: SERVICE_NAME,
        console_target: ConsoleTarget::Stderr,
    })
    .unwrap_or_else(|e| exit_with(e));
}

fn exit_with(e: impl fmt::Display) -> ! {
    eprintln!("{e}");
    process::exit(1);
}
