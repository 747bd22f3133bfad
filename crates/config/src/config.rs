use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use ferry_primitives::{
    buf::Buf20,
    pool::{AssetClass, LocalLayout, Locality, PoolDescriptor},
};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default value for `datadir` in [`Config`].
const DEFAULT_DATADIR: &str = "ferry-data";

/// Default value for `snapshot_capacity` in [`BridgeConfig`].
pub const DEFAULT_SNAPSHOT_CAPACITY: u32 = 1024;

/// Default DB retry count.
const DEFAULT_DB_RETRY_COUNT: u16 = 3;

/// Default DB retry delay in ms.
const DEFAULT_DB_RETRY_DELAY: u64 = 150;

/// Default pool version.
const DEFAULT_POOL_VERSION: u32 = 1;

fn default_datadir() -> PathBuf {
    DEFAULT_DATADIR.into()
}

fn default_snapshot_capacity() -> u32 {
    DEFAULT_SNAPSHOT_CAPACITY
}

fn default_db_retry_count() -> u16 {
    DEFAULT_DB_RETRY_COUNT
}

fn default_db_retry_delay() -> u64 {
    DEFAULT_DB_RETRY_DELAY
}

fn default_pool_version() -> u32 {
    DEFAULT_POOL_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The data directory where database contents reside.
    #[serde(default = "default_datadir")]
    pub datadir: PathBuf,

    /// How many times to retry a write that failed with an IO error.
    #[serde(default = "default_db_retry_count")]
    pub db_retry_count: u16,

    /// Db retry delay in ms.
    #[serde(default = "default_db_retry_delay")]
    pub db_retry_delay_ms: u64,

    pub bridge: BridgeConfig,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Chain the pools of this deployment serve.
    pub chain_id: u32,

    /// Number of snapshots kept in the ring.
    #[serde(default = "default_snapshot_capacity")]
    pub snapshot_capacity: u32,

    /// The only account allowed to commit snapshots.
    pub snapshot_authority: Buf20,

    /// The only account allowed to call native pools.
    pub router: Buf20,

    #[serde(default)]
    pub pools: Vec<PoolConfig>,
}

/// Which side of the bridge a configured pool's token is native to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolLocality {
    Local,
    Native,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub token_contract: Buf20,
    pub asset_class: AssetClass,
    pub locality: PoolLocality,

    /// Burn record layout of a local pool, `with_fee` if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_layout: Option<LocalLayout>,

    #[serde(default = "default_pool_version")]
    pub version: u32,
}

impl PoolConfig {
    /// Builds the descriptor of this pool on chain `chain_id`.
    pub fn descriptor(&self, chain_id: u32) -> Result<PoolDescriptor, ConfigError> {
        let locality = match (self.locality, self.local_layout) {
            (PoolLocality::Local, layout) => {
                Locality::Local(layout.unwrap_or(LocalLayout::WithFee))
            }
            (PoolLocality::Native, None) => Locality::Native,
            (PoolLocality::Native, Some(_)) => {
                return Err(ConfigError::LayoutOnNativePool(self.token_contract));
            }
        };
        Ok(PoolDescriptor::new(
            self.token_contract,
            self.asset_class,
            locality,
            chain_id,
            self.version,
        ))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Service label to append to the service name (e.g., "prod", "dev").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_label: Option<String>,

    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_prefix: Option<String>,

    /// Use JSON format for logs instead of compact format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_format: Option<bool>,
}

impl Config {
    /// Reads, parses and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parses and validates a config.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let bridge = &self.bridge;
        if bridge.snapshot_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if bridge.snapshot_authority.is_zero() {
            return Err(ConfigError::ZeroAddress("snapshot_authority"));
        }
        if bridge.router.is_zero() {
            return Err(ConfigError::ZeroAddress("router"));
        }

        let mut seen = HashSet::new();
        for descriptor in self.pool_descriptors()? {
            let identity = descriptor.identity();
            if !seen.insert(identity) {
                return Err(ConfigError::DuplicatePool(identity));
            }
        }
        Ok(())
    }

    /// Descriptors of every configured pool.
    pub fn pool_descriptors(&self) -> Result<Vec<PoolDescriptor>, ConfigError> {
        self.bridge
            .pools
            .iter()
            .map(|pool| pool.descriptor(self.bridge.chain_id))
            .collect()
    }
}
