//! TOML configuration of a bridge deployment.

mod config;
mod errors;

pub use config::{
    BridgeConfig, Config, LoggingConfig, PoolConfig, PoolLocality, DEFAULT_SNAPSHOT_CAPACITY,
};
pub use errors::ConfigError;
