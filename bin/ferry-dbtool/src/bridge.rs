//! What the config file says about the bridge that wrote the database.

use ferry_config::{Config, ConfigError};
use ferry_primitives::{buf::Buf20, pool::PoolDescriptor};

/// Deployment facts used to cross-check stored state. Empty when the tool
/// runs without `--config`.
#[derive(Debug, Default)]
pub(crate) struct BridgeContext {
    /// Ring capacity the bridge is configured with.
    pub(crate) snapshot_capacity: Option<u32>,
    pub(crate) pools: Vec<PoolDescriptor>,
}

impl BridgeContext {
    pub(crate) fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            snapshot_capacity: Some(config.bridge.snapshot_capacity),
            pools: config.pool_descriptors()?,
        })
    }

    pub(crate) fn is_configured(&self) -> bool {
        self.snapshot_capacity.is_some()
    }

    /// Finds the configured pool with the given identity.
    pub(crate) fn pool(&self, identity: Buf20) -> Option<&PoolDescriptor> {
        self.pools.iter().find(|pool| pool.identity() == identity)
    }
}
