use std::{io, path::PathBuf};

use ferry_primitives::buf::Buf20;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("snapshot_capacity must be non-zero")]
    ZeroCapacity,

    #[error("{0} must not be the zero address")]
    ZeroAddress(&'static str),

    /// Two pool entries describe the same pool.
    #[error("pool {0:?} is configured more than once")]
    DuplicatePool(Buf20),

    #[error("native pool for token {0:?} must not set local_layout")]
    LayoutOnNativePool(Buf20),
}
