use std::{error::Error, path::Path, sync::Arc};

use ferry_db_store_sled::{open_sled_backend, SledBackend, SledDbConfig, SLED_NAME};
use tracing::debug;

/// Opens an existing ferry database under `datadir`.
///
/// Unlike the node, the tool never creates a database: a missing store is
/// reported instead of silently inspecting an empty one.
pub(crate) fn open_database(
    datadir: &Path,
    config: SledDbConfig,
) -> Result<Arc<SledBackend>, Box<dyn Error>> {
    let db_dir = datadir.join("sled").join(SLED_NAME);
    if !db_dir.exists() {
        return Err(format!("no ferry database found at {}", db_dir.display()).into());
    }

    debug!(datadir = %datadir.display(), "opening ferry database");
    let backend = open_sled_backend(datadir, SLED_NAME, config)
        .map_err(|e| format!("Failed to open sled database: {e}"))?;
    Ok(backend)
}
