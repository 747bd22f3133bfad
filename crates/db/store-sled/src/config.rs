use std::{thread, time::Duration};

use ferry_db_types::{DbError, DbResult};
use tracing::warn;

// Configuration constants
pub(crate) const DEFAULT_RETRY_COUNT: u16 = 3;
pub(crate) const DEFAULT_RETRY_DELAY_MS: u64 = 150;
pub(crate) const TEST_RETRY_DELAY_MS: u64 = 10; // Faster for tests

/// database operations configuration
///
/// Write conflicts inside a transaction are retried by sled itself; this only
/// governs retries of writes that failed with an IO error.
#[derive(Debug, Clone)]
pub struct SledDbConfig {
    pub retry_count: u16,
    pub retry_delay: Duration,
}

impl SledDbConfig {
    pub fn new(retry_count: u16, retry_delay: Duration) -> Self {
        Self {
            retry_count,
            retry_delay,
        }
    }

    /// Create production configuration with default values
    pub fn production() -> Self {
        Self::new(
            DEFAULT_RETRY_COUNT,
            Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        )
    }

    /// Create test configuration with faster retry delays
    pub fn test() -> Self {
        Self::new(DEFAULT_RETRY_COUNT, Duration::from_millis(TEST_RETRY_DELAY_MS))
    }

    /// Runs `f`, rerunning it after a constant delay while it fails with an IO
    /// error and retries remain. Any other error is returned immediately.
    pub fn with_retry<F, R>(&self, f: F) -> DbResult<R>
    where
        F: Fn() -> DbResult<R>,
    {
        let mut attempt = 0;
        loop {
            match f() {
                Err(DbError::IoError(msg)) if attempt < self.retry_count => {
                    attempt += 1;
                    warn!(%attempt, %msg, "sled write failed, retrying");
                    thread::sleep(self.retry_delay);
                }
                res => return res,
            }
        }
    }
}
