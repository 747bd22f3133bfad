//! Bounded history of committed ledger snapshots.
//!
//! The [`SnapshotRingBuffer`] keeps the last `capacity` snapshots, indexed by
//! `epoch mod capacity`. Writes reach it only through the
//! [`SnapshotCommitter`]; withdrawal code reads it through
//! [`SnapshotProvider`].

mod committer;
mod errors;
mod provider;
mod ring;

pub use committer::SnapshotCommitter;
pub use errors::SnapshotError;
pub use provider::SnapshotProvider;
pub use ring::{SnapshotRingBuffer, DEFAULT_CAPACITY};
