//! Facilities shared by the ferry binaries.

pub mod logging;
