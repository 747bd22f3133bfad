//! Collection of data types shared by the bridge verification crates.

#[macro_use]
mod macros;

pub mod asset;
pub mod buf;
pub mod deposit;
pub mod hash;
pub mod pool;
pub mod prelude;
pub mod snapshot;

pub use alloy_primitives::U256;
