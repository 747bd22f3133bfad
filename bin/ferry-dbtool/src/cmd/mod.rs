pub(crate) mod deposit;
pub(crate) mod snapshot;
pub(crate) mod withdrawal;
