use std::sync::Arc;

use ferry_db_types::{traits::DepositDatabase, DbResult};
use ferry_primitives::{
    buf::Buf20,
    deposit::{DepositNonce, DepositNotice, DepositRecord},
    pool::PoolDescriptor,
};
use parking_lot::Mutex;
use tracing::*;

use crate::NotifyError;

/// Receives deposit notices from pools.
pub trait DepositNotifier: Send + Sync {
    /// Logs a deposit reported by the pool `caller` claims to be, returning
    /// its nonce.
    fn notify(
        &self,
        caller: Buf20,
        descriptor: &PoolDescriptor,
        notice: DepositNotice,
    ) -> Result<DepositNonce, NotifyError>;
}

/// Deposit notifier that only accepts pools of its own chain, authenticated
/// by recomputing their identity from the descriptor they report.
#[expect(
    missing_debug_implementations,
    reason = "database trait objects don't implement Debug"
)]
pub struct BridgeNotifier {
    db: Arc<dyn DepositDatabase>,
    chain_id: u32,
    last_nonce: Mutex<DepositNonce>,
}

impl BridgeNotifier {
    /// Creates a notifier continuing the deposit log stored in `db`.
    pub fn new(db: Arc<dyn DepositDatabase>, chain_id: u32) -> DbResult<Self> {
        let last_nonce = db.get_last_deposit_nonce()?.unwrap_or(0);
        Ok(Self {
            db,
            chain_id,
            last_nonce: Mutex::new(last_nonce),
        })
    }

    pub fn chain_id(&self) -> u32 {
        self.chain_id
    }

    /// Nonce of the most recently logged deposit, 0 if none.
    pub fn last_nonce(&self) -> DepositNonce {
        *self.last_nonce.lock()
    }
}

impl DepositNotifier for BridgeNotifier {
    fn notify(
        &self,
        caller: Buf20,
        descriptor: &PoolDescriptor,
        notice: DepositNotice,
    ) -> Result<DepositNonce, NotifyError> {
        if descriptor.chain_id() != self.chain_id || descriptor.identity() != caller {
            warn!(%caller, "rejected deposit notice from unknown pool");
            return Err(NotifyError::OnlyBridgePool(caller));
        }

        let mut last_nonce = self.last_nonce.lock();
        let nonce = *last_nonce + 1;
        let record = DepositRecord::new(nonce, *descriptor, notice);
        self.db.put_deposit(record)?;
        *last_nonce = nonce;

        info!(%nonce, pool = %caller, "logged deposit");
        Ok(nonce)
    }
}
