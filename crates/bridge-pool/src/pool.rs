use std::sync::Arc;

use ferry_burn_proof::{decode, key_of, value_hash, BurnRecord, RecordShape};
use ferry_db_types::{types::RedemptionEntry, DbError};
use ferry_merkle::{verify_inclusion, MerkleProofError, SparseMerkleProof};
use ferry_primitives::{
    asset::Asset,
    buf::{Buf20, Buf32},
    deposit::DepositNotice,
    pool::{LocalLayout, Locality, PoolDescriptor},
    snapshot::{Epoch, Snapshot},
};
use ferry_snapshots::SnapshotProvider;
use tracing::*;

use crate::{
    AssetVault, BridgePoolError, DepositNotifier, DepositReceipt, WithdrawalLedger,
    WithdrawalReceipt,
};

/// A claim to redeem one burn record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalRequest {
    /// Epoch of the snapshot to prove against; the latest if unset.
    pub epoch: Option<Epoch>,

    /// ABI encoded burn record.
    pub preimage: Vec<u8>,

    /// Encoded sparse Merkle proof of the record.
    pub proof: Vec<u8>,

    /// Account to release to; the caller if unset.
    pub receiver: Option<Buf20>,
}

impl WithdrawalRequest {
    pub fn new(preimage: Vec<u8>, proof: Vec<u8>) -> Self {
        Self {
            epoch: None,
            preimage,
            proof,
            receiver: None,
        }
    }

    pub fn at_epoch(mut self, epoch: Epoch) -> Self {
        self.epoch = Some(epoch);
        self
    }

    pub fn to_receiver(mut self, receiver: Buf20) -> Self {
        self.receiver = Some(receiver);
        self
    }
}

/// Pool bound to a single [`PoolDescriptor`].
///
/// Entry points take `&mut self`, so calls on one pool never interleave. A
/// call that fails leaves the ledger, the deposit log and the vault as they
/// were.
#[expect(
    missing_debug_implementations,
    reason = "provider and notifier trait objects don't implement Debug"
)]
pub struct BridgePool<V> {
    descriptor: PoolDescriptor,
    identity: Buf20,
    router: Buf20,
    snapshots: Arc<dyn SnapshotProvider>,
    ledger: WithdrawalLedger,
    notifier: Arc<dyn DepositNotifier>,
    vault: V,
}

impl<V: AssetVault> BridgePool<V> {
    /// Creates a pool. `router` is the only accepted caller of native pools
    /// and is ignored by local pools.
    pub fn new(
        descriptor: PoolDescriptor,
        router: Buf20,
        snapshots: Arc<dyn SnapshotProvider>,
        ledger: WithdrawalLedger,
        notifier: Arc<dyn DepositNotifier>,
        vault: V,
    ) -> Self {
        Self {
            identity: descriptor.identity(),
            descriptor,
            router,
            snapshots,
            ledger,
            notifier,
            vault,
        }
    }

    pub fn descriptor(&self) -> &PoolDescriptor {
        &self.descriptor
    }

    pub fn identity(&self) -> Buf20 {
        self.identity
    }

    pub fn ledger(&self) -> &WithdrawalLedger {
        &self.ledger
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    pub fn vault_mut(&mut self) -> &mut V {
        &mut self.vault
    }

    /// Locks `asset` from the caller and logs it for `receiver` on the
    /// ledger.
    pub fn deposit(
        &mut self,
        caller: Buf20,
        receiver: Buf20,
        asset: Asset,
    ) -> Result<DepositReceipt, BridgePoolError> {
        asset.validate()?;
        let class = asset.class();
        if class != self.descriptor.asset_class() {
            return Err(BridgePoolError::AssetClassMismatch {
                expected: self.descriptor.asset_class(),
                got: class,
            });
        }
        self.check_router(caller)?;

        self.vault.lock(caller, &asset)?;

        let notice = DepositNotice {
            depositor: caller,
            receiver,
            asset: asset.clone(),
        };
        let nonce = match self.notifier.notify(self.identity, &self.descriptor, notice) {
            Ok(nonce) => nonce,
            Err(e) => {
                if let Err(unlock_err) = self.vault.unlock(caller, &asset) {
                    error!(%caller, %unlock_err, "failed to return asset after rejected deposit");
                }
                return Err(e.into());
            }
        };

        debug!(pool = %self.identity, %nonce, %caller, %receiver, "accepted deposit");
        Ok(DepositReceipt {
            nonce,
            pool: self.identity,
            depositor: caller,
            receiver,
            asset,
        })
    }

    /// Redeems a burn record and releases its asset to the claimant.
    pub fn withdraw(
        &mut self,
        caller: Buf20,
        request: WithdrawalRequest,
    ) -> Result<WithdrawalReceipt, BridgePoolError> {
        let res = self.try_withdraw(caller, request);
        match &res {
            Ok(receipt) => info!(
                pool = %self.identity,
                key = %receipt.key,
                epoch = %receipt.epoch,
                receiver = %receipt.receiver,
                "released withdrawal"
            ),
            Err(e) => warn!(pool = %self.identity, %caller, err = %e, "rejected withdrawal"),
        }
        res
    }

    fn try_withdraw(
        &mut self,
        caller: Buf20,
        request: WithdrawalRequest,
    ) -> Result<WithdrawalReceipt, BridgePoolError> {
        self.check_router(caller)?;

        let snapshot = self.resolve_snapshot(request.epoch)?;

        let record = decode(RecordShape::for_pool(&self.descriptor), &request.preimage)?;
        let proof = SparseMerkleProof::from_bytes(&request.proof).map_err(MerkleProofError::from)?;
        record.asset().validate()?;

        self.check_proof(&snapshot, &record, &proof)?;

        let claimant = request.receiver.unwrap_or(caller);
        let owner = record.owner();
        if owner != claimant {
            return Err(match self.descriptor.locality() {
                Locality::Local(LocalLayout::ReceiverAddressed) => {
                    BridgePoolError::ReceiverIsNotOwnerOnProofOfBurnUtxo {
                        owner,
                        receiver: claimant,
                    }
                }
                _ => BridgePoolError::UtxoAccountDoesNotMatchReceiver {
                    owner,
                    receiver: claimant,
                },
            });
        }

        if record.chain_id() != self.descriptor.chain_id() {
            return Err(BridgePoolError::ChainIdDoesNotMatch {
                expected: self.descriptor.chain_id(),
                got: record.chain_id(),
            });
        }

        let key = key_of(&record);
        if matches!(record, BurnRecord::Native(_)) && key != *proof.proof_key() {
            return Err(BridgePoolError::MerkleProofKeyDoesNotMatchUtxoId);
        }

        if self.ledger.is_redeemed(key)? {
            return Err(BridgePoolError::UtxoAlreadyWithdrawn(key));
        }

        self.release(key, snapshot.epoch, claimant, record.asset())?;

        Ok(WithdrawalReceipt {
            key,
            epoch: snapshot.epoch,
            receiver: claimant,
            asset: record.asset().clone(),
        })
    }

    fn check_router(&self, caller: Buf20) -> Result<(), BridgePoolError> {
        if self.descriptor.locality().is_native() && caller != self.router {
            return Err(BridgePoolError::OnlyBridgeRouter(caller));
        }
        Ok(())
    }

    fn resolve_snapshot(&self, epoch: Option<Epoch>) -> Result<Snapshot, BridgePoolError> {
        let snapshot = match epoch {
            Some(epoch) => self.snapshots.snapshot_at(epoch)?,
            None => self.snapshots.latest_snapshot()?,
        };
        Ok(snapshot)
    }

    /// Proves the record under the snapshot's state root.
    ///
    /// Local records are proven at their own key with their own hash as the
    /// value. Native proofs are checked at the leaf they carry, which must
    /// then hold the record's hash.
    fn check_proof(
        &self,
        snapshot: &Snapshot,
        record: &BurnRecord,
        proof: &SparseMerkleProof,
    ) -> Result<(), BridgePoolError> {
        let root = &snapshot.state_root;
        match record {
            BurnRecord::Local(_) => {
                verify_inclusion(root, proof, &key_of(record), &value_hash(record))?;
            }
            BurnRecord::Native(_) => {
                verify_inclusion(root, proof, proof.proof_key(), proof.proof_value())?;
                if *proof.proof_value() != value_hash(record) {
                    return Err(BridgePoolError::UtxoDoesNotMatch);
                }
            }
        }
        Ok(())
    }

    /// Marks `key` redeemed under this pool and moves the asset out, undoing
    /// the mark if the transfer fails.
    fn release(
        &mut self,
        key: Buf32,
        epoch: Epoch,
        receiver: Buf20,
        asset: &Asset,
    ) -> Result<(), BridgePoolError> {
        let entry = RedemptionEntry::new(epoch, self.identity, receiver);
        match self.ledger.mark_redeemed(key, entry) {
            Ok(()) => {}
            // Another pool over the same ledger redeemed it since the check.
            Err(DbError::EntryAlreadyExists) => {
                return Err(BridgePoolError::UtxoAlreadyWithdrawn(key));
            }
            Err(e) => return Err(e.into()),
        }

        if let Err(e) = self.vault.unlock(receiver, asset) {
            if let Err(db_err) = self.ledger.unmark(key) {
                error!(%key, %db_err, "failed to roll back redemption mark");
            }
            return Err(e.into());
        }
        Ok(())
    }
}
