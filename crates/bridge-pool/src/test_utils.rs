//! In-memory implementations for exercising pools without a token contract.

use std::{
    collections::{BTreeMap, HashMap},
    mem,
};

use ferry_primitives::{asset::Asset, buf::Buf20, U256};

use crate::{AssetError, AssetVault};

/// Token id fungible balances are tracked under.
const FUNGIBLE_ID: U256 = U256::ZERO;

/// Token ledger of a single contract, with the pool's custody as one account.
///
/// Fungible balances live under token id 0 and items are balances of 1, so
/// one balance table serves every asset class.
#[derive(Debug)]
pub struct InMemoryVault {
    custody: Buf20,
    balances: HashMap<(Buf20, U256), U256>,
    fail_next_lock: bool,
    fail_next_unlock: bool,
}

impl InMemoryVault {
    /// Creates an empty vault whose locked assets are held by `custody`.
    pub fn new(custody: Buf20) -> Self {
        Self {
            custody,
            balances: HashMap::new(),
            fail_next_lock: false,
            fail_next_unlock: false,
        }
    }

    pub fn custody(&self) -> Buf20 {
        self.custody
    }

    /// Credits `asset` to `account` out of thin air.
    pub fn mint(&mut self, account: Buf20, asset: &Asset) -> Result<(), AssetError> {
        for (token_id, amount) in entries(asset)? {
            let balance = self.balances.entry((account, token_id)).or_default();
            *balance = balance
                .checked_add(amount)
                .ok_or(AssetError::Overflow(token_id))?;
        }
        Ok(())
    }

    pub fn balance_of(&self, account: Buf20, token_id: U256) -> U256 {
        self.balances
            .get(&(account, token_id))
            .copied()
            .unwrap_or_default()
    }

    /// Fungible balance of `account`.
    pub fn fungible_balance(&self, account: Buf20) -> U256 {
        self.balance_of(account, FUNGIBLE_ID)
    }

    /// Whether `account` holds the non-fungible item `token_id`.
    pub fn owns_item(&self, account: Buf20, token_id: U256) -> bool {
        !self.balance_of(account, token_id).is_zero()
    }

    /// Makes the next [`AssetVault::lock`] fail without moving anything.
    pub fn fail_next_lock(&mut self) {
        self.fail_next_lock = true;
    }

    /// Makes the next [`AssetVault::unlock`] fail without moving anything.
    pub fn fail_next_unlock(&mut self) {
        self.fail_next_unlock = true;
    }

    fn transfer(&mut self, from: Buf20, to: Buf20, asset: &Asset) -> Result<(), AssetError> {
        let moves = entries(asset)?;

        for (token_id, amount) in &moves {
            if self.balance_of(from, *token_id) < *amount {
                return Err(AssetError::InsufficientBalance {
                    account: from,
                    token_id: *token_id,
                });
            }
            if self.balance_of(to, *token_id).checked_add(*amount).is_none() {
                return Err(AssetError::Overflow(*token_id));
            }
        }

        for (token_id, amount) in moves {
            if let Some(balance) = self.balances.get_mut(&(from, token_id)) {
                *balance -= amount;
            }
            *self.balances.entry((to, token_id)).or_default() += amount;
        }
        Ok(())
    }
}

impl AssetVault for InMemoryVault {
    fn lock(&mut self, from: Buf20, asset: &Asset) -> Result<(), AssetError> {
        if mem::take(&mut self.fail_next_lock) {
            return Err(AssetError::TransferFailed("injected lock failure".to_owned()));
        }
        self.transfer(from, self.custody, asset)
    }

    fn unlock(&mut self, to: Buf20, asset: &Asset) -> Result<(), AssetError> {
        if mem::take(&mut self.fail_next_unlock) {
            return Err(AssetError::TransferFailed("injected unlock failure".to_owned()));
        }
        self.transfer(self.custody, to, asset)
    }
}

/// Per-token amounts moved by `asset`, with repeated batch ids summed.
fn entries(asset: &Asset) -> Result<BTreeMap<U256, U256>, AssetError> {
    let mut out = BTreeMap::new();
    match asset {
        Asset::Fungible { amount } => {
            out.insert(FUNGIBLE_ID, *amount);
        }
        Asset::Item { token_id } => {
            out.insert(*token_id, U256::from(1));
        }
        Asset::Batch { token_ids, amounts } => {
            for (token_id, amount) in token_ids.iter().zip(amounts) {
                let total: &mut U256 = out.entry(*token_id).or_default();
                *total = total
                    .checked_add(*amount)
                    .ok_or(AssetError::Overflow(*token_id))?;
            }
        }
    }
    Ok(out)
}
