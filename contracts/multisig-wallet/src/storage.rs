//! Storage layout and typed accessors for all wallet state.
//!
//! Registry state (admin, token, owners, threshold) and the transaction
//! counter live in instance storage. Transactions and confirmations are
//! persistent entries keyed by transaction index.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::WalletError;
use crate::ledger::Transaction;

#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum WalletDataKey {
    /// Admin allowed to change the owner set
    Admin,
    /// Asset contract the wallet holds value in
    Token,
    /// Owner set in insertion order
    Owners,
    /// Confirmations required to execute
    Threshold,
    /// Number of submitted transactions (next index)
    TransactionCount,
    Transaction(u64),
    /// Confirmation(tx_index, owner) -> bool
    Confirmation(u64, Address),
    /// Held while the execution gate runs
    ExecutionLock,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&WalletDataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&WalletDataKey::Admin)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&WalletDataKey::Admin, admin);
}

pub fn get_token(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&WalletDataKey::Token)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&WalletDataKey::Token, token);
}

pub fn get_owners(env: &Env) -> Result<Vec<Address>, WalletError> {
    env.storage()
        .instance()
        .get(&WalletDataKey::Owners)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_owners(env: &Env, owners: &Vec<Address>) {
    env.storage().instance().set(&WalletDataKey::Owners, owners);
}

pub fn get_threshold(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&WalletDataKey::Threshold)
        .unwrap_or(0)
}

pub fn set_threshold(env: &Env, threshold: u32) {
    env.storage()
        .instance()
        .set(&WalletDataKey::Threshold, &threshold);
}

pub fn get_transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&WalletDataKey::TransactionCount)
        .unwrap_or(0)
}

pub fn set_transaction_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&WalletDataKey::TransactionCount, &count);
}

pub fn get_transaction(env: &Env, tx_index: u64) -> Option<Transaction> {
    env.storage()
        .persistent()
        .get(&WalletDataKey::Transaction(tx_index))
}

pub fn set_transaction(env: &Env, tx_index: u64, tx: &Transaction) {
    env.storage()
        .persistent()
        .set(&WalletDataKey::Transaction(tx_index), tx);
}

pub fn is_confirmed(env: &Env, tx_index: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&WalletDataKey::Confirmation(tx_index, owner.clone()))
        .unwrap_or(false)
}

/// A cleared confirmation removes the entry instead of storing `false`.
pub fn set_confirmed(env: &Env, tx_index: u64, owner: &Address, confirmed: bool) {
    let key = WalletDataKey::Confirmation(tx_index, owner.clone());
    if confirmed {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}
