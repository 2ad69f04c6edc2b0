//! # Multisig Wallet Contract
//!
//! A shared-custody wallet on Soroban. A set of owners, managed by a single
//! admin, must jointly confirm a transaction (a transfer of the wallet token
//! plus an optional payload) before any owner can execute it.
//!
//! - **Access registry**: owner set, admin, and the approval threshold
//!   (60% of owners, rounded down), recomputed on every membership change.
//! - **Transaction ledger**: append-only transactions and per-owner
//!   confirmations.
//! - **Execution gate**: threshold check, single-shot execution and failure
//!   rollback.
//! - **Treasury**: funding and balance of the wallet token.
//!
//! Every entry point returns `Result<_, WalletError>`; an `Err` rolls back the
//! whole invocation.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, Vec};

mod access_registry;
mod errors;
mod events;
mod execution;
mod ledger;
mod reentrancy;
mod storage;
mod treasury;

pub use access_registry::{confirmations_required, CONFIRMATION_PERCENT};
pub use errors::WalletError;
pub use execution::RECEIVER_FN;
pub use ledger::Transaction;

#[cfg(test)]
mod tests;

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Initialize the wallet.
    ///
    /// # Arguments
    /// * `admin` - The address allowed to change the owner set (must authorize)
    /// * `owners` - Initial owners, non-empty and without duplicates
    /// * `token` - The asset contract the wallet holds value in
    ///
    /// # Errors
    /// - `AlreadyInitialized` - Called more than once
    /// - `NoOwners` - Empty owner list
    /// - `DuplicateOwner` - Owner list repeats an address
    pub fn initialize(
        env: Env,
        admin: Address,
        owners: Vec<Address>,
        token: Address,
    ) -> Result<(), WalletError> {
        access_registry::initialize(&env, admin, owners, token)
    }

    // ── Access registry ───────────────────────────────────────────────────────

    /// Admin: add an owner. Emits `OwnerAdded`.
    pub fn add_owner(env: Env, caller: Address, owner: Address) -> Result<(), WalletError> {
        access_registry::add_owner(&env, caller, owner)
    }

    /// Admin: remove an owner. Emits `OwnerRemoval`.
    pub fn remove_owner(env: Env, caller: Address, owner: Address) -> Result<(), WalletError> {
        access_registry::remove_owner(&env, caller, owner)
    }

    /// Admin: replace `old_owner` with `new_owner`. Emits `OwnerRemoval`
    /// then `OwnerAdded`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        old_owner: Address,
        new_owner: Address,
    ) -> Result<(), WalletError> {
        access_registry::transfer_ownership(&env, caller, old_owner, new_owner)
    }

    // ── Transaction ledger ────────────────────────────────────────────────────

    /// Owner: propose sending `value` of the wallet token and `data` to `to`.
    ///
    /// # Returns
    /// The index of the new transaction
    pub fn submit_transaction(
        env: Env,
        owner: Address,
        to: Address,
        value: i128,
        data: Bytes,
    ) -> Result<u64, WalletError> {
        ledger::submit_transaction(&env, owner, to, value, data)
    }

    /// Owner: confirm a pending transaction.
    pub fn confirm_transaction(env: Env, owner: Address, tx_index: u64) -> Result<(), WalletError> {
        ledger::confirm_transaction(&env, owner, tx_index)
    }

    /// Owner: revoke an earlier confirmation.
    pub fn revoke_confirmation(env: Env, owner: Address, tx_index: u64) -> Result<(), WalletError> {
        ledger::revoke_confirmation(&env, owner, tx_index)
    }

    // ── Execution gate ────────────────────────────────────────────────────────

    /// Owner: execute a transaction that has enough confirmations.
    ///
    /// # Errors
    /// - `CannotExecuteTx` - Below threshold or already executed
    /// - `TxFailed` - Transfer or payload dispatch failed; nothing changes
    pub fn execute_transaction(env: Env, owner: Address, tx_index: u64) -> Result<(), WalletError> {
        execution::execute_transaction(&env, owner, tx_index)
    }

    // ── Treasury ──────────────────────────────────────────────────────────────

    /// Anyone: fund the wallet. Returns the new balance.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, WalletError> {
        treasury::deposit(&env, from, amount)
    }

    pub fn balance(env: Env) -> Result<i128, WalletError> {
        treasury::balance(&env)
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn get_owners(env: Env) -> Result<Vec<Address>, WalletError> {
        storage::get_owners(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, WalletError> {
        storage::get_admin(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, WalletError> {
        storage::get_token(&env)
    }

    pub fn is_owner(env: Env, identity: Address) -> bool {
        access_registry::is_owner(&env, &identity)
    }

    pub fn num_confirmations_required(env: Env) -> u32 {
        storage::get_threshold(&env)
    }

    /// Returns the transaction at `tx_index` or `TxDoesNotExist`.
    pub fn get_transaction(env: Env, tx_index: u64) -> Result<Transaction, WalletError> {
        ledger::load_transaction(&env, tx_index)
    }

    pub fn get_transaction_count(env: Env) -> u64 {
        storage::get_transaction_count(&env)
    }

    pub fn is_confirmed(env: Env, tx_index: u64, owner: Address) -> bool {
        storage::is_confirmed(&env, tx_index, &owner)
    }
}
