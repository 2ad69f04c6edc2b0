//! # Execution Gate
//!
//! Runs a confirmed transaction exactly once.
//!
//! ## Ordering
//! 1. Guards: caller is an owner, the transaction exists, it has at least
//!    `threshold` confirmations and has not executed.
//! 2. `executed = true` is written **before** any external call, so anything
//!    the recipient calls back into sees the transaction as spent.
//! 3. Value is transferred with the wallet token, then a non-empty payload is
//!    dispatched to the recipient's [`RECEIVER_FN`] entry point.
//! 4. If either external step fails the flag is restored and the call returns
//!    [`WalletError::TxFailed`]. The host also discards every write made by
//!    the failed invocation, so the transaction stays executable.

use soroban_sdk::{log, token, Address, Env, IntoVal, Symbol, Val, Vec};

use crate::access_registry::require_owner;
use crate::errors::WalletError;
use crate::events::emit_execute_transaction;
use crate::ledger::{load_transaction, Transaction};
use crate::reentrancy::ExecutionLock;
use crate::storage;

/// Entry point invoked on the recipient when a transaction carries a payload.
///
/// Called as `on_multisig_call(wallet: Address, tx_index: u64, value: i128, data: Bytes)`.
pub const RECEIVER_FN: &str = "on_multisig_call";

/// Owner: execute a transaction that reached the confirmation threshold.
///
/// # Errors
/// - [`WalletError::NotOwner`], [`WalletError::TxDoesNotExist`]
/// - [`WalletError::CannotExecuteTx`] if confirmations are below threshold or
///   the transaction already executed.
/// - [`WalletError::TxFailed`] if the transfer or payload dispatch failed.
pub fn execute_transaction(env: &Env, owner: Address, tx_index: u64) -> Result<(), WalletError> {
    let (_lock, mut tx) = commit_execution(env, &owner, tx_index)?;

    if let Err(err) = dispatch(env, tx_index, &tx) {
        tx.executed = false;
        storage::set_transaction(env, tx_index, &tx);
        log!(env, "execute_transaction {} failed", tx_index);
        return Err(err);
    }

    log!(env, "execute_transaction {} by {} value={}", tx_index, owner, tx.value);
    emit_execute_transaction(env, owner, tx_index);
    Ok(())
}

/// Run the gate checks, take the execution lock and persist `executed = true`.
///
/// No external call has been made when this returns; the caller dispatches
/// while holding the returned lock.
pub(crate) fn commit_execution<'a>(
    env: &'a Env,
    owner: &Address,
    tx_index: u64,
) -> Result<(ExecutionLock<'a>, Transaction), WalletError> {
    require_owner(env, owner)?;
    let mut tx = load_transaction(env, tx_index)?;
    if tx.executed || tx.num_confirmations < storage::get_threshold(env) {
        return Err(WalletError::CannotExecuteTx);
    }

    let lock = ExecutionLock::acquire(env)?;

    tx.executed = true;
    storage::set_transaction(env, tx_index, &tx);
    Ok((lock, tx))
}

fn dispatch(env: &Env, tx_index: u64, tx: &Transaction) -> Result<(), WalletError> {
    let wallet = env.current_contract_address();

    if tx.value > 0 {
        let token_client = token::Client::new(env, &storage::get_token(env)?);
        if !matches!(token_client.try_transfer(&wallet, &tx.to, &tx.value), Ok(Ok(()))) {
            return Err(WalletError::TxFailed);
        }
    }

    if !tx.data.is_empty() {
        call_receiver(env, &wallet, tx_index, tx)?;
    }
    Ok(())
}

fn call_receiver(
    env: &Env,
    wallet: &Address,
    tx_index: u64,
    tx: &Transaction,
) -> Result<(), WalletError> {
    let args: Vec<Val> = (wallet.clone(), tx_index, tx.value, tx.data.clone()).into_val(env);
    let result = env.try_invoke_contract::<Val, soroban_sdk::Error>(
        &tx.to,
        &Symbol::new(env, RECEIVER_FN),
        args,
    );
    match result {
        Ok(Ok(_)) => Ok(()),
        _ => Err(WalletError::TxFailed),
    }
}
