//! # Transaction Ledger
//!
//! Intake and confirmation bookkeeping for proposed transactions.
//!
//! Transactions are appended at index `TransactionCount` and never removed
//! or renumbered. For every index, `num_confirmations` equals the number of
//! owners holding a confirmation record for it.

use soroban_sdk::{contracttype, log, Address, Bytes, Env};

use crate::access_registry::require_owner;
use crate::errors::WalletError;
use crate::events::{emit_confirm_transaction, emit_revoke_confirmation, emit_submit_transaction};
use crate::storage;

/// A proposed transfer of the wallet token plus an opaque payload.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Recipient of the value and payload
    pub to: Address,
    /// Amount of the wallet token to send
    pub value: i128,
    /// Payload dispatched to `to` on execution; empty means plain transfer
    pub data: Bytes,
    /// Set once, by the execution gate
    pub executed: bool,
    pub num_confirmations: u32,
}

/// Load a transaction or fail with [`WalletError::TxDoesNotExist`].
pub fn load_transaction(env: &Env, tx_index: u64) -> Result<Transaction, WalletError> {
    storage::get_transaction(env, tx_index).ok_or(WalletError::TxDoesNotExist)
}

/// Owner: propose a transaction. Returns the assigned index.
///
/// # Errors
/// - [`WalletError::NotOwner`] if `owner` is not a current owner.
/// - [`WalletError::InvalidAmount`] if `value` is negative.
/// - [`WalletError::Overflow`] if the index space is exhausted.
pub fn submit_transaction(
    env: &Env,
    owner: Address,
    to: Address,
    value: i128,
    data: Bytes,
) -> Result<u64, WalletError> {
    require_owner(env, &owner)?;
    if value < 0 {
        return Err(WalletError::InvalidAmount);
    }

    let tx_index = storage::get_transaction_count(env);
    let tx = Transaction {
        to: to.clone(),
        value,
        data: data.clone(),
        executed: false,
        num_confirmations: 0,
    };
    let next_index = tx_index.checked_add(1).ok_or(WalletError::Overflow)?;
    storage::set_transaction(env, tx_index, &tx);
    storage::set_transaction_count(env, next_index);

    log!(env, "submit_transaction {} by {} value={}", tx_index, owner, value);
    emit_submit_transaction(env, owner, tx_index, to, value, data);
    Ok(tx_index)
}

/// Owner: confirm a pending transaction.
///
/// # Errors
/// - [`WalletError::NotOwner`], [`WalletError::TxDoesNotExist`]
/// - [`WalletError::TxAlreadyExecuted`] if the transaction already ran.
/// - [`WalletError::TxAlreadyConfirmed`] if `owner` already confirmed it.
pub fn confirm_transaction(env: &Env, owner: Address, tx_index: u64) -> Result<(), WalletError> {
    require_owner(env, &owner)?;
    let mut tx = load_transaction(env, tx_index)?;
    if tx.executed {
        return Err(WalletError::TxAlreadyExecuted);
    }
    if storage::is_confirmed(env, tx_index, &owner) {
        return Err(WalletError::TxAlreadyConfirmed);
    }

    tx.num_confirmations = tx
        .num_confirmations
        .checked_add(1)
        .ok_or(WalletError::Overflow)?;
    storage::set_transaction(env, tx_index, &tx);
    storage::set_confirmed(env, tx_index, &owner, true);

    log!(
        env,
        "confirm_transaction {} by {} confirmations={}",
        tx_index,
        owner,
        tx.num_confirmations
    );
    emit_confirm_transaction(env, owner, tx_index);
    Ok(())
}

/// Owner: withdraw an earlier confirmation. Allowed above threshold as long
/// as the transaction has not executed.
///
/// # Errors
/// - [`WalletError::NotOwner`], [`WalletError::TxDoesNotExist`]
/// - [`WalletError::TxAlreadyExecuted`] if the transaction already ran.
/// - [`WalletError::TxNotConfirmed`] if `owner` holds no confirmation.
pub fn revoke_confirmation(env: &Env, owner: Address, tx_index: u64) -> Result<(), WalletError> {
    require_owner(env, &owner)?;
    let mut tx = load_transaction(env, tx_index)?;
    if tx.executed {
        return Err(WalletError::TxAlreadyExecuted);
    }
    if !storage::is_confirmed(env, tx_index, &owner) {
        return Err(WalletError::TxNotConfirmed);
    }

    tx.num_confirmations = tx
        .num_confirmations
        .checked_sub(1)
        .ok_or(WalletError::TxNotConfirmed)?;
    storage::set_transaction(env, tx_index, &tx);
    storage::set_confirmed(env, tx_index, &owner, false);

    log!(
        env,
        "revoke_confirmation {} by {} confirmations={}",
        tx_index,
        owner,
        tx.num_confirmations
    );
    emit_revoke_confirmation(env, owner, tx_index);
    Ok(())
}
