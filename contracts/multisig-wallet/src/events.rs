//! # Wallet Events
//!
//! One `#[contractevent]` struct per state-changing operation. The macro
//! derives the snake_case struct name as the leading topic (for example
//! `owner_added`). Fields tagged `#[topic]` become additional topics so
//! indexers can filter by owner and transaction index; the remaining fields
//! form the data map.
//!
//! Events are only published once an operation has passed every check, so a
//! failed invocation never leaves a partial event trail.

use soroban_sdk::{contractevent, Address, Bytes, Env};

/// Emitted when the admin adds an owner.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnerAdded {
    #[topic]
    pub owner: Address,
}

/// Emitted when the admin removes an owner.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnerRemoval {
    #[topic]
    pub owner: Address,
}

/// Emitted when an owner proposes a transaction.
///
/// # Fields
/// * `owner` – The submitting owner.
/// * `tx_index` – Index assigned to the transaction.
/// * `to` – Recipient of the value and payload.
/// * `value` – Amount of the wallet token to send.
/// * `data` – Opaque payload dispatched on execution.
#[contractevent]
#[derive(Clone, Debug)]
pub struct SubmitTransaction {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
    pub to: Address,
    pub value: i128,
    pub data: Bytes,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ConfirmTransaction {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RevokeConfirmation {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ExecuteTransaction {
    #[topic]
    pub owner: Address,
    #[topic]
    pub tx_index: u64,
}

/// Emitted when anyone funds the wallet.
///
/// # Fields
/// * `sender` – The funding address.
/// * `amount` – Amount transferred in.
/// * `balance` – Wallet balance after the transfer.
#[contractevent]
#[derive(Clone, Debug)]
pub struct Deposit {
    #[topic]
    pub sender: Address,
    pub amount: i128,
    pub balance: i128,
}

pub fn emit_owner_added(env: &Env, owner: Address) {
    OwnerAdded { owner }.publish(env);
}

pub fn emit_owner_removal(env: &Env, owner: Address) {
    OwnerRemoval { owner }.publish(env);
}

pub fn emit_submit_transaction(
    env: &Env,
    owner: Address,
    tx_index: u64,
    to: Address,
    value: i128,
    data: Bytes,
) {
    SubmitTransaction {
        owner,
        tx_index,
        to,
        value,
        data,
    }
    .publish(env);
}

pub fn emit_confirm_transaction(env: &Env, owner: Address, tx_index: u64) {
    ConfirmTransaction { owner, tx_index }.publish(env);
}

pub fn emit_revoke_confirmation(env: &Env, owner: Address, tx_index: u64) {
    RevokeConfirmation { owner, tx_index }.publish(env);
}

pub fn emit_execute_transaction(env: &Env, owner: Address, tx_index: u64) {
    ExecuteTransaction { owner, tx_index }.publish(env);
}

pub fn emit_deposit(env: &Env, sender: Address, amount: i128, balance: i128) {
    Deposit {
        sender,
        amount,
        balance,
    }
    .publish(env);
}
