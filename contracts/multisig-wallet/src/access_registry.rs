//! # Access Registry
//!
//! Owns the owner set, the admin and the approval threshold.
//!
//! ## Rules
//! - The admin is fixed at initialization; only the admin may change the
//!   owner set.
//! - The owner set keeps insertion order, never holds duplicates and never
//!   becomes empty.
//! - The threshold is `floor(owners * 60 / 100)` and is rewritten every time
//!   the owner set changes. Nothing outside this module writes it.
//! - Removing an owner does not touch confirmations that owner already gave.

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::WalletError;
use crate::events::{emit_owner_added, emit_owner_removal};
use crate::storage;

/// Share of owners (in percent) whose confirmation is required.
pub const CONFIRMATION_PERCENT: u64 = 60;
pub const PERCENT_SCALE: u64 = 100;

/// Confirmations required for a wallet with `owner_count` owners.
pub fn confirmations_required(owner_count: u32) -> u32 {
    (owner_count as u64 * CONFIRMATION_PERCENT / PERCENT_SCALE) as u32
}

/// Set up the registry. Can only run once.
///
/// # Errors
/// - [`WalletError::AlreadyInitialized`] on a second call.
/// - [`WalletError::NoOwners`] if `owners` is empty.
/// - [`WalletError::DuplicateOwner`] if `owners` repeats an address.
pub fn initialize(
    env: &Env,
    admin: Address,
    owners: Vec<Address>,
    token: Address,
) -> Result<(), WalletError> {
    if storage::is_initialized(env) {
        return Err(WalletError::AlreadyInitialized);
    }
    admin.require_auth();

    if owners.is_empty() {
        return Err(WalletError::NoOwners);
    }
    let mut seen: Vec<Address> = Vec::new(env);
    for owner in owners.iter() {
        if seen.contains(&owner) {
            return Err(WalletError::DuplicateOwner);
        }
        seen.push_back(owner);
    }

    storage::set_admin(env, &admin);
    storage::set_token(env, &token);
    storage::set_transaction_count(env, 0);
    commit_owners(env, &owners);

    log!(
        env,
        "initialize admin={} owners={} threshold={}",
        admin,
        owners.len(),
        storage::get_threshold(env)
    );
    Ok(())
}

pub fn is_owner(env: &Env, identity: &Address) -> bool {
    storage::get_owners(env)
        .map(|owners| owners.contains(identity))
        .unwrap_or(false)
}

/// Require that `caller` signed the invocation and is the admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), WalletError> {
    caller.require_auth();
    if *caller != storage::get_admin(env)? {
        return Err(WalletError::AdminRestrictedFunction);
    }
    Ok(())
}

/// Require that `caller` signed the invocation and is a current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), WalletError> {
    caller.require_auth();
    if !storage::get_owners(env)?.contains(caller) {
        return Err(WalletError::NotOwner);
    }
    Ok(())
}

/// Admin: append `owner` to the owner set.
///
/// # Errors
/// - [`WalletError::AdminRestrictedFunction`] if `caller` is not the admin.
/// - [`WalletError::OwnerAlreadyExists`] if `owner` is already an owner.
pub fn add_owner(env: &Env, caller: Address, owner: Address) -> Result<(), WalletError> {
    require_admin(env, &caller)?;

    let mut owners = storage::get_owners(env)?;
    if owners.contains(&owner) {
        return Err(WalletError::OwnerAlreadyExists);
    }
    owners.push_back(owner.clone());
    commit_owners(env, &owners);

    log!(env, "add_owner {} owners={}", owner, owners.len());
    emit_owner_added(env, owner);
    Ok(())
}

/// Admin: remove `owner` from the owner set.
///
/// # Errors
/// - [`WalletError::AdminRestrictedFunction`] if `caller` is not the admin.
/// - [`WalletError::OwnerNotFound`] if `owner` is not an owner.
/// - [`WalletError::LastOwner`] if `owner` is the only owner left.
pub fn remove_owner(env: &Env, caller: Address, owner: Address) -> Result<(), WalletError> {
    require_admin(env, &caller)?;

    let mut owners = storage::get_owners(env)?;
    let position = owners
        .first_index_of(&owner)
        .ok_or(WalletError::OwnerNotFound)?;
    if owners.len() == 1 {
        return Err(WalletError::LastOwner);
    }
    owners.remove(position);
    commit_owners(env, &owners);

    log!(env, "remove_owner {} owners={}", owner, owners.len());
    emit_owner_removal(env, owner);
    Ok(())
}

/// Admin: replace `old_owner` with `new_owner`.
///
/// Both membership changes land before the threshold is recomputed, and the
/// removal event is published before the addition event.
pub fn transfer_ownership(
    env: &Env,
    caller: Address,
    old_owner: Address,
    new_owner: Address,
) -> Result<(), WalletError> {
    require_admin(env, &caller)?;

    let mut owners = storage::get_owners(env)?;
    let position = owners
        .first_index_of(&old_owner)
        .ok_or(WalletError::OwnerNotFound)?;
    if owners.contains(&new_owner) {
        return Err(WalletError::OwnerAlreadyExists);
    }
    owners.remove(position);
    owners.push_back(new_owner.clone());
    commit_owners(env, &owners);

    log!(env, "transfer_ownership {} -> {}", old_owner, new_owner);
    emit_owner_removal(env, old_owner);
    emit_owner_added(env, new_owner);
    Ok(())
}

fn commit_owners(env: &Env, owners: &Vec<Address>) {
    storage::set_owners(env, owners);
    storage::set_threshold(env, confirmations_required(owners.len()));
}
