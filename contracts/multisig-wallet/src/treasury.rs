//! Funding and balance of the wallet token.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::WalletError;
use crate::events::emit_deposit;
use crate::storage;

/// Anyone: move `amount` of the wallet token from `from` into the wallet.
///
/// # Returns
/// The wallet balance after the transfer.
///
/// # Errors
/// - [`WalletError::InvalidAmount`] if `amount` is zero or negative.
/// - [`WalletError::NotInitialized`] before `initialize`.
pub fn deposit(env: &Env, from: Address, amount: i128) -> Result<i128, WalletError> {
    from.require_auth();
    if amount <= 0 {
        return Err(WalletError::InvalidAmount);
    }

    let token_client = token::Client::new(env, &storage::get_token(env)?);
    let wallet = env.current_contract_address();
    token_client.transfer(&from, &wallet, &amount);
    let balance = token_client.balance(&wallet);

    log!(env, "deposit {} amount={} balance={}", from, amount, balance);
    emit_deposit(env, from, amount, balance);
    Ok(balance)
}

/// Wallet token balance held by the contract.
pub fn balance(env: &Env) -> Result<i128, WalletError> {
    let token_client = token::Client::new(env, &storage::get_token(env)?);
    Ok(token_client.balance(&env.current_contract_address()))
}
