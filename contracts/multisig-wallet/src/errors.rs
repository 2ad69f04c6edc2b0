use soroban_sdk::contracterror;

/// Errors surfaced by every wallet operation.
///
/// Codes are stable: clients match on `Error(Contract, #code)`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    /// Caller is not the admin
    AdminRestrictedFunction = 1,
    /// Caller is not a current owner
    NotOwner = 2,
    /// No transaction at the requested index
    TxDoesNotExist = 3,
    /// Caller already confirmed this transaction
    TxAlreadyConfirmed = 4,
    /// Caller has no confirmation to revoke
    TxNotConfirmed = 5,
    /// Not enough confirmations, or already executed
    CannotExecuteTx = 6,
    /// Value transfer or payload dispatch failed
    TxFailed = 7,
    /// Transaction is frozen after execution
    TxAlreadyExecuted = 8,
    AlreadyInitialized = 9,
    NotInitialized = 10,
    /// Initial owner list is empty
    NoOwners = 11,
    /// Initial owner list repeats an address
    DuplicateOwner = 12,
    OwnerAlreadyExists = 13,
    OwnerNotFound = 14,
    /// Removal would leave the wallet without owners
    LastOwner = 15,
    /// Negative value or non-positive deposit
    InvalidAmount = 16,
    /// Execution gate entered while already running
    Reentrancy = 17,
    /// Counter would overflow
    Overflow = 18,
}
