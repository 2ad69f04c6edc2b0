use soroban_sdk::Env;

use crate::errors::WalletError;
use crate::storage::WalletDataKey;

/// Temporary-storage lock held while the execution gate runs.
///
/// Released when dropped. A second `acquire` while the lock is held fails with
/// [`WalletError::Reentrancy`].
pub struct ExecutionLock<'a> {
    env: &'a Env,
}

impl<'a> ExecutionLock<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, WalletError> {
        let key = WalletDataKey::ExecutionLock;
        if env.storage().temporary().has(&key) {
            return Err(WalletError::Reentrancy);
        }
        env.storage().temporary().set(&key, &true);
        Ok(Self { env })
    }
}

impl Drop for ExecutionLock<'_> {
    fn drop(&mut self) {
        self.env
            .storage()
            .temporary()
            .remove(&WalletDataKey::ExecutionLock);
    }
}
