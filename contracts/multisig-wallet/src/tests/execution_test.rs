use super::test_helpers::{setup, WalletFixture, UNIT};
use crate::reentrancy::ExecutionLock;
use crate::WalletError;
use soroban_sdk::{Address, Bytes};

mod recording {
    use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Bytes, Env};

    #[contracttype]
    #[derive(Clone, Debug, PartialEq)]
    pub struct ReceivedCall {
        pub wallet: Address,
        pub tx_index: u64,
        pub value: i128,
        pub data: Bytes,
    }

    /// Remembers the last payload it was handed.
    #[contract]
    pub struct RecordingReceiver;

    #[contractimpl]
    impl RecordingReceiver {
        pub fn on_multisig_call(env: Env, wallet: Address, tx_index: u64, value: i128, data: Bytes) {
            env.storage().instance().set(
                &symbol_short!("LAST"),
                &ReceivedCall {
                    wallet,
                    tx_index,
                    value,
                    data,
                },
            );
        }

        pub fn last_call(env: Env) -> Option<ReceivedCall> {
            env.storage().instance().get(&symbol_short!("LAST"))
        }
    }
}

mod rejecting {
    use soroban_sdk::{contract, contracterror, contractimpl, Address, Bytes, Env};

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    #[repr(u32)]
    pub enum ReceiverError {
        Rejected = 1,
    }

    #[contract]
    pub struct RejectingReceiver;

    #[contractimpl]
    impl RejectingReceiver {
        pub fn on_multisig_call(
            _env: Env,
            _wallet: Address,
            _tx_index: u64,
            _value: i128,
            _data: Bytes,
        ) -> Result<(), ReceiverError> {
            Err(ReceiverError::Rejected)
        }
    }
}

mod reentrant {
    use crate::MultisigWalletClient;
    use soroban_sdk::{contract, contractimpl, symbol_short, Address, Bytes, Env};

    /// Tries to execute the same transaction again from inside the payload call.
    #[contract]
    pub struct ReentrantReceiver;

    #[contractimpl]
    impl ReentrantReceiver {
        pub fn set_owner(env: Env, owner: Address) {
            env.storage().instance().set(&symbol_short!("OWNER"), &owner);
        }

        pub fn on_multisig_call(env: Env, wallet: Address, tx_index: u64, _value: i128, _data: Bytes) {
            let owner: Address = env
                .storage()
                .instance()
                .get(&symbol_short!("OWNER"))
                .unwrap();
            let wallet_client = MultisigWalletClient::new(&env, &wallet);
            let blocked = wallet_client
                .try_execute_transaction(&owner, &tx_index)
                .is_err();
            env.storage()
                .instance()
                .set(&symbol_short!("BLOCKED"), &blocked);
        }

        pub fn reentry_blocked(env: Env) -> bool {
            env.storage()
                .instance()
                .get(&symbol_short!("BLOCKED"))
                .unwrap_or(false)
        }
    }
}

use recording::{RecordingReceiver, RecordingReceiverClient};
use reentrant::{ReentrantReceiver, ReentrantReceiverClient};
use rejecting::RejectingReceiver;

fn payload(f: &WalletFixture) -> Bytes {
    Bytes::from_slice(&f.env, b"release")
}

fn submit_and_confirm(f: &WalletFixture, to: &Address, value: i128, data: &Bytes) -> u64 {
    let tx_index = f.client.submit_transaction(&f.owner(0), to, &value, data);
    f.client.confirm_transaction(&f.owner(0), &tx_index);
    tx_index
}

// ── guards ────────────────────────────────────────────────────────────────────

#[test]
fn test_non_owner_cannot_execute() {
    let f = setup();
    let result = f.client.try_execute_transaction(&f.user, &0);
    assert_eq!(result, Err(Ok(WalletError::NotOwner)));
}

#[test]
fn test_execute_missing_transaction_fails() {
    let f = setup();
    let result = f.client.try_execute_transaction(&f.owner(0), &0);
    assert_eq!(result, Err(Ok(WalletError::TxDoesNotExist)));
}

#[test]
fn test_execute_below_threshold_fails() {
    let f = setup();
    f.fund_wallet(10 * UNIT);
    f.submit_transfer(&f.owner(0), UNIT);

    let result = f.client.try_execute_transaction(&f.owner(0), &0);
    assert_eq!(result, Err(Ok(WalletError::CannotExecuteTx)));
    assert!(!f.client.get_transaction(&0).executed);
    assert_eq!(f.token_balance(&f.user), 0);
}

#[test]
fn test_execute_after_revoke_below_threshold_fails() {
    let f = setup();
    f.fund_wallet(10 * UNIT);
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());
    f.client.revoke_confirmation(&f.owner(0), &0);

    let result = f.client.try_execute_transaction(&f.owner(0), &0);
    assert_eq!(result, Err(Ok(WalletError::CannotExecuteTx)));
}

// ── value transfer ────────────────────────────────────────────────────────────

#[test]
fn test_insufficient_balance_fails_with_tx_failed() {
    let f = setup();
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());

    let result = f.client.try_execute_transaction(&f.owner(0), &0);
    assert_eq!(result, Err(Ok(WalletError::TxFailed)));
    assert!(!f.has_event("execute_transaction"));

    let tx = f.client.get_transaction(&0);
    assert!(!tx.executed);
    assert_eq!(tx.num_confirmations, 1);
}

#[test]
fn test_failed_transfer_can_be_retried_after_funding() {
    let f = setup();
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());
    assert_eq!(
        f.client.try_execute_transaction(&f.owner(0), &0),
        Err(Ok(WalletError::TxFailed))
    );

    f.fund_wallet(UNIT);
    f.client.execute_transaction(&f.owner(0), &0);

    assert!(f.client.get_transaction(&0).executed);
    assert_eq!(f.token_balance(&f.user), UNIT);
    assert_eq!(f.client.balance(), 0);
}

#[test]
fn test_execute_transfers_value_and_emits_event() {
    let f = setup();
    f.fund_wallet(10 * UNIT);
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());

    f.client.execute_transaction(&f.owner(0), &0);

    let (topics, _) = f.last_event("execute_transaction");
    assert_eq!(f.topic_address(&topics, 1), f.owner(0));
    assert_eq!(f.topic_u64(&topics, 2), 0);

    assert!(f.client.get_transaction(&0).executed);
    assert_eq!(f.token_balance(&f.user), UNIT);
    assert_eq!(f.client.balance(), 9 * UNIT);
}

#[test]
fn test_any_owner_can_execute() {
    let f = setup();
    f.fund_wallet(UNIT);
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());

    f.client.execute_transaction(&f.owner(2), &0);

    let (topics, _) = f.last_event("execute_transaction");
    assert_eq!(f.topic_address(&topics, 1), f.owner(2));
}

#[test]
fn test_second_execution_rejected_and_value_moves_once() {
    let f = setup();
    f.fund_wallet(10 * UNIT);
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());
    f.client.execute_transaction(&f.owner(0), &0);

    for i in 0..3u32 {
        assert_eq!(
            f.client.try_execute_transaction(&f.owner(i), &0),
            Err(Ok(WalletError::CannotExecuteTx))
        );
    }
    assert_eq!(f.token_balance(&f.user), UNIT);
    assert_eq!(f.client.balance(), 9 * UNIT);
}

#[test]
fn test_zero_value_transfer_needs_no_funds() {
    let f = setup();
    submit_and_confirm(&f, &f.user, 0, &f.empty_data());
    f.client.execute_transaction(&f.owner(0), &0);
    assert!(f.client.get_transaction(&0).executed);
}

#[test]
fn test_transactions_execute_independently() {
    let f = setup();
    f.fund_wallet(3 * UNIT);
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());
    submit_and_confirm(&f, &f.user, 2 * UNIT, &f.empty_data());

    f.client.execute_transaction(&f.owner(0), &1);
    assert!(!f.client.get_transaction(&0).executed);
    assert!(f.client.get_transaction(&1).executed);

    f.client.execute_transaction(&f.owner(0), &0);
    assert_eq!(f.token_balance(&f.user), 3 * UNIT);
    assert_eq!(f.client.balance(), 0);
}

// ── payload dispatch ──────────────────────────────────────────────────────────

#[test]
fn test_payload_dispatched_to_receiver() {
    let f = setup();
    f.fund_wallet(10 * UNIT);
    let receiver = f.env.register(RecordingReceiver, ());
    let data = payload(&f);
    let tx_index = submit_and_confirm(&f, &receiver, 2 * UNIT, &data);

    f.client.execute_transaction(&f.owner(1), &tx_index);

    let call = RecordingReceiverClient::new(&f.env, &receiver)
        .last_call()
        .expect("receiver was not called");
    assert_eq!(call.wallet, f.wallet_id);
    assert_eq!(call.tx_index, tx_index);
    assert_eq!(call.value, 2 * UNIT);
    assert_eq!(call.data, data);
    assert_eq!(f.token_balance(&receiver), 2 * UNIT);
}

#[test]
fn test_empty_payload_skips_receiver_call() {
    let f = setup();
    f.fund_wallet(UNIT);
    let receiver = f.env.register(RecordingReceiver, ());
    submit_and_confirm(&f, &receiver, UNIT, &f.empty_data());

    f.client.execute_transaction(&f.owner(0), &0);

    assert_eq!(RecordingReceiverClient::new(&f.env, &receiver).last_call(), None);
    assert_eq!(f.token_balance(&receiver), UNIT);
}

#[test]
fn test_rejected_payload_rolls_back_everything() {
    let f = setup();
    f.fund_wallet(10 * UNIT);
    let receiver = f.env.register(RejectingReceiver, ());
    submit_and_confirm(&f, &receiver, UNIT, &payload(&f));

    let result = f.client.try_execute_transaction(&f.owner(0), &0);
    assert_eq!(result, Err(Ok(WalletError::TxFailed)));
    assert!(!f.has_event("execute_transaction"));

    assert!(!f.client.get_transaction(&0).executed);
    assert_eq!(f.token_balance(&receiver), 0);
    assert_eq!(f.client.balance(), 10 * UNIT);
}

// ── re-entrancy ───────────────────────────────────────────────────────────────

#[test]
fn test_reentrant_execution_is_blocked() {
    let f = setup();
    f.fund_wallet(10 * UNIT);
    let receiver = f.env.register(ReentrantReceiver, ());
    let receiver_client = ReentrantReceiverClient::new(&f.env, &receiver);
    receiver_client.set_owner(&f.owner(0));
    submit_and_confirm(&f, &receiver, UNIT, &payload(&f));

    f.client.execute_transaction(&f.owner(0), &0);

    assert!(receiver_client.reentry_blocked());
    assert!(f.client.get_transaction(&0).executed);
    assert_eq!(f.token_balance(&receiver), UNIT);
    assert_eq!(f.client.balance(), 9 * UNIT);
}

#[test]
fn test_execution_lock_rejects_nested_acquire() {
    let f = setup();
    f.env.as_contract(&f.wallet_id, || {
        let lock = ExecutionLock::acquire(&f.env).unwrap();
        assert_eq!(
            ExecutionLock::acquire(&f.env).err(),
            Some(WalletError::Reentrancy)
        );
        drop(lock);
        assert!(ExecutionLock::acquire(&f.env).is_ok());
    });
}

#[test]
fn test_module_rollback_restores_flag_without_host_revert() {
    let f = setup();
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());

    f.env.as_contract(&f.wallet_id, || {
        let result = crate::execution::execute_transaction(&f.env, f.owner(0), 0);
        assert_eq!(result, Err(WalletError::TxFailed));
        let tx = crate::ledger::load_transaction(&f.env, 0).unwrap();
        assert!(!tx.executed);
    });
}

#[test]
fn test_executed_flag_committed_before_dispatch() {
    let f = setup();
    submit_and_confirm(&f, &f.user, UNIT, &f.empty_data());

    f.env.as_contract(&f.wallet_id, || {
        let (lock, tx) = crate::execution::commit_execution(&f.env, &f.owner(0), 0).unwrap();
        assert!(tx.executed);
        assert!(crate::ledger::load_transaction(&f.env, 0).unwrap().executed);

        assert_eq!(
            crate::execution::execute_transaction(&f.env, f.owner(0), 0),
            Err(WalletError::CannotExecuteTx)
        );
        assert_eq!(
            ExecutionLock::acquire(&f.env).err(),
            Some(WalletError::Reentrancy)
        );
        drop(lock);
    });
}
