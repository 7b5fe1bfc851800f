//! # Multisig Wallet Contract
//!
//! A wallet controlled by a fixed set of owners. Any owner can propose a
//! transaction (an amount of the wallet asset plus an opaque payload for a
//! target); it is dispatched through the configured resource executor once
//! `required` distinct owners have confirmed it.
//!
//! - **Submission**: an owner proposes a transaction and confirms it in the
//!   same call.
//! - **Confirmation**: every confirmation re-checks the quorum and attempts
//!   execution.
//! - **Execution**: at most one successful dispatch per transaction; a failed
//!   dispatch is recorded and can be retried.
//! - **Deposits**: the wallet accepts the asset from anyone.

#![no_std]
#![allow(deprecated)]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, Vec};

mod errors;
mod events;
mod executor;
mod storage;
mod wallet;

pub use errors::WalletError;
pub use events::{ConfirmationEvent, ExecutionEvent, ExecutionFailureEvent, SubmissionEvent};
pub use executor::{ContractExecutor, ResourceExecutor};
pub use storage::{Transaction, WalletConfig};

#[cfg(test)]
mod tests;

fn contract_executor(env: &Env) -> Result<ContractExecutor<'_>, WalletError> {
    let config = storage::get_config(env)?;
    Ok(ContractExecutor::new(env, config.executor, config.asset))
}

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Initialize the wallet.
    ///
    /// # Arguments
    /// * `owners` - Distinct owner addresses, in the order reported by `get_owners`
    /// * `required` - Number of confirmations needed, `1..=owners.len()`
    /// * `executor` - Resource executor contract that performs dispatches
    /// * `asset` - Token contract of the asset held by the wallet
    ///
    /// # Errors
    /// - `AlreadyInitialized` - Called a second time
    /// - `InvalidConfiguration` - Empty or duplicated owners, or bad quorum
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required: u32,
        executor: Address,
        asset: Address,
    ) -> Result<(), WalletError> {
        wallet::initialize(&env, owners, required, executor, asset)
    }

    /// Propose a transaction. The caller's confirmation is recorded too.
    ///
    /// # Arguments
    /// * `caller` - Submitting owner (must authorize)
    /// * `target` - Recipient of the amount and the payload
    /// * `amount` - Amount of the wallet asset to transfer, may be zero
    /// * `payload` - Opaque bytes delivered to `target`, may be empty
    ///
    /// # Returns
    /// The id of the new transaction
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not an owner
    /// - `InvalidAmount` - Amount is negative
    pub fn submit_transaction(
        env: Env,
        caller: Address,
        target: Address,
        amount: i128,
        payload: Bytes,
    ) -> Result<u64, WalletError> {
        caller.require_auth();
        let executor = contract_executor(&env)?;
        wallet::submit_transaction(&env, &executor, &caller, target, amount, payload)
    }

    /// Confirm a transaction and attempt to execute it.
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not an owner
    /// - `TransactionNotFound` - Unknown transaction id
    /// - `AlreadyConfirmed` - Caller already confirmed this transaction
    /// - `AlreadyExecuted` - Transaction was already executed
    pub fn confirm_transaction(
        env: Env,
        caller: Address,
        transaction_id: u64,
    ) -> Result<(), WalletError> {
        caller.require_auth();
        let executor = contract_executor(&env)?;
        wallet::confirm_transaction(&env, &executor, &caller, transaction_id)
    }

    /// Execute a transaction if it has reached quorum. Callable by anyone.
    ///
    /// # Errors
    /// - `TransactionNotFound` - Unknown transaction id
    /// - `AlreadyExecuted` - Transaction was already executed
    pub fn execute_transaction(env: Env, transaction_id: u64) -> Result<(), WalletError> {
        let executor = contract_executor(&env)?;
        wallet::execute_transaction(&env, &executor, transaction_id)
    }

    /// Has no effect: confirmations are permanent.
    pub fn revoke_confirmation(
        env: Env,
        caller: Address,
        transaction_id: u64,
    ) -> Result<(), WalletError> {
        caller.require_auth();
        wallet::revoke_confirmation(&env, &caller, transaction_id)
    }

    /// Deposit the wallet asset.
    ///
    /// # Arguments
    /// * `from` - Depositor (must authorize)
    /// * `amount` - Amount to transfer into the wallet
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        from.require_auth();
        wallet::deposit(&env, &from, amount)
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, WalletError> {
        wallet::get_owners(&env)
    }

    pub fn get_required(env: Env) -> Result<u32, WalletError> {
        wallet::get_required(&env)
    }

    pub fn is_owner(env: Env, address: Address) -> Result<bool, WalletError> {
        wallet::is_owner(&env, &address)
    }

    pub fn get_executor(env: Env) -> Result<Address, WalletError> {
        wallet::get_executor(&env)
    }

    pub fn get_asset(env: Env) -> Result<Address, WalletError> {
        wallet::get_asset(&env)
    }

    /// Whether `required` owners have confirmed the transaction.
    pub fn is_confirmed(env: Env, transaction_id: u64) -> Result<bool, WalletError> {
        wallet::is_confirmed(&env, transaction_id)
    }

    pub fn get_transaction(env: Env, transaction_id: u64) -> Result<Transaction, WalletError> {
        wallet::get_transaction(&env, transaction_id)
    }

    pub fn get_confirmation_count(env: Env, transaction_id: u64) -> Result<u32, WalletError> {
        wallet::get_confirmation_count(&env, transaction_id)
    }

    /// Confirming owners, in owner-list order.
    pub fn get_confirmations(env: Env, transaction_id: u64) -> Result<Vec<Address>, WalletError> {
        wallet::get_confirmations(&env, transaction_id)
    }

    /// Number of transactions that are pending and/or executed.
    pub fn get_transaction_count(
        env: Env,
        include_pending: bool,
        include_executed: bool,
    ) -> Result<u64, WalletError> {
        wallet::get_transaction_count(&env, include_pending, include_executed)
    }

    /// Transaction ids in `[from, to)` that are pending and/or executed.
    pub fn get_transaction_ids(
        env: Env,
        from: u64,
        to: u64,
        include_pending: bool,
        include_executed: bool,
    ) -> Result<Vec<u64>, WalletError> {
        wallet::get_transaction_ids(&env, from, to, include_pending, include_executed)
    }
}
