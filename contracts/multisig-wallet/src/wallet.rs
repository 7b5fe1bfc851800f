//! # Approval engine
//!
//! Implements the submit → confirm → execute lifecycle of a wallet
//! transaction.
//!
//! 1. An owner submits a transaction with [`submit_transaction`]; the
//!    submitter's confirmation is recorded immediately.
//! 2. Other owners confirm with [`confirm_transaction`].
//! 3. Every confirmation attempts [`execute_transaction`], which dispatches
//!    to the [`ResourceExecutor`] once `required` owners have confirmed.
//!
//! ## Guarantees
//! - Only owners can submit and confirm; each owner confirms a transaction
//!   at most once.
//! - Transaction ids start at 0, increase by one per submission and are
//!   never reused.
//! - `executed` is set before the executor is called and reset only when
//!   the executor reports failure, so a transaction is dispatched
//!   successfully at most once even if the executor calls back into the
//!   wallet.
//! - A failed dispatch is recorded with an `ExecutionFailureEvent` and leaves
//!   the transaction open for another attempt.
//!
//! Caller authentication (`require_auth`) is done by the contract entry
//! points in `lib.rs`; the functions here only check ownership.

use soroban_sdk::{log, token, Address, Bytes, Env, Vec};

use crate::errors::WalletError;
use crate::events::{emit_confirmation, emit_execution, emit_execution_failure, emit_submission};
use crate::executor::ResourceExecutor;
use crate::storage::{self, Transaction, WalletConfig};

// ============================================================================
// Initialization
// ============================================================================

/// Stores the owner set, the quorum and the executor binding.
///
/// # Errors
/// - [`WalletError::AlreadyInitialized`] if called a second time.
/// - [`WalletError::InvalidConfiguration`] if `owners` is empty or contains
///   duplicates, or `required` is 0 or larger than the number of owners.
///   Nothing is stored in that case.
pub fn initialize(
    env: &Env,
    owners: Vec<Address>,
    required: u32,
    executor: Address,
    asset: Address,
) -> Result<(), WalletError> {
    if storage::is_initialized(env) {
        return Err(WalletError::AlreadyInitialized);
    }
    validate_owners(&owners, required)?;

    storage::set_owners(env, &owners);
    storage::set_config(
        env,
        &WalletConfig {
            required,
            executor,
            asset,
        },
    );
    storage::set_transaction_count(env, 0);

    log!(env, "initialize owners={} required={}", owners.len(), required);
    Ok(())
}

fn validate_owners(owners: &Vec<Address>, required: u32) -> Result<(), WalletError> {
    if owners.is_empty() || required == 0 || required > owners.len() {
        return Err(WalletError::InvalidConfiguration);
    }

    for i in 0..owners.len() {
        let owner = owners.get_unchecked(i);
        for j in (i + 1)..owners.len() {
            if owner == owners.get_unchecked(j) {
                return Err(WalletError::InvalidConfiguration);
            }
        }
    }
    Ok(())
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), WalletError> {
    storage::get_config(env)?;
    if !storage::is_owner(env, caller) {
        return Err(WalletError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Records a new transaction and confirms it on behalf of `caller`.
///
/// Emits `SubmissionEvent`, then everything [`confirm_transaction`] emits.
/// With a quorum of one the transaction is dispatched within this call.
///
/// # Errors
/// - [`WalletError::Unauthorized`] if `caller` is not an owner.
/// - [`WalletError::InvalidAmount`] if `amount` is negative.
/// - [`WalletError::Overflow`] if the id space is exhausted.
pub fn submit_transaction<E: ResourceExecutor>(
    env: &Env,
    executor: &E,
    caller: &Address,
    target: Address,
    amount: i128,
    payload: Bytes,
) -> Result<u64, WalletError> {
    require_owner(env, caller)?;
    if amount < 0 {
        return Err(WalletError::InvalidAmount);
    }

    let transaction_id = storage::get_transaction_count(env);
    let next_id = transaction_id
        .checked_add(1)
        .ok_or(WalletError::Overflow)?;

    storage::set_transaction(
        env,
        transaction_id,
        &Transaction {
            target,
            amount,
            payload,
            executed: false,
        },
    );
    storage::set_transaction_count(env, next_id);
    emit_submission(env, transaction_id);
    log!(env, "submit tx={} by {}", transaction_id, caller.clone());

    confirm_transaction(env, executor, caller, transaction_id)?;
    Ok(transaction_id)
}

/// Records `caller`'s confirmation and attempts execution.
///
/// # Errors
/// - [`WalletError::Unauthorized`] if `caller` is not an owner.
/// - [`WalletError::TransactionNotFound`] if the id was never submitted.
/// - [`WalletError::AlreadyConfirmed`] if `caller` already confirmed.
/// - [`WalletError::AlreadyExecuted`] if the transaction was already
///   executed; the confirmation is discarded with the failed invocation.
pub fn confirm_transaction<E: ResourceExecutor>(
    env: &Env,
    executor: &E,
    caller: &Address,
    transaction_id: u64,
) -> Result<(), WalletError> {
    require_owner(env, caller)?;
    storage::get_transaction(env, transaction_id)?;
    if storage::is_confirmed_by(env, transaction_id, caller) {
        return Err(WalletError::AlreadyConfirmed);
    }

    storage::set_confirmed_by(env, transaction_id, caller);
    emit_confirmation(env, transaction_id, caller);

    execute_transaction(env, executor, transaction_id)
}

/// Dispatches a confirmed transaction to the executor.
///
/// Anyone may call this. Below quorum it does nothing. A failed dispatch
/// emits `ExecutionFailureEvent` and still returns `Ok(())`.
///
/// # Errors
/// - [`WalletError::TransactionNotFound`] if the id was never submitted.
/// - [`WalletError::AlreadyExecuted`] if the transaction was already executed.
pub fn execute_transaction<E: ResourceExecutor>(
    env: &Env,
    executor: &E,
    transaction_id: u64,
) -> Result<(), WalletError> {
    storage::get_config(env)?;
    let mut transaction = storage::get_transaction(env, transaction_id)?;
    if transaction.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    if !is_confirmed(env, transaction_id)? {
        return Ok(());
    }

    // Set before the external call so a nested attempt sees it as executed.
    transaction.executed = true;
    storage::set_transaction(env, transaction_id, &transaction);

    if executor.execute(&transaction.target, transaction.amount, &transaction.payload) {
        emit_execution(env, transaction_id);
        log!(env, "execute tx={} ok", transaction_id);
    } else {
        transaction.executed = false;
        storage::set_transaction(env, transaction_id, &transaction);
        emit_execution_failure(env, transaction_id);
        log!(env, "execute tx={} failed", transaction_id);
    }
    Ok(())
}

/// Accepted for interface compatibility; confirmations cannot be withdrawn.
///
/// # Errors
/// - [`WalletError::Unauthorized`] if `caller` is not an owner.
pub fn revoke_confirmation(
    env: &Env,
    caller: &Address,
    transaction_id: u64,
) -> Result<(), WalletError> {
    require_owner(env, caller)?;
    log!(
        env,
        "revoke_confirmation tx={} by {} has no effect",
        transaction_id,
        caller.clone()
    );
    Ok(())
}

/// Moves `amount` of the wallet asset from `from` into the wallet.
///
/// Touches no wallet state; the balance lives in the asset contract.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<(), WalletError> {
    let config = storage::get_config(env)?;
    if amount < 0 {
        return Err(WalletError::InvalidAmount);
    }
    if amount > 0 {
        token::Client::new(env, &config.asset).transfer(
            from,
            &env.current_contract_address(),
            &amount,
        );
    }
    log!(env, "deposit {} from {}", amount, from.clone());
    Ok(())
}

// ============================================================================
// Quorum
// ============================================================================

/// Returns `true` once `required` owners have confirmed `transaction_id`.
///
/// Owners are scanned in list order and the scan stops as soon as the
/// quorum is reached.
pub fn is_confirmed(env: &Env, transaction_id: u64) -> Result<bool, WalletError> {
    let config = storage::get_config(env)?;
    let owners = storage::get_owners(env)?;

    let mut count = 0u32;
    for owner in owners.iter() {
        if storage::is_confirmed_by(env, transaction_id, &owner) {
            count += 1;
        }
        if count == config.required {
            return Ok(true);
        }
    }
    Ok(false)
}

// ============================================================================
// Views
// ============================================================================

pub fn get_owners(env: &Env) -> Result<Vec<Address>, WalletError> {
    storage::get_owners(env)
}

pub fn get_required(env: &Env) -> Result<u32, WalletError> {
    Ok(storage::get_config(env)?.required)
}

pub fn is_owner(env: &Env, address: &Address) -> Result<bool, WalletError> {
    storage::get_config(env)?;
    Ok(storage::is_owner(env, address))
}

pub fn get_executor(env: &Env) -> Result<Address, WalletError> {
    Ok(storage::get_config(env)?.executor)
}

pub fn get_asset(env: &Env) -> Result<Address, WalletError> {
    Ok(storage::get_config(env)?.asset)
}

pub fn get_transaction(env: &Env, transaction_id: u64) -> Result<Transaction, WalletError> {
    storage::get_config(env)?;
    storage::get_transaction(env, transaction_id)
}

/// Number of confirmations recorded for `transaction_id`.
pub fn get_confirmation_count(env: &Env, transaction_id: u64) -> Result<u32, WalletError> {
    Ok(get_confirmations(env, transaction_id)?.len())
}

/// Owners that confirmed `transaction_id`, in owner-list order.
pub fn get_confirmations(env: &Env, transaction_id: u64) -> Result<Vec<Address>, WalletError> {
    let owners = storage::get_owners(env)?;
    let mut confirmed = Vec::new(env);
    for owner in owners.iter() {
        if storage::is_confirmed_by(env, transaction_id, &owner) {
            confirmed.push_back(owner);
        }
    }
    Ok(confirmed)
}

/// Counts transactions whose state matches the filters. With both filters
/// set this is the counter itself and no transaction is read.
pub fn get_transaction_count(
    env: &Env,
    include_pending: bool,
    include_executed: bool,
) -> Result<u64, WalletError> {
    storage::get_config(env)?;
    let total = storage::get_transaction_count(env);
    if include_pending && include_executed {
        return Ok(total);
    }
    let mut count = 0u64;
    for transaction_id in 0..total {
        let transaction = storage::get_transaction(env, transaction_id)?;
        if matches_filter(&transaction, include_pending, include_executed) {
            count += 1;
        }
    }
    Ok(count)
}

/// Ids in `[from, to)` whose state matches the filters. `to` is clamped to
/// the number of submitted transactions.
pub fn get_transaction_ids(
    env: &Env,
    from: u64,
    to: u64,
    include_pending: bool,
    include_executed: bool,
) -> Result<Vec<u64>, WalletError> {
    storage::get_config(env)?;
    let end = to.min(storage::get_transaction_count(env));
    let mut ids = Vec::new(env);
    for transaction_id in from..end {
        let transaction = storage::get_transaction(env, transaction_id)?;
        if matches_filter(&transaction, include_pending, include_executed) {
            ids.push_back(transaction_id);
        }
    }
    Ok(ids)
}

fn matches_filter(transaction: &Transaction, include_pending: bool, include_executed: bool) -> bool {
    (include_pending && !transaction.executed) || (include_executed && transaction.executed)
}
