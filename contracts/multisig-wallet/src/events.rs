//! # Wallet events
//!
//! The audit trail of the wallet. Each event is a `#[contractevent]` struct
//! whose leading topic is its snake_case name (`submission_event`,
//! `confirmation_event`, `execution_event`, `execution_failure_event`);
//! fields are published as the data map.
//!
//! Events are emitted at the exact point of the state change they record and
//! are never batched. An invocation that fails discards its events together
//! with its storage writes.

use soroban_sdk::{contractevent, Address, Env};

/// Emitted when an owner submits a new transaction.
#[contractevent]
#[derive(Clone, Debug)]
pub struct SubmissionEvent {
    pub transaction_id: u64,
}

/// Emitted when an owner's confirmation is recorded.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ConfirmationEvent {
    pub transaction_id: u64,
    pub owner: Address,
}

/// Emitted when the executor reports a successful dispatch.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ExecutionEvent {
    pub transaction_id: u64,
}

/// Emitted when the executor reports a failed dispatch. The transaction
/// stays open for another attempt.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ExecutionFailureEvent {
    pub transaction_id: u64,
}

pub fn emit_submission(e: &Env, transaction_id: u64) {
    SubmissionEvent { transaction_id }.publish(e);
}

pub fn emit_confirmation(e: &Env, transaction_id: u64, owner: &Address) {
    ConfirmationEvent {
        transaction_id,
        owner: owner.clone(),
    }
    .publish(e);
}

pub fn emit_execution(e: &Env, transaction_id: u64) {
    ExecutionEvent { transaction_id }.publish(e);
}

pub fn emit_execution_failure(e: &Env, transaction_id: u64) {
    ExecutionFailureEvent { transaction_id }.publish(e);
}
