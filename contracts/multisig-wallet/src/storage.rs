//! Storage layout of the wallet.
//!
//! Configuration, the owner list and the transaction counter live in
//! instance storage since every call needs them. Transactions and
//! confirmations grow without bound and live in persistent storage, one
//! entry per record.

use soroban_sdk::{contracttype, Address, Bytes, Env, Vec};

use crate::errors::WalletError;

#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum DataKey {
    /// WalletConfig
    Config,
    /// Vec<Address>, in the order given to `initialize`
    Owners,
    /// bool, present only for owners
    IsOwner(Address),
    /// u64, next id to assign
    TransactionCount,
    /// Transaction
    Transaction(u64),
    /// bool, created on first confirmation
    Confirmation(u64, Address),
}

/// Parameters fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletConfig {
    /// Confirmations needed before a transaction is dispatched
    pub required: u32,
    /// Resource executor contract that performs the dispatch
    pub executor: Address,
    /// Asset the wallet holds and transfers
    pub asset: Address,
}

/// A proposed release of `amount` of the wallet asset plus `payload` to `target`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub target: Address,
    pub amount: i128,
    pub payload: Bytes,
    pub executed: bool,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<WalletConfig, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_config(env: &Env, config: &WalletConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owners(env: &Env) -> Result<Vec<Address>, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_owners(env: &Env, owners: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Owners, owners);
    for owner in owners.iter() {
        env.storage()
            .instance()
            .set(&DataKey::IsOwner(owner), &true);
    }
}

pub fn is_owner(env: &Env, address: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::IsOwner(address.clone()))
        .unwrap_or(false)
}

pub fn get_transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

pub fn set_transaction_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &count);
}

pub fn get_transaction(env: &Env, transaction_id: u64) -> Result<Transaction, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(transaction_id))
        .ok_or(WalletError::TransactionNotFound)
}

pub fn set_transaction(env: &Env, transaction_id: u64, transaction: &Transaction) {
    env.storage()
        .persistent()
        .set(&DataKey::Transaction(transaction_id), transaction);
}

pub fn is_confirmed_by(env: &Env, transaction_id: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Confirmation(transaction_id, owner.clone()))
        .unwrap_or(false)
}

pub fn set_confirmed_by(env: &Env, transaction_id: u64, owner: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Confirmation(transaction_id, owner.clone()), &true);
}
