use super::test_helpers::*;
use crate::{MultisigWalletClient, WalletError};
use soroban_sdk::{testutils::Address as _, Address, Env, Vec};

fn fresh() -> (Env, MultisigWalletClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let (wallet_id, executor_id, asset) = deploy(&env);
    let wallet = MultisigWalletClient::new(&env, &wallet_id);
    (env, wallet, executor_id, asset)
}

#[test]
fn initialize_stores_owners_in_order() {
    let (env, wallet, executor, asset) = fresh();
    let owners = generate_owners(&env, 3);

    wallet.initialize(&owners, &2, &executor, &asset);

    assert_eq!(wallet.get_owners(), owners);
    assert_eq!(wallet.get_required(), 2);
    assert_eq!(wallet.get_executor(), executor);
    assert_eq!(wallet.get_asset(), asset);
    for owner in owners.iter() {
        assert!(wallet.is_owner(&owner));
    }
    assert!(!wallet.is_owner(&Address::generate(&env)));
}

#[test]
fn initialize_accepts_quorum_equal_to_owner_count() {
    let (env, wallet, executor, asset) = fresh();
    let owners = generate_owners(&env, 4);

    wallet.initialize(&owners, &4, &executor, &asset);
    assert_eq!(wallet.get_required(), 4);
}

#[test]
fn initialize_single_owner() {
    let (env, wallet, executor, asset) = fresh();
    let owners = generate_owners(&env, 1);

    wallet.initialize(&owners, &1, &executor, &asset);
    assert_eq!(wallet.get_owners().len(), 1);
}

#[test]
fn initialize_empty_owners_fails() {
    let (env, wallet, executor, asset) = fresh();
    let result = wallet.try_initialize(&Vec::new(&env), &1, &executor, &asset);
    assert_eq!(result, Err(Ok(WalletError::InvalidConfiguration)));
}

#[test]
fn initialize_zero_quorum_fails() {
    let (env, wallet, executor, asset) = fresh();
    let owners = generate_owners(&env, 2);
    let result = wallet.try_initialize(&owners, &0, &executor, &asset);
    assert_eq!(result, Err(Ok(WalletError::InvalidConfiguration)));
}

#[test]
fn initialize_quorum_above_owner_count_fails() {
    let (env, wallet, executor, asset) = fresh();
    let owners = generate_owners(&env, 2);
    let result = wallet.try_initialize(&owners, &3, &executor, &asset);
    assert_eq!(result, Err(Ok(WalletError::InvalidConfiguration)));
}

#[test]
fn initialize_duplicate_owner_fails() {
    let (env, wallet, executor, asset) = fresh();
    let mut owners = generate_owners(&env, 2);
    owners.push_back(owners.get_unchecked(0));

    let result = wallet.try_initialize(&owners, &2, &executor, &asset);
    assert_eq!(result, Err(Ok(WalletError::InvalidConfiguration)));
}

#[test]
fn failed_initialize_leaves_wallet_uninitialized() {
    let (env, wallet, executor, asset) = fresh();
    let owners = generate_owners(&env, 2);

    let _ = wallet.try_initialize(&owners, &5, &executor, &asset);

    assert_eq!(wallet.try_get_owners(), Err(Ok(WalletError::NotInitialized)));
    assert_eq!(
        wallet.try_is_owner(&owners.get_unchecked(0)),
        Err(Ok(WalletError::NotInitialized))
    );

    // A valid configuration can still be installed afterwards.
    wallet.initialize(&owners, &2, &executor, &asset);
    assert_eq!(wallet.get_owners(), owners);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn initialize_twice_panics() {
    let s = setup_wallet(2, 1);
    let other = generate_owners(&s.env, 3);
    s.wallet
        .initialize(&other, &1, &s.executor.address, &s.asset);
}

#[test]
fn initialize_twice_keeps_original_owners() {
    let s = setup_wallet(2, 1);
    let other = generate_owners(&s.env, 3);

    let result = s
        .wallet
        .try_initialize(&other, &1, &s.executor.address, &s.asset);

    assert_eq!(result, Err(Ok(WalletError::AlreadyInitialized)));
    assert_eq!(s.wallet.get_owners(), s.owners);
}

#[test]
fn operations_before_initialize_fail() {
    let (env, wallet, _, _) = fresh();
    let caller = Address::generate(&env);
    let target = Address::generate(&env);

    assert_eq!(
        wallet.try_submit_transaction(&caller, &target, &1, &soroban_sdk::Bytes::new(&env)),
        Err(Ok(WalletError::NotInitialized))
    );
    assert_eq!(
        wallet.try_confirm_transaction(&caller, &0),
        Err(Ok(WalletError::NotInitialized))
    );
    assert_eq!(
        wallet.try_execute_transaction(&0),
        Err(Ok(WalletError::NotInitialized))
    );
}
