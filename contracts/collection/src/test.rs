#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup() -> (Env, CollectionClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(Collection, ());
    let client = CollectionClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);

    client.initialize(
        &admin,
        &String::from_str(&env, "Mock721"),
        &String::from_str(&env, "M721"),
    );
    client.set_minter(&admin, &minter);

    (env, client, admin, minter)
}

#[test]
fn test_initialize() {
    let (env, client, admin, minter) = setup();

    assert_eq!(client.name(), String::from_str(&env, "Mock721"));
    assert_eq!(client.symbol(), String::from_str(&env, "M721"));
    assert_eq!(client.minter(), Some(minter));

    let result = client.try_initialize(
        &admin,
        &String::from_str(&env, "Other"),
        &String::from_str(&env, "OTH"),
    );
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_set_minter_requires_admin() {
    let (env, client, _, _) = setup();
    let stranger = Address::generate(&env);

    let result = client.try_set_minter(&stranger, &stranger);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, client, _, _) = setup();
    let owner = Address::generate(&env);

    let first = client.mint(&owner, &String::from_str(&env, "qwerty0"));
    let second = client.mint(&owner, &String::from_str(&env, "qwerty1"));

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(client.total_supply(), 2);
    assert_eq!(client.balance_of(&owner), 2);
    assert_eq!(client.owner_of(&1), owner);
    assert_eq!(client.token_uri(&2), String::from_str(&env, "qwerty1"));
}

#[test]
fn test_mint_without_minter() {
    let env = Env::default();
    env.mock_all_auths();
    let client = CollectionClient::new(&env, &env.register(Collection, ()));
    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &String::from_str(&env, "Mock721"),
        &String::from_str(&env, "M721"),
    );

    let result = client.try_mint(&admin, &String::from_str(&env, "qwerty0"));
    assert_eq!(result, Err(Ok(Error::MinterNotSet)));
}

#[test]
fn test_unknown_token() {
    let (_, client, _, _) = setup();
    assert_eq!(client.try_owner_of(&56), Err(Ok(Error::TokenNotFound)));
    assert_eq!(client.try_token_uri(&56), Err(Ok(Error::TokenNotFound)));
}

#[test]
fn test_transfer_updates_balances() {
    let (env, client, _, _) = setup();
    let owner = Address::generate(&env);
    let receiver = Address::generate(&env);
    let token_id = client.mint(&owner, &String::from_str(&env, "qwerty0"));

    client.transfer(&owner, &receiver, &token_id);

    assert_eq!(client.owner_of(&token_id), receiver);
    assert_eq!(client.balance_of(&owner), 0);
    assert_eq!(client.balance_of(&receiver), 1);
}

#[test]
fn test_transfer_by_non_owner() {
    let (env, client, _, _) = setup();
    let owner = Address::generate(&env);
    let thief = Address::generate(&env);
    let token_id = client.mint(&owner, &String::from_str(&env, "qwerty0"));

    let result = client.try_transfer(&thief, &thief, &token_id);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_transfer_from_requires_approval() {
    let (env, client, _, _) = setup();
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let token_id = client.mint(&owner, &String::from_str(&env, "qwerty0"));

    let result = client.try_transfer_from(&spender, &owner, &spender, &token_id);
    assert_eq!(result, Err(Ok(Error::NotApproved)));

    client.approve(&owner, &spender, &token_id);
    assert_eq!(client.get_approved(&token_id), Some(spender.clone()));

    client.transfer_from(&spender, &owner, &spender, &token_id);
    assert_eq!(client.owner_of(&token_id), spender);
    // approval is consumed by the transfer
    assert_eq!(client.get_approved(&token_id), None);
}

#[test]
fn test_approve_by_non_owner() {
    let (env, client, _, _) = setup();
    let owner = Address::generate(&env);
    let other = Address::generate(&env);
    let token_id = client.mint(&owner, &String::from_str(&env, "qwerty0"));

    let result = client.try_approve(&other, &other, &token_id);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_mint_rejects_non_minter() {
    let (env, client, _, _) = setup();
    let owner = Address::generate(&env);

    // only the minter's signature can authorize a mint
    env.set_auths(&[]);
    let result = client.try_mint(&owner, &String::from_str(&env, "qwerty0"));

    assert!(result.is_err());
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.balance_of(&owner), 0);
}

#[test]
fn test_get_approved_extends_ttl() {
    use crate::types::{StorageKey, DAY_IN_LEDGERS, PERSISTENT_TTL_AMOUNT};
    use soroban_sdk::testutils::{storage::Persistent as _, Ledger};

    let (env, client, _, _) = setup();
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let token_id = client.mint(&owner, &String::from_str(&env, "qwerty0"));
    client.approve(&owner, &spender, &token_id);

    env.ledger().with_mut(|li| {
        li.sequence_number += 2 * DAY_IN_LEDGERS;
    });
    let approval_ttl = || {
        env.as_contract(&client.address, || {
            env.storage()
                .persistent()
                .get_ttl(&StorageKey::Approval(token_id))
        })
    };
    assert_eq!(approval_ttl(), PERSISTENT_TTL_AMOUNT - 2 * DAY_IN_LEDGERS);

    assert_eq!(client.get_approved(&token_id), Some(spender));
    assert_eq!(approval_ttl(), PERSISTENT_TTL_AMOUNT);
}
