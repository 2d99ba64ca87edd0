use soroban_sdk::{Address, Env};

use crate::types::{
    CollectionMetadata, StorageKey, Token, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Admin ==========

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

// ========== Minter ==========

pub fn get_minter(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Minter)
}

pub fn set_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&StorageKey::Minter, minter);
}

// ========== Metadata ==========

pub fn get_metadata(env: &Env) -> Option<CollectionMetadata> {
    env.storage().instance().get(&StorageKey::Metadata)
}

pub fn set_metadata(env: &Env, metadata: &CollectionMetadata) {
    env.storage().instance().set(&StorageKey::Metadata, metadata);
}

// ========== Token Counter ==========

pub fn get_token_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::TokenCounter)
        .unwrap_or(0)
}

pub fn increment_token_counter(env: &Env) -> u64 {
    let counter = get_token_counter(env) + 1;
    env.storage()
        .instance()
        .set(&StorageKey::TokenCounter, &counter);
    counter
}

// ========== Tokens ==========

pub fn get_token(env: &Env, token_id: u64) -> Option<Token> {
    let key = StorageKey::Token(token_id);
    let token = env.storage().persistent().get::<_, Token>(&key);
    if token.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    token
}

pub fn set_token(env: &Env, token: &Token) {
    let key = StorageKey::Token(token.id);
    env.storage().persistent().set(&key, token);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Approvals ==========

pub fn get_approval(env: &Env, token_id: u64) -> Option<Address> {
    let key = StorageKey::Approval(token_id);
    let spender = env.storage().persistent().get::<_, Address>(&key);
    if spender.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    spender
}

pub fn set_approval(env: &Env, token_id: u64, spender: &Address) {
    let key = StorageKey::Approval(token_id);
    env.storage().persistent().set(&key, spender);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_approval(env: &Env, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&StorageKey::Approval(token_id));
}

// ========== Balances ==========

pub fn get_balance(env: &Env, owner: &Address) -> u64 {
    let key = StorageKey::Balance(owner.clone());
    let balance = env.storage().persistent().get::<_, u64>(&key);
    if balance.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    balance.unwrap_or(0)
}

fn set_balance(env: &Env, owner: &Address, balance: u64) {
    let key = StorageKey::Balance(owner.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn increment_balance(env: &Env, owner: &Address) {
    let balance = get_balance(env, owner);
    set_balance(env, owner, balance + 1);
}

pub fn decrement_balance(env: &Env, owner: &Address) {
    let balance = get_balance(env, owner);
    set_balance(env, owner, balance.saturating_sub(1));
}
