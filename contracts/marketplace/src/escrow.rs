//! Custody moves for the NFT and the payment token.
//!
//! The marketplace contract address is the escrow account for both assets
//! while a listing is active.

use soroban_sdk::{token, Address, Env};

use crate::external::CollectionClient;

/// Pull `token_id` from `owner` into marketplace custody. The owner must
/// have approved the marketplace on the collection beforehand.
pub fn take_item(env: &Env, collection: &Address, owner: &Address, token_id: u64) {
    let contract = env.current_contract_address();
    CollectionClient::new(env, collection).transfer_from(&contract, owner, &contract, &token_id);
}

/// Release `token_id` from custody to `to`.
pub fn release_item(env: &Env, collection: &Address, to: &Address, token_id: u64) {
    CollectionClient::new(env, collection).transfer(
        &env.current_contract_address(),
        to,
        &token_id,
    );
}

/// Move funds straight from `from` to `to` without holding them.
pub fn pay(env: &Env, payment_token: &Address, from: &Address, to: &Address, amount: i128) {
    token::TokenClient::new(env, payment_token).transfer(from, to, &amount);
}

pub fn escrow_bid(env: &Env, payment_token: &Address, bidder: &Address, amount: i128) {
    token::TokenClient::new(env, payment_token).transfer(
        bidder,
        &env.current_contract_address(),
        &amount,
    );
}

/// Pay out escrowed funds. Used both for refunds and for settling to the seller.
pub fn release_funds(env: &Env, payment_token: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    token::TokenClient::new(env, payment_token).transfer(
        &env.current_contract_address(),
        to,
        &amount,
    );
}
