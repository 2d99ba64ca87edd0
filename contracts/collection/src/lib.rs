#![no_std]

//! Non-fungible item collection used by the marketplace.
//!
//! Tokens are minted by a single configured minter (normally the
//! marketplace contract) and carry a content URI. Ownership follows the
//! usual single-approval model: an owner may approve one spender per token,
//! and any transfer clears that approval.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::{CollectionMetadata, Token};

use events::{Approved, CollectionInitialized, MinterChanged, Minted, Transferred};

#[contract]
pub struct Collection;

#[contractimpl]
impl Collection {
    // ========== INITIALIZATION ==========

    /// Initialize the collection with its admin and display metadata
    pub fn initialize(env: Env, admin: Address, name: String, symbol: String) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_metadata(&env, &CollectionMetadata {
            name: name.clone(),
            symbol: symbol.clone(),
        });
        storage::extend_instance_ttl(&env);

        CollectionInitialized { admin, name, symbol }.publish(&env);
        Ok(())
    }

    /// Set the address allowed to mint (admin only)
    pub fn set_minter(env: Env, admin: Address, minter: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        storage::set_minter(&env, &minter);
        storage::extend_instance_ttl(&env);

        MinterChanged { admin, minter }.publish(&env);
        Ok(())
    }

    // ========== MINTING ==========

    /// Mint a new token to `to`. Ids start at 1.
    pub fn mint(env: Env, to: Address, uri: String) -> Result<u64, Error> {
        let minter = storage::get_minter(&env).ok_or(Error::MinterNotSet)?;
        minter.require_auth();

        let token_id = storage::increment_token_counter(&env);
        let token = Token {
            id: token_id,
            owner: to.clone(),
            uri: uri.clone(),
            minted_at: env.ledger().timestamp(),
        };

        storage::set_token(&env, &token);
        storage::increment_balance(&env, &to);
        storage::extend_instance_ttl(&env);

        Minted { token_id, to, uri }.publish(&env);
        Ok(token_id)
    }

    // ========== APPROVALS ==========

    /// Approve `spender` to move `token_id` on behalf of its owner
    pub fn approve(env: Env, owner: Address, spender: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let token = storage::get_token(&env, token_id).ok_or(Error::TokenNotFound)?;
        if token.owner != owner {
            return Err(Error::NotOwner);
        }

        storage::set_approval(&env, token_id, &spender);

        Approved { token_id, owner, spender }.publish(&env);
        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        storage::get_approval(&env, token_id)
    }

    // ========== TRANSFERS ==========

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();
        Self::move_token(&env, &from, &to, token_id)
    }

    /// Transfer on behalf of the owner. `spender` must be the owner or the
    /// approved address for `token_id`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        if spender != from && storage::get_approval(&env, token_id) != Some(spender) {
            return Err(Error::NotApproved);
        }

        Self::move_token(&env, &from, &to, token_id)
    }

    // ========== QUERIES ==========

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        storage::get_token(&env, token_id)
            .map(|token| token.owner)
            .ok_or(Error::TokenNotFound)
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        storage::get_token(&env, token_id)
            .map(|token| token.uri)
            .ok_or(Error::TokenNotFound)
    }

    pub fn get_token(env: Env, token_id: u64) -> Result<Token, Error> {
        storage::get_token(&env, token_id).ok_or(Error::TokenNotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        storage::get_balance(&env, &owner)
    }

    pub fn total_supply(env: Env) -> u64 {
        storage::get_token_counter(&env)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        storage::get_metadata(&env)
            .map(|metadata| metadata.name)
            .ok_or(Error::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        storage::get_metadata(&env)
            .map(|metadata| metadata.symbol)
            .ok_or(Error::NotInitialized)
    }

    pub fn minter(env: Env) -> Option<Address> {
        storage::get_minter(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn move_token(env: &Env, from: &Address, to: &Address, token_id: u64) -> Result<(), Error> {
        let mut token = storage::get_token(env, token_id).ok_or(Error::TokenNotFound)?;
        if token.owner != *from {
            return Err(Error::NotOwner);
        }

        token.owner = to.clone();
        storage::set_token(env, &token);
        storage::remove_approval(env, token_id);
        storage::decrement_balance(env, from);
        storage::increment_balance(env, to);

        Transferred {
            token_id,
            from: from.clone(),
            to: to.clone(),
        }
        .publish(env);
        Ok(())
    }
}

#[cfg(test)]
mod test;
