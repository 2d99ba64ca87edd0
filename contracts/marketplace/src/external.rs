use soroban_sdk::{contractclient, Address, Env, String};

/// Subset of the collection contract the marketplace calls into.
#[contractclient(name = "CollectionClient")]
pub trait CollectionInterface {
    fn mint(env: Env, to: Address, uri: String) -> u64;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}
