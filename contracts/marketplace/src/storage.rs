use soroban_sdk::Env;

use crate::types::{
    Auction, Listing, MarketplaceConfig, StorageKey, INSTANCE_TTL_AMOUNT,
    INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(e: &Env) -> Option<MarketplaceConfig> {
    e.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(e: &Env, config: &MarketplaceConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

// ============================================================================
// LISTING STORAGE
// ============================================================================

pub fn get_listing(e: &Env, token_id: u64) -> Option<Listing> {
    let key = StorageKey::Listing(token_id);
    let listing = e.storage().persistent().get::<_, Listing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

pub fn set_listing(e: &Env, listing: &Listing) {
    let key = StorageKey::Listing(listing.token_id);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_listing(e: &Env, token_id: u64) {
    e.storage()
        .persistent()
        .remove(&StorageKey::Listing(token_id));
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction(e: &Env, token_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(token_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn set_auction(e: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.token_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_auction(e: &Env, token_id: u64) {
    e.storage()
        .persistent()
        .remove(&StorageKey::Auction(token_id));
}
