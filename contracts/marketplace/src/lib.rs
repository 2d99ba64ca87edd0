#![no_std]

mod admin;
mod auction;
mod errors;
mod escrow;
mod events;
mod external;
mod sale;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

pub use crate::errors::Error;
pub use crate::types::{Auction, Listing, ListingStatus, MarketplaceConfig};

use crate::events::{AdminChanged, ConfigUpdated, Initialized, ItemCreated};
use crate::external::CollectionClient;
use crate::types::{DEFAULT_AUCTION_DURATION, DEFAULT_MIN_NUMBER_OF_BETS};

/// NFT marketplace.
///
/// Items are minted into an external collection contract and traded for a
/// fungible payment token, either at a fixed price or by auction. While a
/// listing is active the marketplace holds the NFT, and during an auction it
/// also holds the current top bid.
#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Bind the marketplace to its collection and payment token.
    ///
    /// The collection must name this contract as its minter before
    /// `create_item` can succeed.
    pub fn initialize(
        env: Env,
        admin: Address,
        collection: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_config(
            &env,
            &MarketplaceConfig {
                admin: admin.clone(),
                collection: collection.clone(),
                payment_token: payment_token.clone(),
                min_number_of_bets: DEFAULT_MIN_NUMBER_OF_BETS,
                auction_duration: DEFAULT_AUCTION_DURATION,
                updated_at: env.ledger().timestamp(),
            },
        );
        storage::extend_instance_ttl(&env);

        Initialized {
            admin,
            collection,
            payment_token,
        }
        .publish(&env);
        Ok(())
    }

    // ========================================================================
    // ITEMS
    // ========================================================================

    /// Mint a new item with content `uri` to `owner`. Returns the token id.
    pub fn create_item(env: Env, uri: String, owner: Address) -> Result<u64, Error> {
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let token_id = CollectionClient::new(&env, &config.collection).mint(&owner, &uri);
        storage::extend_instance_ttl(&env);

        ItemCreated {
            token_id,
            owner,
            uri,
        }
        .publish(&env);
        Ok(token_id)
    }

    // ========================================================================
    // FIXED-PRICE SALES
    // ========================================================================

    /// Escrow `token_id` and offer it at `price`.
    ///
    /// # Errors
    /// * `Error::TokenAlreadySale` / `Error::TokenAlreadyOnAuction` - already listed
    /// * `Error::InvalidPrice` - `price` is not positive
    pub fn list_item(env: Env, seller: Address, token_id: u64, price: i128) -> Result<(), Error> {
        sale::list_item(&env, seller, token_id, price)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Withdraw a fixed-price listing and return the token to its seller.
    ///
    /// # Errors
    /// * `Error::TokenNotSale` - no fixed-price listing for `token_id`
    /// * `Error::NotSeller` - `caller` did not list the token
    pub fn cancel(env: Env, caller: Address, token_id: u64) -> Result<(), Error> {
        sale::cancel(&env, caller, token_id)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Pay the asking price to the seller and receive the token.
    pub fn buy_item(env: Env, buyer: Address, token_id: u64) -> Result<(), Error> {
        sale::buy_item(&env, buyer, token_id)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ========================================================================
    // AUCTIONS
    // ========================================================================

    /// Escrow `token_id` and open bidding above `min_price`.
    pub fn list_item_on_auction(
        env: Env,
        seller: Address,
        token_id: u64,
        min_price: i128,
    ) -> Result<(), Error> {
        auction::list_item_on_auction(&env, seller, token_id, min_price)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// # Errors
    /// * `Error::TokenNotOnAuction` - no auction for `token_id`
    /// * `Error::PriceIsSmall` - `amount` does not beat the current highest bid
    pub fn make_bid(env: Env, bidder: Address, token_id: u64, amount: i128) -> Result<(), Error> {
        auction::make_bid(&env, bidder, token_id, amount)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Settle the auction for `token_id`. Anyone may call this once the
    /// auction duration has passed.
    ///
    /// # Errors
    /// * `Error::TokenNotOnAuction` - no auction for `token_id`
    /// * `Error::AuctionNotElapsed` - the duration has not elapsed yet
    pub fn finish_auction(env: Env, token_id: u64) -> Result<Address, Error> {
        let holder = auction::finish_auction(&env, token_id)?;
        storage::extend_instance_ttl(&env);
        Ok(holder)
    }

    // ========================================================================
    // ADMIN CONFIGURATION
    // ========================================================================

    /// Bids an auction must exceed to settle to the highest bidder
    pub fn set_min_number_of_bets(env: Env, admin: Address, count: u32) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &admin)?;
        config.min_number_of_bets = count;
        Self::save_config(&env, config);
        Ok(())
    }

    /// Auction duration in seconds
    pub fn set_time_auction(env: Env, admin: Address, seconds: u64) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &admin)?;
        if seconds == 0 {
            return Err(Error::InvalidDuration);
        }
        config.auction_duration = seconds;
        Self::save_config(&env, config);
        Ok(())
    }

    /// Payment token for listings created from now on. Open listings keep
    /// the token they were created with.
    pub fn set_buy_contract(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &admin)?;
        config.payment_token = payment_token;
        Self::save_config(&env, config);
        Ok(())
    }

    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &admin)?;
        config.admin = new_admin.clone();
        config.updated_at = env.ledger().timestamp();
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        AdminChanged {
            old_admin: admin,
            new_admin,
        }
        .publish(&env);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_config(env: Env) -> Result<MarketplaceConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    pub fn get_listing(env: Env, token_id: u64) -> Result<Listing, Error> {
        storage::get_listing(&env, token_id).ok_or(Error::TokenNotSale)
    }

    pub fn get_auction(env: Env, token_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, token_id).ok_or(Error::TokenNotOnAuction)
    }

    pub fn sale_status(env: Env, token_id: u64) -> ListingStatus {
        sale::sale_status(&env, token_id)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn save_config(env: &Env, mut config: MarketplaceConfig) {
        config.updated_at = env.ledger().timestamp();
        storage::set_config(env, &config);
        storage::extend_instance_ttl(env);

        ConfigUpdated {
            admin: config.admin.clone(),
            min_number_of_bets: config.min_number_of_bets,
            auction_duration: config.auction_duration,
            payment_token: config.payment_token,
        }
        .publish(env);
    }
}
