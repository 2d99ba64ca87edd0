use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Bids required before an auction can settle to a buyer
pub const DEFAULT_MIN_NUMBER_OF_BETS: u32 = 2;

/// Seconds an auction runs before it can be finished
pub const DEFAULT_AUCTION_DURATION: u64 = 600;

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Marketplace configuration
    Config,
    /// Listing by token id
    Listing(u64),
    /// Auction bidding state by token id
    Auction(u64),
}

/// Where a token stands in the marketplace
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ListingStatus {
    None = 0,
    FixedSale = 1,
    OnAuction = 2,
}

/// Process-wide marketplace parameters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceConfig {
    pub admin: Address,
    /// NFT collection the marketplace mints into and trades
    pub collection: Address,
    /// Token used for new listings and bids
    pub payment_token: Address,
    pub min_number_of_bets: u32,
    /// Seconds
    pub auction_duration: u64,
    pub updated_at: u64,
}

/// A token held in escrow for sale or auction.
///
/// For a fixed sale `price` is the asking price; for an auction it is the
/// minimum opening price.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub token_id: u64,
    pub seller: Address,
    pub price: i128,
    pub status: ListingStatus,
    pub payment_token: Address,
    pub listed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub token_id: u64,
    pub seller: Address,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub start_time: u64,
    /// Seconds, fixed when the auction opens
    pub duration: u64,
    pub bid_count: u32,
    pub payment_token: Address,
}
