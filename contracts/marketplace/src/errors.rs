use soroban_sdk::contracterror;

/// Error codes for the marketplace contract.
/// Uses error codes starting at 500 to avoid conflicts with the collection.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 500,
    /// Contract has not been initialized
    NotInitialized = 501,
    /// Caller is not the marketplace admin
    Unauthorized = 502,
    /// Token is already listed for a fixed price
    TokenAlreadySale = 503,
    /// Token is already on auction
    TokenAlreadyOnAuction = 504,
    /// Token is not listed for a fixed price
    TokenNotSale = 505,
    /// Caller is not the seller of the listing
    NotSeller = 506,
    /// No auction exists for the token
    TokenNotOnAuction = 507,
    /// Bid does not exceed the current highest bid
    PriceIsSmall = 508,
    /// Auction duration has not elapsed yet
    AuctionNotElapsed = 509,
    /// Price must be positive
    InvalidPrice = 510,
    /// Auction duration must be positive
    InvalidDuration = 511,
}
