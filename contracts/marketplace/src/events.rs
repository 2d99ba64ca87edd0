use soroban_sdk::{contractevent, Address, String};

/// Event emitted when marketplace is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    #[topic]
    pub admin: Address,
    pub collection: Address,
    pub payment_token: Address,
}

/// Event emitted when any admin parameter changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdated {
    #[topic]
    pub admin: Address,
    pub min_number_of_bets: u32,
    pub auction_duration: u64,
    pub payment_token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub old_admin: Address,
    #[topic]
    pub new_admin: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemCreated {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub owner: Address,
    pub uri: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemListed {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub seller: Address,
    pub price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCancelled {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub seller: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemSold {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub buyer: Address,
    pub seller: Address,
    pub price: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStarted {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub seller: Address,
    pub min_price: i128,
    pub start_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub bid_count: u32,
}

/// `winner` is `None` when the token went back to the seller
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinished {
    #[topic]
    pub token_id: u64,
    pub seller: Address,
    pub winner: Option<Address>,
    pub final_bid: i128,
    pub bid_count: u32,
}
