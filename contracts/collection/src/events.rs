use soroban_sdk::{contractevent, Address, String};

/// Emitted once when the collection is set up
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionInitialized {
    #[topic]
    pub admin: Address,
    pub name: String,
    pub symbol: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterChanged {
    #[topic]
    pub admin: Address,
    pub minter: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Minted {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub to: Address,
    pub uri: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approved {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub owner: Address,
    pub spender: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transferred {
    #[topic]
    pub token_id: u64,
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
}
