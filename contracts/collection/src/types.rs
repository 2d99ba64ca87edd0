use soroban_sdk::{contracttype, Address, String};

// TTL constants
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for the collection contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Minter,
    Metadata,
    TokenCounter,
    Token(u64),
    Approval(u64),
    Balance(Address),
}

/// Collection name and ticker
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionMetadata {
    pub name: String,
    pub symbol: String,
}

/// A minted token
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub id: u64,
    pub owner: Address,
    pub uri: String,
    pub minted_at: u64,
}
