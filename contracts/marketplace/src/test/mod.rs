
use crate::{Marketplace, MarketplaceClient};
use nft_collection::{Collection, CollectionClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub const OWNER_FUNDS: i128 = 120_000;
pub const BIDDER_FUNDS: i128 = 230_000;

pub struct TestContext {
    pub env: Env,
    pub marketplace: MarketplaceClient<'static>,
    pub collection: CollectionClient<'static>,
    pub payment: token::TokenClient<'static>,
    pub admin: Address,
    pub owner: Address,
    pub addr1: Address,
    pub addr2: Address,
}

impl TestContext {
    /// Mint "qwerty0" to the owner and approve the marketplace to move it.
    pub fn create_approved_item(&self) -> u64 {
        let token_id = self
            .marketplace
            .create_item(&String::from_str(&self.env, "qwerty0"), &self.owner);
        self.collection
            .approve(&self.owner, &self.marketplace.address, &token_id);
        token_id
    }

    pub fn nft_balance(&self, who: &Address) -> u64 {
        self.collection.balance_of(who)
    }
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let addr1 = Address::generate(&env);
    let addr2 = Address::generate(&env);

    let collection_id = env.register(Collection, ());
    let collection = CollectionClient::new(&env, &collection_id);
    collection.initialize(
        &admin,
        &String::from_str(&env, "Mock721"),
        &String::from_str(&env, "M721"),
    );

    let payment_address = create_payment_token(&env, &[
        (&owner, OWNER_FUNDS),
        (&addr1, BIDDER_FUNDS),
        (&addr2, BIDDER_FUNDS),
    ]);
    let payment = token::TokenClient::new(&env, &payment_address);

    let marketplace_id = env.register(Marketplace, ());
    let marketplace = MarketplaceClient::new(&env, &marketplace_id);
    marketplace.initialize(&admin, &collection_id, &payment_address);
    collection.set_minter(&admin, &marketplace_id);

    TestContext {
        env,
        marketplace,
        collection,
        payment,
        admin,
        owner,
        addr1,
        addr2,
    }
}

/// Register a Stellar asset contract and fund the given holders.
pub fn create_payment_token(env: &Env, holders: &[(&Address, i128)]) -> Address {
    let token_admin = Address::generate(env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_admin_client = token::StellarAssetClient::new(env, &token_address);

    for (holder, amount) in holders {
        token_admin_client.mint(holder, amount);
    }

    token_address
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
