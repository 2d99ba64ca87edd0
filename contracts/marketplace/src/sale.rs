use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::escrow;
use crate::events::{ItemListed, ItemSold, ListingCancelled};
use crate::storage;
use crate::types::{Listing, ListingStatus};

/// Reject a token that already sits in either sale path.
pub fn ensure_not_listed(env: &Env, token_id: u64) -> Result<(), Error> {
    match sale_status(env, token_id) {
        ListingStatus::FixedSale => Err(Error::TokenAlreadySale),
        ListingStatus::OnAuction => Err(Error::TokenAlreadyOnAuction),
        ListingStatus::None => Ok(()),
    }
}

pub fn sale_status(env: &Env, token_id: u64) -> ListingStatus {
    storage::get_listing(env, token_id)
        .map(|listing| listing.status)
        .unwrap_or(ListingStatus::None)
}

fn fixed_sale(env: &Env, token_id: u64) -> Result<Listing, Error> {
    storage::get_listing(env, token_id)
        .filter(|listing| listing.status == ListingStatus::FixedSale)
        .ok_or(Error::TokenNotSale)
}

pub fn list_item(env: &Env, seller: Address, token_id: u64, price: i128) -> Result<(), Error> {
    seller.require_auth();

    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    ensure_not_listed(env, token_id)?;
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }

    escrow::take_item(env, &config.collection, &seller, token_id);

    storage::set_listing(
        env,
        &Listing {
            token_id,
            seller: seller.clone(),
            price,
            status: ListingStatus::FixedSale,
            payment_token: config.payment_token,
            listed_at: env.ledger().timestamp(),
        },
    );

    ItemListed {
        token_id,
        seller,
        price,
    }
    .publish(env);
    Ok(())
}

pub fn cancel(env: &Env, caller: Address, token_id: u64) -> Result<(), Error> {
    caller.require_auth();

    let listing = fixed_sale(env, token_id)?;
    if listing.seller != caller {
        return Err(Error::NotSeller);
    }
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    escrow::release_item(env, &config.collection, &listing.seller, token_id);
    storage::remove_listing(env, token_id);

    ListingCancelled {
        token_id,
        seller: listing.seller,
    }
    .publish(env);
    Ok(())
}

pub fn buy_item(env: &Env, buyer: Address, token_id: u64) -> Result<(), Error> {
    buyer.require_auth();

    let listing = fixed_sale(env, token_id)?;
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    escrow::pay(
        env,
        &listing.payment_token,
        &buyer,
        &listing.seller,
        listing.price,
    );
    escrow::release_item(env, &config.collection, &buyer, token_id);
    storage::remove_listing(env, token_id);

    log!(env, "item sold", token_id, listing.price);

    ItemSold {
        token_id,
        buyer,
        seller: listing.seller,
        price: listing.price,
    }
    .publish(env);
    Ok(())
}
