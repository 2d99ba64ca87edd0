use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::escrow;
use crate::events::{AuctionFinished, AuctionStarted, BidPlaced};
use crate::sale::ensure_not_listed;
use crate::storage;
use crate::types::{Auction, Listing, ListingStatus};

pub fn list_item_on_auction(
    env: &Env,
    seller: Address,
    token_id: u64,
    min_price: i128,
) -> Result<(), Error> {
    seller.require_auth();

    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    ensure_not_listed(env, token_id)?;
    if min_price < 0 {
        return Err(Error::InvalidPrice);
    }

    escrow::take_item(env, &config.collection, &seller, token_id);

    let start_time = env.ledger().timestamp();
    storage::set_listing(
        env,
        &Listing {
            token_id,
            seller: seller.clone(),
            price: min_price,
            status: ListingStatus::OnAuction,
            payment_token: config.payment_token.clone(),
            listed_at: start_time,
        },
    );
    storage::set_auction(
        env,
        &Auction {
            token_id,
            seller: seller.clone(),
            highest_bidder: None,
            highest_bid: min_price,
            start_time,
            duration: config.auction_duration,
            bid_count: 0,
            payment_token: config.payment_token,
        },
    );

    AuctionStarted {
        token_id,
        seller,
        min_price,
        start_time,
    }
    .publish(env);
    Ok(())
}

/// Escrow a strictly higher bid and refund whoever it displaces.
/// Bids stay open past the duration until someone finishes the auction.
pub fn make_bid(env: &Env, bidder: Address, token_id: u64, amount: i128) -> Result<(), Error> {
    bidder.require_auth();

    let mut auction = storage::get_auction(env, token_id).ok_or(Error::TokenNotOnAuction)?;
    if amount <= auction.highest_bid {
        return Err(Error::PriceIsSmall);
    }

    if let Some(previous_bidder) = &auction.highest_bidder {
        escrow::release_funds(
            env,
            &auction.payment_token,
            previous_bidder,
            auction.highest_bid,
        );
    }
    escrow::escrow_bid(env, &auction.payment_token, &bidder, amount);

    auction.highest_bid = amount;
    auction.highest_bidder = Some(bidder.clone());
    auction.bid_count += 1;
    storage::set_auction(env, &auction);

    BidPlaced {
        token_id,
        bidder,
        amount,
        bid_count: auction.bid_count,
    }
    .publish(env);
    Ok(())
}

/// Settle an auction once the duration it opened with has elapsed.
///
/// The highest bidder wins only when the number of bids exceeds the
/// configured minimum; otherwise the token goes back to the seller and the
/// top bid is refunded. Returns the address now holding the token.
pub fn finish_auction(env: &Env, token_id: u64) -> Result<Address, Error> {
    let auction = storage::get_auction(env, token_id).ok_or(Error::TokenNotOnAuction)?;
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;

    let elapsed = env.ledger().timestamp().saturating_sub(auction.start_time);
    if elapsed < auction.duration {
        return Err(Error::AuctionNotElapsed);
    }

    let winner = match &auction.highest_bidder {
        Some(bidder) if auction.bid_count > config.min_number_of_bets => {
            escrow::release_item(env, &config.collection, bidder, token_id);
            escrow::release_funds(
                env,
                &auction.payment_token,
                &auction.seller,
                auction.highest_bid,
            );
            Some(bidder.clone())
        }
        Some(bidder) => {
            escrow::release_item(env, &config.collection, &auction.seller, token_id);
            escrow::release_funds(env, &auction.payment_token, bidder, auction.highest_bid);
            None
        }
        None => {
            escrow::release_item(env, &config.collection, &auction.seller, token_id);
            None
        }
    };

    storage::remove_auction(env, token_id);
    storage::remove_listing(env, token_id);

    log!(env, "auction finished", token_id, auction.bid_count);

    let holder = winner.clone().unwrap_or_else(|| auction.seller.clone());
    AuctionFinished {
        token_id,
        seller: auction.seller,
        winner,
        final_bid: auction.highest_bid,
        bid_count: auction.bid_count,
    }
    .publish(env);
    Ok(holder)
}
