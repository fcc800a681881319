//! Auction book: English auctions with a reserve floor.
//!
//! The asset is escrowed for the life of the auction. Outbid bidders are
//! refunded through the revenue ledger (pull model); settlement is driven
//! by either participant once the deadline passes.

use market_utils::{SafeMath, TimeUtils};
use soroban_sdk::{symbol_short, Address, Env};

use crate::errors::{fail, require_enabled, MarketError};
use crate::storage;
use crate::types::{AssetId, Auction};

/// Open an auction on an asset the caller owns.
pub fn create_auction(
    e: &Env,
    seller: Address,
    collection: Address,
    token_id: u32,
    floor_price: i128,
    duration_days: u32,
) -> Result<(), MarketError> {
    // CHECKS
    require_enabled(e)?;
    seller.require_auth();

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    if !storage::registry(e).is_whitelisted(&collection) {
        return Err(fail(e, MarketError::NotWhitelisted));
    }
    if floor_price <= 0 {
        return Err(fail(e, MarketError::FloorPriceNotSet));
    }
    let max_days = storage::get_max_days(e);
    if duration_days < 1 || duration_days > max_days {
        return Err(fail(e, MarketError::DurationOutOfBounds));
    }
    if storage::has_auction(e, &asset) {
        return Err(fail(e, MarketError::AuctionExists));
    }
    if storage::has_listing(e, &asset) {
        return Err(fail(e, MarketError::ListingExists));
    }

    let ledger = storage::asset_ledger(e, &collection);
    if ledger.owner_of(&token_id) != seller {
        return Err(fail(e, MarketError::NotAssetOwner));
    }

    // EFFECTS
    let auction = Auction {
        seller: seller.clone(),
        current_bidder: None,
        current_bid: floor_price,
        floor_price,
        ends_at: TimeUtils::calculate_expiration(e, duration_days),
    };
    storage::set_auction(e, &asset, &auction);
    storage::add_active_auction(e, &asset);

    // INTERACTIONS: escrow the asset with the engine
    ledger.transfer_from(
        &e.current_contract_address(),
        &seller,
        &e.current_contract_address(),
        &token_id,
    );

    e.events().publish(
        (symbol_short!("AucOpen"), collection, token_id),
        (seller, floor_price, auction.ends_at),
    );

    Ok(())
}

/// Place a bid on an open auction.
///
/// The first bid must meet the floor; later bids must strictly exceed the
/// current bid. The outbid bidder's escrow is credited back through the
/// revenue ledger for later withdrawal.
pub fn place_bid(
    e: &Env,
    bidder: Address,
    collection: Address,
    token_id: u32,
    amount: i128,
) -> Result<(), MarketError> {
    // CHECKS
    require_enabled(e)?;
    bidder.require_auth();

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    let mut auction =
        storage::get_auction(e, &asset).ok_or_else(|| fail(e, MarketError::AuctionNotFound))?;
    if TimeUtils::is_expired(e, auction.ends_at) {
        return Err(fail(e, MarketError::AuctionFinished));
    }
    if bidder == auction.seller {
        return Err(fail(e, MarketError::SellerCannotBid));
    }
    if auction.current_bidder == Some(bidder.clone()) {
        return Err(fail(e, MarketError::SelfOutbid));
    }
    match auction.current_bidder {
        None => {
            if amount < auction.floor_price {
                return Err(fail(e, MarketError::BidBelowFloor));
            }
        }
        Some(_) => {
            if amount <= auction.current_bid {
                return Err(fail(e, MarketError::BidTooLow));
            }
        }
    }

    // EFFECTS: record the new high bid, credit the outbid escrow back
    let previous = auction.current_bidder.clone();
    let previous_bid = auction.current_bid;
    auction.current_bidder = Some(bidder.clone());
    auction.current_bid = amount;
    storage::set_auction(e, &asset, &auction);
    if let Some(outbid) = previous {
        crate::revenue::credit(e, &outbid, previous_bid);
    }

    // INTERACTIONS
    storage::payment(e).transfer(&bidder, &e.current_contract_address(), &amount);

    e.events().publish(
        (symbol_short!("BidMade"), collection, token_id),
        (bidder, amount),
    );

    Ok(())
}

/// Settle a finished auction. Only the seller or the winning bidder may
/// drive settlement.
pub fn finalize_auction(
    e: &Env,
    caller: Address,
    collection: Address,
    token_id: u32,
) -> Result<(), MarketError> {
    require_enabled(e)?;
    caller.require_auth();

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    let auction =
        storage::get_auction(e, &asset).ok_or_else(|| fail(e, MarketError::AuctionNotFound))?;
    if !TimeUtils::is_expired(e, auction.ends_at) {
        return Err(fail(e, MarketError::AuctionNotFinished));
    }
    if caller != auction.seller && Some(caller.clone()) != auction.current_bidder {
        return Err(fail(e, MarketError::NotParticipant));
    }

    settle(e, &asset, &auction);
    Ok(())
}

/// Winning-bidder settlement path. Equivalent to [`finalize_auction`] but
/// only the current bidder may call it.
pub fn reclaim_auction(
    e: &Env,
    bidder: Address,
    collection: Address,
    token_id: u32,
) -> Result<(), MarketError> {
    require_enabled(e)?;
    bidder.require_auth();

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    let auction =
        storage::get_auction(e, &asset).ok_or_else(|| fail(e, MarketError::AuctionNotFound))?;
    if !TimeUtils::is_expired(e, auction.ends_at) {
        return Err(fail(e, MarketError::AuctionNotFinished));
    }
    if Some(bidder) != auction.current_bidder {
        return Err(fail(e, MarketError::NotParticipant));
    }

    settle(e, &asset, &auction);
    Ok(())
}

fn settle(e: &Env, asset: &AssetId, auction: &Auction) {
    // EFFECTS: close the book entry before any transfer
    storage::remove_auction(e, asset);

    let ledger = storage::asset_ledger(e, &asset.collection);
    match &auction.current_bidder {
        Some(winner) => {
            let fee_basis_points = storage::registry(e).get_fee(&asset.collection);
            let fee = SafeMath::fee_amount(auction.current_bid, fee_basis_points);
            crate::revenue::credit(e, &auction.seller, SafeMath::sub(auction.current_bid, fee));
            crate::revenue::accrue_sales_fee(e, fee);

            // INTERACTIONS
            ledger.transfer(&e.current_contract_address(), winner, &asset.token_id);

            e.events().publish(
                (
                    symbol_short!("AucDone"),
                    asset.collection.clone(),
                    asset.token_id,
                ),
                (auction.seller.clone(), winner.clone(), auction.current_bid),
            );
        }
        None => {
            // No bids: the asset goes back to the seller.
            ledger.transfer(
                &e.current_contract_address(),
                &auction.seller,
                &asset.token_id,
            );

            e.events().publish(
                (
                    symbol_short!("AucNoBid"),
                    asset.collection.clone(),
                    asset.token_id,
                ),
                auction.seller.clone(),
            );
        }
    }
}

/// Delegated auction open, reachable only through the execution gateway.
///
/// The signer must be the marketplace admin and own the asset. The buyer is
/// pre-seeded as the first bidder at `value` and their escrow is pulled
/// immediately; the auction runs for the configured maximum duration.
pub fn owner_auction(
    e: &Env,
    signer: Address,
    buyer: Address,
    collection: Address,
    token_id: u32,
    value: i128,
) -> Result<(), MarketError> {
    // CHECKS
    let admin = storage::get_admin(e).ok_or(MarketError::NotInitialized)?;
    if signer != admin {
        return Err(fail(e, MarketError::Unauthorized));
    }

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    let registry = storage::registry(e);
    if !registry.is_whitelisted(&collection) {
        return Err(fail(e, MarketError::NotWhitelisted));
    }
    let floor_price = registry.get_floor_price(&collection);
    if floor_price <= 0 {
        return Err(fail(e, MarketError::FloorPriceNotSet));
    }
    if value < floor_price {
        return Err(fail(e, MarketError::ValueBelowFloor));
    }
    if storage::has_auction(e, &asset) {
        return Err(fail(e, MarketError::AuctionExists));
    }
    if storage::has_listing(e, &asset) {
        return Err(fail(e, MarketError::ListingExists));
    }

    // EFFECTS
    let max_days = storage::get_max_days(e);
    let auction = Auction {
        seller: signer.clone(),
        current_bidder: Some(buyer.clone()),
        current_bid: value,
        floor_price,
        ends_at: TimeUtils::calculate_expiration(e, max_days),
    };
    storage::set_auction(e, &asset, &auction);
    storage::add_active_auction(e, &asset);

    // INTERACTIONS: escrow the asset and the seed bid
    storage::asset_ledger(e, &collection).transfer_from(
        &e.current_contract_address(),
        &signer,
        &e.current_contract_address(),
        &token_id,
    );
    storage::payment(e).transfer(&buyer, &e.current_contract_address(), &value);

    e.events().publish(
        (symbol_short!("OwnerAuc"), collection, token_id),
        (signer, buyer, value, auction.ends_at),
    );

    Ok(())
}

/// Look up an open auction.
pub fn get_auction(e: &Env, collection: Address, token_id: u32) -> Result<Auction, MarketError> {
    let asset = AssetId {
        collection,
        token_id,
    };
    storage::get_auction(e, &asset).ok_or(MarketError::AuctionNotFound)
}
