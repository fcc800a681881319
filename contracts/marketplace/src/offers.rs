//! Offer book: unsolicited buy offers on assets that are not listed.
//!
//! The offer amount is escrowed in the engine's token balance at creation.
//! At most one active offer per (asset, bidder). Accepting one offer leaves
//! sibling offers untouched; their escrow stays claimable by cancellation.

use market_utils::SafeMath;
use soroban_sdk::{symbol_short, Address, Env, Vec};

use crate::errors::{fail, require_enabled, MarketError};
use crate::storage;
use crate::types::{AssetId, Offer};

/// Make an offer on an asset, escrowing the amount with the engine.
pub fn create_offer(
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

    if !storage::registry(e).is_whitelisted(&collection) {
        return Err(fail(e, MarketError::NotWhitelisted));
    }
    if amount <= 0 {
        return Err(fail(e, MarketError::InvalidPrice));
    }

    let mut offers = storage::get_offers(e, &asset);
    if offers.iter().any(|o| o.bidder == bidder) {
        return Err(fail(e, MarketError::OfferExists));
    }

    // EFFECTS
    offers.push_back(Offer {
        bidder: bidder.clone(),
        amount,
        created_at: e.ledger().timestamp(),
    });
    storage::set_offers(e, &asset, &offers);
    storage::add_user_offer(e, &bidder, &asset);

    // INTERACTIONS
    storage::payment(e).transfer(&bidder, &e.current_contract_address(), &amount);

    e.events().publish(
        (symbol_short!("OfferMade"), collection, token_id),
        (bidder, amount),
    );

    Ok(())
}

/// Cancel an active offer; the escrowed amount is refunded directly.
pub fn cancel_offer(
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

    let offers = storage::get_offers(e, &asset);
    let position = offers
        .iter()
        .position(|o| o.bidder == bidder)
        .ok_or_else(|| fail(e, MarketError::OfferNotFound))?;
    let offer = offers.get_unchecked(position as u32);

    // EFFECTS: drop the offer from both indexes before the refund
    let mut remaining = offers;
    remaining.remove(position as u32);
    storage::set_offers(e, &asset, &remaining);
    storage::remove_user_offer(e, &bidder, &asset);

    // INTERACTIONS
    storage::payment(e).transfer(&e.current_contract_address(), &bidder, &offer.amount);

    e.events().publish(
        (symbol_short!("OfferCanc"), collection, token_id),
        (bidder, offer.amount),
    );

    Ok(())
}

/// Accept one bidder's offer on an asset the caller owns.
///
/// The owner is credited `amount - fee` in the revenue ledger; the asset
/// moves to the bidder. Other offers on the asset are unaffected.
pub fn accept_offer(
    e: &Env,
    owner: Address,
    collection: Address,
    token_id: u32,
    bidder: Address,
) -> Result<(), MarketError> {
    // CHECKS
    require_enabled(e)?;
    owner.require_auth();

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    let offers = storage::get_offers(e, &asset);
    let position = offers
        .iter()
        .position(|o| o.bidder == bidder)
        .ok_or_else(|| fail(e, MarketError::OfferNotFound))?;
    let offer = offers.get_unchecked(position as u32);

    let ledger = storage::asset_ledger(e, &collection);
    if ledger.owner_of(&token_id) != owner {
        return Err(fail(e, MarketError::NotAssetOwner));
    }

    let fee_basis_points = storage::registry(e).get_fee(&collection);
    let fee = SafeMath::fee_amount(offer.amount, fee_basis_points);

    // EFFECTS: remove only the accepted offer, settle the books
    let mut remaining = offers;
    remaining.remove(position as u32);
    storage::set_offers(e, &asset, &remaining);
    storage::remove_user_offer(e, &bidder, &asset);
    crate::revenue::credit(e, &owner, SafeMath::sub(offer.amount, fee));
    crate::revenue::accrue_sales_fee(e, fee);

    // INTERACTIONS: escrow already holds the funds; only the asset moves
    ledger.transfer_from(&e.current_contract_address(), &owner, &bidder, &token_id);

    e.events().publish(
        (symbol_short!("OffAccpt"), collection, token_id),
        (owner, bidder, offer.amount),
    );

    Ok(())
}

/// All active offers on an asset.
pub fn get_offers(e: &Env, collection: Address, token_id: u32) -> Vec<Offer> {
    let asset = AssetId {
        collection,
        token_id,
    };
    storage::get_offers(e, &asset)
}

/// Number of assets the bidder has active offers on.
pub fn get_user_offers_count(e: &Env, bidder: Address) -> u32 {
    storage::get_user_offers(e, &bidder).len()
}

/// The bidder's offer at `index`, as (asset, amount).
pub fn user_offer_by_index(
    e: &Env,
    bidder: Address,
    index: u32,
) -> Result<(AssetId, i128), MarketError> {
    let assets = storage::get_user_offers(e, &bidder);
    let asset = assets
        .get(index)
        .ok_or(MarketError::OfferIndexOutOfBounds)?;
    let offer = storage::get_offers(e, &asset)
        .iter()
        .find(|o| o.bidder == bidder)
        .ok_or(MarketError::OfferNotFound)?;
    Ok((asset, offer.amount))
}
