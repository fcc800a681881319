//! Listing book: fixed-price sales.
//!
//! One active listing per asset. The engine takes custody of the asset for
//! the life of the listing; settlement credits the seller's revenue account
//! and accrues the collection fee. All external transfers happen after the
//! book is updated.

use market_utils::SafeMath;
use soroban_sdk::{symbol_short, Address, Env};

use crate::errors::{fail, require_enabled, MarketError};
use crate::storage;
use crate::types::{AssetId, Listing};

/// List an asset at a fixed price, escrowing it with the engine.
pub fn create_listing(
    e: &Env,
    seller: Address,
    collection: Address,
    token_id: u32,
    price: i128,
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
    if price <= 0 {
        return Err(fail(e, MarketError::InvalidPrice));
    }
    if storage::has_listing(e, &asset) {
        return Err(fail(e, MarketError::ListingExists));
    }
    if storage::has_auction(e, &asset) {
        return Err(fail(e, MarketError::AuctionExists));
    }

    let ledger = storage::asset_ledger(e, &collection);
    if ledger.owner_of(&token_id) != seller {
        return Err(fail(e, MarketError::NotAssetOwner));
    }

    // EFFECTS
    let listing = Listing {
        seller: seller.clone(),
        price,
    };
    storage::set_listing(e, &asset, &listing);
    storage::add_active_listing(e, &asset);

    // INTERACTIONS: pull the asset into engine custody
    ledger.transfer_from(
        &e.current_contract_address(),
        &seller,
        &e.current_contract_address(),
        &token_id,
    );

    e.events().publish(
        (symbol_short!("Listed"), collection, token_id),
        (seller, price),
    );

    Ok(())
}

/// Change the price of an active listing (seller only).
pub fn update_listing(
    e: &Env,
    seller: Address,
    collection: Address,
    token_id: u32,
    new_price: i128,
) -> Result<(), MarketError> {
    require_enabled(e)?;
    seller.require_auth();

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    let mut listing =
        storage::get_listing(e, &asset).ok_or_else(|| fail(e, MarketError::ItemNotForSale))?;
    if listing.seller != seller {
        return Err(fail(e, MarketError::NotSeller));
    }
    if new_price <= 0 {
        return Err(fail(e, MarketError::InvalidPrice));
    }

    listing.price = new_price;
    storage::set_listing(e, &asset, &listing);

    e.events().publish(
        (symbol_short!("PriceUpd"), collection, token_id),
        (seller, new_price),
    );

    Ok(())
}

/// Cancel a listing and return custody of the asset to the seller.
pub fn cancel_listing(
    e: &Env,
    seller: Address,
    collection: Address,
    token_id: u32,
) -> Result<(), MarketError> {
    require_enabled(e)?;
    seller.require_auth();

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    let listing =
        storage::get_listing(e, &asset).ok_or_else(|| fail(e, MarketError::ItemNotForSale))?;
    if listing.seller != seller {
        return Err(fail(e, MarketError::NotSeller));
    }

    // EFFECTS
    storage::remove_listing(e, &asset);

    // INTERACTIONS
    storage::asset_ledger(e, &collection).transfer(
        &e.current_contract_address(),
        &seller,
        &token_id,
    );

    e.events()
        .publish((symbol_short!("Unlisted"), collection, token_id), seller);

    Ok(())
}

/// Buy a listed asset at its exact price.
///
/// The payment must equal the listing price; both over- and underpayment
/// fail. The seller is credited `price - fee` in the revenue ledger and the
/// collection fee accrues to the marketplace.
pub fn buy(
    e: &Env,
    buyer: Address,
    collection: Address,
    token_id: u32,
    payment: i128,
) -> Result<(), MarketError> {
    // CHECKS
    require_enabled(e)?;
    buyer.require_auth();

    let asset = AssetId {
        collection: collection.clone(),
        token_id,
    };

    let listing =
        storage::get_listing(e, &asset).ok_or_else(|| fail(e, MarketError::ItemNotForSale))?;
    if listing.seller == buyer {
        return Err(fail(e, MarketError::CannotBuyOwnListing));
    }
    if payment != listing.price {
        return Err(fail(e, MarketError::PriceMismatch));
    }

    let fee_basis_points = storage::registry(e).get_fee(&collection);
    let fee = SafeMath::fee_amount(listing.price, fee_basis_points);
    let seller_proceeds = SafeMath::sub(listing.price, fee);

    // EFFECTS: remove the listing and settle the books before any transfer
    storage::remove_listing(e, &asset);
    crate::revenue::credit(e, &listing.seller, seller_proceeds);
    crate::revenue::accrue_sales_fee(e, fee);

    // INTERACTIONS
    storage::payment(e).transfer(&buyer, &e.current_contract_address(), &listing.price);
    storage::asset_ledger(e, &collection).transfer(
        &e.current_contract_address(),
        &buyer,
        &token_id,
    );

    e.events().publish(
        (symbol_short!("Sold"), collection, token_id),
        (listing.seller, buyer, listing.price),
    );

    Ok(())
}

/// Delegated floor-price sale, reachable only through the execution gateway.
///
/// The signer must be the marketplace admin and own the asset. The buyer
/// pays exactly the collection floor price, directly to the signer and in
/// full; the marketplace takes no fee on this channel.
pub fn owner_sale(
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

    let registry = storage::registry(e);
    if !registry.is_whitelisted(&collection) {
        return Err(fail(e, MarketError::NotWhitelisted));
    }
    let floor_price = registry.get_floor_price(&collection);
    if floor_price <= 0 {
        return Err(fail(e, MarketError::InvalidFloorPrice));
    }
    if value != floor_price {
        return Err(fail(e, MarketError::FloorPriceMismatch));
    }

    // INTERACTIONS: full push payment to the signer, asset to the buyer
    storage::payment(e).transfer(&buyer, &signer, &value);
    storage::asset_ledger(e, &collection).transfer_from(
        &e.current_contract_address(),
        &signer,
        &buyer,
        &token_id,
    );

    e.events().publish(
        (symbol_short!("OwnerSale"), collection, token_id),
        (signer, buyer, value),
    );

    Ok(())
}

/// Look up an active listing.
pub fn get_listing(e: &Env, collection: Address, token_id: u32) -> Result<Listing, MarketError> {
    let asset = AssetId {
        collection,
        token_id,
    };
    storage::get_listing(e, &asset).ok_or(MarketError::ItemNotForSale)
}

/// Count of a seller's active listings.
pub fn get_seller_listings_count(e: &Env, seller: Address) -> u32 {
    let mut count = 0;
    for asset in storage::get_active_listings(e).iter() {
        if let Some(listing) = storage::get_listing(e, &asset) {
            if listing.seller == seller {
                count += 1;
            }
        }
    }
    count
}
