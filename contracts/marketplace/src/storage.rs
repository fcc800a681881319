//! Storage keys and accessors for the marketplace engine.

use asset_ledger::AssetLedgerClient;
use collection_registry::CollectionRegistryClient;
use soroban_sdk::{contracttype, token, Address, Env, Vec};

use crate::types::{AssetId, Auction, Listing, Offer};

/// Storage keys
#[contracttype]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Collection registry contract address
    Registry,
    /// Payment token contract address
    PaymentToken,
    /// Maximum auction duration in days
    MaxDays,
    /// Listing data (asset -> Listing)
    Listing(AssetId),
    /// All active listings
    ActiveListings,
    /// Auction data (asset -> Auction)
    Auction(AssetId),
    /// All open auctions
    ActiveAuctions,
    /// Offers for an asset (asset -> Vec<Offer>)
    Offers(AssetId),
    /// Assets a bidder has active offers on (bidder -> Vec<AssetId>)
    UserOffers(Address),
    /// Pending revenue per principal (principal -> i128)
    Pending(Address),
    /// Accrued marketplace sales fees
    SalesFees,
    /// Meta-transaction nonce per principal (principal -> u64)
    Nonce(Address),
}

// --- Configuration ---

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Admin)
}

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn set_registry(e: &Env, registry: &Address) {
    e.storage().instance().set(&DataKey::Registry, registry);
}

pub fn get_registry(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Registry)
}

pub fn set_payment_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_max_days(e: &Env, max_days: u32) {
    e.storage().instance().set(&DataKey::MaxDays, &max_days);
}

pub fn get_max_days(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::MaxDays).unwrap_or(0)
}

// --- Collaborator clients ---

pub fn registry(e: &Env) -> CollectionRegistryClient<'_> {
    // Config is written at initialize; a missing entry is unreachable from
    // any guarded entry point.
    let addr: Address = e
        .storage()
        .instance()
        .get(&DataKey::Registry)
        .unwrap_or_else(|| panic!("Contract not initialized"));
    CollectionRegistryClient::new(e, &addr)
}

pub fn payment(e: &Env) -> token::Client<'_> {
    let addr: Address = e
        .storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .unwrap_or_else(|| panic!("Contract not initialized"));
    token::Client::new(e, &addr)
}

pub fn asset_ledger<'a>(e: &'a Env, collection: &Address) -> AssetLedgerClient<'a> {
    AssetLedgerClient::new(e, collection)
}

// --- Listings ---

pub fn set_listing(e: &Env, asset: &AssetId, listing: &Listing) {
    e.storage()
        .persistent()
        .set(&DataKey::Listing(asset.clone()), listing);
}

pub fn get_listing(e: &Env, asset: &AssetId) -> Option<Listing> {
    e.storage().persistent().get(&DataKey::Listing(asset.clone()))
}

pub fn has_listing(e: &Env, asset: &AssetId) -> bool {
    e.storage().persistent().has(&DataKey::Listing(asset.clone()))
}

pub fn remove_listing(e: &Env, asset: &AssetId) {
    e.storage()
        .persistent()
        .remove(&DataKey::Listing(asset.clone()));
    remove_from_index(e, &DataKey::ActiveListings, asset);
}

pub fn add_active_listing(e: &Env, asset: &AssetId) {
    push_to_index(e, &DataKey::ActiveListings, asset);
}

pub fn get_active_listings(e: &Env) -> Vec<AssetId> {
    e.storage()
        .instance()
        .get(&DataKey::ActiveListings)
        .unwrap_or(Vec::new(e))
}

// --- Auctions ---

pub fn set_auction(e: &Env, asset: &AssetId, auction: &Auction) {
    e.storage()
        .persistent()
        .set(&DataKey::Auction(asset.clone()), auction);
}

pub fn get_auction(e: &Env, asset: &AssetId) -> Option<Auction> {
    e.storage().persistent().get(&DataKey::Auction(asset.clone()))
}

pub fn has_auction(e: &Env, asset: &AssetId) -> bool {
    e.storage().persistent().has(&DataKey::Auction(asset.clone()))
}

pub fn remove_auction(e: &Env, asset: &AssetId) {
    e.storage()
        .persistent()
        .remove(&DataKey::Auction(asset.clone()));
    remove_from_index(e, &DataKey::ActiveAuctions, asset);
}

pub fn add_active_auction(e: &Env, asset: &AssetId) {
    push_to_index(e, &DataKey::ActiveAuctions, asset);
}

pub fn get_active_auctions(e: &Env) -> Vec<AssetId> {
    e.storage()
        .instance()
        .get(&DataKey::ActiveAuctions)
        .unwrap_or(Vec::new(e))
}

// --- Offers ---

pub fn get_offers(e: &Env, asset: &AssetId) -> Vec<Offer> {
    e.storage()
        .persistent()
        .get(&DataKey::Offers(asset.clone()))
        .unwrap_or(Vec::new(e))
}

pub fn set_offers(e: &Env, asset: &AssetId, offers: &Vec<Offer>) {
    if offers.is_empty() {
        e.storage()
            .persistent()
            .remove(&DataKey::Offers(asset.clone()));
    } else {
        e.storage()
            .persistent()
            .set(&DataKey::Offers(asset.clone()), offers);
    }
}

pub fn get_user_offers(e: &Env, bidder: &Address) -> Vec<AssetId> {
    e.storage()
        .persistent()
        .get(&DataKey::UserOffers(bidder.clone()))
        .unwrap_or(Vec::new(e))
}

pub fn add_user_offer(e: &Env, bidder: &Address, asset: &AssetId) {
    let mut assets = get_user_offers(e, bidder);
    assets.push_back(asset.clone());
    e.storage()
        .persistent()
        .set(&DataKey::UserOffers(bidder.clone()), &assets);
}

pub fn remove_user_offer(e: &Env, bidder: &Address, asset: &AssetId) {
    let mut assets = get_user_offers(e, bidder);
    if let Some(index) = assets.iter().position(|a| a == *asset) {
        assets.remove(index as u32);
    }
    if assets.is_empty() {
        e.storage()
            .persistent()
            .remove(&DataKey::UserOffers(bidder.clone()));
    } else {
        e.storage()
            .persistent()
            .set(&DataKey::UserOffers(bidder.clone()), &assets);
    }
}

// --- Revenue ---

pub fn get_pending(e: &Env, principal: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Pending(principal.clone()))
        .unwrap_or(0)
}

pub fn set_pending(e: &Env, principal: &Address, amount: i128) {
    if amount == 0 {
        e.storage()
            .persistent()
            .remove(&DataKey::Pending(principal.clone()));
    } else {
        e.storage()
            .persistent()
            .set(&DataKey::Pending(principal.clone()), &amount);
    }
}

pub fn get_sales_fees(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::SalesFees).unwrap_or(0)
}

pub fn set_sales_fees(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::SalesFees, &amount);
}

// --- Nonces ---

pub fn get_nonce(e: &Env, principal: &Address) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::Nonce(principal.clone()))
        .unwrap_or(0)
}

pub fn set_nonce(e: &Env, principal: &Address, nonce: u64) {
    e.storage()
        .persistent()
        .set(&DataKey::Nonce(principal.clone()), &nonce);
}

// --- Active-key index helpers ---

fn push_to_index(e: &Env, key: &DataKey, asset: &AssetId) {
    let mut index: Vec<AssetId> = e.storage().instance().get(key).unwrap_or(Vec::new(e));
    index.push_back(asset.clone());
    e.storage().instance().set(key, &index);
}

fn remove_from_index(e: &Env, key: &DataKey, asset: &AssetId) {
    let mut index: Vec<AssetId> = e.storage().instance().get(key).unwrap_or(Vec::new(e));
    if let Some(pos) = index.iter().position(|a| a == *asset) {
        index.remove(pos as u32);
    }
    e.storage().instance().set(key, &index);
}
