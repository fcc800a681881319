#![no_std]

//! Marketplace settlement engine.
//!
//! Holds custody of assets under sale, escrows bids and offers in the
//! payment token, and settles proceeds through a pull-payment revenue
//! ledger. Collection policy (whitelist, fee, floor price) lives in the
//! collection registry contract; asset custody in per-collection asset
//! ledger contracts.

mod auctions;
mod errors;
mod gateway;
mod listings;
mod offers;
mod revenue;
mod storage;
mod types;


pub use errors::{reason_for, MarketError};
pub use types::{AssetId, Auction, Listing, MetaCall, Offer};

use market_utils::{PanicSwitch, Validation};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    /// Initialize the engine with its admin, registry, payment token and
    /// the maximum auction duration in days.
    pub fn initialize(
        e: Env,
        admin: Address,
        registry: Address,
        payment_token: Address,
        max_days: u32,
    ) -> Result<(), MarketError> {
        if storage::has_admin(&e) {
            return Err(MarketError::AlreadyInitialized);
        }
        admin.require_auth();
        Validation::require_min(max_days as i128, 1, "max_days");

        storage::set_admin(&e, &admin);
        storage::set_registry(&e, &registry);
        storage::set_payment_token(&e, &payment_token);
        storage::set_max_days(&e, max_days);

        Ok(())
    }

    pub fn get_admin(e: Env) -> Result<Address, MarketError> {
        storage::get_admin(&e).ok_or(MarketError::NotInitialized)
    }

    pub fn get_registry(e: Env) -> Result<Address, MarketError> {
        storage::get_registry(&e).ok_or(MarketError::NotInitialized)
    }

    pub fn get_payment_token(e: Env) -> Result<Address, MarketError> {
        storage::get_payment_token(&e).ok_or(MarketError::NotInitialized)
    }

    pub fn get_max_days(e: Env) -> u32 {
        storage::get_max_days(&e)
    }

    /// Flip the emergency stop. Admin only.
    pub fn set_panic_switch(e: Env, on: bool) -> Result<(), MarketError> {
        let admin = storage::get_admin(&e).ok_or(MarketError::NotInitialized)?;
        admin.require_auth();
        PanicSwitch::set(&e, on);
        Ok(())
    }

    pub fn is_panic_switch(e: Env) -> bool {
        PanicSwitch::is_on(&e)
    }

    // --- Listing book ---

    pub fn create_listing(
        e: Env,
        seller: Address,
        collection: Address,
        token_id: u32,
        price: i128,
    ) -> Result<(), MarketError> {
        listings::create_listing(&e, seller, collection, token_id, price)
    }

    pub fn update_listing(
        e: Env,
        seller: Address,
        collection: Address,
        token_id: u32,
        new_price: i128,
    ) -> Result<(), MarketError> {
        listings::update_listing(&e, seller, collection, token_id, new_price)
    }

    pub fn cancel_listing(
        e: Env,
        seller: Address,
        collection: Address,
        token_id: u32,
    ) -> Result<(), MarketError> {
        listings::cancel_listing(&e, seller, collection, token_id)
    }

    pub fn buy(
        e: Env,
        buyer: Address,
        collection: Address,
        token_id: u32,
        payment: i128,
    ) -> Result<(), MarketError> {
        listings::buy(&e, buyer, collection, token_id, payment)
    }

    pub fn get_listing(
        e: Env,
        collection: Address,
        token_id: u32,
    ) -> Result<Listing, MarketError> {
        listings::get_listing(&e, collection, token_id)
    }

    pub fn get_active_listings(e: Env) -> Vec<AssetId> {
        storage::get_active_listings(&e)
    }

    pub fn get_seller_listings_count(e: Env, seller: Address) -> u32 {
        listings::get_seller_listings_count(&e, seller)
    }

    // --- Auction book ---

    pub fn create_auction(
        e: Env,
        seller: Address,
        collection: Address,
        token_id: u32,
        floor_price: i128,
        duration_days: u32,
    ) -> Result<(), MarketError> {
        auctions::create_auction(&e, seller, collection, token_id, floor_price, duration_days)
    }

    pub fn place_bid(
        e: Env,
        bidder: Address,
        collection: Address,
        token_id: u32,
        amount: i128,
    ) -> Result<(), MarketError> {
        auctions::place_bid(&e, bidder, collection, token_id, amount)
    }

    pub fn finalize_auction(
        e: Env,
        caller: Address,
        collection: Address,
        token_id: u32,
    ) -> Result<(), MarketError> {
        auctions::finalize_auction(&e, caller, collection, token_id)
    }

    pub fn reclaim_auction(
        e: Env,
        bidder: Address,
        collection: Address,
        token_id: u32,
    ) -> Result<(), MarketError> {
        auctions::reclaim_auction(&e, bidder, collection, token_id)
    }

    pub fn get_auction(
        e: Env,
        collection: Address,
        token_id: u32,
    ) -> Result<Auction, MarketError> {
        auctions::get_auction(&e, collection, token_id)
    }

    pub fn get_active_auctions(e: Env) -> Vec<AssetId> {
        storage::get_active_auctions(&e)
    }

    // --- Offer book ---

    pub fn create_offer(
        e: Env,
        bidder: Address,
        collection: Address,
        token_id: u32,
        amount: i128,
    ) -> Result<(), MarketError> {
        offers::create_offer(&e, bidder, collection, token_id, amount)
    }

    pub fn cancel_offer(
        e: Env,
        bidder: Address,
        collection: Address,
        token_id: u32,
    ) -> Result<(), MarketError> {
        offers::cancel_offer(&e, bidder, collection, token_id)
    }

    pub fn accept_offer(
        e: Env,
        owner: Address,
        collection: Address,
        token_id: u32,
        bidder: Address,
    ) -> Result<(), MarketError> {
        offers::accept_offer(&e, owner, collection, token_id, bidder)
    }

    pub fn get_offers(e: Env, collection: Address, token_id: u32) -> Vec<Offer> {
        offers::get_offers(&e, collection, token_id)
    }

    pub fn get_user_offers_count(e: Env, bidder: Address) -> u32 {
        offers::get_user_offers_count(&e, bidder)
    }

    pub fn user_offer_by_index(
        e: Env,
        bidder: Address,
        index: u32,
    ) -> Result<(AssetId, i128), MarketError> {
        offers::user_offer_by_index(&e, bidder, index)
    }

    // --- Revenue ledger ---

    pub fn withdraw(e: Env, principal: Address) -> Result<i128, MarketError> {
        revenue::withdraw(&e, principal)
    }

    pub fn withdraw_sales_fees(e: Env, caller: Address) -> Result<i128, MarketError> {
        revenue::withdraw_sales_fees(&e, caller)
    }

    pub fn get_pending_revenue(e: Env, principal: Address) -> i128 {
        revenue::get_pending_revenue(&e, principal)
    }

    pub fn get_sales_fees(e: Env) -> i128 {
        revenue::get_sales_fees(&e)
    }

    // --- Execution gateway ---

    pub fn get_nonce(e: Env, signer: Address) -> u64 {
        gateway::get_nonce(&e, signer)
    }

    pub fn execute_meta_call(
        e: Env,
        relayer: Address,
        signer: Address,
        nonce: u64,
        call: MetaCall,
    ) -> Result<(), MarketError> {
        gateway::execute_meta_call(&e, relayer, signer, nonce, call)
    }
}
