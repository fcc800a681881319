//! Error and Edge Case Tests
//!
//! Exercises failure paths through the `try_` clients so the error codes
//! crossing the contract boundary are asserted exactly.

use crate::harness::TestHarness;
use crate::{assert_err, assert_ok};
use marketplace::{MarketError, MetaCall};

#[test]
fn test_listing_requires_whitelisted_collection() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let token_id = h.mint_asset(&seller);

    h.registry()
        .set_whitelisted(&h.accounts.admin, &h.contracts.collection, &false);

    assert_err!(
        market.try_create_listing(&seller, &h.contracts.collection, &token_id, &10_000),
        MarketError::NotWhitelisted
    );
}

#[test]
fn test_buy_price_must_match_exactly() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let buyer = h.accounts.user2.clone();
    let token_id = h.mint_asset(&seller);

    market.create_listing(&seller, &h.contracts.collection, &token_id, &10_000);

    assert_err!(
        market.try_buy(&buyer, &h.contracts.collection, &token_id, &9_999),
        MarketError::PriceMismatch
    );
    assert_err!(
        market.try_buy(&buyer, &h.contracts.collection, &token_id, &10_001),
        MarketError::PriceMismatch
    );
    assert_ok!(market.try_buy(&buyer, &h.contracts.collection, &token_id, &10_000));
}

#[test]
fn test_attacker_cannot_drain_fees_or_cancel_listings() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let buyer = h.accounts.user2.clone();
    let attacker = h.accounts.attacker.clone();
    let token_id = h.mint_asset(&seller);

    market.create_listing(&seller, &h.contracts.collection, &token_id, &10_000);

    assert_err!(
        market.try_cancel_listing(&attacker, &h.contracts.collection, &token_id),
        MarketError::NotSeller
    );

    market.buy(&buyer, &h.contracts.collection, &token_id, &10_000);

    assert_err!(
        market.try_withdraw_sales_fees(&attacker),
        MarketError::Unauthorized
    );
    // The attacker has no pending revenue to pull either.
    assert_err!(
        market.try_withdraw(&attacker),
        MarketError::NothingToWithdraw
    );
}

#[test]
fn test_double_withdraw_fails() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let buyer = h.accounts.user2.clone();
    let token_id = h.mint_asset(&seller);

    market.create_listing(&seller, &h.contracts.collection, &token_id, &10_000);
    market.buy(&buyer, &h.contracts.collection, &token_id, &10_000);

    assert_ok!(market.try_withdraw(&seller));
    assert_err!(market.try_withdraw(&seller), MarketError::NothingToWithdraw);

    assert_ok!(market.try_withdraw_sales_fees(&h.accounts.admin));
    assert_err!(
        market.try_withdraw_sales_fees(&h.accounts.admin),
        MarketError::NoSalesFees
    );
}

#[test]
fn test_sold_asset_cannot_be_bought_again() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let buyer = h.accounts.user2.clone();
    let token_id = h.mint_asset(&seller);

    market.create_listing(&seller, &h.contracts.collection, &token_id, &10_000);
    market.buy(&buyer, &h.contracts.collection, &token_id, &10_000);

    assert_err!(
        market.try_buy(&h.accounts.attacker, &h.contracts.collection, &token_id, &10_000),
        MarketError::ItemNotForSale
    );
}

#[test]
fn test_auction_duration_bounds() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let token_id = h.mint_asset(&seller);

    assert_err!(
        market.try_create_auction(&seller, &h.contracts.collection, &token_id, &10_000, &0),
        MarketError::DurationOutOfBounds
    );
    assert_err!(
        market.try_create_auction(&seller, &h.contracts.collection, &token_id, &10_000, &31),
        MarketError::DurationOutOfBounds
    );
    assert_ok!(market.try_create_auction(&seller, &h.contracts.collection, &token_id, &10_000, &30));
}

#[test]
fn test_gateway_nonce_replay_rejected() {
    let h = TestHarness::new();
    let market = h.market();
    let admin = h.accounts.admin.clone();
    let buyer = h.accounts.user1.clone();

    let token_a = h.mint_asset(&admin);
    let token_b = h.mint_asset(&admin);
    h.registry()
        .set_floor_price(&admin, &h.contracts.collection, &25_000);

    let call = MetaCall::OwnerSale(buyer.clone(), h.contracts.collection.clone(), token_a, 25_000);
    assert_ok!(market.try_execute_meta_call(&buyer, &admin, &0, &call));

    let replay = MetaCall::OwnerSale(buyer.clone(), h.contracts.collection.clone(), token_b, 25_000);
    assert_err!(
        market.try_execute_meta_call(&buyer, &admin, &0, &replay),
        MarketError::NonceMismatch
    );
    assert_ok!(market.try_execute_meta_call(&buyer, &admin, &1, &replay));
}

#[test]
fn test_gateway_rejects_non_admin_signer() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let buyer = h.accounts.user2.clone();

    let token_id = h.mint_asset(&seller);
    h.registry()
        .set_floor_price(&h.accounts.admin, &h.contracts.collection, &25_000);

    let call = MetaCall::OwnerSale(buyer.clone(), h.contracts.collection.clone(), token_id, 25_000);
    assert_err!(
        market.try_execute_meta_call(&buyer, &seller, &0, &call),
        MarketError::Unauthorized
    );
}

#[test]
fn test_registry_fee_cap_enforced() {
    let h = TestHarness::new();
    let registry = h.registry();

    assert_ok!(registry.try_set_fee(&h.accounts.admin, &h.contracts.collection, &5000));
    assert!(registry
        .try_set_fee(&h.accounts.admin, &h.contracts.collection, &5001)
        .is_err());
}

#[test]
fn test_expired_auction_rejects_bids_but_settles() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let bidder = h.accounts.user2.clone();
    let token_id = h.mint_asset(&seller);

    market.create_auction(&seller, &h.contracts.collection, &token_id, &10_000, &7);
    market.place_bid(&bidder, &h.contracts.collection, &token_id, &10_000);
    h.advance_days(8);

    assert_err!(
        market.try_place_bid(&h.accounts.attacker, &h.contracts.collection, &token_id, &20_000),
        MarketError::AuctionFinished
    );
    assert_err!(
        market.try_finalize_auction(&h.accounts.attacker, &h.contracts.collection, &token_id),
        MarketError::NotParticipant
    );
    assert_ok!(market.try_reclaim_auction(&bidder, &h.contracts.collection, &token_id));
    assert_eq!(h.collection().owner_of(&token_id), bidder);
}
