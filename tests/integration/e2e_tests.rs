//! End-to-End Flow Tests
//!
//! Full settlement journeys across the marketplace engine, the collection
//! registry and the asset ledgers: list-buy-withdraw, auction with
//! competing bidders, offers with partial acceptance, delegated execution
//! and multi-collection fee accounting.

use crate::harness::{TestHarness, DEFAULT_USER_BALANCE};
use marketplace::MetaCall;

#[test]
fn test_listing_sale_full_cycle() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let buyer = h.accounts.user2.clone();

    let token_id = h.mint_asset(&seller);
    let price: i128 = 100_000;

    market.create_listing(&seller, &h.contracts.collection, &token_id, &price);
    assert_eq!(h.collection().owner_of(&token_id), h.contracts.marketplace);

    market.buy(&buyer, &h.contracts.collection, &token_id, &price);
    assert_eq!(h.collection().owner_of(&token_id), buyer);

    // 2.5% fee: 2_500 to the engine, 97_500 to the seller.
    assert_eq!(market.get_pending_revenue(&seller), 97_500);
    assert_eq!(market.get_sales_fees(), 2_500);

    market.withdraw(&seller);
    market.withdraw_sales_fees(&h.accounts.admin);

    assert_eq!(h.balance(&seller), DEFAULT_USER_BALANCE + 97_500);
    assert_eq!(h.balance(&buyer), DEFAULT_USER_BALANCE - 100_000);
    assert_eq!(h.balance(&h.accounts.admin), 2_500);
    // Engine holds nothing once everyone has settled.
    assert_eq!(h.balance(&h.contracts.marketplace), 0);
}

#[test]
fn test_auction_full_cycle_with_competing_bidders() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let bidder1 = h.accounts.user2.clone();
    let bidder2 = h.accounts.attacker.clone();

    let token_id = h.mint_asset(&seller);
    market.create_auction(&seller, &h.contracts.collection, &token_id, &50_000, &7);

    market.place_bid(&bidder1, &h.contracts.collection, &token_id, &50_000);
    market.place_bid(&bidder2, &h.contracts.collection, &token_id, &60_000);
    market.place_bid(&bidder1, &h.contracts.collection, &token_id, &80_000);

    // Each losing bid is claimable by its bidder.
    assert_eq!(market.get_pending_revenue(&bidder2), 60_000);
    market.withdraw(&bidder2);
    assert_eq!(h.balance(&bidder2), DEFAULT_USER_BALANCE);

    h.advance_days(8);
    market.finalize_auction(&seller, &h.contracts.collection, &token_id);

    assert_eq!(h.collection().owner_of(&token_id), bidder1);
    // Fee on the 80_000 winning bid at 2.5% is 2_000.
    assert_eq!(market.get_pending_revenue(&seller), 78_000);
    assert_eq!(market.get_sales_fees(), 2_000);

    // bidder1's first bid was refunded when they raised their own escrow.
    assert_eq!(market.get_pending_revenue(&bidder1), 50_000);
    market.withdraw(&bidder1);
    market.withdraw(&seller);
    market.withdraw_sales_fees(&h.accounts.admin);
    assert_eq!(h.balance(&bidder1), DEFAULT_USER_BALANCE - 80_000 + 50_000);
    assert_eq!(h.balance(&seller), DEFAULT_USER_BALANCE + 78_000);
    assert_eq!(h.balance(&h.contracts.marketplace), 0);
}

#[test]
fn test_offer_accept_leaves_siblings_claimable() {
    let h = TestHarness::new();
    let market = h.market();
    let owner = h.accounts.user1.clone();
    let bidder1 = h.accounts.user2.clone();
    let bidder2 = h.accounts.attacker.clone();

    let token_id = h.mint_asset(&owner);

    market.create_offer(&bidder1, &h.contracts.collection, &token_id, &40_000);
    market.create_offer(&bidder2, &h.contracts.collection, &token_id, &44_000);
    assert_eq!(h.balance(&h.contracts.marketplace), 84_000);

    market.accept_offer(&owner, &h.contracts.collection, &token_id, &bidder2);

    assert_eq!(h.collection().owner_of(&token_id), bidder2);
    // Fee on 44_000 at 2.5% is 1_100.
    assert_eq!(market.get_pending_revenue(&owner), 42_900);
    assert_eq!(market.get_sales_fees(), 1_100);

    // The losing offer is still live and refundable in full.
    market.cancel_offer(&bidder1, &h.contracts.collection, &token_id);
    assert_eq!(h.balance(&bidder1), DEFAULT_USER_BALANCE);

    market.withdraw(&owner);
    market.withdraw_sales_fees(&h.accounts.admin);
    assert_eq!(h.balance(&h.contracts.marketplace), 0);
}

#[test]
fn test_delegated_owner_sale_flow() {
    let h = TestHarness::new();
    let market = h.market();
    let admin = h.accounts.admin.clone();
    let buyer = h.accounts.user1.clone();

    let token_id = h.mint_asset(&admin);
    h.registry()
        .set_floor_price(&admin, &h.contracts.collection, &25_000);

    let call = MetaCall::OwnerSale(buyer.clone(), h.contracts.collection.clone(), token_id, 25_000);
    market.execute_meta_call(&buyer, &admin, &0, &call);

    // The admin is paid directly and in full; the engine never holds funds.
    assert_eq!(h.balance(&admin), 25_000);
    assert_eq!(h.balance(&buyer), DEFAULT_USER_BALANCE - 25_000);
    assert_eq!(h.balance(&h.contracts.marketplace), 0);
    assert_eq!(h.collection().owner_of(&token_id), buyer);
    assert_eq!(market.get_nonce(&admin), 1);
}

#[test]
fn test_delegated_owner_auction_can_be_outbid() {
    let h = TestHarness::new();
    let market = h.market();
    let admin = h.accounts.admin.clone();
    let seed_buyer = h.accounts.user1.clone();
    let challenger = h.accounts.user2.clone();

    let token_id = h.mint_asset(&admin);
    h.registry()
        .set_floor_price(&admin, &h.contracts.collection, &25_000);

    let call =
        MetaCall::OwnerAuction(seed_buyer.clone(), h.contracts.collection.clone(), token_id, 25_000);
    market.execute_meta_call(&seed_buyer, &admin, &0, &call);

    // A regular bid can still beat the seeded opening bid.
    market.place_bid(&challenger, &h.contracts.collection, &token_id, &30_000);
    assert_eq!(market.get_pending_revenue(&seed_buyer), 25_000);

    h.advance_days(31);
    market.finalize_auction(&challenger, &h.contracts.collection, &token_id);
    assert_eq!(h.collection().owner_of(&token_id), challenger);
}

#[test]
fn test_multi_collection_fee_accounting() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let buyer = h.accounts.user2.clone();

    // Second collection with a 10% fee alongside the default 2.5% one.
    let premium = h.deploy_collection("Premium Collection", "PREM", 1000);
    let premium_ledger = asset_ledger::AssetLedgerClient::new(&h.env, &premium);

    let token_a = h.mint_asset(&seller);
    let token_b = premium_ledger.mint(&h.accounts.admin, &seller);
    premium_ledger.set_operator(&seller, &h.contracts.marketplace, &true);

    market.create_listing(&seller, &h.contracts.collection, &token_a, &100_000);
    market.create_listing(&seller, &premium, &token_b, &100_000);
    assert_eq!(market.get_seller_listings_count(&seller), 2);

    market.buy(&buyer, &h.contracts.collection, &token_a, &100_000);
    market.buy(&buyer, &premium, &token_b, &100_000);

    // 2_500 from the default collection plus 10_000 from the premium one.
    assert_eq!(market.get_sales_fees(), 12_500);
    assert_eq!(market.get_pending_revenue(&seller), 97_500 + 90_000);
    assert_eq!(h.collection().owner_of(&token_a), buyer);
    assert_eq!(premium_ledger.owner_of(&token_b), buyer);
}

#[test]
fn test_panic_switch_pauses_and_resumes() {
    let h = TestHarness::new();
    let market = h.market();
    let seller = h.accounts.user1.clone();
    let buyer = h.accounts.user2.clone();

    let token_id = h.mint_asset(&seller);
    market.create_listing(&seller, &h.contracts.collection, &token_id, &10_000);

    market.set_panic_switch(&true);
    assert!(market
        .try_buy(&buyer, &h.contracts.collection, &token_id, &10_000)
        .is_err());

    market.set_panic_switch(&false);
    market.buy(&buyer, &h.contracts.collection, &token_id, &10_000);
    assert_eq!(h.collection().owner_of(&token_id), buyer);
}
