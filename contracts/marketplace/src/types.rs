//! Data types shared across the marketplace books.

use soroban_sdk::{contracttype, Address};

/// Composite key identifying one asset: the collection contract plus the
/// token id inside it. Keys every book.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetId {
    pub collection: Address,
    pub token_id: u32,
}

/// Fixed-price listing. Presence in storage means active; the asset is held
/// in engine custody while listed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub seller: Address,
    pub price: i128,
}

/// English auction. `current_bid` starts at the floor (reserve) and only
/// moves up; the asset is escrowed for the life of the auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub current_bidder: Option<Address>,
    pub current_bid: i128,
    pub floor_price: i128,
    pub ends_at: u64,
}

/// Unsolicited buy offer. At most one per (asset, bidder); the offer amount
/// is escrowed in the engine's token balance. The asset does not move until
/// acceptance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    pub bidder: Address,
    pub amount: i128,
    pub created_at: u64,
}

/// Delegated operations reachable through the execution gateway, dispatched
/// by pattern match. Variant payloads are (buyer, collection, token_id, value).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MetaCall {
    /// Instant sale of the signer's asset at the collection floor price
    OwnerSale(Address, Address, u32, i128),
    /// Open a max-duration auction on the signer's asset with the buyer
    /// pre-seeded as first bidder
    OwnerAuction(Address, Address, u32, i128),
}
