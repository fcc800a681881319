//! Marketplace error codes and stable failure reasons.
//!
//! Every error code maps to a human-readable reason string. An error event is
//! published before an operation fails so off-chain indexers can record the
//! reason alongside the code.

use market_utils::PanicSwitch;
use soroban_sdk::{contracterror, symbol_short, Env, String as SorobanString};

/// Marketplace errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    /// Marketplace not initialized
    NotInitialized = 1,
    /// Already initialized
    AlreadyInitialized = 2,
    /// Panic switch is on
    EngineDisabled = 3,
    /// Caller is not the marketplace admin
    Unauthorized = 4,
    /// Collection is not whitelisted in the registry
    NotWhitelisted = 5,
    /// Price or offer amount must be positive
    InvalidPrice = 6,
    /// No active listing for this asset
    ItemNotForSale = 7,
    /// Caller is not the seller of this entry
    NotSeller = 8,
    /// Caller does not own the asset
    NotAssetOwner = 9,
    /// Seller cannot buy their own listing
    CannotBuyOwnListing = 10,
    /// Payment must equal the listing price exactly
    PriceMismatch = 11,
    /// A listing already exists for this asset
    ListingExists = 12,
    /// An auction already exists for this asset
    AuctionExists = 13,
    /// Auction duration must be within (1..=max_days)
    DurationOutOfBounds = 14,
    /// Auction floor price must be positive
    FloorPriceNotSet = 15,
    /// No open auction for this asset
    AuctionNotFound = 16,
    /// Auction deadline has passed
    AuctionFinished = 17,
    /// Auction deadline has not passed yet
    AuctionNotFinished = 18,
    /// The seller cannot bid on their own auction
    SellerCannotBid = 19,
    /// The current highest bidder cannot outbid themselves
    SelfOutbid = 20,
    /// First bid must meet the floor price
    BidBelowFloor = 21,
    /// Later bids must exceed the current bid
    BidTooLow = 22,
    /// Only the seller or the current bidder may settle
    NotParticipant = 23,
    /// Bidder already has an active offer on this asset
    OfferExists = 24,
    /// No active offer by this bidder on this asset
    OfferNotFound = 25,
    /// Offer index out of bounds for this user
    OfferIndexOutOfBounds = 26,
    /// Pending revenue balance is zero
    NothingToWithdraw = 27,
    /// Accrued sales fees are zero
    NoSalesFees = 28,
    /// Provided nonce does not match the stored nonce
    NonceMismatch = 29,
    /// Delegated sale value must equal the floor price
    FloorPriceMismatch = 30,
    /// Delegated auction value must meet the floor price
    ValueBelowFloor = 31,
    /// Floor price has not been configured for this collection
    InvalidFloorPrice = 32,
}

/// Human-readable failure reason for an error code (for events/logging).
pub fn reason_for(error: MarketError) -> &'static str {
    match error {
        MarketError::NotInitialized => "Contract not initialized",
        MarketError::AlreadyInitialized => "Contract already initialized",
        MarketError::EngineDisabled => "Something went wrong",
        MarketError::Unauthorized => "Ownable: caller is not the owner",
        MarketError::NotWhitelisted => "Contract is not whitelisted",
        MarketError::InvalidPrice => "Price must be at least 1 stroop",
        MarketError::ItemNotForSale => "Item is not for sale",
        MarketError::NotSeller => "Only the seller can perform this action",
        MarketError::NotAssetOwner => "Sender does not own the item",
        MarketError::CannotBuyOwnListing => "Seller can't buy its own item",
        MarketError::PriceMismatch => "Asking price must be == item price",
        MarketError::ListingExists => "Item is already for sale",
        MarketError::AuctionExists => "Auction already exists for this item",
        MarketError::DurationOutOfBounds => "Duration out of bounds",
        MarketError::FloorPriceNotSet => "Floor price must be greater than 0",
        MarketError::AuctionNotFound => "Auction not found",
        MarketError::AuctionFinished => "Auction has not started or it's already finished",
        MarketError::AuctionNotFinished => "Auction must be finished to perform this action",
        MarketError::SellerCannotBid => "Seller is not authorized",
        MarketError::SelfOutbid => "Current bidder can't perform this action",
        MarketError::BidBelowFloor => "Your bid must be equal or higher than floor price",
        MarketError::BidTooLow => "Your bid must be higher than last bid",
        MarketError::NotParticipant => "Only Auction participants can finish an auction",
        MarketError::OfferExists => "You already have an active offer for this item",
        MarketError::OfferNotFound => "No active offer found",
        MarketError::OfferIndexOutOfBounds => "User Bid index out of bounds",
        MarketError::NothingToWithdraw => "Nothing to withdraw",
        MarketError::NoSalesFees => "No sales fees to retrieve",
        MarketError::NonceMismatch => "Signer and signature do not match",
        MarketError::FloorPriceMismatch => "Asking price must be == floorPrice",
        MarketError::ValueBelowFloor => "Value sent must be greater than floor price",
        MarketError::InvalidFloorPrice => "Floor price must be at least 1 stroop",
    }
}

/// Emit an error event for off-chain indexing, then hand the error back.
/// Call sites use `return Err(fail(e, ...))`.
pub fn fail(e: &Env, error: MarketError) -> MarketError {
    let msg = SorobanString::from_str(e, reason_for(error));
    e.events().publish(
        (symbol_short!("Error"), error as u32),
        (msg, e.ledger().timestamp()),
    );
    error
}

/// Gate every state-changing book operation behind the panic switch.
pub fn require_enabled(e: &Env) -> Result<(), MarketError> {
    if PanicSwitch::is_on(e) {
        return Err(fail(e, MarketError::EngineDisabled));
    }
    Ok(())
}
