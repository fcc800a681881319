#![no_std]

//! Collection registry: per-collection admission and economics.
//!
//! Stores, for every NFT collection contract, whether it is admitted to the
//! marketplace, the fee taken on settlements (basis points), and the floor
//! price used by the delegated owner-sale channel. Collections default to
//! not whitelisted, zero fee, and unset floor price.

use market_utils::{AccessControl, Storage, MAX_FEE_BASIS_POINTS};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env,
    String as SorobanString,
};


// ============================================================================
// Error Types
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Fee exceeds the 5000 basis-point cap
    FeeTooHigh = 3,
    /// Floor price must be at least 1 stroop
    InvalidFloorPrice = 4,
}

/// Human-readable failure reason for a registry error (for events/logging).
pub fn reason_for(error: RegistryError) -> &'static str {
    match error {
        RegistryError::NotInitialized => "Contract not initialized",
        RegistryError::AlreadyInitialized => "Contract already initialized",
        RegistryError::FeeTooHigh => "Can't set fee higher than 50.00%",
        RegistryError::InvalidFloorPrice => "Floor price must be at least 1 stroop",
    }
}

/// Emit an error event for off-chain indexing, then hand the error back.
fn fail(e: &Env, error: RegistryError) -> RegistryError {
    let msg = SorobanString::from_str(e, reason_for(error));
    e.events().publish(
        (symbol_short!("Error"), error as u32),
        (msg, e.ledger().timestamp()),
    );
    error
}

// ============================================================================
// Data Types
// ============================================================================

/// Storage keys for per-collection configuration
#[contracttype]
pub enum DataKey {
    /// Whitelist status (collection -> bool)
    Whitelisted(Address),
    /// Settlement fee in basis points (collection -> u32)
    Fee(Address),
    /// Floor price (collection -> i128)
    FloorPrice(Address),
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct CollectionRegistry;

#[contractimpl]
impl CollectionRegistry {
    /// Initialize the registry with an admin address
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the registry has already been initialized
    pub fn initialize(e: Env, admin: Address) -> Result<(), RegistryError> {
        if Storage::is_initialized(&e) {
            return Err(fail(&e, RegistryError::AlreadyInitialized));
        }

        admin.require_auth();

        Storage::set_initialized(&e);
        Storage::set_admin(&e, &admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(e: Env) -> Result<Address, RegistryError> {
        if !Storage::is_initialized(&e) {
            return Err(RegistryError::NotInitialized);
        }
        Ok(Storage::get_admin(&e))
    }

    // ========================================================================
    // Admission & Economics (admin only)
    // ========================================================================

    /// Admit a collection to the marketplace, or expel it
    pub fn set_whitelisted(
        e: Env,
        caller: Address,
        collection: Address,
        status: bool,
    ) -> Result<(), RegistryError> {
        AccessControl::require_admin(&e, &caller);

        e.storage()
            .persistent()
            .set(&DataKey::Whitelisted(collection.clone()), &status);

        e.events()
            .publish((symbol_short!("WhtListed"), collection), status);

        Ok(())
    }

    /// Set the settlement fee for a collection, in basis points
    ///
    /// # Errors
    /// * `FeeTooHigh` - If the fee exceeds 5000 basis points (50.00%)
    pub fn set_fee(
        e: Env,
        caller: Address,
        collection: Address,
        fee_basis_points: u32,
    ) -> Result<(), RegistryError> {
        AccessControl::require_admin(&e, &caller);

        if fee_basis_points > MAX_FEE_BASIS_POINTS {
            return Err(fail(&e, RegistryError::FeeTooHigh));
        }

        e.storage()
            .persistent()
            .set(&DataKey::Fee(collection.clone()), &fee_basis_points);

        e.events()
            .publish((symbol_short!("FeeSet"), collection), fee_basis_points);

        Ok(())
    }

    /// Set the floor price for a collection
    ///
    /// # Errors
    /// * `InvalidFloorPrice` - If the floor price is not positive
    pub fn set_floor_price(
        e: Env,
        caller: Address,
        collection: Address,
        floor_price: i128,
    ) -> Result<(), RegistryError> {
        AccessControl::require_admin(&e, &caller);

        if floor_price <= 0 {
            return Err(fail(&e, RegistryError::InvalidFloorPrice));
        }

        e.storage()
            .persistent()
            .set(&DataKey::FloorPrice(collection.clone()), &floor_price);

        e.events()
            .publish((symbol_short!("FloorSet"), collection), floor_price);

        Ok(())
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Whether a collection is admitted; unknown collections read as false
    pub fn is_whitelisted(e: Env, collection: Address) -> bool {
        e.storage()
            .persistent()
            .get(&DataKey::Whitelisted(collection))
            .unwrap_or(false)
    }

    /// Settlement fee for a collection in basis points; defaults to 0
    pub fn get_fee(e: Env, collection: Address) -> u32 {
        e.storage()
            .persistent()
            .get(&DataKey::Fee(collection))
            .unwrap_or(0)
    }

    /// Floor price for a collection; 0 means unset
    pub fn get_floor_price(e: Env, collection: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&DataKey::FloorPrice(collection))
            .unwrap_or(0)
    }
}
