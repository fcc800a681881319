#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, String, Symbol,
};


// ============================================================================
// Error Types
// ============================================================================

/// Contract errors for structured error handling
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Token with the given token_id does not exist
    TokenNotFound = 3,
    /// Caller is not authorized to perform this action
    Unauthorized = 4,
    /// Caller is not the owner of the token
    NotTokenOwner = 5,
    /// Operator has not been approved by the owner
    OperatorNotApproved = 6,
}

// ============================================================================
// Data Types
// ============================================================================

/// Storage keys for the contract
#[contracttype]
pub enum DataKey {
    /// Admin address (singleton)
    Admin,
    /// Collection name
    Name,
    /// Collection symbol
    Symbol,
    /// Counter for generating unique token IDs
    TokenCounter,
    /// Owner mapping (token_id -> Address)
    Owner(u32),
    /// Operator approval ((owner, operator) -> bool)
    Operator(Address, Address),
    /// Total supply of tokens
    TotalSupply,
}

// ============================================================================
// Storage Module
// ============================================================================

mod storage {
    use super::*;

    // --- Admin Management ---

    pub fn set_admin(e: &Env, admin: &Address) {
        e.storage().instance().set(&DataKey::Admin, admin);
    }

    pub fn get_admin(e: &Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Admin)
    }

    pub fn has_admin(e: &Env) -> bool {
        e.storage().instance().has(&DataKey::Admin)
    }

    // --- Token Counter ---

    pub fn next_token_id(e: &Env) -> u32 {
        let count: u32 = e
            .storage()
            .instance()
            .get(&DataKey::TokenCounter)
            .unwrap_or(0);
        e.storage()
            .instance()
            .set(&DataKey::TokenCounter, &(count + 1));
        count
    }

    // --- Owner Mapping ---

    pub fn set_owner(e: &Env, token_id: u32, owner: &Address) {
        e.storage()
            .persistent()
            .set(&DataKey::Owner(token_id), owner);
    }

    pub fn get_owner(e: &Env, token_id: u32) -> Option<Address> {
        e.storage().persistent().get(&DataKey::Owner(token_id))
    }

    // --- Operator Approvals ---

    pub fn set_operator(e: &Env, owner: &Address, operator: &Address, approved: bool) {
        let key = DataKey::Operator(owner.clone(), operator.clone());
        if approved {
            e.storage().persistent().set(&key, &true);
        } else {
            e.storage().persistent().remove(&key);
        }
    }

    pub fn is_operator(e: &Env, owner: &Address, operator: &Address) -> bool {
        e.storage()
            .persistent()
            .get(&DataKey::Operator(owner.clone(), operator.clone()))
            .unwrap_or(false)
    }

    // --- Total Supply ---

    pub fn increment_total_supply(e: &Env) {
        let supply: u32 = e
            .storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0);
        e.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply + 1));
    }

    pub fn get_total_supply(e: &Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct AssetLedger;

#[contractimpl]
impl AssetLedger {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the ledger with an admin address and collection metadata
    ///
    /// # Arguments
    /// * `admin` - The admin address allowed to mint
    /// * `name` - Collection name
    /// * `symbol` - Collection symbol
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), LedgerError> {
        if storage::has_admin(&e) {
            return Err(LedgerError::AlreadyInitialized);
        }

        storage::set_admin(&e, &admin);
        e.storage().instance().set(&DataKey::Name, &name);
        e.storage().instance().set(&DataKey::Symbol, &symbol);
        e.storage().instance().set(&DataKey::TokenCounter, &0u32);
        e.storage().instance().set(&DataKey::TotalSupply, &0u32);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(e: Env) -> Result<Address, LedgerError> {
        storage::get_admin(&e).ok_or(LedgerError::NotInitialized)
    }

    /// Get the collection name
    pub fn name(e: Env) -> Result<String, LedgerError> {
        e.storage()
            .instance()
            .get(&DataKey::Name)
            .ok_or(LedgerError::NotInitialized)
    }

    /// Get the collection symbol
    pub fn symbol(e: Env) -> Result<String, LedgerError> {
        e.storage()
            .instance()
            .get(&DataKey::Symbol)
            .ok_or(LedgerError::NotInitialized)
    }

    // ========================================================================
    // Minting
    // ========================================================================

    /// Mint a new token to `to` (admin only)
    ///
    /// Token IDs are sequential starting at 0.
    ///
    /// # Returns
    /// The token_id of the newly minted token
    ///
    /// # Errors
    /// * `NotInitialized` - If the contract has not been initialized
    /// * `Unauthorized` - If the caller is not the admin
    pub fn mint(e: Env, caller: Address, to: Address) -> Result<u32, LedgerError> {
        caller.require_auth();

        let admin = storage::get_admin(&e).ok_or(LedgerError::NotInitialized)?;
        if caller != admin {
            return Err(LedgerError::Unauthorized);
        }

        let token_id = storage::next_token_id(&e);

        storage::set_owner(&e, token_id, &to);
        storage::increment_total_supply(&e);

        e.events().publish(
            (Symbol::new(&e, "Mint"), token_id),
            (to, e.ledger().timestamp()),
        );

        Ok(token_id)
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Get owner of a token
    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, LedgerError> {
        storage::get_owner(&e, token_id).ok_or(LedgerError::TokenNotFound)
    }

    /// Get total supply of tokens
    pub fn total_supply(e: Env) -> u32 {
        storage::get_total_supply(&e)
    }

    /// Check whether `operator` may move tokens on behalf of `owner`
    pub fn is_operator(e: Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(&e, &owner, &operator)
    }

    // ========================================================================
    // Approvals
    // ========================================================================

    /// Approve or revoke `operator` for all of `owner`'s tokens
    ///
    /// # Errors
    /// * `NotInitialized` - If the contract has not been initialized
    pub fn set_operator(
        e: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), LedgerError> {
        owner.require_auth();

        if !storage::has_admin(&e) {
            return Err(LedgerError::NotInitialized);
        }

        storage::set_operator(&e, &owner, &operator, approved);

        e.events().publish(
            (Symbol::new(&e, "Operator"), owner.clone()),
            (operator, approved),
        );

        Ok(())
    }

    // ========================================================================
    // Transfers
    // ========================================================================

    /// Transfer a token to a new owner
    ///
    /// # Arguments
    /// * `from` - Current owner address
    /// * `to` - New owner address
    /// * `token_id` - Token ID to transfer
    ///
    /// # Errors
    /// * `TokenNotFound` - If the token does not exist
    /// * `NotTokenOwner` - If `from` is not the owner
    pub fn transfer(e: Env, from: Address, to: Address, token_id: u32) -> Result<(), LedgerError> {
        from.require_auth();

        let current_owner = storage::get_owner(&e, token_id).ok_or(LedgerError::TokenNotFound)?;
        if current_owner != from {
            return Err(LedgerError::NotTokenOwner);
        }

        storage::set_owner(&e, token_id, &to);

        e.events().publish(
            (Symbol::new(&e, "Transfer"), token_id),
            (from, to, e.ledger().timestamp()),
        );

        Ok(())
    }

    /// Transfer a token on behalf of its owner (approved operators only)
    ///
    /// # Arguments
    /// * `operator` - The approved operator performing the transfer
    /// * `from` - Current owner address
    /// * `to` - New owner address
    /// * `token_id` - Token ID to transfer
    ///
    /// # Errors
    /// * `TokenNotFound` - If the token does not exist
    /// * `NotTokenOwner` - If `from` is not the owner
    /// * `OperatorNotApproved` - If `from` has not approved `operator`
    pub fn transfer_from(
        e: Env,
        operator: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), LedgerError> {
        operator.require_auth();

        let current_owner = storage::get_owner(&e, token_id).ok_or(LedgerError::TokenNotFound)?;
        if current_owner != from {
            return Err(LedgerError::NotTokenOwner);
        }

        if !storage::is_operator(&e, &from, &operator) {
            return Err(LedgerError::OperatorNotApproved);
        }

        storage::set_owner(&e, token_id, &to);

        e.events().publish(
            (Symbol::new(&e, "Transfer"), token_id),
            (from, to, e.ledger().timestamp()),
        );

        Ok(())
    }
}
