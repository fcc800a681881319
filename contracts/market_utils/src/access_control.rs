//! Access control patterns and utilities

use super::storage::Storage;
use soroban_sdk::{Address, Env};

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Require that the caller is the admin
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `caller` - The caller address
    ///
    /// # Panics
    /// Panics with "Ownable: caller is not the owner" if caller is not admin
    pub fn require_admin(e: &Env, caller: &Address) {
        caller.require_auth();
        let admin = Storage::get_admin(e);
        if *caller != admin {
            panic!("Ownable: caller is not the owner");
        }
    }

    /// Check if an address is the admin
    pub fn is_admin(e: &Env, address: &Address) -> bool {
        let admin = Storage::get_admin(e);
        *address == admin
    }

    /// Require that the caller is the owner
    ///
    /// # Arguments
    /// * `_e` - The environment
    /// * `caller` - The caller address
    /// * `owner` - The owner address
    ///
    /// # Panics
    /// Panics with "Unauthorized: caller is not the owner" if caller != owner
    pub fn require_owner(_e: &Env, caller: &Address, owner: &Address) {
        caller.require_auth();
        if *caller != *owner {
            panic!("Unauthorized: caller is not the owner");
        }
    }
}
