//! Validation utilities for common input validation patterns

use soroban_sdk::Address;

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// Validate that an amount is greater than zero
    ///
    /// # Arguments
    /// * `amount` - The amount to validate
    ///
    /// # Panics
    /// Panics with "Invalid amount" if amount <= 0
    pub fn require_positive(amount: i128) {
        if amount <= 0 {
            panic!("Invalid amount: must be greater than zero");
        }
    }

    /// Validate that an amount is greater than or equal to zero
    ///
    /// # Arguments
    /// * `amount` - The amount to validate
    ///
    /// # Panics
    /// Panics with "Invalid amount" if amount < 0
    pub fn require_non_negative(amount: i128) {
        if amount < 0 {
            panic!("Invalid amount: must be non-negative");
        }
    }

    /// Validate that a duration in whole days is within (1..=max_days)
    ///
    /// # Arguments
    /// * `duration_days` - The duration in days
    /// * `max_days` - Maximum allowed duration in days
    ///
    /// # Panics
    /// Panics with "Invalid duration" if out of bounds
    pub fn require_valid_duration(duration_days: u32, max_days: u32) {
        if duration_days == 0 || duration_days > max_days {
            panic!("Invalid duration: out of bounds");
        }
    }

    /// Validate that a fee is at most 5000 basis points
    ///
    /// # Arguments
    /// * `fee_basis_points` - The fee in basis points
    ///
    /// # Panics
    /// Panics with "Invalid fee" if fee > 5000
    pub fn require_valid_fee(fee_basis_points: u32) {
        if fee_basis_points > super::math::MAX_FEE_BASIS_POINTS {
            panic!("Invalid fee: must be at most 5000 basis points");
        }
    }

    /// Validate that an address is not the zero address
    ///
    /// # Arguments
    /// * `address` - The address to validate
    ///
    /// Note: In Soroban, addresses are always valid, so this is a placeholder
    /// for future validation needs
    pub fn require_non_zero_address(_address: &Address) {
        // In Soroban, addresses are always valid
        // This function is a placeholder for future validation needs
    }

    /// Validate that a value is greater than or equal to a minimum
    ///
    /// # Arguments
    /// * `value` - The value to validate
    /// * `min` - Minimum allowed value (inclusive)
    /// * `field_name` - The name of the field (for error message)
    ///
    /// # Panics
    /// Panics if value < min
    pub fn require_min(value: i128, min: i128, field_name: &str) {
        if value < min {
            panic!("Invalid {}: must be at least {}", field_name, min);
        }
    }
}
