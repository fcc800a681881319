//! Time utilities for timestamp and duration calculations

use soroban_sdk::Env;

/// Time utility functions for working with timestamps and durations
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger timestamp
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }

    /// Convert days to seconds
    ///
    /// # Arguments
    /// * `days` - Number of days
    ///
    /// # Returns
    /// Number of seconds
    pub fn days_to_seconds(days: u32) -> u64 {
        days as u64 * 24 * 60 * 60
    }

    /// Calculate expiration timestamp from current time and duration in days
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `duration_days` - Duration in days
    ///
    /// # Returns
    /// Expiration timestamp
    pub fn calculate_expiration(e: &Env, duration_days: u32) -> u64 {
        let current_time = Self::now(e);
        let duration_seconds = Self::days_to_seconds(duration_days);
        current_time + duration_seconds
    }

    /// Check if a timestamp has expired (current time >= expiration)
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `expiration` - The expiration timestamp
    ///
    /// # Returns
    /// `true` if expired, `false` otherwise
    pub fn is_expired(e: &Env, expiration: u64) -> bool {
        Self::now(e) >= expiration
    }

    /// Calculate time remaining until expiration
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `expiration` - The expiration timestamp
    ///
    /// # Returns
    /// Time remaining in seconds (0 if expired)
    pub fn time_remaining(e: &Env, expiration: u64) -> u64 {
        let current_time = Self::now(e);
        expiration.saturating_sub(current_time)
    }
}
