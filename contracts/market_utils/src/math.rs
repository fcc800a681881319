//! Math utilities for safe arithmetic operations and basis-point fee calculations

/// Maximum marketplace fee: 5000 basis points (50.00%)
pub const MAX_FEE_BASIS_POINTS: u32 = 5000;

/// Basis-point denominator (100.00%)
pub const BASIS_POINTS_DENOMINATOR: i128 = 10000;

/// Safe math operations to prevent overflow/underflow
pub struct SafeMath;

impl SafeMath {
    /// Safely add two i128 values, panicking on overflow
    pub fn add(a: i128, b: i128) -> i128 {
        a.checked_add(b).expect("Math: addition overflow")
    }

    /// Safely subtract two i128 values, panicking on underflow
    pub fn sub(a: i128, b: i128) -> i128 {
        a.checked_sub(b).expect("Math: subtraction underflow")
    }

    /// Safely multiply two i128 values, panicking on overflow
    pub fn mul(a: i128, b: i128) -> i128 {
        a.checked_mul(b).expect("Math: multiplication overflow")
    }

    /// Safely divide two i128 values, panicking on division by zero
    pub fn div(a: i128, b: i128) -> i128 {
        if b == 0 {
            panic!("Math: division by zero");
        }
        a.checked_div(b).expect("Math: division overflow")
    }

    /// Calculate a basis-point fee: (value * fee_basis_points) / 10000
    ///
    /// Floor division; the remainder stays with the payer side.
    ///
    /// # Arguments
    /// * `value` - The base value
    /// * `fee_basis_points` - The fee in basis points (0-5000)
    ///
    /// # Returns
    /// The fee amount
    pub fn fee_amount(value: i128, fee_basis_points: u32) -> i128 {
        if fee_basis_points > MAX_FEE_BASIS_POINTS {
            panic!("Math: fee must be <= 5000 basis points");
        }
        Self::div(
            Self::mul(value, fee_basis_points as i128),
            BASIS_POINTS_DENOMINATOR,
        )
    }

    /// Value remaining after a basis-point fee is taken
    pub fn net_of_fee(value: i128, fee_basis_points: u32) -> i128 {
        Self::sub(value, Self::fee_amount(value, fee_basis_points))
    }
}
