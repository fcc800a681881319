#![no_std]

//! Shared utility library for the marketplace contracts
//!
//! This library provides common functions, helpers, and patterns used across
//! all marketplace contracts including:
//! - Math utilities (safe math, basis-point fees)
//! - Time utilities (timestamps, durations)
//! - Validation utilities
//! - Storage helpers
//! - Access control patterns
//! - Panic switch (emergency stop)
//! - Event emission patterns

pub mod access_control;
pub mod emergency;
pub mod events;
pub mod math;
pub mod storage;
pub mod time;
pub mod validation;

// Re-export commonly used items
pub use access_control::*;
pub use emergency::PanicSwitch;
pub use events::*;
pub use math::*;
pub use storage::Storage;
pub use time::*;
pub use validation::*;
