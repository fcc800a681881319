//! Integration Test Suite for the Marketplace Contracts
//!
//! This module provides an integration test suite that validates:
//! - End-to-end settlement flows across listings, auctions and offers
//! - Cross-contract interactions between the engine, the collection
//!   registry and the asset ledgers
//! - Delegated execution through the gateway
//! - Error scenarios and edge cases
//!
//! # Test Organization
//! - `harness`: Reusable test harness and helpers
//! - `e2e_tests`: End-to-end flow tests
//! - `error_tests`: Error and edge case tests

#![cfg(test)]

pub mod harness;

pub mod e2e_tests;
pub mod error_tests;

// Re-export commonly used items for convenience
pub use harness::*;
