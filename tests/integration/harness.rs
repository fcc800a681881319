//! Integration Test Harness
//!
//! This module provides a reusable test harness that:
//! - Boots a Soroban Env
//! - Deploys the marketplace, collection registry and an asset ledger
//! - Creates test accounts (admin/user/attacker)
//! - Seeds token balances
//! - Provides typed contract clients
//! - Supports deterministic time advancement and ledger simulation

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};

use asset_ledger::{AssetLedger, AssetLedgerClient};
use collection_registry::{CollectionRegistry, CollectionRegistryClient};
use marketplace::{Marketplace, MarketplaceClient};

/// Default marketplace fee (basis points)
pub const DEFAULT_FEE_BASIS_POINTS: u32 = 250; // 2.5%

/// Default maximum auction duration in days
pub const DEFAULT_MAX_DAYS: u32 = 30;

/// Default user initial balance
pub const DEFAULT_USER_BALANCE: i128 = 10_000_000_000_000; // 1M tokens with 7 decimals

/// One day in seconds
pub const SECONDS_PER_DAY: u64 = 86400;

/// Assert a `try_` client call failed with the given contract error.
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $err:expr) => {
        assert_eq!($result, Err(Ok($err)));
    };
}

/// Assert a `try_` client call succeeded.
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        assert!($result.is_ok());
    };
}

/// Test accounts container
pub struct TestAccounts {
    pub admin: Address,
    pub user1: Address,
    pub user2: Address,
    pub attacker: Address,
}

impl TestAccounts {
    /// Create new test accounts
    pub fn new(e: &Env) -> Self {
        Self {
            admin: Address::generate(e),
            user1: Address::generate(e),
            user2: Address::generate(e),
            attacker: Address::generate(e),
        }
    }
}

/// Deployed contract addresses
pub struct DeployedContracts {
    pub marketplace: Address,
    pub registry: Address,
    pub collection: Address,
    pub token: Address,
}

/// Main test harness structure
pub struct TestHarness {
    pub env: Env,
    pub accounts: TestAccounts,
    pub contracts: DeployedContracts,
}

impl TestHarness {
    /// Create a new test harness with all contracts deployed and initialized
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        // Set initial ledger state
        env.ledger().set(LedgerInfo {
            timestamp: 1704067200, // Jan 1, 2024 00:00:00 UTC
            protocol_version: 21,
            sequence_number: 1,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 1000,
            min_persistent_entry_ttl: 1000,
            max_entry_ttl: 10000,
        });

        let accounts = TestAccounts::new(&env);

        // Deploy token contract (Stellar Asset Contract)
        let token_admin = Address::generate(&env);
        let token = env.register_stellar_asset_contract_v2(token_admin.clone());
        let token_address = token.address();

        // Deploy all contracts
        let registry = env.register_contract(None, CollectionRegistry);
        let collection = env.register_contract(None, AssetLedger);
        let marketplace = env.register_contract(None, Marketplace);

        // Initialize the registry and whitelist the collection
        let registry_client = CollectionRegistryClient::new(&env, &registry);
        registry_client.initialize(&accounts.admin);
        registry_client.set_whitelisted(&accounts.admin, &collection, &true);
        registry_client.set_fee(&accounts.admin, &collection, &DEFAULT_FEE_BASIS_POINTS);

        // Initialize the asset ledger
        let ledger_client = AssetLedgerClient::new(&env, &collection);
        ledger_client.initialize(
            &accounts.admin,
            &String::from_str(&env, "Integration Collection"),
            &String::from_str(&env, "INTG"),
        );

        // Initialize the marketplace engine
        let market_client = MarketplaceClient::new(&env, &marketplace);
        market_client.initialize(&accounts.admin, &registry, &token_address, &DEFAULT_MAX_DAYS);

        // Mint tokens to users
        let token_client = StellarAssetClient::new(&env, &token_address);
        token_client.mint(&accounts.user1, &DEFAULT_USER_BALANCE);
        token_client.mint(&accounts.user2, &DEFAULT_USER_BALANCE);
        token_client.mint(&accounts.attacker, &DEFAULT_USER_BALANCE);

        let contracts = DeployedContracts {
            marketplace,
            registry,
            collection,
            token: token_address,
        };

        Self {
            env,
            accounts,
            contracts,
        }
    }

    // ========================================================================
    // Time Management Helpers
    // ========================================================================

    /// Advance time by a specified number of seconds
    pub fn advance_time(&self, seconds: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp += seconds;
        ledger.sequence_number += 1;
        self.env.ledger().set(ledger);
    }

    /// Advance time by a specified number of days
    pub fn advance_days(&self, days: u64) {
        self.advance_time(days * SECONDS_PER_DAY);
    }

    /// Get current timestamp
    pub fn current_timestamp(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    // ========================================================================
    // Contract Clients
    // ========================================================================

    pub fn market(&self) -> MarketplaceClient {
        MarketplaceClient::new(&self.env, &self.contracts.marketplace)
    }

    pub fn registry(&self) -> CollectionRegistryClient {
        CollectionRegistryClient::new(&self.env, &self.contracts.registry)
    }

    pub fn collection(&self) -> AssetLedgerClient {
        AssetLedgerClient::new(&self.env, &self.contracts.collection)
    }

    /// Get token client
    pub fn token_client(&self) -> TokenClient {
        TokenClient::new(&self.env, &self.contracts.token)
    }

    /// Get stellar asset client for minting
    pub fn token_admin_client(&self) -> StellarAssetClient {
        StellarAssetClient::new(&self.env, &self.contracts.token)
    }

    /// Check user balance
    pub fn balance(&self, user: &Address) -> i128 {
        self.token_client().balance(user)
    }

    // ========================================================================
    // Asset Helpers
    // ========================================================================

    /// Mint an asset to `to` and approve the engine as operator
    pub fn mint_asset(&self, to: &Address) -> u32 {
        let ledger = self.collection();
        let token_id = ledger.mint(&self.accounts.admin, to);
        ledger.set_operator(to, &self.contracts.marketplace, &true);
        token_id
    }

    /// Deploy and whitelist a second collection with its own fee
    pub fn deploy_collection(&self, name: &str, symbol: &str, fee_basis_points: u32) -> Address {
        let collection = self.env.register_contract(None, AssetLedger);
        let ledger = AssetLedgerClient::new(&self.env, &collection);
        ledger.initialize(
            &self.accounts.admin,
            &String::from_str(&self.env, name),
            &String::from_str(&self.env, symbol),
        );
        let registry = self.registry();
        registry.set_whitelisted(&self.accounts.admin, &collection, &true);
        registry.set_fee(&self.accounts.admin, &collection, &fee_basis_points);
        collection
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
