#![no_std]

use soroban_sdk::{
    contract, contractimpl, contracttype, Address, BytesN, Env, IntoVal, Symbol, Vec,
};
use tenor_types::BASE;

#[contract]
pub struct TenorFactory;

/// Storage keys for Factory contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Pair WASM hash for deployment
    PairWasmHash,
    /// (asset, collateral) -> pair address
    Pair(Address, Address),
    /// Total number of pairs created (counter for indexed storage)
    PairCount,
    /// Pair address at index (indexed storage to avoid unbounded Vec)
    PairAt(u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

#[contractimpl]
impl TenorFactory {
    /// Initialize factory with admin and pair WASM hash
    pub fn initialize(env: Env, admin: Address, pair_wasm_hash: BytesN<32>) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("Already initialized");
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::PairWasmHash, &pair_wasm_hash);

        // Initialize pair counter (indexed storage instead of unbounded Vec)
        env.storage().instance().set(&DataKey::PairCount, &0u32);

        extend_instance_ttl(&env);
    }

    /// Create a new pair for an asset/collateral token pairing
    /// Returns the pair contract address
    ///
    /// The two roles are not interchangeable, so the pair key keeps the
    /// (asset, collateral) order as given. Maturities live inside the
    /// pair; the factory only tracks one contract per token pairing.
    pub fn create_pair(env: Env, asset: Address, collateral: Address, fee: u32) -> Address {
        if asset == collateral {
            panic!("Identical tokens");
        }
        if fee as u128 >= BASE {
            panic!("Fee too high");
        }

        // Check pair doesn't already exist
        let pair_key = DataKey::Pair(asset.clone(), collateral.clone());
        if env.storage().persistent().has(&pair_key) {
            panic!("Pair already exists");
        }

        // Get pair WASM hash
        let pair_wasm_hash: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::PairWasmHash)
            .expect("Not initialized");

        // Get current pair count for salt and indexing
        let pair_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0);

        // Create deterministic salt from pair count + fee
        let mut salt_bytes = [0u8; 32];
        salt_bytes[0..4].copy_from_slice(&pair_count.to_be_bytes());
        salt_bytes[4..8].copy_from_slice(&fee.to_be_bytes());
        let salt = BytesN::from_array(&env, &salt_bytes);

        // Deploy pair contract
        let pair_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(pair_wasm_hash, ());

        // Initialize the pair
        init_pair(
            &env,
            &pair_address,
            &env.current_contract_address(),
            &asset,
            &collateral,
            &fee,
        );

        // Store pair address by token pairing
        env.storage().persistent().set(&pair_key, &pair_address);
        extend_persistent_ttl(&env, &pair_key);

        // Store pair at index (indexed storage - O(1) append)
        let pair_at_key = DataKey::PairAt(pair_count);
        env.storage().persistent().set(&pair_at_key, &pair_address);
        extend_persistent_ttl(&env, &pair_at_key);

        // Increment pair counter
        env.storage()
            .instance()
            .set(&DataKey::PairCount, &(pair_count + 1));

        // Emit event
        env.events().publish(
            (Symbol::new(&env, "pair_created"),),
            (asset, collateral, fee, pair_address.clone()),
        );

        extend_instance_ttl(&env);
        pair_address
    }

    /// Get pair address for an asset/collateral pairing
    pub fn get_pair(env: Env, asset: Address, collateral: Address) -> Option<Address> {
        let pair_key = DataKey::Pair(asset, collateral);
        env.storage().persistent().get(&pair_key)
    }

    /// Get total number of pairs created
    pub fn get_pair_count(env: Env) -> u32 {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0)
    }

    /// Get pair address at specific index
    pub fn get_pair_at(env: Env, index: u32) -> Option<Address> {
        let pair_at_key = DataKey::PairAt(index);
        env.storage().persistent().get(&pair_at_key)
    }

    /// Get pairs with pagination
    /// Returns up to `limit` pairs starting from `start_index`
    /// Maximum limit is 50 to stay within Soroban's read entry limits
    pub fn get_pairs_paginated(env: Env, start_index: u32, limit: u32) -> Vec<Address> {
        let safe_limit = if limit > 50 { 50 } else { limit };

        let pair_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0);

        let mut pairs: Vec<Address> = Vec::new(&env);

        let end_index = if start_index + safe_limit > pair_count {
            pair_count
        } else {
            start_index + safe_limit
        };

        for i in start_index..end_index {
            if let Some(pair) = env.storage().persistent().get(&DataKey::PairAt(i)) {
                pairs.push_back(pair);
            }
        }

        pairs
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Address {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("Not initialized")
    }

    /// Get pair WASM hash
    pub fn get_pair_wasm_hash(env: Env) -> BytesN<32> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PairWasmHash)
            .expect("Not initialized")
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// Pair initialization via invoke
fn init_pair(
    env: &Env,
    pair_address: &Address,
    factory: &Address,
    asset: &Address,
    collateral: &Address,
    fee: &u32,
) {
    env.invoke_contract::<()>(
        pair_address,
        &Symbol::new(env, "initialize"),
        (factory, asset, collateral, fee).into_val(env),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, BytesN, Env};

    // === Initialization Tests ===

    #[test]
    fn test_initialize_factory() {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(TenorFactory, ());
        let client = TenorFactoryClient::new(&env, &contract_id);

        let pair_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);
        client.initialize(&admin, &pair_wasm_hash);

        assert_eq!(client.get_admin(), admin);
        assert_eq!(client.get_pair_wasm_hash(), pair_wasm_hash);
        assert_eq!(client.get_pair_count(), 0);
    }

    #[test]
    #[should_panic(expected = "Already initialized")]
    fn test_initialize_twice_fails() {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(TenorFactory, ());
        let client = TenorFactoryClient::new(&env, &contract_id);

        let pair_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);
        client.initialize(&admin, &pair_wasm_hash);
        client.initialize(&admin, &pair_wasm_hash);
    }

    // === Validation Tests ===

    #[test]
    #[should_panic(expected = "Identical tokens")]
    fn test_create_pair_identical_tokens_fails() {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(TenorFactory, ());
        let client = TenorFactoryClient::new(&env, &contract_id);

        let pair_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);
        client.initialize(&admin, &pair_wasm_hash);

        let token = Address::generate(&env);
        client.create_pair(&token, &token, &30u32);
    }

    #[test]
    #[should_panic(expected = "Fee too high")]
    fn test_create_pair_fee_too_high_fails() {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(TenorFactory, ());
        let client = TenorFactoryClient::new(&env, &contract_id);

        let pair_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);
        client.initialize(&admin, &pair_wasm_hash);

        let asset = Address::generate(&env);
        let collateral = Address::generate(&env);
        client.create_pair(&asset, &collateral, &65_536u32);
    }

    // === Registry Tests ===

    #[test]
    fn test_get_pair_not_exists() {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(TenorFactory, ());
        let client = TenorFactoryClient::new(&env, &contract_id);

        let pair_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);
        client.initialize(&admin, &pair_wasm_hash);

        let asset = Address::generate(&env);
        let collateral = Address::generate(&env);
        assert_eq!(client.get_pair(&asset, &collateral), None);
        assert_eq!(client.get_pair_at(&0), None);
    }

    #[test]
    fn test_get_pairs_paginated_empty() {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(TenorFactory, ());
        let client = TenorFactoryClient::new(&env, &contract_id);

        let pair_wasm_hash = BytesN::from_array(&env, &[1u8; 32]);
        client.initialize(&admin, &pair_wasm_hash);

        let pairs = client.get_pairs_paginated(&0, &10);
        assert_eq!(pairs.len(), 0);
    }
}
