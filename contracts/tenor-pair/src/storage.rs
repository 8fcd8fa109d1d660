use soroban_sdk::{contracttype, Address, Env, Vec};
use tenor_types::{Claims, Due, PairConfig, Pool};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints that shaped the storage layout:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - Each maturity's pool record is one entry; an action touches exactly
//   one pool plus the caller's ledger rows, far below the write limit
// - Per-address rows (liquidity, claims, dues) are separate entries so
//   two users never contend on the same key
// - A borrower's due list is one entry; it grows by one Due (~48 bytes)
//   per borrow, so the 128 KiB entry cap allows thousands of dues
// - Empty liquidity/claim rows are removed; pools and due lists are
//   kept forever (dues double as the audit record of settled debt)
// ============================================================================

/// Storage keys for the pair contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pair configuration (Instance storage)
    Config,
    /// Pool record per maturity (Persistent storage)
    Pool(u64),
    /// Liquidity-share balance: (maturity, owner) (Persistent storage)
    Liquidity(u64, Address),
    /// Claim balances: (maturity, owner) (Persistent storage)
    Claims(u64, Address),
    /// Debt positions: (maturity, owner) (Persistent storage)
    Dues(u64, Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn get_config(env: &Env) -> PairConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Pair not initialized")
}

pub fn set_config(env: &Env, config: &PairConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Pool ===

/// A maturity that was never minted into reads as an all-zero pool
pub fn get_pool(env: &Env, maturity: u64) -> Pool {
    let key = DataKey::Pool(maturity);
    env.storage().persistent().get(&key).unwrap_or_default()
}

/// Pools are created on first mint and never removed
pub fn set_pool(env: &Env, maturity: u64, pool: &Pool) {
    let key = DataKey::Pool(maturity);
    env.storage().persistent().set(&key, pool);
    extend_persistent_ttl(env, &key);
}

// === Liquidity balances ===

pub fn get_liquidity(env: &Env, maturity: u64, owner: &Address) -> u128 {
    let key = DataKey::Liquidity(maturity, owner.clone());
    env.storage().persistent().get(&key).unwrap_or(0u128)
}

pub fn set_liquidity(env: &Env, maturity: u64, owner: &Address, balance: u128) {
    let key = DataKey::Liquidity(maturity, owner.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Claim balances ===

pub fn get_claims(env: &Env, maturity: u64, owner: &Address) -> Claims {
    let key = DataKey::Claims(maturity, owner.clone());
    env.storage().persistent().get(&key).unwrap_or_default()
}

pub fn set_claims(env: &Env, maturity: u64, owner: &Address, claims: &Claims) {
    let key = DataKey::Claims(maturity, owner.clone());
    if claims.bond == 0 && claims.insurance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, claims);
        extend_persistent_ttl(env, &key);
    }
}

// === Dues ===

pub fn get_dues(env: &Env, maturity: u64, owner: &Address) -> Vec<Due> {
    let key = DataKey::Dues(maturity, owner.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

/// Due lists only grow; settled dues stay as zeroed records
pub fn set_dues(env: &Env, maturity: u64, owner: &Address, dues: &Vec<Due>) {
    let key = DataKey::Dues(maturity, owner.clone());
    env.storage().persistent().set(&key, dues);
    extend_persistent_ttl(env, &key);
}
