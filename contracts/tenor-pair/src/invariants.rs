// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicate functions expressing the properties every sequence of pool
// actions must preserve. The test suites drive real action sequences
// through the contract and assert these predicates between steps.
//
// INVARIANT CATEGORIES:
//
// 1. PRODUCT INVARIANTS
//    - The three-axis product never decreases across a trade
//    - Axes stay within the 112-bit bound
//
// 2. RESERVE INVARIANTS
//    - The asset reserve covers the asset axis during the active phase
//    - The collateral reserve covers all outstanding due collateral
//
// 3. CONSERVATION INVARIANTS
//    - Aggregate liquidity equals the sum of per-address balances
//    - Aggregate claims equal the sum of per-address claims
//
// 4. MONOTONICITY INVARIANTS
//    - Total debt created never decreases
//
// ============================================================================

use core::cmp::Ordering;

use soroban_sdk::Env;
use tenor_math::product_cmp;
use tenor_types::{Claims, Pool, State, MAX_UINT_112};

// ============================================================================
// PRODUCT INVARIANTS
// ============================================================================

/// Invariant: the three-axis product never decreases across a trade
///
/// Property:
///   after.asset * after.interest * after.cdp
///     >= before.asset * before.interest * before.cdp
pub fn product_non_decreasing(env: &Env, before: &State, after: &State) -> bool {
    product_cmp(env, before, after) != Ordering::Less
}

/// Invariant: every axis stays within the 112-bit bound
pub fn axes_in_bounds(state: &State) -> bool {
    state.asset <= MAX_UINT_112 && state.interest <= MAX_UINT_112 && state.cdp <= MAX_UINT_112
}

// ============================================================================
// RESERVE INVARIANTS
// ============================================================================

/// Invariant: the asset reserve covers the asset axis
///
/// Property (active phase only — burns after maturity draw down the
/// reserve while the trading state stays frozen):
///   reserves.asset >= state.asset
pub fn reserves_cover_state(pool: &Pool) -> bool {
    pool.reserves.asset >= pool.state.asset
}

/// Invariant: the collateral reserve covers all outstanding dues
///
/// Property:
///   reserves.collateral >= sum of due.collateral over open dues
pub fn collateral_covers_dues(pool: &Pool, total_due_collateral: u128) -> bool {
    pool.reserves.collateral >= total_due_collateral
}

// ============================================================================
// CONSERVATION INVARIANTS
// ============================================================================

/// Invariant: aggregate liquidity equals the sum of per-address balances
pub fn liquidity_conserved(total_liquidity: u128, balance_sum: u128) -> bool {
    total_liquidity == balance_sum
}

/// Invariant: aggregate claims equal the sum of per-address claims
pub fn claims_conserved(total_claims: &Claims, claim_sum: &Claims) -> bool {
    total_claims.bond == claim_sum.bond && total_claims.insurance == claim_sum.insurance
}

// ============================================================================
// MONOTONICITY INVARIANTS
// ============================================================================

/// Invariant: total debt created never decreases
pub fn debt_created_monotone(before: u128, after: u128) -> bool {
    after >= before
}
