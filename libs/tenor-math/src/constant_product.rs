use core::cmp::Ordering;

use soroban_sdk::{Env, U256};
use tenor_types::{State, BASE};

use crate::full_math::wide_product_cmp;

/// Fee-adjusted value of a decreased axis: `(reserve << 16) - (BASE + fee) * decrease`
///
/// Returns `None` when the decrease would cross the pool floor: the
/// trader pays the fee on top of the decrease, so an adjusted value of
/// zero or below means the proposed decrease is not admissible.
pub fn adjust_decrease(reserve: u128, decrease: u128, fee: u32) -> Option<u128> {
    let scaled = reserve << 16;
    let charged = (BASE + fee as u128).checked_mul(decrease)?;
    match scaled.checked_sub(charged) {
        Some(0) | None => None,
        adjusted => adjusted,
    }
}

/// Fee-adjusted value of an increased axis: `(reserve << 16) + (BASE - fee) * increase`
///
/// The trader is credited less than the full increase; the withheld
/// fraction is the fee. Callers bound `reserve + increase` first, which
/// keeps the result within u128.
pub fn adjust_increase(reserve: u128, increase: u128, fee: u32) -> u128 {
    (reserve << 16) + (BASE - fee as u128) * increase
}

/// True when the post-trade product covers the pre-trade product
///
/// `interest_adjusted` and `cdp_adjusted` carry the 2^16 fee scale, so
/// the pre-trade side is scaled by 2^32 to match.
pub fn check_constant_product(
    env: &Env,
    state: &State,
    asset_reserve: u128,
    interest_adjusted: u128,
    cdp_adjusted: u128,
) -> bool {
    let new_product =
        U256::from_u128(env, interest_adjusted).mul(&U256::from_u128(env, cdp_adjusted));
    let old_product = U256::from_u128(env, state.interest)
        .mul(&U256::from_u128(env, state.cdp))
        .mul(&U256::from_u128(env, 1u128 << 32));
    wide_product_cmp(env, asset_reserve, &new_product, state.asset, &old_product) != Ordering::Less
}

/// Compare the raw three-axis products of two states
pub fn product_cmp(env: &Env, before: &State, after: &State) -> Ordering {
    let new_product =
        U256::from_u128(env, after.interest).mul(&U256::from_u128(env, after.cdp));
    let old_product =
        U256::from_u128(env, before.interest).mul(&U256::from_u128(env, before.cdp));
    wide_product_cmp(env, after.asset, &new_product, before.asset, &old_product)
}
