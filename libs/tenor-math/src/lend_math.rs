use soroban_sdk::Env;
use tenor_types::{State, RATE_SHIFT};

use crate::constant_product::{adjust_decrease, check_constant_product};
use crate::full_math::{mul_div, mul_shift_right};

/// True when the proposed rate decreases are covered by the asset lent
///
/// Returns false when either decrease crosses the pool floor once the
/// fee is charged on top of it.
pub fn check_lend(
    env: &Env,
    state: &State,
    asset_in: u128,
    interest_decrease: u128,
    cdp_decrease: u128,
    fee: u32,
) -> bool {
    let asset_reserve = match state.asset.checked_add(asset_in) {
        Some(reserve) => reserve,
        None => return false,
    };
    let interest_adjusted = match adjust_decrease(state.interest, interest_decrease, fee) {
        Some(adjusted) => adjusted,
        None => return false,
    };
    let cdp_adjusted = match adjust_decrease(state.cdp, cdp_decrease, fee) {
        Some(adjusted) => adjusted,
        None => return false,
    };
    check_constant_product(env, state, asset_reserve, interest_adjusted, cdp_adjusted)
}

/// Bond claim for asset lent now, rounded down
///
/// `bond = asset_in + (interest_decrease * duration) >> 32`
pub fn get_bond(env: &Env, maturity: u64, now: u64, asset_in: u128, interest_decrease: u128) -> u128 {
    let duration = (maturity - now) as u128;
    let accrual = mul_shift_right(env, interest_decrease, duration, RATE_SHIFT);
    match asset_in.checked_add(accrual) {
        Some(bond) => bond,
        None => panic!("Overflow"),
    }
}

/// Insurance claim covering a bond at the pool ratio, rounded down
///
/// `insurance = bond * cdp / asset` on the post-trade axes.
pub fn get_insurance(env: &Env, bond: u128, cdp: u128, asset: u128) -> u128 {
    mul_div(env, bond, cdp, asset)
}
