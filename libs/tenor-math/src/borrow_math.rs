use soroban_sdk::Env;
use tenor_types::{State, RATE_SHIFT};

use crate::constant_product::{adjust_increase, check_constant_product};
use crate::full_math::{mul_div_rounding_up, mul_shift_right_up};

/// True when the proposed rate increases pay for the asset taken out
///
/// Callers bound the post-trade axes to `MAX_UINT_112` before calling,
/// which keeps the fee-adjusted values within u128.
pub fn check_borrow(
    env: &Env,
    state: &State,
    asset_out: u128,
    interest_increase: u128,
    cdp_increase: u128,
    fee: u32,
) -> bool {
    let asset_reserve = match state.asset.checked_sub(asset_out) {
        Some(reserve) => reserve,
        None => return false,
    };
    let interest_adjusted = adjust_increase(state.interest, interest_increase, fee);
    let cdp_adjusted = adjust_increase(state.cdp, cdp_increase, fee);
    check_constant_product(env, state, asset_reserve, interest_adjusted, cdp_adjusted)
}

/// Debt owed at maturity for asset taken out now, rounded up
///
/// `debt = asset_out + ceil(interest_increase * duration / 2^32)`
pub fn get_debt(env: &Env, maturity: u64, now: u64, asset_out: u128, interest_increase: u128) -> u128 {
    let duration = (maturity - now) as u128;
    let accrual = mul_shift_right_up(env, interest_increase, duration, RATE_SHIFT);
    match asset_out.checked_add(accrual) {
        Some(debt) => debt,
        None => panic!("Overflow"),
    }
}

/// Minimum collateral backing a debt at the pool ratio, rounded up
///
/// `collateral = ceil(debt * cdp / asset)` on the post-trade axes.
pub fn get_collateral(env: &Env, debt: u128, cdp: u128, asset: u128) -> u128 {
    mul_div_rounding_up(env, debt, cdp, asset)
}
