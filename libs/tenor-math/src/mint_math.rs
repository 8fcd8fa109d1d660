use soroban_sdk::Env;
use tenor_types::{State, LIQUIDITY_SHIFT};

use crate::full_math::mul_div;

/// Liquidity shares to issue for a mint, rounded down
///
/// An empty pool seeds `asset_in << 16` shares; a funded pool issues
/// the smallest of the three proportional claims so a minter can never
/// dilute existing holders by skewing one axis.
pub fn get_liquidity(
    env: &Env,
    state: &State,
    total_liquidity: u128,
    asset_in: u128,
    interest_increase: u128,
    cdp_increase: u128,
) -> u128 {
    if total_liquidity == 0 {
        return asset_in << LIQUIDITY_SHIFT;
    }
    let by_asset = mul_div(env, total_liquidity, asset_in, state.asset);
    let by_interest = mul_div(env, total_liquidity, interest_increase, state.interest);
    let by_cdp = mul_div(env, total_liquidity, cdp_increase, state.cdp);
    by_asset.min(by_interest).min(by_cdp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(asset: u128, interest: u128, cdp: u128) -> State {
        State {
            asset,
            interest,
            cdp,
        }
    }

    #[test]
    fn test_seed_mint_scales_asset_in() {
        let env = Env::default();
        let s = State::default();
        assert_eq!(get_liquidity(&env, &s, 0, 1_000_000, 100, 100), 1_000_000 << 16);
    }

    #[test]
    fn test_proportional_mint_doubles_supply() {
        let env = Env::default();
        let s = state(1_000, 100, 100);
        let total = 1_000 << 16;
        assert_eq!(get_liquidity(&env, &s, total, 1_000, 100, 100), total);
    }

    #[test]
    fn test_skewed_mint_takes_the_minimum() {
        let env = Env::default();
        let s = state(1_000, 100, 100);
        let total = 1_000u128 << 16;
        // Asset doubled but cdp only up 10%: shares follow the cdp leg
        let minted = get_liquidity(&env, &s, total, 1_000, 100, 10);
        assert_eq!(minted, total / 10);
    }

    #[test]
    fn test_mint_rounds_down() {
        let env = Env::default();
        let s = state(3, 3, 3);
        // 10 * 1 / 3 = 3.33... -> 3
        assert_eq!(get_liquidity(&env, &s, 10, 1, 1, 1), 3);
    }

    #[test]
    fn test_tiny_mint_into_large_pool_is_zero() {
        let env = Env::default();
        let s = state(1_000_000, 1_000_000, 1_000_000);
        assert_eq!(get_liquidity(&env, &s, 100, 1, 1, 1), 0);
    }
}
