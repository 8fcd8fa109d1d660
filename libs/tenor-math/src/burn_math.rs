use soroban_sdk::Env;
use tenor_types::Tokens;

use crate::full_math::mul_div;

/// Proportional share of current reserves for redeemed liquidity
///
/// Both legs round down; the dust stays with the pool. Reserves are
/// used rather than the frozen trading state because repayments and
/// defaults keep moving them after the last trade.
pub fn get_burn_amounts(
    env: &Env,
    reserves: &Tokens,
    liquidity_in: u128,
    total_liquidity: u128,
) -> (u128, u128) {
    let asset_out = mul_div(env, reserves.asset, liquidity_in, total_liquidity);
    let collateral_out = mul_div(env, reserves.collateral, liquidity_in, total_liquidity);
    (asset_out, collateral_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_redemption_takes_everything() {
        let env = Env::default();
        let reserves = Tokens {
            asset: 5_000,
            collateral: 700,
        };
        assert_eq!(get_burn_amounts(&env, &reserves, 80, 80), (5_000, 700));
    }

    #[test]
    fn test_half_redemption() {
        let env = Env::default();
        let reserves = Tokens {
            asset: 5_000,
            collateral: 700,
        };
        assert_eq!(get_burn_amounts(&env, &reserves, 40, 80), (2_500, 350));
    }

    #[test]
    fn test_redemption_rounds_down() {
        let env = Env::default();
        let reserves = Tokens {
            asset: 100,
            collateral: 10,
        };
        // 100 * 1 / 3 = 33.33 -> 33, 10 * 1 / 3 = 3.33 -> 3
        assert_eq!(get_burn_amounts(&env, &reserves, 1, 3), (33, 3));
    }
}
