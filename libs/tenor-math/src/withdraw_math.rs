use soroban_sdk::Env;
use tenor_types::{Claims, Tokens};

use crate::full_math::mul_div;

/// Redemption value of lender claims after maturity
///
/// Each leg pays face value while the matching reserve covers the
/// aggregate claims; once it does not (borrowers defaulted on the
/// asset side, or repaid and reclaimed on the collateral side), every
/// claim takes the same pro-rata haircut, rounded down.
pub fn get_withdraw_amounts(
    env: &Env,
    claims_in: &Claims,
    reserves: &Tokens,
    total_claims: &Claims,
) -> (u128, u128) {
    let asset_out = if reserves.asset >= total_claims.bond {
        claims_in.bond
    } else {
        mul_div(env, claims_in.bond, reserves.asset, total_claims.bond)
    };
    let collateral_out = if reserves.collateral >= total_claims.insurance {
        claims_in.insurance
    } else {
        mul_div(env, claims_in.insurance, reserves.collateral, total_claims.insurance)
    };
    (asset_out, collateral_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_covered_claims_pay_face_value() {
        let env = Env::default();
        let claims_in = Claims {
            bond: 120,
            insurance: 30,
        };
        let reserves = Tokens {
            asset: 1_000,
            collateral: 500,
        };
        let totals = Claims {
            bond: 800,
            insurance: 200,
        };
        assert_eq!(
            get_withdraw_amounts(&env, &claims_in, &reserves, &totals),
            (120, 30)
        );
    }

    #[test]
    fn test_shortfall_takes_pro_rata_haircut() {
        let env = Env::default();
        let claims_in = Claims {
            bond: 100,
            insurance: 100,
        };
        let reserves = Tokens {
            asset: 400,
            collateral: 150,
        };
        let totals = Claims {
            bond: 800,
            insurance: 200,
        };
        // Asset leg covered at 50%, collateral leg at 75%
        assert_eq!(
            get_withdraw_amounts(&env, &claims_in, &reserves, &totals),
            (50, 75)
        );
    }

    #[test]
    fn test_haircut_rounds_down() {
        let env = Env::default();
        let claims_in = Claims {
            bond: 1,
            insurance: 0,
        };
        let reserves = Tokens {
            asset: 2,
            collateral: 0,
        };
        let totals = Claims {
            bond: 3,
            insurance: 0,
        };
        // 1 * 2 / 3 rounds down to 0
        assert_eq!(get_withdraw_amounts(&env, &claims_in, &reserves, &totals), (0, 0));
    }

    #[test]
    fn test_zero_claims_read_as_zero() {
        let env = Env::default();
        let nothing = Claims::default();
        let reserves = Tokens::default();
        assert_eq!(
            get_withdraw_amounts(&env, &nothing, &reserves, &nothing),
            (0, 0)
        );
    }
}
