use soroban_sdk::{token, Address, Env, Symbol};
use tenor_math::{
    add_checked, check_lend, get_bond, get_insurance, get_withdraw_amounts, sub_checked,
};
use tenor_types::{Claims, MAX_UINT_112};

use crate::storage::{get_claims, get_config, get_pool, set_claims, set_pool};

/// Lend asset into the pool at `maturity` in exchange for claims
///
/// The lender proposes the rate decreases; the invariant check rejects
/// any proposal the deposit does not pay for once the fee is charged.
pub fn lend(
    env: &Env,
    caller: Address,
    maturity: u64,
    asset_in: u128,
    interest_decrease: u128,
    cdp_decrease: u128,
) -> Claims {
    let now = env.ledger().timestamp();
    if now >= maturity {
        panic!("Invalid maturity");
    }

    let config = get_config(env);
    let mut pool = get_pool(env, maturity);
    if pool.total_liquidity == 0 {
        panic!("Invalid maturity");
    }
    if asset_in == 0 {
        panic!("Zero amount");
    }

    let asset_state = add_checked(pool.state.asset, asset_in);
    if asset_state > MAX_UINT_112 {
        panic!("Overflow");
    }
    if !check_lend(
        env,
        &pool.state,
        asset_in,
        interest_decrease,
        cdp_decrease,
        config.fee,
    ) {
        panic!("Insufficient output");
    }

    // check_lend keeps both decreases strictly below their axes
    pool.state.asset = asset_state;
    pool.state.interest -= interest_decrease;
    pool.state.cdp -= cdp_decrease;

    let bond = get_bond(env, maturity, now, asset_in, interest_decrease);
    let insurance = get_insurance(env, bond, pool.state.cdp, pool.state.asset);

    pool.reserves.asset = add_checked(pool.reserves.asset, asset_in);
    pool.total_claims.bond = add_checked(pool.total_claims.bond, bond);
    pool.total_claims.insurance = add_checked(pool.total_claims.insurance, insurance);

    let mut owned = get_claims(env, maturity, &caller);
    owned.bond = add_checked(owned.bond, bond);
    owned.insurance = add_checked(owned.insurance, insurance);

    set_claims(env, maturity, &caller, &owned);
    set_pool(env, maturity, &pool);

    token::Client::new(env, &config.asset).transfer(
        &caller,
        &env.current_contract_address(),
        &(asset_in as i128),
    );

    env.events().publish(
        (Symbol::new(env, "lend"), maturity),
        (caller, asset_in, bond, insurance),
    );

    Claims { bond, insurance }
}

/// Redeem claims after maturity
///
/// Bond redeems against the asset reserve, insurance against the
/// collateral reserve, each taking a pro-rata haircut if borrowers
/// defaulted on that leg.
///
/// # Returns
/// (asset_out, collateral_out)
pub fn withdraw(
    env: &Env,
    caller: Address,
    maturity: u64,
    bond_in: u128,
    insurance_in: u128,
) -> (u128, u128) {
    let now = env.ledger().timestamp();
    if now < maturity {
        panic!("Invalid maturity");
    }
    if bond_in == 0 && insurance_in == 0 {
        panic!("Zero amount");
    }

    let config = get_config(env);
    let mut pool = get_pool(env, maturity);

    let mut owned = get_claims(env, maturity, &caller);
    if bond_in > owned.bond || insurance_in > owned.insurance {
        panic!("Insufficient balance");
    }

    let claims_in = Claims {
        bond: bond_in,
        insurance: insurance_in,
    };
    let (asset_out, collateral_out) =
        get_withdraw_amounts(env, &claims_in, &pool.reserves, &pool.total_claims);

    pool.total_claims.bond -= bond_in;
    pool.total_claims.insurance -= insurance_in;
    pool.reserves.asset = sub_checked(pool.reserves.asset, asset_out);
    pool.reserves.collateral = sub_checked(pool.reserves.collateral, collateral_out);
    owned.bond -= bond_in;
    owned.insurance -= insurance_in;

    set_claims(env, maturity, &caller, &owned);
    set_pool(env, maturity, &pool);

    let contract_address = env.current_contract_address();
    if asset_out > 0 {
        token::Client::new(env, &config.asset).transfer(
            &contract_address,
            &caller,
            &(asset_out as i128),
        );
    }
    if collateral_out > 0 {
        token::Client::new(env, &config.collateral).transfer(
            &contract_address,
            &caller,
            &(collateral_out as i128),
        );
    }

    env.events().publish(
        (Symbol::new(env, "withdraw"), maturity),
        (caller, bond_in, insurance_in, asset_out, collateral_out),
    );

    (asset_out, collateral_out)
}
