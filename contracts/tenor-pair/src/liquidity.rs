use soroban_sdk::{token, Address, Env, Symbol};
use tenor_math::{add_checked, get_burn_amounts, get_collateral, get_debt, get_liquidity, sub_checked};
use tenor_types::{Due, MAX_UINT_112};

use crate::storage::{
    get_config, get_dues, get_liquidity as get_liquidity_balance, get_pool, set_dues,
    set_liquidity, set_pool,
};

/// Supply liquidity to the pool at `maturity`, creating it on first use
///
/// A mint simultaneously opens a borrowing position sized to the
/// liquidity added: the due it issues is the pool's only source of
/// collateral backing for insurance claims.
///
/// # Returns
/// (liquidity_out, due_id, due)
pub fn mint(
    env: &Env,
    caller: Address,
    maturity: u64,
    asset_in: u128,
    interest_increase: u128,
    cdp_increase: u128,
) -> (u128, u32, Due) {
    let now = env.ledger().timestamp();
    if now >= maturity {
        panic!("Invalid maturity");
    }
    if asset_in == 0 || interest_increase == 0 || cdp_increase == 0 {
        panic!("Zero amount");
    }

    let config = get_config(env);
    let mut pool = get_pool(env, maturity);

    let asset_state = add_checked(pool.state.asset, asset_in);
    let interest_state = add_checked(pool.state.interest, interest_increase);
    let cdp_state = add_checked(pool.state.cdp, cdp_increase);
    if asset_state > MAX_UINT_112 || interest_state > MAX_UINT_112 || cdp_state > MAX_UINT_112 {
        panic!("Overflow");
    }

    let liquidity_out = get_liquidity(
        env,
        &pool.state,
        pool.total_liquidity,
        asset_in,
        interest_increase,
        cdp_increase,
    );
    if liquidity_out == 0 {
        panic!("Zero liquidity minted");
    }

    // The minted liquidity is backed by debt against the minter
    let debt = get_debt(env, maturity, now, asset_in, interest_increase);
    let collateral_in = get_collateral(env, debt, cdp_state, asset_state);
    if debt > MAX_UINT_112 || collateral_in > MAX_UINT_112 {
        panic!("Overflow");
    }

    pool.state.asset = asset_state;
    pool.state.interest = interest_state;
    pool.state.cdp = cdp_state;
    pool.reserves.asset = add_checked(pool.reserves.asset, asset_in);
    pool.reserves.collateral = add_checked(pool.reserves.collateral, collateral_in);
    pool.total_liquidity = add_checked(pool.total_liquidity, liquidity_out);
    pool.total_debt_created = add_checked(pool.total_debt_created, debt);

    let due = Due {
        collateral: collateral_in,
        debt,
        start_block: now,
    };
    let mut dues = get_dues(env, maturity, &caller);
    let due_id = dues.len();
    dues.push_back(due.clone());

    let balance = get_liquidity_balance(env, maturity, &caller);
    set_liquidity(env, maturity, &caller, add_checked(balance, liquidity_out));
    set_dues(env, maturity, &caller, &dues);
    set_pool(env, maturity, &pool);

    // Pull in the deposit and the collateral backing the due
    let contract_address = env.current_contract_address();
    token::Client::new(env, &config.asset).transfer(
        &caller,
        &contract_address,
        &(asset_in as i128),
    );
    token::Client::new(env, &config.collateral).transfer(
        &caller,
        &contract_address,
        &(collateral_in as i128),
    );

    env.events().publish(
        (Symbol::new(env, "mint"), maturity),
        (caller, asset_in, collateral_in, liquidity_out, due_id),
    );

    (liquidity_out, due_id, due)
}

/// Redeem liquidity shares after maturity for a share of the reserves
///
/// # Returns
/// (asset_out, collateral_out)
pub fn burn(env: &Env, caller: Address, maturity: u64, liquidity_in: u128) -> (u128, u128) {
    let now = env.ledger().timestamp();
    if now < maturity {
        panic!("Invalid maturity");
    }
    if liquidity_in == 0 {
        panic!("Zero amount");
    }

    let config = get_config(env);
    let mut pool = get_pool(env, maturity);

    let balance = get_liquidity_balance(env, maturity, &caller);
    if liquidity_in > balance {
        panic!("Insufficient balance");
    }

    let (asset_out, collateral_out) =
        get_burn_amounts(env, &pool.reserves, liquidity_in, pool.total_liquidity);

    pool.total_liquidity -= liquidity_in;
    pool.reserves.asset = sub_checked(pool.reserves.asset, asset_out);
    pool.reserves.collateral = sub_checked(pool.reserves.collateral, collateral_out);

    set_liquidity(env, maturity, &caller, balance - liquidity_in);
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
        (Symbol::new(env, "burn"), maturity),
        (caller, liquidity_in, asset_out, collateral_out),
    );

    (asset_out, collateral_out)
}
