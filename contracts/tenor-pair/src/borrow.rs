use soroban_sdk::{token, Address, Env, Symbol};
use tenor_math::{add_checked, check_borrow, get_collateral, get_debt, mul_div, sub_checked};
use tenor_types::{Due, MAX_UINT_112};

use crate::storage::{get_config, get_dues, get_pool, set_dues, set_pool};

/// Borrow asset from the pool at `maturity` against posted collateral
///
/// The borrower proposes the rate increases; the invariant check
/// rejects any proposal that underpays for the asset taken out, and
/// the posted collateral must cover the resulting debt at the pool
/// ratio.
///
/// # Returns
/// (due_id, due)
pub fn borrow(
    env: &Env,
    caller: Address,
    maturity: u64,
    asset_out: u128,
    collateral_in: u128,
    interest_increase: u128,
    cdp_increase: u128,
) -> (u32, Due) {
    let now = env.ledger().timestamp();
    if now >= maturity {
        panic!("Invalid maturity");
    }

    let config = get_config(env);
    let mut pool = get_pool(env, maturity);
    if pool.total_liquidity == 0 {
        panic!("Invalid maturity");
    }
    if asset_out == 0 {
        panic!("Zero amount");
    }
    if asset_out > pool.reserves.asset {
        panic!("Insufficient output");
    }

    let interest_state = add_checked(pool.state.interest, interest_increase);
    let cdp_state = add_checked(pool.state.cdp, cdp_increase);
    if interest_state > MAX_UINT_112 || cdp_state > MAX_UINT_112 {
        panic!("Overflow");
    }
    if !check_borrow(
        env,
        &pool.state,
        asset_out,
        interest_increase,
        cdp_increase,
        config.fee,
    ) {
        panic!("Insufficient output");
    }

    // check_borrow already rules out draining the asset axis
    pool.state.asset -= asset_out;
    pool.state.interest = interest_state;
    pool.state.cdp = cdp_state;

    let debt = get_debt(env, maturity, now, asset_out, interest_increase);
    let collateral_minimum = get_collateral(env, debt, pool.state.cdp, pool.state.asset);
    if collateral_in < collateral_minimum {
        panic!("Insufficient collateral");
    }
    if debt > MAX_UINT_112 || collateral_in > MAX_UINT_112 {
        panic!("Overflow");
    }

    pool.reserves.asset -= asset_out;
    pool.reserves.collateral = add_checked(pool.reserves.collateral, collateral_in);
    pool.total_debt_created = add_checked(pool.total_debt_created, debt);

    let due = Due {
        collateral: collateral_in,
        debt,
        start_block: now,
    };
    let mut dues = get_dues(env, maturity, &caller);
    let due_id = dues.len();
    dues.push_back(due.clone());

    set_dues(env, maturity, &caller, &dues);
    set_pool(env, maturity, &pool);

    let contract_address = env.current_contract_address();
    token::Client::new(env, &config.collateral).transfer(
        &caller,
        &contract_address,
        &(collateral_in as i128),
    );
    token::Client::new(env, &config.asset).transfer(
        &contract_address,
        &caller,
        &(asset_out as i128),
    );

    env.events().publish(
        (Symbol::new(env, "borrow"), maturity),
        (caller, asset_out, collateral_in, due_id),
    );

    (due_id, due)
}

/// Repay one of the caller's dues before maturity
///
/// Collateral is released pro rata to the debt repaid, rounded down.
/// After maturity the due is no longer payable and its collateral
/// stays in the reserves, backing insurance claims.
///
/// # Returns
/// collateral_out
pub fn pay(
    env: &Env,
    caller: Address,
    maturity: u64,
    due_id: u32,
    asset_in: u128,
    collateral_out: u128,
) -> u128 {
    let now = env.ledger().timestamp();
    if now >= maturity {
        panic!("Invalid maturity");
    }
    if asset_in == 0 && collateral_out == 0 {
        panic!("Zero amount");
    }

    let config = get_config(env);
    let mut pool = get_pool(env, maturity);

    let mut dues = get_dues(env, maturity, &caller);
    let mut due = match dues.get(due_id) {
        Some(due) => due,
        None => panic!("Invalid due id"),
    };
    if due.start_block == now {
        panic!("Same block payback");
    }
    if asset_in > due.debt {
        panic!("Invalid debt payment");
    }

    // asset_in <= due.debt, so a positive payment implies a positive debt
    let collateral_unlocked = if asset_in == 0 {
        0
    } else {
        mul_div(env, due.collateral, asset_in, due.debt)
    };
    if collateral_out > collateral_unlocked {
        panic!("Insufficient collateral");
    }

    due.debt -= asset_in;
    due.collateral -= collateral_out;
    dues.set(due_id, due);

    pool.reserves.asset = add_checked(pool.reserves.asset, asset_in);
    pool.reserves.collateral = sub_checked(pool.reserves.collateral, collateral_out);

    set_dues(env, maturity, &caller, &dues);
    set_pool(env, maturity, &pool);

    let contract_address = env.current_contract_address();
    if asset_in > 0 {
        token::Client::new(env, &config.asset).transfer(
            &caller,
            &contract_address,
            &(asset_in as i128),
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
        (Symbol::new(env, "pay"), maturity),
        (caller, due_id, asset_in, collateral_out),
    );

    collateral_out
}
