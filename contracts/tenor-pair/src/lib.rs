#![no_std]

mod borrow;
pub mod invariants;
mod lend;
mod liquidity;
mod storage;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use storage::{get_claims, get_config, get_dues, get_liquidity, get_pool, set_config, DataKey};
use tenor_types::{Claims, Due, PairConfig, State, Tokens, BASE};

#[contract]
pub struct TenorPair;

#[contractimpl]
impl TenorPair {
    /// Initialize a new pair for one asset/collateral token pairing
    ///
    /// Pools are keyed by maturity inside the pair and created lazily
    /// on the first mint for that maturity.
    pub fn initialize(env: Env, factory: Address, asset: Address, collateral: Address, fee: u32) {
        if env.storage().instance().has(&DataKey::Config) {
            panic!("Already initialized");
        }
        if asset == collateral {
            panic!("Identical tokens");
        }
        if fee as u128 >= BASE {
            panic!("Fee too high");
        }

        let config = PairConfig {
            factory,
            asset,
            collateral,
            fee,
        };
        set_config(&env, &config);
    }

    /// Supply liquidity to the pool at `maturity`
    ///
    /// Issues liquidity shares and, in the same atomic result, a due:
    /// minting opens a borrowing position sized to the liquidity added.
    ///
    /// # Returns
    /// (liquidity_out, due_id, due)
    pub fn mint(
        env: Env,
        caller: Address,
        maturity: u64,
        asset_in: u128,
        interest_increase: u128,
        cdp_increase: u128,
    ) -> (u128, u32, Due) {
        caller.require_auth();
        liquidity::mint(
            &env,
            caller,
            maturity,
            asset_in,
            interest_increase,
            cdp_increase,
        )
    }

    /// Redeem liquidity shares after maturity
    ///
    /// # Returns
    /// (asset_out, collateral_out) - proportional share of the reserves
    pub fn burn(env: Env, caller: Address, maturity: u64, liquidity_in: u128) -> (u128, u128) {
        caller.require_auth();
        liquidity::burn(&env, caller, maturity, liquidity_in)
    }

    /// Lend asset to the pool at `maturity`
    ///
    /// # Returns
    /// The bond and insurance claims issued to the lender
    pub fn lend(
        env: Env,
        caller: Address,
        maturity: u64,
        asset_in: u128,
        interest_decrease: u128,
        cdp_decrease: u128,
    ) -> Claims {
        caller.require_auth();
        lend::lend(
            &env,
            caller,
            maturity,
            asset_in,
            interest_decrease,
            cdp_decrease,
        )
    }

    /// Redeem lender claims after maturity
    ///
    /// # Returns
    /// (asset_out, collateral_out)
    pub fn withdraw(
        env: Env,
        caller: Address,
        maturity: u64,
        bond_in: u128,
        insurance_in: u128,
    ) -> (u128, u128) {
        caller.require_auth();
        lend::withdraw(&env, caller, maturity, bond_in, insurance_in)
    }

    /// Borrow asset from the pool at `maturity` against collateral
    ///
    /// # Returns
    /// (due_id, due)
    pub fn borrow(
        env: Env,
        caller: Address,
        maturity: u64,
        asset_out: u128,
        collateral_in: u128,
        interest_increase: u128,
        cdp_increase: u128,
    ) -> (u32, Due) {
        caller.require_auth();
        borrow::borrow(
            &env,
            caller,
            maturity,
            asset_out,
            collateral_in,
            interest_increase,
            cdp_increase,
        )
    }

    /// Repay one of the caller's dues before maturity
    ///
    /// # Returns
    /// collateral_out - collateral released, capped pro rata to the repayment
    pub fn pay(
        env: Env,
        caller: Address,
        maturity: u64,
        due_id: u32,
        asset_in: u128,
        collateral_out: u128,
    ) -> u128 {
        caller.require_auth();
        borrow::pay(&env, caller, maturity, due_id, asset_in, collateral_out)
    }

    // === View Functions ===

    /// Get pair configuration
    pub fn get_config(env: Env) -> PairConfig {
        get_config(&env)
    }

    /// Get actual token balances held for a maturity
    pub fn total_reserves(env: Env, maturity: u64) -> Tokens {
        get_pool(&env, maturity).reserves
    }

    /// Get the invariant axes for a maturity
    pub fn state(env: Env, maturity: u64) -> State {
        get_pool(&env, maturity).state
    }

    /// Get outstanding liquidity-share supply for a maturity
    pub fn total_liquidity(env: Env, maturity: u64) -> u128 {
        get_pool(&env, maturity).total_liquidity
    }

    /// Get one address's liquidity-share balance
    pub fn liquidity_of(env: Env, maturity: u64, owner: Address) -> u128 {
        get_liquidity(&env, maturity, &owner)
    }

    /// Get aggregate claims owed to lenders for a maturity
    pub fn total_claims(env: Env, maturity: u64) -> Claims {
        get_pool(&env, maturity).total_claims
    }

    /// Get one address's claim balances
    pub fn claims_of(env: Env, maturity: u64, owner: Address) -> Claims {
        get_claims(&env, maturity, &owner)
    }

    /// Get cumulative notional debt ever issued for a maturity
    pub fn total_debt_created(env: Env, maturity: u64) -> u128 {
        get_pool(&env, maturity).total_debt_created
    }

    /// Get one address's debt positions, in creation order
    ///
    /// The list index is the due id; ids are never reused and settled
    /// dues remain as zeroed records.
    pub fn dues_of(env: Env, maturity: u64, owner: Address) -> Vec<Due> {
        get_dues(&env, maturity, &owner)
    }
}
