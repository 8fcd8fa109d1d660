use soroban_sdk::{contracttype, Address};

/// The three invariant-conserved axes of a pool
///
/// `asset` tracks the lendable side; `interest` is asset interest per
/// second in Q32; `cdp` relates collateral to asset through the ratio
/// `cdp / asset`. Each axis must stay at or below `MAX_UINT_112`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    pub asset: u128,
    pub interest: u128,
    pub cdp: u128,
}

/// Actual token balances held by a pool
///
/// May exceed `state.asset` because reserves also back outstanding
/// claims and collateral not yet reclaimed.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tokens {
    pub asset: u128,
    pub collateral: u128,
}

/// Lender redemption rights, settled after maturity
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Claims {
    /// Principal plus yield, redeemed against the asset reserve
    pub bond: u128,
    /// Fallback claim on the collateral reserve if debt goes unpaid
    pub insurance: u128,
}

/// Per-maturity pool record
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pool {
    pub state: State,
    pub reserves: Tokens,
    /// Outstanding liquidity-share supply
    pub total_liquidity: u128,
    /// Aggregate claims owed to lenders
    pub total_claims: Claims,
    /// Cumulative notional debt ever issued; never decremented
    pub total_debt_created: u128,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pair configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug)]
pub struct PairConfig {
    /// Factory contract address
    pub factory: Address,
    /// Token lent and borrowed
    pub asset: Address,
    /// Token posted against debt
    pub collateral: Address,
    /// Transaction fee as a fraction of BASE
    pub fee: u32,
}
