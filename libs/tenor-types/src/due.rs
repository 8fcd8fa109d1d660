use soroban_sdk::contracttype;

/// One collateralized debt obligation
///
/// Appended to the borrower's due list on borrow (and on mint, which
/// opens a borrowing position alongside the liquidity it adds). The
/// list index is the due id; ids are never reused, and a fully repaid
/// due stays in the list as a zeroed record.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Due {
    /// Collateral locked behind this due
    pub collateral: u128,
    /// Debt still owed, repayable until maturity
    pub debt: u128,
    /// Ledger timestamp at which the due was opened
    pub start_block: u64,
}
