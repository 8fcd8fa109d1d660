#![no_std]

mod due;
mod pool;

pub use due::*;
pub use pool::*;

/// Fee denominator (2^16): pair fees are a fraction of BASE
pub const BASE: u128 = 1 << 16;

/// Maximum value for an invariant axis
/// Keeps the three-axis product well inside 256-bit intermediates
pub const MAX_UINT_112: u128 = (1 << 112) - 1;

/// Q32 shift for per-second interest accrual
pub const RATE_SHIFT: u32 = 32;

/// Share-scale shift applied to the first mint's asset deposit
pub const LIQUIDITY_SHIFT: u32 = 16;
