#![no_std]

pub mod borrow_math;
pub mod burn_math;
pub mod constant_product;
pub mod full_math;
pub mod lend_math;
pub mod mint_math;
pub mod withdraw_math;

pub use borrow_math::*;
pub use burn_math::*;
pub use constant_product::*;
pub use full_math::*;
pub use lend_math::*;
pub use mint_math::*;
pub use withdraw_math::*;
