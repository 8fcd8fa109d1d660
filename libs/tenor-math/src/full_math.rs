use core::cmp::Ordering;

use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let result = product.div(&denom_256);

    u128_from_u256(&result)
}

/// Multiply and divide with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    let result = mul_div(env, a, b, denominator);

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let remainder = product.rem_euclid(&denom_256);

    if remainder.gt(&U256::from_u32(env, 0)) {
        add_checked(result, 1)
    } else {
        result
    }
}

/// Unsigned division with rounding up
pub fn div_rounding_up(a: u128, b: u128) -> u128 {
    if b == 0 {
        panic!("Division by zero");
    }
    if a == 0 {
        return 0;
    }
    (a - 1) / b + 1
}

/// Multiply then shift right with 256-bit intermediate precision (rounds down)
/// Returns (a * b) >> shift, for shifts below 128
pub fn mul_shift_right(env: &Env, a: u128, b: u128, shift: u32) -> u128 {
    mul_div(env, a, b, 1u128 << shift)
}

/// Multiply then shift right with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / 2^shift), for shifts below 128
pub fn mul_shift_right_up(env: &Env, a: u128, b: u128, shift: u32) -> u128 {
    mul_div_rounding_up(env, a, b, 1u128 << shift)
}

/// Compare `a * b` against `c * d` without a 512-bit intermediate
///
/// `a` and `c` must be at most 2^112 - 1 (the invariant axis bound);
/// `b` and `d` may use the full 256-bit range. Works by comparing the
/// quotients `b / c` and `d / a` and breaking ties on the cross-scaled
/// remainders, which stay below 2^224.
pub fn wide_product_cmp(env: &Env, a: u128, b: &U256, c: u128, d: &U256) -> Ordering {
    let zero = U256::from_u32(env, 0);
    if c == 0 || d.eq(&zero) {
        return if a == 0 || b.eq(&zero) {
            Ordering::Equal
        } else {
            Ordering::Greater
        };
    }
    if a == 0 || b.eq(&zero) {
        return Ordering::Less;
    }

    let a_256 = U256::from_u128(env, a);
    let c_256 = U256::from_u128(env, c);

    // a*b vs c*d  ==  b/c vs d/a, with remainders deciding ties
    let q_left = b.div(&c_256);
    let q_right = d.div(&a_256);
    if q_left.gt(&q_right) {
        return Ordering::Greater;
    }
    if q_left.lt(&q_right) {
        return Ordering::Less;
    }

    let r_left = b.rem_euclid(&c_256);
    let r_right = d.rem_euclid(&a_256);
    let left = a_256.mul(&r_left);
    let right = c_256.mul(&r_right);
    if left.gt(&right) {
        Ordering::Greater
    } else if left.lt(&right) {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Checked addition, panics on overflow
pub fn add_checked(a: u128, b: u128) -> u128 {
    match a.checked_add(b) {
        Some(sum) => sum,
        None => panic!("Overflow"),
    }
}

/// Checked subtraction, panics on underflow
pub fn sub_checked(a: u128, b: u128) -> u128 {
    match a.checked_sub(b) {
        Some(difference) => difference,
        None => panic!("Overflow"),
    }
}

/// Convert U256 to u128, panics if out of range
fn u128_from_u256(value: &U256) -> u128 {
    match value.to_u128() {
        Some(v) => v,
        None => panic!("Overflow"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // === mul_div tests ===

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_large_numbers() {
        let env = Env::default();
        // Intermediate exceeds u128 but the result fits
        let large = 1u128 << 100;
        assert_eq!(mul_div(&env, large, large, large), large);
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 1, 1, 2), 0);
        assert_eq!(mul_div(&env, 3, 1, 2), 1);
        assert_eq!(mul_div(&env, 5, 1, 3), 1);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        mul_div(&env, 10, 20, 0);
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn test_mul_div_result_too_large() {
        let env = Env::default();
        mul_div(&env, u128::MAX, u128::MAX, 1);
    }

    // === mul_div_rounding_up tests ===

    #[test]
    fn test_mul_div_rounding_up_exact() {
        let env = Env::default();
        assert_eq!(mul_div_rounding_up(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_rounding_up_with_remainder() {
        let env = Env::default();
        // 10 * 3 / 7 = 4.28... -> 5
        assert_eq!(mul_div_rounding_up(&env, 10, 3, 7), 5);
        assert_eq!(mul_div_rounding_up(&env, 1, 1, 2), 1);
    }

    #[test]
    fn test_mul_div_rounding_directions_differ_by_one() {
        let env = Env::default();
        // 7 * 11 = 77, 77 / 13 = 5.923...
        let down = mul_div(&env, 7, 11, 13);
        let up = mul_div_rounding_up(&env, 7, 11, 13);
        assert_eq!(down, 5);
        assert_eq!(up, 6);
    }

    // === div_rounding_up tests ===

    #[test]
    fn test_div_rounding_up() {
        assert_eq!(div_rounding_up(9, 3), 3);
        assert_eq!(div_rounding_up(10, 3), 4);
        assert_eq!(div_rounding_up(0, 5), 0);
        assert_eq!(div_rounding_up(1, 2), 1);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_div_rounding_up_zero_denominator() {
        div_rounding_up(10, 0);
    }

    // === mul_shift_right tests ===

    #[test]
    fn test_mul_shift_right_exact() {
        let env = Env::default();
        // (3 * 2^33) >> 32 = 6
        assert_eq!(mul_shift_right(&env, 3, 1 << 33, 32), 6);
        assert_eq!(mul_shift_right_up(&env, 3, 1 << 33, 32), 6);
    }

    #[test]
    fn test_mul_shift_right_rounding() {
        let env = Env::default();
        // (3 * 3) >> 2 = 2.25 -> down 2, up 3
        assert_eq!(mul_shift_right(&env, 3, 3, 2), 2);
        assert_eq!(mul_shift_right_up(&env, 3, 3, 2), 3);
    }

    #[test]
    fn test_mul_shift_right_wide_intermediate() {
        let env = Env::default();
        // 2^100 * 2^100 >> 100 = 2^100
        let large = 1u128 << 100;
        assert_eq!(mul_shift_right(&env, large, large, 100), large);
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn test_mul_shift_right_overflow() {
        let env = Env::default();
        mul_shift_right(&env, u128::MAX, u128::MAX, 1);
    }

    // === add_checked / sub_checked tests ===

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(add_checked(2, 3), 5);
        assert_eq!(sub_checked(5, 3), 2);
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn test_add_checked_overflow() {
        add_checked(u128::MAX, 1);
    }

    #[test]
    #[should_panic(expected = "Overflow")]
    fn test_sub_checked_underflow() {
        sub_checked(3, 5);
    }

    // === wide_product_cmp tests ===

    #[test]
    fn test_wide_product_cmp_simple() {
        let env = Env::default();
        let b = U256::from_u128(&env, 100);
        let d = U256::from_u128(&env, 100);
        // 3 * 100 vs 2 * 100
        assert_eq!(wide_product_cmp(&env, 3, &b, 2, &d), Ordering::Greater);
        assert_eq!(wide_product_cmp(&env, 2, &b, 3, &d), Ordering::Less);
        assert_eq!(wide_product_cmp(&env, 3, &b, 3, &d), Ordering::Equal);
    }

    #[test]
    fn test_wide_product_cmp_tie_broken_by_remainder() {
        let env = Env::default();
        // 7 * 13 = 91 vs 9 * 10 = 90: quotients 13/9 = 1 and 10/7 = 1 tie,
        // remainders decide
        let b = U256::from_u128(&env, 13);
        let d = U256::from_u128(&env, 10);
        assert_eq!(wide_product_cmp(&env, 7, &b, 9, &d), Ordering::Greater);
        assert_eq!(wide_product_cmp(&env, 9, &d, 7, &b), Ordering::Less);
    }

    #[test]
    fn test_wide_product_cmp_zero_sides() {
        let env = Env::default();
        let zero = U256::from_u32(&env, 0);
        let b = U256::from_u128(&env, 5);
        assert_eq!(wide_product_cmp(&env, 0, &b, 0, &b), Ordering::Equal);
        assert_eq!(wide_product_cmp(&env, 1, &b, 0, &b), Ordering::Greater);
        assert_eq!(wide_product_cmp(&env, 0, &b, 1, &b), Ordering::Less);
        assert_eq!(wide_product_cmp(&env, 1, &zero, 1, &b), Ordering::Less);
    }

    #[test]
    fn test_wide_product_cmp_beyond_256_bits() {
        let env = Env::default();
        // Both sides near 2^112 * 2^224: the full products would need
        // 336 bits, the comparison must still be exact
        let axis = (1u128 << 112) - 1;
        let big = U256::from_u128(&env, u128::MAX).mul(&U256::from_u128(&env, 1 << 96));
        let bigger = big.add(&U256::from_u32(&env, 1));
        assert_eq!(wide_product_cmp(&env, axis, &big, axis, &big), Ordering::Equal);
        assert_eq!(
            wide_product_cmp(&env, axis, &bigger, axis, &big),
            Ordering::Greater
        );
        assert_eq!(
            wide_product_cmp(&env, axis - 1, &big, axis, &big),
            Ordering::Less
        );
    }
}
