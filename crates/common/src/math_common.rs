//! Common mathematical operations over arbitrary-precision integers
//!
//! These helpers operate on `num-bigint` values so that 256-bit field and
//! scalar arithmetic is exact. Every `mod_*` result lies in `[0, m)`.

use core::mem;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a·x + b·y = g = gcd(a, b)`. Iterative, so the
/// depth does not grow with the operand size.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = old_r.div_floor(&r);

        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    extended_gcd(a, b).0.abs()
}

/// Reduce `a` into `[0, m)`; negative values wrap around.
///
/// `m` must be positive.
pub fn mod_floor(a: &BigInt, m: &BigInt) -> BigInt {
    a.mod_floor(m)
}

/// Compute `a^(-1) mod m` with the extended Euclidean algorithm.
///
/// Negative `a` is normalized into `[0, m)` first. Returns `None` when `m`
/// is not positive or when `a` and `m` are not coprime.
pub fn mod_inv(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    if !m.is_positive() {
        return None;
    }

    let a = a.mod_floor(m);
    let (g, x, _) = extended_gcd(&a, m);
    if !g.is_one() {
        return None;
    }

    Some(x.mod_floor(m))
}

/// Perform modular addition: (a + b) mod m
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// Perform modular subtraction: (a - b) mod m
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// Perform modular multiplication: (a * b) mod m
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}
