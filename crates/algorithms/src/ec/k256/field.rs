//! secp256k1 base field arithmetic
//!
//! Field elements are plain `BigUint` values; every function here returns a
//! value in `[0, p)`.

use kcrypt_common::math_common;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed};

use crate::ec::k256::constants::K256_FIELD_ELEMENT_SIZE;
use crate::ec::k256::curve;
use crate::error::{validate, Error, Result};

#[inline]
fn p() -> &'static BigUint {
    &curve().p
}

/// Reduce an arbitrary value into `[0, p)`
pub fn reduce(a: &BigUint) -> BigUint {
    a % p()
}

/// (a + b) mod p
pub fn add(a: &BigUint, b: &BigUint) -> BigUint {
    math_common::mod_add(a, b, p())
}

/// (a - b) mod p
pub fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    math_common::mod_sub(a, b, p())
}

/// (a * b) mod p
pub fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    math_common::mod_mul(a, b, p())
}

/// a² mod p
pub fn square(a: &BigUint) -> BigUint {
    mul(a, a)
}

/// a⁻¹ mod p. Fails for `a ≡ 0`.
pub fn invert(a: &BigUint) -> Result<BigUint> {
    let modulus = BigInt::from(p().clone());
    mod_inverse(&BigInt::from(a.clone()), &modulus)?
        .to_biguint()
        .ok_or_else(|| Error::arithmetic("K256 field inversion", "inverse outside [0, p)"))
}

/// Square root mod p, if one exists.
///
/// p ≡ 3 (mod 4), so a candidate is a^((p+1)/4); it is a root only when
/// `a` is a quadratic residue.
pub fn sqrt(a: &BigUint) -> Option<BigUint> {
    let exp = (p() + BigUint::one()) >> 2;
    let root = a.modpow(&exp, p());
    if square(&root) == reduce(a) {
        Some(root)
    } else {
        None
    }
}

/// Right-hand side of the curve equation: x³ + a·x + b mod p
pub fn curve_rhs(x: &BigUint) -> BigUint {
    let params = curve();
    let x3 = mul(&square(x), x);
    add(&add(&x3, &mul(&params.a, x)), &params.b)
}

/// Modular inverse `a⁻¹ mod m` via the iterative extended Euclidean algorithm.
///
/// `m` must be positive; negative `a` is normalized into `[0, m)` before the
/// inverse is computed. Fails with an arithmetic error when `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    if !m.is_positive() {
        return Err(Error::param("modulus", "modulus must be positive"));
    }
    math_common::mod_inv(a, m).ok_or_else(|| {
        Error::arithmetic(
            "mod_inverse",
            format!("inverse does not exist: gcd({}, {}) != 1", a.mod_floor(m), m),
        )
    })
}

/// Encode a field element as a fixed-width 32-byte big-endian array
pub fn to_bytes(a: &BigUint) -> Result<[u8; K256_FIELD_ELEMENT_SIZE]> {
    let raw = a.to_bytes_be();
    validate::max_length("K256 field element", raw.len(), K256_FIELD_ELEMENT_SIZE)?;
    let mut out = [0u8; K256_FIELD_ELEMENT_SIZE];
    out[K256_FIELD_ELEMENT_SIZE - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}

/// Decode a 32-byte big-endian field element, rejecting values `>= p`
pub fn from_bytes(bytes: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Result<BigUint> {
    let value = BigUint::from_bytes_be(bytes);
    validate::parameter(&value < p(), "K256 field element", "value is not below the field modulus")?;
    Ok(value)
}
