//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! This module implements the secp256k1 group law in affine coordinates over
//! exact arbitrary-precision integers. The curve equation is y² = x³ + 7 over
//! the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! The arithmetic is variable-time: every field inversion runs the extended
//! Euclidean algorithm and scalar multiplication branches on the scalar bits.

mod constants;
pub mod field;
mod point;
mod scalar;

pub use constants::{
    K256_FIELD_ELEMENT_SIZE, K256_KDF_OUTPUT_SIZE, K256_POINT_COMPRESSED_SIZE,
    K256_POINT_UNCOMPRESSED_SIZE, K256_SCALAR_SIZE,
};
pub use field::mod_inverse;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use kcrypt_common::security::SecretBuffer;
use kcrypt_params::traditional::secp256k1 as params;
use num_bigint::{BigInt, BigUint};
use once_cell::sync::Lazy;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::kdf::derive_key_sha256;

/// secp256k1 domain parameters as integers
#[derive(Debug, Clone)]
pub struct CurveParams {
    /// Prime modulus of the base field
    pub p: BigUint,
    /// Curve coefficient a
    pub a: BigUint,
    /// Curve coefficient b
    pub b: BigUint,
    /// Base point
    pub g: Point,
    /// Order of the base point
    pub n: BigUint,
}

static SECP256K1: Lazy<CurveParams> = Lazy::new(|| CurveParams {
    p: BigUint::from_bytes_be(&params::SECP256K1_P),
    a: BigUint::from(params::SECP256K1_A),
    b: BigUint::from(params::SECP256K1_B),
    g: Point::Affine {
        x: BigUint::from_bytes_be(&params::SECP256K1_GX),
        y: BigUint::from_bytes_be(&params::SECP256K1_GY),
    },
    n: BigUint::from_bytes_be(&params::SECP256K1_N),
});

/// The process-wide secp256k1 parameters, initialized on first use
pub fn curve() -> &'static CurveParams {
    &SECP256K1
}

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Point {
    curve().g.clone()
}

/// Group law: `p + q`
pub fn point_add(p: &Point, q: &Point) -> Result<Point> {
    p.add(q)
}

/// Point doubling: `2p`
pub fn point_double(p: &Point) -> Result<Point> {
    p.double()
}

/// Scalar multiplication `k · p` for any non-negative integer `k`
pub fn scalar_multiply(k: &BigInt, p: &Point) -> Result<Point> {
    p.mul(k)
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    curve().g.mul(&scalar.to_bigint())
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    if point.is_identity() {
        return Ok(Point::identity());
    }
    point.mul(&scalar.to_bigint())
}

/// Generate a key pair: a uniform private scalar in `[1, n - 1]` and its
/// public point `scalar · G`
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let private_key = Scalar::random(rng);
    let public_key = scalar_mult_base_g(&private_key)?;
    Ok((private_key, public_key))
}

/// Key derivation for an ECDH shared point: SHA-256 over the x-coordinate
/// encoded as a fixed-width 32-byte big-endian integer
pub fn kdf_sha256_for_ecies(shared_point: &Point) -> Result<SecretBuffer<K256_KDF_OUTPUT_SIZE>> {
    let x = shared_point
        .x()
        .ok_or_else(|| Error::param("K256 Point", "point at infinity has no x-coordinate"))?;
    derive_key_sha256(x)
}
