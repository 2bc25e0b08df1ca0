//! secp256k1 scalar values

use kcrypt_common::security::SecretBuffer;
use num_bigint::{BigInt, BigUint};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::k256::{constants::K256_SCALAR_SIZE, curve};
use crate::error::{validate, Error, Result};

/// secp256k1 scalar in `[1, n)`, used as a private key or ephemeral multiplier
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<K256_SCALAR_SIZE>);

impl Scalar {
    /// Create a new scalar from big-endian bytes.
    ///
    /// Unlike a reducing constructor, values `>= n` are rejected rather than
    /// folded, so that random sampling stays uniform. Zero is rejected.
    pub fn new(data: [u8; K256_SCALAR_SIZE]) -> Result<Self> {
        Self::check_range(&BigUint::from_bytes_be(&data))?;
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Create a scalar from an integer value in `[1, n)`.
    pub fn from_biguint(value: &BigUint) -> Result<Self> {
        Self::check_range(value)?;
        let raw = value.to_bytes_be();
        validate::max_length("K256 Scalar", raw.len(), K256_SCALAR_SIZE)?;
        let mut data = [0u8; K256_SCALAR_SIZE];
        data[K256_SCALAR_SIZE - raw.len()..].copy_from_slice(&raw);
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Draw a uniformly random scalar in `[1, n - 1]`.
    ///
    /// Rejection-samples 32 random bytes; the expected number of draws is
    /// barely above one since n is close to 2^256.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; K256_SCALAR_SIZE];
        loop {
            rng.fill_bytes(&mut bytes);
            if let Ok(scalar) = Self::new(bytes) {
                bytes.zeroize();
                return scalar;
            }
        }
    }

    /// Serialize this scalar to 32 big-endian bytes.
    pub fn serialize(&self) -> [u8; K256_SCALAR_SIZE] {
        let mut result = [0u8; K256_SCALAR_SIZE];
        result.copy_from_slice(self.0.as_ref());
        result
    }

    /// Integer value of this scalar
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(self.0.as_ref())
    }

    /// Signed integer value of this scalar, as taken by scalar multiplication
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.to_biguint())
    }

    fn check_range(value: &BigUint) -> Result<()> {
        if value == &BigUint::default() {
            return Err(Error::param("K256 Scalar", "Scalar cannot be zero"));
        }
        if value >= &curve().n {
            return Err(Error::param(
                "K256 Scalar",
                "Scalar must be below the group order",
            ));
        }
        Ok(())
    }
}
