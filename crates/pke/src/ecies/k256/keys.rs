//! Key types for ECIES over secp256k1 and their text encodings

use std::fmt;
use std::str::FromStr;

use kcrypt_algorithms::ec::k256 as ec;
use kcrypt_params::traditional::ecies::PUBLIC_KEY_DELIMITER;
use num_bigint::{BigInt, BigUint, Sign};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ecies::{format_hex_integer, parse_hex_integer, parse_hex_natural};
use crate::error::{Error as PkeError, Result};

/// Public key for ECIES secp256k1: a finite curve point.
///
/// Text form is `"0x<x>:0x<y>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EciesK256PublicKey(ec::Point);

impl EciesK256PublicKey {
    /// Wrap a curve point. The identity and off-curve points are rejected.
    pub fn from_point(point: ec::Point) -> Result<Self> {
        if point.is_identity() {
            return Err(PkeError::InvalidKeyFormat(
                "public key cannot be the point at infinity".into(),
            ));
        }
        if !point.is_valid() {
            return Err(PkeError::InvalidKeyFormat(
                "public key is not on secp256k1".into(),
            ));
        }
        Ok(Self(point))
    }

    /// Build a public key from affine coordinates, validating the point.
    pub fn from_coordinates(x: BigUint, y: BigUint) -> Result<Self> {
        Ok(Self(ec::Point::new_affine(x, y)?))
    }

    /// The underlying curve point
    pub fn as_point(&self) -> &ec::Point {
        &self.0
    }
}

impl fmt::Display for EciesK256PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.x(), self.0.y()) {
            (Some(x), Some(y)) => write!(
                f,
                "{}{}{}",
                format_hex_integer(x),
                PUBLIC_KEY_DELIMITER,
                format_hex_integer(y)
            ),
            // unreachable through the constructors
            _ => Err(fmt::Error),
        }
    }
}

impl FromStr for EciesK256PublicKey {
    type Err = PkeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(PUBLIC_KEY_DELIMITER);
        let (x_text, y_text) = match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => {
                return Err(PkeError::InvalidKeyFormat(
                    "public key must be two hex integers separated by ':'".into(),
                ))
            }
        };

        let x = parse_hex_natural(x_text).ok_or_else(|| {
            PkeError::InvalidKeyFormat(format!("invalid x-coordinate {:?}", x_text).into())
        })?;
        let y = parse_hex_natural(y_text).ok_or_else(|| {
            PkeError::InvalidKeyFormat(format!("invalid y-coordinate {:?}", y_text).into())
        })?;

        Self::from_coordinates(x, y)
    }
}

/// Secret key for ECIES secp256k1.
///
/// Holds the integer given by the caller: key generation always yields a
/// value in `[1, n)`, but parsed keys keep their sign and size. They are
/// reduced mod `n` only when used as a multiplier.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EciesK256SecretKey {
    negative: bool,
    magnitude: Vec<u8>,
}

impl EciesK256SecretKey {
    /// Secret key for a scalar in `[1, n)`
    pub fn from_scalar(scalar: &ec::Scalar) -> Self {
        Self {
            negative: false,
            magnitude: scalar.serialize().to_vec(),
        }
    }

    /// Secret key for an arbitrary signed integer
    pub fn from_bigint(value: &BigInt) -> Self {
        let (sign, magnitude) = value.to_bytes_be();
        Self {
            negative: sign == Sign::Minus,
            magnitude,
        }
    }

    /// Integer value of the key
    pub fn to_bigint(&self) -> BigInt {
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_bytes_be(sign, &self.magnitude)
    }

    /// The key as a multiplier in `[0, n)`.
    ///
    /// The group has prime order `n`, so `k · P == (k mod n) · P` for every
    /// point in it. Negative keys are rejected.
    pub fn to_multiplier(&self) -> Result<BigInt> {
        if self.negative {
            return Err(PkeError::InvalidKeyFormat(
                "private key cannot be negative".into(),
            ));
        }
        let reduced = BigUint::from_bytes_be(&self.magnitude) % &ec::curve().n;
        Ok(BigInt::from(reduced))
    }

    /// Derive the matching public key `k · G`.
    ///
    /// Fails for a negative key, and for a key that is a multiple of the
    /// group order (including zero) since that yields the identity.
    pub fn public_key(&self) -> Result<EciesK256PublicKey> {
        let point = ec::scalar_multiply(&self.to_multiplier()?, &ec::base_point_g())?;
        if point.is_identity() {
            return Err(PkeError::InvalidKeyFormat(
                "private key is a multiple of the group order".into(),
            ));
        }
        Ok(EciesK256PublicKey(point))
    }
}

impl fmt::Debug for EciesK256SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EciesK256SecretKey([REDACTED])")
    }
}

impl PartialEq for EciesK256SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bigint() == other.to_bigint()
    }
}

impl Eq for EciesK256SecretKey {}

impl fmt::Display for EciesK256SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.to_bigint();
        if value.sign() == Sign::Minus {
            f.write_str("-")?;
        }
        f.write_str(&format_hex_integer(value.magnitude()))
    }
}

impl FromStr for EciesK256SecretKey {
    type Err = PkeError;

    fn from_str(s: &str) -> Result<Self> {
        let value = parse_hex_integer(s)
            .ok_or_else(|| PkeError::InvalidKeyFormat("private key is not a hex integer".into()))?;
        Ok(Self::from_bigint(&value))
    }
}
