//! Elliptic Curve Integrated Encryption Scheme (ECIES) components.
//!
//! The scheme here is the secp256k1 text scheme: an ephemeral ECDH key, a
//! SHA-256 hash of the shared x-coordinate as the symmetric key, and a
//! repeating-key XOR over the message bytes. There is no authentication tag,
//! so tampering and wrong keys are not detected.

use num_bigint::{BigInt, BigUint, Sign};

use kcrypt_params::traditional::ecies::HEX_INTEGER_PREFIX;

pub mod k256;

pub use k256::{
    decrypt, encrypt, generate_keypair, public_key_from_private, EciesK256, EciesK256Envelope,
    EciesK256PublicKey, EciesK256SecretKey,
};

/// Write a non-negative integer as lowercase hex with a `0x` prefix and no
/// leading zeros (`0x0` for zero).
pub(crate) fn format_hex_integer(value: &BigUint) -> String {
    format!("{}{:x}", HEX_INTEGER_PREFIX, value)
}

/// Parse a hex integer: surrounding whitespace, an optional `-` or `+` sign,
/// an optional `0x`/`0X` prefix, then at least one hex digit in either case.
/// Digit separators such as `_` are not accepted. Anything else yields `None`.
pub(crate) fn parse_hex_integer(text: &str) -> Option<BigInt> {
    let text = text.trim();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 16)?;
    Some(BigInt::from_biguint(sign, magnitude))
}

/// Parse a hex integer that must not be negative.
pub(crate) fn parse_hex_natural(text: &str) -> Option<BigUint> {
    parse_hex_integer(text)?.to_biguint()
}
