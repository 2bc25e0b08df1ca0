//! Hash-based key derivation for ECIES shared secrets
//!
//! The derived key is SHA-256 over the shared x-coordinate written as a
//! fixed-width big-endian integer. There is no salt, no info string and no
//! output-length parameter.

use kcrypt_common::security::SecretBuffer;
use kcrypt_params::traditional::secp256k1::SECP256K1_FIELD_ELEMENT_SIZE;
use kcrypt_params::utils::hash::SHA256_OUTPUT_SIZE;
use num_bigint::BigUint;

use crate::error::{validate, Result};
use crate::hash::sha256;

/// Derive a 32-byte symmetric key from a shared x-coordinate.
///
/// Values wider than 32 bytes are rejected with a length error.
pub fn derive_key_sha256(shared_x: &BigUint) -> Result<SecretBuffer<SHA256_OUTPUT_SIZE>> {
    let raw = shared_x.to_bytes_be();
    validate::max_length("KDF input", raw.len(), SECP256K1_FIELD_ELEMENT_SIZE)?;

    let mut encoded = SecretBuffer::<SECP256K1_FIELD_ELEMENT_SIZE>::zeroed();
    encoded.as_mut_slice()[SECP256K1_FIELD_ELEMENT_SIZE - raw.len()..].copy_from_slice(&raw);

    Ok(SecretBuffer::new(sha256(encoded.as_slice())))
}
