//! Shared constants for secp256k1 operations

use kcrypt_params::traditional::secp256k1 as params;
use kcrypt_params::utils::hash::SHA256_OUTPUT_SIZE;

/// Size of a secp256k1 scalar in bytes (32 bytes = 256 bits)
pub const K256_SCALAR_SIZE: usize = params::SECP256K1_SCALAR_SIZE;

/// Size of a secp256k1 field element in bytes (32 bytes = 256 bits)
pub const K256_FIELD_ELEMENT_SIZE: usize = params::SECP256K1_FIELD_ELEMENT_SIZE;

/// Size of an uncompressed secp256k1 point in bytes: 0x04 || x || y
pub const K256_POINT_UNCOMPRESSED_SIZE: usize = params::SECP256K1_POINT_UNCOMPRESSED_SIZE;

/// Size of a compressed secp256k1 point in bytes: 0x02/0x03 || x
pub const K256_POINT_COMPRESSED_SIZE: usize = params::SECP256K1_POINT_COMPRESSED_SIZE;

/// Size of the key derived from an ECDH shared secret
pub const K256_KDF_OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
