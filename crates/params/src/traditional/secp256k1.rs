//! Domain parameters of the secp256k1 curve `y² = x³ + ax + b` (SEC 2, §2.4.1)
//!
//! All values are big-endian byte strings.

/// Size of a secp256k1 field element in bytes
pub const SECP256K1_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a secp256k1 scalar in bytes
pub const SECP256K1_SCALAR_SIZE: usize = 32;

/// Prime modulus p = 2^256 - 2^32 - 977
pub const SECP256K1_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

/// Curve coefficient a
pub const SECP256K1_A: u64 = 0;

/// Curve coefficient b
pub const SECP256K1_B: u64 = 7;

/// x-coordinate of the base point G
pub const SECP256K1_GX: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B, 0x07,
    0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8, 0x17, 0x98,
];

/// y-coordinate of the base point G
pub const SECP256K1_GY: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08, 0xA8,
    0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10, 0xD4, 0xB8,
];

/// Order n of the base point G
pub const SECP256K1_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Size of an uncompressed SEC1 point: 0x04 || x || y
pub const SECP256K1_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SECP256K1_FIELD_ELEMENT_SIZE;

/// Size of a compressed SEC1 point: 0x02/0x03 || x
pub const SECP256K1_POINT_COMPRESSED_SIZE: usize = 1 + SECP256K1_FIELD_ELEMENT_SIZE;
