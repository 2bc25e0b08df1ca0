//! Cryptographic primitives for the kcrypt library
//!
//! This crate carries the arithmetic layer under the ECIES scheme:
//!
//! - `ec::k256`: the secp256k1 curve engine (modular inverse, group law,
//!   double-and-add scalar multiplication, SEC1 encodings)
//! - `hash`: SHA-256
//! - `kdf`: the hash KDF over a shared x-coordinate
//! - `stream`: the repeating-key XOR keystream
//!
//! All curve arithmetic is variable-time and works on `num-bigint` integers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{k256, K256Point, K256Scalar};

// Hash function implementations
pub mod hash;
pub use hash::sha256;

// KDF implementations
pub mod kdf;
pub use kdf::derive_key_sha256;

// Stream cipher implementations
pub mod stream;
pub use stream::{apply_keystream, RepeatingKeyXor, StreamCipher};

// Re-export security types from kcrypt-common
pub use kcrypt_common::security::SecretBuffer;
