//! # kcrypt
//!
//! secp256k1 arithmetic and an ECIES-style text encryption scheme built on it.
//!
//! ## Features
//!
//! - `algorithms` (default): the secp256k1 curve engine, SHA-256, the hash KDF
//!   and the XOR keystream
//! - `pke` (default): the ECIES scheme and its text entry points
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kcrypt-api`]: error taxonomy and the `Pke` trait
//! - [`kcrypt-params`]: curve and wire-format constants
//! - [`kcrypt-common`]: modular arithmetic helpers and secret buffers
//! - [`kcrypt-algorithms`]: curve engine and supporting primitives
//! - [`kcrypt-pke`]: ECIES over secp256k1
//!
//! ## Example
//!
//! ```
//! let (private_key, public_key) = kcrypt::generate_keypair()?;
//! let envelope = kcrypt::encrypt("hello world", &public_key)?;
//! assert_eq!(kcrypt::decrypt(&envelope, &private_key)?, "hello world");
//! # Ok::<(), kcrypt::api::Error>(())
//! ```
//!
//! The encryption scheme has no authentication tag and reuses a 32-byte key
//! stream; it is not a secure construction.

// Core re-exports (always available)
pub use kcrypt_api as api;
pub use kcrypt_common as common;
pub use kcrypt_params as params;

// Integer types taken by the curve engine
pub use num_bigint;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use kcrypt_algorithms as algorithms;

#[cfg(feature = "pke")]
pub use kcrypt_pke as pke;

// Text entry points
#[cfg(feature = "pke")]
pub use kcrypt_pke::{decrypt, encrypt, generate_keypair, public_key_from_private};

/// Common imports for kcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::Pke;

    // Re-export security types
    pub use crate::common::SecretBuffer;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::ec::k256::{
        base_point_g, mod_inverse, point_add, point_double, scalar_multiply,
    };
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{K256Point, K256Scalar, StreamCipher};

    #[cfg(feature = "pke")]
    pub use crate::pke::{EciesK256, EciesK256Envelope, EciesK256PublicKey, EciesK256SecretKey};
}
