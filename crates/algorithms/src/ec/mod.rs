//! Elliptic Curve Primitives
//!
//! Koblitz secp256k1 arithmetic over exact big integers. The module exposes
//! the group law, scalar multiplication and SEC1 point encodings used by the
//! ECIES scheme in `kcrypt-pke`.

pub mod k256; // For secp256k1

pub use k256::{Point as K256Point, Scalar as K256Scalar};
