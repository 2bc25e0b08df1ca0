//! Common implementations and shared functionality for the kcrypt library
//!
//! This crate provides the arbitrary-precision modular arithmetic and the
//! zeroizing secret containers used by the curve engine and the encryption
//! scheme.

pub mod math_common;
pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
