//! Public API traits and types for the kcrypt library
//!
//! This crate provides the public API surface for the kcrypt ecosystem: the
//! error taxonomy every layer converts into, and the trait implemented by the
//! public key encryption schemes.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::Pke;

// Re-export trait modules for direct access
pub use traits::pke;
